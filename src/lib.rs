//! Curried summation chains.
//!
//! The dynamic-language idiom `f(1)(2)(3)()` (call with a number to keep
//! accumulating, call with nothing to take the total) expressed as a value
//! type with two operations instead of a runtime "absent argument" check:
//!
//! ```
//! use curry_sum::chain;
//!
//! let total = chain::<i64>().add(1).add(2).add(3).done();
//! assert_eq!(total, 6);
//! ```
//!
//! Every [`Chain::add`] returns a fresh link capturing the new total; nothing
//! is mutated, so an intermediate link can be copied and branched freely.

use std::fmt::Debug;
use std::ops::Add;

use log::trace;

/// One link of a curry chain, holding the running total captured so far.
///
/// Links are plain `Copy` values. Branching a chain is just reusing a link:
/// each `add` on it starts an independent downstream chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain<T> {
    total: T,
}

/// Starts a chain from the additive default (zero for the numeric types).
pub fn chain<T: Default>() -> Chain<T> {
    Chain {
        total: T::default(),
    }
}

/// Starts a chain from a caller-supplied total.
pub fn chain_from<T>(initial: T) -> Chain<T> {
    Chain { total: initial }
}

impl<T> Chain<T>
where
    T: Add<Output = T> + Copy + Debug,
{
    /// Accumulates one more value, returning the next link in the chain.
    ///
    /// The current link is consumed but, being `Copy`, can be kept around and
    /// branched with different values.
    #[must_use]
    pub fn add(self, n: T) -> Self {
        trace!("accumulate: {:?} + {:?}", self.total, n);
        Chain {
            total: self.total + n,
        }
    }

    /// Accumulates every value of an iterator, in order.
    #[must_use]
    pub fn add_all<I>(self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().fold(self, Chain::add)
    }

    /// The terminal call: ends the chain and yields the accumulated total.
    pub fn done(self) -> T {
        trace!("terminate: {:?}", self.total);
        self.total
    }
}

impl<T: Default> Default for Chain<T> {
    fn default() -> Self {
        chain()
    }
}

impl<T> From<T> for Chain<T> {
    fn from(initial: T) -> Self {
        chain_from(initial)
    }
}

/// Errors from the overflow-checked integer chain.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    /// The next step would take the total outside the `i64` range.
    #[error("accumulator overflow: {total} + {step} does not fit in i64")]
    Overflow { total: i64, step: i64 },
}

impl Chain<i64> {
    /// Like [`Chain::add`], but rejects steps that would overflow the total
    /// instead of inheriting the default integer overflow behaviour.
    pub fn try_add(self, n: i64) -> Result<Self, ChainError> {
        match self.total.checked_add(n) {
            Some(total) => Ok(Chain { total }),
            None => Err(ChainError::Overflow {
                total: self.total,
                step: n,
            }),
        }
    }
}
