use curry_sum::{chain, chain_from, Chain};

#[test]
fn long_add() {
    assert_eq!(chain::<i64>().add(1).add(1).add(1).add(1).add(2).done(), 6);
}

#[test]
fn long_add_from_iterator() {
    assert_eq!(chain::<i64>().add_all(1..=100).done(), 5050);
}

#[test]
fn initial_survives_an_empty_chain() {
    assert_eq!(chain_from(42_i64).done(), 42);
    assert_eq!(Chain::from(-7_i64).done(), -7);
    assert_eq!(Chain::<i64>::default().done(), 0);
}

#[test]
fn float_chain() {
    let total = chain::<f64>().add(1.5).add(2.5).add(-1.0).done();
    assert!((total - 3.0).abs() < f64::EPSILON);
}

#[test]
fn checked_chain_matches_unchecked() {
    let unchecked = chain::<i64>().add(9).add(-4).add(12).done();
    let checked = chain::<i64>()
        .try_add(9)
        .and_then(|c| c.try_add(-4))
        .and_then(|c| c.try_add(12))
        .map(Chain::done);
    assert_eq!(checked, Ok(unchecked));
}
