use curry_sum::chain;

// f(1)(2)(3)() == 6

fn main() {
    env_logger::init();

    let f = chain::<i64>();
    let total = f.add(1).add(2).add(3).done();
    assert_eq!(total, 6);

    println!("{total}");
}
