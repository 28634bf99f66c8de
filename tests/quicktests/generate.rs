use quickcheck::TestResult;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_equiv::{generate, same};

#[quickcheck]
fn same_multiplier_is_same(k: i8, seed: u64) -> TestResult {
    if k == 0 {
        return TestResult::discard();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let a = generate::permuted(k.into(), generate::DEFAULT_SIZE, &mut rng).unwrap();
    let b = generate::permuted(k.into(), generate::DEFAULT_SIZE, &mut rng).unwrap();

    TestResult::from_bool(same(&a, &b))
}

#[quickcheck]
fn different_multiplier_is_not_same(k: i8, j: i8, seed: u64) -> TestResult {
    if k == 0 || j == 0 || k == j {
        return TestResult::discard();
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let a = generate::permuted(k.into(), generate::DEFAULT_SIZE, &mut rng).unwrap();
    let b = generate::permuted(j.into(), generate::DEFAULT_SIZE, &mut rng).unwrap();

    TestResult::from_bool(!same(&a, &b))
}

#[test]
fn default_trees_repeatedly_same() {
    let a = generate::new(1).unwrap();
    let b = generate::new(1).unwrap();
    for _ in 0..200 {
        assert!(same(&a, &b));
    }
}
