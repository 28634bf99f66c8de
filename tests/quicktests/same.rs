use quickcheck::TestResult;
use tree_equiv::{compare, same, Tree, Verdict};

use crate::{SamePair, Shaped};

#[quickcheck]
fn reflexive(a: Shaped) -> bool {
    same(&a.tree, &a.tree)
}

#[quickcheck]
fn symmetric(a: Shaped, b: Shaped) -> bool {
    same(&a.tree, &b.tree) == same(&b.tree, &a.tree)
}

#[quickcheck]
fn agrees_with_sequence_equality(a: Shaped, b: Shaped) -> bool {
    same(&a.tree, &b.tree) == (a.values == b.values)
}

#[quickcheck]
fn shape_does_not_matter(pair: SamePair) -> bool {
    let SamePair(a, b) = pair;
    compare(&a.tree, &b.tree) == Verdict::Equal { len: a.values.len() }
}

#[quickcheck]
fn insertion_order_does_not_matter(xs: Vec<i8>) -> bool {
    let mut reversed = xs.clone();
    reversed.reverse();
    let a: Tree<i8> = xs.into_iter().collect();
    let b: Tree<i8> = reversed.into_iter().collect();

    same(&a, &b)
}

#[quickcheck]
fn one_changed_value(a: Shaped, index: usize, delta: i8) -> TestResult {
    if a.values.is_empty() || delta == 0 {
        return TestResult::discard();
    }
    let position = index % a.values.len();
    let mut values = a.values.clone();
    values[position] = values[position].wrapping_add(delta);
    let b = Shaped::new(values.clone(), &mut quickcheck::Gen::new(values.len()));

    TestResult::from_bool(
        compare(&a.tree, &b.tree)
            == Verdict::Mismatch {
                position,
                left: a.values[position],
                right: values[position],
            },
    )
}

#[quickcheck]
fn one_extra_value(a: Shaped, extra: i8) -> bool {
    let mut values = a.values.clone();
    values.push(extra);
    let b = Shaped::new(values, &mut quickcheck::Gen::new(10));

    !same(&a.tree, &b.tree) && !same(&b.tree, &a.tree)
}
