use quickcheck::{Arbitrary, Gen};

use tree_equiv::Tree;

/// A tree with an arbitrary shape together with the in-order sequence it
/// was built from. The tree is not a search tree; the values keep the order
/// they were generated in.
#[derive(Clone, Debug)]
pub(crate) struct Shaped {
    pub(crate) values: Vec<i8>,
    pub(crate) tree: Tree<i8>,
}

impl Shaped {
    pub(crate) fn new(values: Vec<i8>, g: &mut Gen) -> Self {
        let tree = build(&values, g);
        Self { values, tree }
    }
}

/// Recursively picks a random root, so every shape is reachable.
fn build(values: &[i8], g: &mut Gen) -> Tree<i8> {
    if values.is_empty() {
        return Tree::new();
    }
    let indices: Vec<usize> = (0..values.len()).collect();
    let root = *g.choose(&indices).unwrap();
    Tree::node(
        build(&values[..root], g),
        values[root],
        build(&values[root + 1..], g),
    )
}

impl Arbitrary for Shaped {
    /// Tells quickcheck how to build a randomly shaped tree
    fn arbitrary(g: &mut Gen) -> Self {
        let values = Vec::<i8>::arbitrary(g);
        Self::new(values, g)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Shrink the sequence and rebuild as a right-leaning chain.
        Box::new(self.values.shrink().map(|values| {
            let tree = values
                .iter()
                .rev()
                .fold(Tree::new(), |right, v| Tree::node(Tree::new(), *v, right));
            Self { values, tree }
        }))
    }
}

/// Two independently shaped trees over the same in-order sequence.
#[derive(Clone, Debug)]
pub(crate) struct SamePair(pub(crate) Shaped, pub(crate) Shaped);

impl Arbitrary for SamePair {
    fn arbitrary(g: &mut Gen) -> Self {
        let a = Shaped::arbitrary(g);
        let b = Shaped::new(a.values.clone(), g);
        Self(a, b)
    }
}
