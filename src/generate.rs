//! Random tree generation.
//!
//! A generated tree holds the values `k, 2k, ..., size * k`, inserted into a
//! binary search tree in a random order. Two trees generated with the same
//! `k` therefore hold the same values in (usually) different shapes, which
//! is exactly the case [`same`][crate::same] has to see through.
//!
//! # Examples
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use tree_equiv::generate;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let tree = generate::permuted(3, 4, &mut rng).unwrap();
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![3, 6, 9, 12]);
//! ```

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::GenerateError;
use crate::tree::Tree;

/// How many values [`new`] puts in a tree.
pub const DEFAULT_SIZE: usize = 10;

/// Generates a tree holding `k, 2k, ..., 10k` in a random shape, using the
/// thread-local RNG.
pub fn new(k: i64) -> Result<Tree<i64>, GenerateError> {
    permuted(k, DEFAULT_SIZE, &mut rand::thread_rng())
}

/// Generates a tree holding `k, 2k, ..., size * k`, inserted in an order
/// shuffled by `rng`.
pub fn permuted<R>(k: i64, size: usize, rng: &mut R) -> Result<Tree<i64>, GenerateError>
where
    R: Rng + ?Sized,
{
    let overflow = || GenerateError::Overflow {
        multiplier: k,
        size,
    };
    let upper = i64::try_from(size).map_err(|_| overflow())?;
    upper.checked_mul(k).ok_or_else(overflow)?;

    let mut values: Vec<i64> = (1..=upper).map(|i| i * k).collect();
    values.shuffle(rng);

    Ok(values.into_iter().collect())
}
