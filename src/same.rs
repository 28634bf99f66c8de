//! Concurrent tree equivalence.
//!
//! Two trees are equivalent when their in-order value sequences are equal:
//! same length, same value at every position. Shape does not matter.
//!
//! [`compare`] starts one walker thread per tree and a third thread that
//! reads both streams in lockstep. The verdict comes back through that
//! thread's join handle. As soon as the sequences diverge the reader returns
//! and drops both streams, which makes the walkers' next send fail, so they
//! stop early instead of blocking.
//!
//! # Examples
//!
//! ```
//! use tree_equiv::{same, Tree};
//!
//! // Same values, different shapes.
//! let chain: Tree<i64> = [1, 2, 3].into_iter().collect();
//! let balanced: Tree<i64> = [2, 1, 3].into_iter().collect();
//! assert!(same(&chain, &balanced));
//!
//! let other: Tree<i64> = [2, 1, 4].into_iter().collect();
//! assert!(!same(&chain, &other));
//! ```

use std::panic;
use std::thread;

use tracing::debug;

use crate::tree::Tree;
use crate::walk::{self, ValueStream};

/// Which of the two compared sequences.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    /// The first tree or stream passed in.
    Left,
    /// The second tree or stream passed in.
    Right,
}

/// The outcome of comparing two value sequences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict<T> {
    /// Both sequences ended together and matched at every position.
    Equal {
        /// Length of either sequence.
        len: usize,
    },
    /// The sequences differ at `position`.
    Mismatch {
        /// Zero-based index of the first differing pair.
        position: usize,
        /// Value from the left sequence.
        left: T,
        /// Value from the right sequence.
        right: T,
    },
    /// One sequence ended while the other still had values.
    LengthMismatch {
        /// Length of the shorter sequence.
        position: usize,
        /// The sequence that kept going.
        longer: Side,
    },
}

impl<T> Verdict<T> {
    /// Whether the sequences were equal.
    pub fn is_equal(&self) -> bool {
        matches!(self, Self::Equal { .. })
    }
}

/// Whether `a` and `b` hold the same values in the same in-order sequence.
pub fn same<T>(a: &Tree<T>, b: &Tree<T>) -> bool
where
    T: Clone + PartialEq + Send + Sync,
{
    compare(a, b).is_equal()
}

/// Walks `a` and `b` concurrently and compares their in-order sequences.
///
/// Every thread started here is joined before returning. A panic in any of
/// them is resumed on the calling thread.
pub fn compare<T>(a: &Tree<T>, b: &Tree<T>) -> Verdict<T>
where
    T: Clone + PartialEq + Send + Sync,
{
    let (left_tx, left_rx) = walk::stream();
    let (right_tx, right_rx) = walk::stream();

    let (verdict, left_status, right_status) = thread::scope(|s| {
        let left = s.spawn(move || walk::walk(a, left_tx));
        let right = s.spawn(move || walk::walk(b, right_tx));
        let reader = s.spawn(move || compare_streams(left_rx, right_rx));

        (join(reader), join(left), join(right))
    });

    debug!(
        left_emitted = left_status.emitted(),
        right_emitted = right_status.emitted(),
        walks_completed = left_status.is_completed() && right_status.is_completed(),
        equal = verdict.is_equal(),
        "comparison finished"
    );
    verdict
}

/// Reads `left` and `right` pairwise until they diverge or both end.
///
/// Takes ownership of both streams so that returning drops them, which
/// disconnects any walker still sending.
pub fn compare_streams<T: PartialEq>(left: ValueStream<T>, right: ValueStream<T>) -> Verdict<T> {
    let mut position = 0;
    loop {
        match (left.recv().ok(), right.recv().ok()) {
            (Some(l), Some(r)) if l == r => position += 1,
            (Some(l), Some(r)) => {
                return Verdict::Mismatch {
                    position,
                    left: l,
                    right: r,
                }
            }
            (Some(_), None) => {
                return Verdict::LengthMismatch {
                    position,
                    longer: Side::Left,
                }
            }
            (None, Some(_)) => {
                return Verdict::LengthMismatch {
                    position,
                    longer: Side::Right,
                }
            }
            (None, None) => return Verdict::Equal { len: position },
        }
    }
}

fn join<R>(handle: thread::ScopedJoinHandle<'_, R>) -> R {
    handle.join().unwrap_or_else(|e| panic::resume_unwind(e))
}
