//! In-order traversal onto a channel.
//!
//! [`walk`] sends every value of a tree, in order, down a
//! [`crossbeam_channel`] sender and then drops the sender, which closes the
//! stream. Streams made with [`stream`] have no buffer, so each send waits
//! for the consumer to take the previous value.
//!
//! # Examples
//!
//! ```
//! use std::thread;
//! use tree_equiv::{walk, Tree};
//!
//! let tree: Tree<i64> = [2, 1, 3].into_iter().collect();
//! let (tx, rx) = walk::stream();
//!
//! let values = thread::scope(|s| {
//!     s.spawn(|| walk::walk(&tree, tx));
//!     rx.iter().collect::<Vec<_>>()
//! });
//!
//! assert_eq!(values, vec![1, 2, 3]);
//! ```

use crossbeam_channel::{bounded, Receiver, SendError, Sender};
use tracing::trace;

use crate::tree::Tree;

/// The read end of a walk. Yields values in traversal order and ends when
/// the walker drops its sender.
pub type ValueStream<T> = Receiver<T>;

/// How a walk ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WalkStatus {
    /// Every value was received.
    Completed {
        /// Number of values sent.
        emitted: usize,
    },
    /// The consumer dropped the stream before the traversal finished, so the
    /// rest of the tree was skipped.
    Abandoned {
        /// Number of values the consumer received.
        emitted: usize,
    },
}

impl WalkStatus {
    /// Number of values the consumer received.
    pub fn emitted(&self) -> usize {
        match *self {
            Self::Completed { emitted } | Self::Abandoned { emitted } => emitted,
        }
    }

    /// Whether the whole tree was delivered.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

/// Opens a rendezvous stream: a send blocks until the matching receive.
pub fn stream<T>() -> (Sender<T>, ValueStream<T>) {
    bounded(0)
}

/// Sends the values of `tree` in order (left subtree, node, right subtree)
/// and closes the stream once the last one has been received.
///
/// Takes the sender by value so the stream is closed exactly once, when this
/// call returns, on every path. If the receiver goes away mid-walk the
/// remaining values are skipped and [`WalkStatus::Abandoned`] is returned.
pub fn walk<T: Clone>(tree: &Tree<T>, tx: Sender<T>) -> WalkStatus {
    let mut emitted = 0;
    let status = match send_all(tree, &tx, &mut emitted) {
        Ok(()) => WalkStatus::Completed { emitted },
        Err(_) => WalkStatus::Abandoned { emitted },
    };
    drop(tx);

    trace!(?status, "walk finished");
    status
}

/// Drives the traversal from [`Tree::iter`]'s explicit stack, so tree depth
/// is not limited by the walker thread's stack size.
fn send_all<T: Clone>(
    tree: &Tree<T>,
    tx: &Sender<T>,
    emitted: &mut usize,
) -> Result<(), SendError<T>> {
    for value in tree {
        tx.send(value.clone())?;
        *emitted += 1;
    }
    Ok(())
}
