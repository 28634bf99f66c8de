//! This crate decides whether two binary trees are equivalent, meaning
//! they hold the same values in the same in-order sequence, regardless of
//! shape.
//!
//! ## Equivalence by traversal
//!
//! An in-order traversal visits the left subtree, then the node, then the
//! right subtree. Two trees built by inserting the same values into a
//! Binary Search Tree in different orders end up with different shapes but
//! produce the same in-order sequence, so comparing those sequences is
//! enough to tell whether they hold the same values.
//!
//! Rather than collecting both sequences first, each tree is walked on its
//! own thread and its values are streamed through a channel with no buffer.
//! A third thread reads both channels in lockstep:
//!
//! 1. A walker can only send its next value once the reader has taken the
//!    previous one, so neither walker runs ahead.
//! 2. The reader stops at the first difference and drops both channels.
//!    Walkers notice on their next send and stop, so nothing is left blocked.
//! 3. The verdict is handed back by joining the reader thread.
//!
//! > Note that the trees are borrowed for the duration of the comparison and
//! > never modified.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod config;
pub mod error;
pub mod generate;
pub mod same;
pub mod tree;
pub mod walk;

pub use error::{Error, Result};
pub use same::{compare, same, Side, Verdict};
pub use tree::Tree;
pub use walk::{ValueStream, WalkStatus};
