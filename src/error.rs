//! Error types for tree_equiv.
//!
//! Walking and comparing well-formed trees cannot fail, so these only cover
//! the edges of the crate: generating trees and validating driver
//! configuration.

use thiserror::Error;

/// Top-level error type for tree_equiv
#[derive(Error, Debug)]
pub enum Error {
    /// Tree generation errors
    #[error("Generation error: {0}")]
    Generate(#[from] GenerateError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while generating a random tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The largest value `size * multiplier` does not fit in an `i64`
    #[error("values up to {size} * {multiplier} overflow a 64-bit integer")]
    Overflow {
        /// Multiplier the tree was requested with
        multiplier: i64,
        /// Number of values requested
        size: usize,
    },
}

/// Driver configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// At least one comparison has to run
    #[error("iterations must be at least 1")]
    ZeroIterations,

    /// A zero multiplier would fill the tree with identical values
    #[error("tree multiplier must not be 0")]
    ZeroMultiplier,

    /// Tree size above the supported maximum
    #[error("tree size {size} exceeds the maximum of {max}")]
    SizeTooLarge {
        /// Requested size
        size: usize,
        /// Largest accepted size
        max: usize,
    },
}

/// Result type alias for tree_equiv operations
pub type Result<T> = std::result::Result<T, Error>;
