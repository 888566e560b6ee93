//! Error types for knapsack optimization.

use thiserror::Error;

/// Errors raised while building a problem or running a search.
///
/// Every variant is fatal to the run that produced it: nothing inside the
/// crate retries or recovers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnapsackError {
    /// Unknown initial-solution strategy name.
    #[error("unsupported strategy: {0:?}")]
    UnsupportedStrategy(String),

    /// A solution entry outside `{0, 1}`.
    #[error("invalid indicator value {value} at position {position}")]
    InvalidIndicator { position: usize, value: u8 },

    /// Solution length differs from the catalog size.
    #[error("solution length {actual} does not match catalog size {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Empty catalog or non-positive capacity.
    #[error("degenerate problem: {0}")]
    DegenerateProblem(String),

    /// Two items share an identifier.
    #[error("duplicate item identifier: {0:?}")]
    DuplicateItem(String),

    /// Item with a negative or non-finite weight or value.
    #[error("invalid item {name:?}: {reason}")]
    InvalidItem { name: String, reason: String },

    /// A record lacks the configured weight or value field.
    #[error("item {item:?} has no field {field:?}")]
    MissingField { item: String, field: String },

    /// Configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for knapsack operations.
pub type Result<T> = std::result::Result<T, KnapsackError>;
