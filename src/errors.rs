//! Error types returned by configuration and sorting.

use thiserror::Error;

/// Result type alias for point sorting operations.
pub type Result<T> = std::result::Result<T, PointSortError>;

/// Error type for point sorting operations.
///
/// Every variant is raised before the sequence is mutated, so a failed call leaves the
/// sequence exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PointSortError {
    /// A configuration value is out of bounds.
    #[error("Invalid configuration '{parameter}': {reason}")]
    InvalidConfig {
        /// The parameter name
        parameter: &'static str,
        /// Explanation of why it's invalid
        reason: String,
    },

    /// The requested sort range does not fit the sequence.
    #[error("Invalid sort range [{start}, {end}) for a sequence of length {sequence_length}")]
    InvalidRange {
        /// Inclusive start of the range
        start: usize,
        /// Exclusive end of the range
        end: usize,
        /// Length the caller declared for the sequence
        sequence_length: usize,
    },

    /// The sequence returned data that disagrees with the configuration.
    #[error("Point sequence contract violated at position {position}: {reason}")]
    ContractViolation {
        /// Position of the offending point
        position: usize,
        /// What was inconsistent
        reason: String,
    },
}

impl PointSortError {
    pub(crate) fn invalid_config(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter,
            reason: reason.into(),
        }
    }
}
