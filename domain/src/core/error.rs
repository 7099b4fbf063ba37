//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required quote field was empty after trimming.
    #[error("Invalid quote: {field} must not be empty")]
    Validation { field: &'static str },

    /// An import payload was not a JSON array.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// Random selection was asked to pick from nothing.
    #[error("No candidate quotes to choose from")]
    EmptyCandidates,
}
