//! Topic error types.

use thiserror::Error;

/// Errors that can occur around topic operations.
///
/// Classification and ranking themselves never fail; these cover loading
/// post batches and validating configuration.
#[derive(Debug, Error)]
pub enum TopicsError {
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
