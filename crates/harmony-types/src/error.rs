//! Error types for the Harmony topic subsystem.

use thiserror::Error;

/// Error type for shared Harmony operations.
#[derive(Debug, Error)]
pub enum HarmonyError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
