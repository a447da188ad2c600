//! Core error types.

use thiserror::Error;

/// Benchmark configuration errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Options failed validation.
    #[error("invalid benchmark options: {0}")]
    InvalidOptions(String),

    /// An environment variable could not be read or parsed.
    #[error("environment variable {var}: {message}")]
    Env {
        /// Variable name.
        var: &'static str,
        /// What went wrong.
        message: String,
    },
}
