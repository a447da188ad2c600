//! Runner error types.

use thiserror::Error;

use ormbench_core::QueryLabel;

/// Boxed error raised by an ORM adapter.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that abort a benchmark run.
#[derive(Debug, Error)]
pub enum RunError {
    /// A timed operation failed; nothing was recorded for it.
    #[error("{label} failed: {source}")]
    Operation {
        label: QueryLabel,
        #[source]
        source: BoxError,
    },

    /// Restoring the dataset before an iteration failed.
    #[error("reset before iteration {iteration} of {backend} failed: {source}")]
    Reset {
        backend: String,
        iteration: u32,
        #[source]
        source: BoxError,
    },

    /// Benchmark options are unusable.
    #[error(transparent)]
    Options(#[from] ormbench_core::Error),
}
