//! Suite execution for a single backend.

use std::future::Future;

use tracing::{debug, info};

use ormbench_core::{MultipleRunResults, QueryLabel, RunResult};

use crate::error::RunError;
use crate::measure::measure;
use crate::operation::Operation;

/// An ORM adapter able to run the benchmark suite.
///
/// Implementations own their client and connection; the runner only asks
/// them to execute one [`Operation`] at a time.
pub trait QuerySuite {
    /// Error raised by the underlying client.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Backend name used to label results, e.g. `"zenstack"`.
    fn backend(&self) -> &str;

    /// Run `operation` through the ORM's native API.
    fn execute(&mut self, operation: Operation) -> impl Future<Output = Result<(), Self::Error>>;

    /// Restore the dataset before an iteration.
    fn reset(&mut self) -> impl Future<Output = Result<(), Self::Error>> {
        async { Ok(()) }
    }
}

/// Run every operation of the suite once, in order.
///
/// Stops at the first failing operation.
pub async fn run_suite<S: QuerySuite>(suite: &mut S) -> Result<RunResult, RunError> {
    let mut results = Vec::with_capacity(Operation::ALL.len());

    for operation in Operation::ALL {
        let label = QueryLabel::new(suite.backend(), operation.as_str());
        debug!(query = %label, mutation = operation.is_mutation(), "executing");

        let (result, ()) = measure(label.clone(), suite.execute(operation))
            .await
            .map_err(|e| RunError::Operation {
                label,
                source: Box::new(e),
            })?;
        results.push(result);
    }

    Ok(results)
}

/// Run the suite `iterations` times, resetting the dataset before each pass.
pub async fn run_iterations<S: QuerySuite>(
    suite: &mut S,
    iterations: u32,
) -> Result<MultipleRunResults, RunError> {
    info!(backend = suite.backend(), iterations, "Run benchmarks");

    let mut runs = Vec::with_capacity(iterations as usize);
    for iteration in 0..iterations {
        suite.reset().await.map_err(|e| RunError::Reset {
            backend: suite.backend().to_string(),
            iteration,
            source: Box::new(e),
        })?;

        runs.push(run_suite(suite).await?);
        debug!(backend = suite.backend(), iteration, "iteration complete");
    }

    info!(backend = suite.backend(), "Benchmarks complete");
    Ok(runs)
}
