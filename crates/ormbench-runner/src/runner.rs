//! Multi-backend benchmark runner.

use tracing::info;

use ormbench_core::{
    generate_summary, BenchmarkOptions, MultipleRunResults, ResultSet, SummaryOutcome,
};

use crate::error::RunError;
use crate::suite::{run_iterations, QuerySuite};

/// Runs backends one after another and collects their results.
///
/// Backends are never run concurrently; each call to [`Runner::run`]
/// completes all of its iterations before returning.
#[derive(Debug)]
pub struct Runner {
    options: BenchmarkOptions,
    results: ResultSet,
}

impl Runner {
    /// Create a runner after validating `options`.
    pub fn new(options: BenchmarkOptions) -> Result<Self, RunError> {
        options.validate()?;
        Ok(Self {
            options,
            results: ResultSet::new(),
        })
    }

    pub fn options(&self) -> &BenchmarkOptions {
        &self.options
    }

    /// Run all iterations for `suite` and record them under its backend name.
    ///
    /// Nothing is recorded if any iteration fails.
    pub async fn run<S: QuerySuite>(&mut self, suite: &mut S) -> Result<(), RunError> {
        let runs = run_iterations(suite, self.options.iterations).await?;
        self.results.insert(suite.backend(), runs);
        Ok(())
    }

    /// Record runs collected elsewhere.
    pub fn record(&mut self, backend: impl Into<String>, runs: MultipleRunResults) {
        self.results.insert(backend, runs);
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn into_results(self) -> ResultSet {
        self.results
    }

    /// Compare every recorded backend against `baseline`.
    pub fn summary(&self, baseline: &str) -> SummaryOutcome {
        info!(
            baseline,
            backends = self.results.len(),
            "Generating comparison summary"
        );
        generate_summary(&self.results, baseline, &self.options)
    }
}
