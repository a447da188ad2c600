//! ORM Benchmark Runner
//!
//! Drives the fixed query suite through ORM adapters and times each
//! operation.
//!
//! Adapters implement [`QuerySuite`]; this crate never talks to a database
//! itself. Every timed operation runs strictly after the previous one has
//! completed, across operations, iterations and backends.

pub mod error;
pub mod measure;
pub mod operation;
pub mod runner;
pub mod suite;

pub use error::{BoxError, RunError};
pub use measure::{measure, measure_infallible};
pub use operation::{Operation, ParseOperationError};
pub use runner::Runner;
pub use suite::{run_iterations, run_suite, QuerySuite};

pub use ormbench_core::{
    generate_summary, BenchmarkOptions, ComparisonReport, MultipleRunResults, QueryLabel,
    QueryResult, ResultSet, RunResult, SummaryOutcome,
};
