//! ORM Benchmark Core - result model, aggregation, and comparison reports.
//!
//! Suite runners hand this crate the timings they collected for each backend.
//! The crate reduces repeated runs to per-query medians and renders a
//! comparison table against a baseline backend.
//!
//! # Modules
//!
//! - [`result`] - `QueryLabel`, `QueryResult`, and the per-backend run collections
//! - [`aggregate`] - median computation and `MedianMap`
//! - [`summary`] - comparison-report generation
//! - [`options`] - `BenchmarkOptions` and its environment loader

pub mod aggregate;
pub mod error;
pub mod options;
pub mod result;
pub mod summary;

pub use aggregate::{aggregate_medians, label_order, median, MedianMap};
pub use error::Error;
pub use options::BenchmarkOptions;
pub use result::{
    normalize_label, BackendRuns, MultipleRunResults, QueryLabel, QueryResult, ResultSet, RunResult,
};
pub use summary::{
    diff_percentage, generate_summary, ComparisonReport, ReportCell, ReportRow, SkipReason,
    SummaryOutcome, REPORT_TITLE,
};
