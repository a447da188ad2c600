//! Comparison report generation.
//!
//! Reduces every backend's runs to medians and lays them out as a markdown
//! table, one column per query and one row per backend. Non-baseline cells
//! carry the percentage deviation from the baseline median.

use std::fmt::{self, Write};

use serde::Serialize;
use tracing::warn;

use crate::aggregate::{aggregate_medians, label_order, MedianMap};
use crate::options::BenchmarkOptions;
use crate::result::ResultSet;

/// Heading of every comparison report.
pub const REPORT_TITLE: &str = "Performance Comparison";

/// Why no report was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SkipReason {
    /// The baseline backend has no entry in the result set.
    MissingBaseline { baseline: String },
    /// The baseline backend is present but its first run holds no results.
    EmptyBaseline { baseline: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingBaseline { baseline } => {
                write!(f, "no {} results found for comparison summary", baseline)
            }
            SkipReason::EmptyBaseline { baseline } => {
                write!(f, "{} results contain no queries to compare", baseline)
            }
        }
    }
}

/// Result of [`generate_summary`].
#[derive(Debug, Clone, PartialEq)]
pub enum SummaryOutcome {
    Produced(ComparisonReport),
    Skipped(SkipReason),
}

impl SummaryOutcome {
    /// The report, if one was produced.
    pub fn report(&self) -> Option<&ComparisonReport> {
        match self {
            SummaryOutcome::Produced(report) => Some(report),
            SummaryOutcome::Skipped(_) => None,
        }
    }

    pub fn into_report(self) -> Option<ComparisonReport> {
        match self {
            SummaryOutcome::Produced(report) => Some(report),
            SummaryOutcome::Skipped(_) => None,
        }
    }

    pub fn is_produced(&self) -> bool {
        matches!(self, SummaryOutcome::Produced(_))
    }
}

/// One table cell: a backend's median for one query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReportCell {
    /// Median in milliseconds, `None` if the backend never ran this query.
    pub median: Option<f64>,
    /// Baseline median to compare against; `None` on the baseline row.
    pub baseline: Option<f64>,
}

impl ReportCell {
    /// Signed deviation from the baseline in percent.
    ///
    /// Not finite when the baseline median is zero.
    pub fn percent(&self) -> Option<f64> {
        match (self.median, self.baseline) {
            (Some(value), Some(baseline)) => Some((value - baseline) / baseline * 100.0),
            _ => None,
        }
    }
}

impl fmt::Display for ReportCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.median, self.baseline) {
            (None, _) => f.write_str("n/a"),
            (Some(value), None) => write!(f, "{:.2}", value),
            (Some(value), Some(baseline)) => {
                write!(f, "{:.2} ({})", value, diff_percentage(value, baseline))
            }
        }
    }
}

/// One backend's row of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub backend: String,
    pub cells: Vec<ReportCell>,
}

/// Comparison of every backend against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub iterations: u32,
    pub size: u32,
    pub baseline: String,
    /// Column headers, in the baseline's execution order.
    pub labels: Vec<String>,
    /// Baseline row first, then the other backends in benchmark order.
    pub rows: Vec<ReportRow>,
}

impl ComparisonReport {
    /// Row for `backend`, if it is part of the report.
    pub fn row(&self, backend: &str) -> Option<&ReportRow> {
        self.rows.iter().find(|r| r.backend == backend)
    }

    /// Cell for `backend` and query `label`.
    pub fn cell(&self, backend: &str, label: &str) -> Option<&ReportCell> {
        let column = self.labels.iter().position(|l| l == label)?;
        self.row(backend)?.cells.get(column)
    }

    /// Render as markdown.
    pub fn to_markdown(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", REPORT_TITLE)?;
        writeln!(f)?;
        // Two trailing spaces force a markdown line break.
        writeln!(f, "Iteration count: {}  ", self.iterations)?;
        writeln!(f, "Dataset size: {}", self.size)?;
        writeln!(f)?;

        let mut header = String::from("|ORM|");
        let mut divider = String::from("|---|");
        for label in &self.labels {
            write!(header, "{}|", label)?;
            divider.push_str("---|");
        }
        writeln!(f, "{}", header)?;
        writeln!(f, "{}", divider)?;

        for row in &self.rows {
            write!(f, "|{}|", row.backend)?;
            for cell in &row.cells {
                write!(f, "{}|", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Format the deviation of `value` from `baseline` as a signed percentage.
///
/// Values at or above the baseline carry an explicit `+`. A zero baseline is
/// not special-cased: the result reads `+inf%`, or `NaN%` when both are zero.
pub fn diff_percentage(value: f64, baseline: f64) -> String {
    let percent = (value - baseline) / baseline * 100.0;
    if percent >= 0.0 {
        format!("+{:.2}%", percent)
    } else {
        format!("{:.2}%", percent)
    }
}

/// Build the comparison report for `results` against `baseline`.
///
/// Skips (and logs a warning) when the baseline backend has no usable
/// results; this is never an error for the caller.
pub fn generate_summary(
    results: &ResultSet,
    baseline: &str,
    options: &BenchmarkOptions,
) -> SummaryOutcome {
    let Some(baseline_runs) = results.get(baseline) else {
        return skip(SkipReason::MissingBaseline {
            baseline: baseline.to_string(),
        });
    };

    let labels = match baseline_runs.first() {
        Some(first) if !first.is_empty() => label_order(first),
        _ => {
            return skip(SkipReason::EmptyBaseline {
                baseline: baseline.to_string(),
            })
        }
    };

    let medians: Vec<(&str, MedianMap)> = results
        .iter()
        .map(|entry| (entry.backend.as_str(), aggregate_medians(&entry.runs)))
        .collect();

    let Some((_, baseline_medians)) = medians.iter().find(|(name, _)| *name == baseline) else {
        return skip(SkipReason::MissingBaseline {
            baseline: baseline.to_string(),
        });
    };

    let mut rows = Vec::with_capacity(medians.len());
    rows.push(ReportRow {
        backend: baseline.to_string(),
        cells: labels
            .iter()
            .map(|label| ReportCell {
                median: baseline_medians.get(label).copied(),
                baseline: None,
            })
            .collect(),
    });

    for (backend, backend_medians) in medians.iter().filter(|(name, _)| *name != baseline) {
        rows.push(ReportRow {
            backend: backend.to_string(),
            cells: labels
                .iter()
                .map(|label| ReportCell {
                    median: backend_medians.get(label).copied(),
                    baseline: baseline_medians.get(label).copied(),
                })
                .collect(),
        });
    }

    SummaryOutcome::Produced(ComparisonReport {
        iterations: options.iterations,
        size: options.size,
        baseline: baseline.to_string(),
        labels,
        rows,
    })
}

fn skip(reason: SkipReason) -> SummaryOutcome {
    warn!("Skipping comparison summary: {}", reason);
    SummaryOutcome::Skipped(reason)
}
