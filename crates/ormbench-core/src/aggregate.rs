//! Median aggregation across repeated runs.
//!
//! Durations are grouped by normalized operation label over every run of a
//! backend, then reduced to a median per label.

use std::collections::{BTreeMap, HashSet};

use crate::result::{QueryResult, RunResult};

/// Normalized operation label to median duration in milliseconds.
pub type MedianMap = BTreeMap<String, f64>;

/// Median of `samples`.
///
/// Odd-sized inputs yield the middle element, even-sized inputs the mean of
/// the two middle elements. Returns `None` for an empty slice.
pub fn median(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

/// Compute per-label medians over all runs of one backend.
///
/// Labels that appear in only some runs get a median over the samples that
/// exist; nothing is imputed for the missing runs.
pub fn aggregate_medians(runs: &[RunResult]) -> MedianMap {
    let mut series: BTreeMap<String, Vec<f64>> = BTreeMap::new();

    for run in runs {
        for result in run {
            series
                .entry(result.label().operation().to_string())
                .or_default()
                .push(result.time());
        }
    }

    series
        .into_iter()
        .filter_map(|(label, times)| median(&times).map(|m| (label, m)))
        .collect()
}

/// Normalized labels of `run` in execution order, first occurrence only.
pub fn label_order(run: &[QueryResult]) -> Vec<String> {
    let mut seen = HashSet::new();
    run.iter()
        .map(|r| r.label().operation())
        .filter(|op| seen.insert(*op))
        .map(str::to_string)
        .collect()
}
