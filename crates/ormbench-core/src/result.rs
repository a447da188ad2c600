//! Benchmark result types.
//!
//! A suite runner produces one [`RunResult`] per pass over the query suite and
//! a [`MultipleRunResults`] per backend. Labels are structured so that the
//! aggregator never has to parse backend prefixes out of strings.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identifies which backend ran which logical query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryLabel {
    backend: String,
    operation: String,
}

impl QueryLabel {
    /// Create a label from its backend and operation parts.
    pub fn new(backend: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            operation: operation.into(),
        }
    }

    /// Build a label from a `"<backend>-<operation>"` string.
    ///
    /// If `label` does not carry the backend prefix it is taken as the
    /// operation verbatim.
    pub fn parse_prefixed(label: &str, backend: &str) -> Self {
        Self::new(backend, normalize_label(label, backend))
    }

    /// Backend that produced the measurement.
    pub fn backend(&self) -> &str {
        &self.backend
    }

    /// Normalized operation label, comparable across backends.
    pub fn operation(&self) -> &str {
        &self.operation
    }
}

impl fmt::Display for QueryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.backend, self.operation)
    }
}

/// Strip a leading `"<backend>-"` from `label`.
///
/// Labels without the prefix are returned unchanged, so normalizing twice is
/// the same as normalizing once.
pub fn normalize_label<'a>(label: &'a str, backend: &str) -> &'a str {
    label
        .strip_prefix(backend)
        .and_then(|rest| rest.strip_prefix('-'))
        .unwrap_or(label)
}

/// One measured operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(rename = "query")]
    label: QueryLabel,
    /// Wall-clock duration in milliseconds.
    time: f64,
}

impl QueryResult {
    /// Record a measurement of `time_ms` milliseconds.
    pub fn new(label: QueryLabel, time_ms: f64) -> Self {
        debug_assert!(time_ms >= 0.0, "durations are never negative");
        Self {
            label,
            time: time_ms,
        }
    }

    /// Record a measurement from an elapsed [`Duration`].
    pub fn from_duration(label: QueryLabel, elapsed: Duration) -> Self {
        Self::new(label, elapsed.as_secs_f64() * 1000.0)
    }

    /// Structured label.
    pub fn label(&self) -> &QueryLabel {
        &self.label
    }

    /// Backend-prefixed query name, e.g. `zenstack-findMany`.
    pub fn query(&self) -> String {
        self.label.to_string()
    }

    /// Duration in milliseconds.
    pub fn time(&self) -> f64 {
        self.time
    }
}

/// One full pass through the query suite, in execution order.
pub type RunResult = Vec<QueryResult>;

/// Repeated passes for a single backend, one per iteration.
pub type MultipleRunResults = Vec<RunResult>;

/// All iterations recorded for one backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendRuns {
    pub backend: String,
    pub runs: MultipleRunResults,
}

/// Per-backend results in the order the backends were benchmarked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    entries: Vec<BackendRuns>,
}

impl ResultSet {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the runs for `backend`.
    ///
    /// A backend that is already present keeps its position and has its runs
    /// replaced.
    pub fn insert(&mut self, backend: impl Into<String>, runs: MultipleRunResults) {
        let backend = backend.into();
        match self.entries.iter_mut().find(|e| e.backend == backend) {
            Some(existing) => existing.runs = runs,
            None => self.entries.push(BackendRuns { backend, runs }),
        }
    }

    /// Runs recorded for `backend`, if any.
    pub fn get(&self, backend: &str) -> Option<&MultipleRunResults> {
        self.entries
            .iter()
            .find(|e| e.backend == backend)
            .map(|e| &e.runs)
    }

    pub fn contains(&self, backend: &str) -> bool {
        self.get(backend).is_some()
    }

    /// Iterate backends in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &BackendRuns> {
        self.entries.iter()
    }

    /// Backend names in insertion order.
    pub fn backends(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.backend.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<BackendRuns> for ResultSet {
    fn from_iter<I: IntoIterator<Item = BackendRuns>>(iter: I) -> Self {
        let mut set = ResultSet::new();
        for entry in iter {
            set.insert(entry.backend, entry.runs);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_backend_prefix() {
        assert_eq!(
            normalize_label("zenstack-findMany-1-level-nesting", "zenstack"),
            "findMany-1-level-nesting"
        );
        assert_eq!(normalize_label("prisma-delete", "prisma"), "delete");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_label("zenstack-findMany-1-level-nesting", "zenstack");
        assert_eq!(normalize_label(once, "zenstack"), once);
        assert_eq!(normalize_label("findMany", "zenstack"), "findMany");
    }

    #[test]
    fn test_normalize_requires_separator() {
        // "prismaX" is a different backend, not a prefixed label
        assert_eq!(
            normalize_label("prismaX-create", "prisma"),
            "prismaX-create"
        );
    }

    #[test]
    fn test_label_display_and_parse() {
        let label = QueryLabel::parse_prefixed("zenstack-nested-upsert", "zenstack");
        assert_eq!(label.backend(), "zenstack");
        assert_eq!(label.operation(), "nested-upsert");
        assert_eq!(label.to_string(), "zenstack-nested-upsert");
    }

    #[test]
    fn test_query_result_from_duration() {
        let label = QueryLabel::new("drizzle", "findFirst");
        let result = QueryResult::from_duration(label, Duration::from_micros(1500));
        assert_eq!(result.query(), "drizzle-findFirst");
        assert!((result.time() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_query_result_serialized_shape() {
        let result = QueryResult::new(QueryLabel::new("prisma", "update"), 3.25);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["query"]["backend"], "prisma");
        assert_eq!(json["query"]["operation"], "update");
        assert_eq!(json["time"], 3.25);
    }

    #[test]
    fn test_result_set_keeps_insertion_order() {
        let mut set = ResultSet::new();
        set.insert("zenstack", vec![]);
        set.insert("prisma", vec![]);
        set.insert("drizzle", vec![]);
        let names: Vec<_> = set.backends().collect();
        assert_eq!(names, vec!["zenstack", "prisma", "drizzle"]);
    }

    #[test]
    fn test_result_set_insert_replaces_in_place() {
        let mut set = ResultSet::new();
        set.insert("zenstack", vec![]);
        set.insert("prisma", vec![]);
        let result = QueryResult::new(QueryLabel::new("zenstack", "findMany"), 1.0);
        set.insert("zenstack", vec![vec![result]]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.backends().next(), Some("zenstack"));
        assert_eq!(set.get("zenstack").map(|runs| runs.len()), Some(1));
        assert!(!set.contains("typeorm"));
    }
}
