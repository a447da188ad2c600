//! Timing wrapper for a single database operation.

use std::future::Future;

use tokio::time::Instant;
use tracing::debug;

use ormbench_core::{QueryLabel, QueryResult};

/// Await `operation` and record how long it took under `label`.
///
/// The clock starts right before the future is first polled and stops right
/// after it resolves. A failed operation returns its error and records
/// nothing.
pub async fn measure<F, T, E>(label: QueryLabel, operation: F) -> Result<(QueryResult, T), E>
where
    F: Future<Output = Result<T, E>>,
{
    let start = Instant::now();
    let output = operation.await?;
    let result = QueryResult::from_duration(label, start.elapsed());

    debug!(query = %result.label(), time_ms = result.time(), "measured");
    Ok((result, output))
}

/// [`measure`] for operations that cannot fail.
pub async fn measure_infallible<F, T>(label: QueryLabel, operation: F) -> (QueryResult, T)
where
    F: Future<Output = T>,
{
    let start = Instant::now();
    let output = operation.await;
    let result = QueryResult::from_duration(label, start.elapsed());

    debug!(query = %result.label(), time_ms = result.time(), "measured");
    (result, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_measure_records_elapsed() {
        let label = QueryLabel::new("zenstack", "findMany");
        let (result, rows) = measure(label, async {
            tokio::time::sleep(Duration::from_millis(25)).await;
            Ok::<_, std::io::Error>(vec![1, 2, 3])
        })
        .await
        .unwrap();

        assert_eq!(rows, vec![1, 2, 3]);
        assert_eq!(result.query(), "zenstack-findMany");
        assert!((result.time() - 25.0).abs() < 1e-6, "got {}", result.time());
    }

    #[tokio::test]
    async fn test_measure_propagates_failure() {
        let label = QueryLabel::new("prisma", "delete");
        let outcome = measure(label, async {
            Err::<(), _>(std::io::Error::other("record not found"))
        })
        .await;

        let err = outcome.unwrap_err();
        assert_eq!(err.to_string(), "record not found");
    }

    #[tokio::test]
    async fn test_measure_does_not_start_before_await() {
        // The future is built here but only polled inside measure.
        let pending = async { 7 };
        let (result, value) =
            measure_infallible(QueryLabel::new("drizzle", "findFirst"), pending).await;

        assert_eq!(value, 7);
        assert!(result.time() >= 0.0);
    }
}
