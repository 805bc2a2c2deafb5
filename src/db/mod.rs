//! Database connection pool and the result-set shaping adapter.

use std::time::Duration;

use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Create a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Establish the pool at startup, retrying a fixed number of attempts with
/// exponential backoff. Business calls later never retry; this probe is the
/// only place the process waits for the database.
pub async fn create_pool_with_retry(
    database_url: &str,
    max_connections: u32,
    attempts: u32,
) -> Result<PgPool, sqlx::Error> {
    let mut delay = Duration::from_millis(500);
    let mut last_err = sqlx::Error::PoolClosed;

    for attempt in 1..=attempts.max(1) {
        match create_pool(database_url, max_connections).await {
            Ok(pool) => return Ok(pool),
            Err(e) => {
                tracing::warn!(attempt, error = %e, "Database connection failed");
                last_err = e;
                if attempt < attempts {
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
            }
        }
    }

    Err(last_err)
}

/// Normalize a routine result that may arrive as one result set, several
/// nested result sets, or a single object, into a flat list of objects.
///
/// Multi-statement routines surface as an array of row arrays; each inner
/// set contributes its first row. A flat list passes through unchanged, so
/// the operation is idempotent.
pub fn flatten_result_sets(value: Value) -> Vec<Value> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => {
            let nested = !items.is_empty() && items.iter().all(Value::is_array);
            if nested {
                items
                    .into_iter()
                    .map(|set| match set {
                        Value::Array(rows) => {
                            rows.into_iter().next().unwrap_or(Value::Array(Vec::new()))
                        }
                        other => other,
                    })
                    .collect()
            } else {
                items
            }
        }
        other => vec![other],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flatten_nested_result_sets_takes_first_row_of_each() {
        let value = json!([
            [{"total_employees": 42}],
            [{"open_positions": 3}, {"open_positions": 1}],
            []
        ]);
        let flat = flatten_result_sets(value);
        assert_eq!(flat.len(), 3);
        assert_eq!(flat[0], json!({"total_employees": 42}));
        assert_eq!(flat[1], json!({"open_positions": 3}));
        assert_eq!(flat[2], json!([]));
    }

    #[test]
    fn flatten_flat_list_passes_through() {
        let value = json!([{"a": 1}, {"b": 2}]);
        assert_eq!(
            flatten_result_sets(value),
            vec![json!({"a": 1}), json!({"b": 2})]
        );
    }

    #[test]
    fn flatten_is_idempotent() {
        let value = json!([[{"a": 1}], [{"b": 2}]]);
        let once = flatten_result_sets(value);
        let twice = flatten_result_sets(Value::Array(once.clone()));
        assert_eq!(once, twice);
    }

    #[test]
    fn flatten_single_object_becomes_singleton_list() {
        let flat = flatten_result_sets(json!({"total": 7}));
        assert_eq!(flat, vec![json!({"total": 7})]);
    }

    #[test]
    fn flatten_null_is_empty() {
        assert!(flatten_result_sets(Value::Null).is_empty());
    }
}
