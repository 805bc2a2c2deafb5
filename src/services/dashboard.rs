//! Dashboard aggregation: four independent reads joined concurrently.
//!
//! The reads return whatever shape the routines produce; rows pass through
//! as JSON untouched except for the stats normalization, which happens once
//! at the data-access boundary.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::errors::AppError;
use crate::models::parse_uuid_opt;
use crate::models::user::Role;

/// Raw query parameters shared by the dashboard reads.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct DashboardQuery {
    pub days: Option<i32>,
    pub employee_id: Option<String>,
}

impl DashboardQuery {
    pub fn days_or_default(&self) -> i32 {
        self.days.unwrap_or(7)
    }

    pub fn employee_id(&self) -> Result<Option<Uuid>, AppError> {
        parse_uuid_opt("employee_id", self.employee_id.as_deref().map(str::trim))
    }
}

/// Joined result of the four dashboard reads.
#[derive(Debug, Serialize)]
pub struct DashboardOverview {
    pub stats: Vec<Value>,
    pub upcoming_events: Vec<Value>,
    pub notifications: Vec<Value>,
    pub tasks: Vec<Value>,
}

/// Aggregated statistics. The routine may return one result set or several
/// nested ones; the flattening adapter normalizes either into a flat list.
pub async fn get_stats(pool: &PgPool, employee_id: Option<Uuid>) -> Result<Vec<Value>, AppError> {
    let raw: Option<Value> = sqlx::query_scalar("SELECT sp_get_dashboard_stats($1)")
        .bind(employee_id)
        .fetch_one(pool)
        .await?;
    Ok(db::flatten_result_sets(raw.unwrap_or(Value::Null)))
}

pub async fn get_upcoming_events(
    pool: &PgPool,
    days: i32,
    employee_id: Option<Uuid>,
) -> Result<Vec<Value>, AppError> {
    let rows = sqlx::query_scalar::<_, Value>(
        "SELECT to_jsonb(t) FROM sp_get_upcoming_events($1, $2) AS t",
    )
    .bind(days)
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_notifications(
    pool: &PgPool,
    employee_id: Option<Uuid>,
) -> Result<Vec<Value>, AppError> {
    let rows = sqlx::query_scalar::<_, Value>(
        "SELECT to_jsonb(t) FROM sp_get_dashboard_notifications($1) AS t",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_tasks(pool: &PgPool, employee_id: Option<Uuid>) -> Result<Vec<Value>, AppError> {
    let rows = sqlx::query_scalar::<_, Value>(
        "SELECT to_jsonb(t) FROM sp_get_employee_tasks($1) AS t",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Fan out the four reads concurrently and join them. Any single failure
/// fails the aggregate; there is no partial result.
pub async fn get_overview(
    pool: &PgPool,
    days: i32,
    employee_id: Option<Uuid>,
) -> Result<DashboardOverview, AppError> {
    let (stats, upcoming_events, notifications, tasks) = tokio::try_join!(
        get_stats(pool, employee_id),
        get_upcoming_events(pool, days, employee_id),
        get_notifications(pool, employee_id),
        get_tasks(pool, employee_id),
    )?;

    Ok(DashboardOverview {
        stats,
        upcoming_events,
        notifications,
        tasks,
    })
}

/// Re-materialize calendar projections. Fire-and-forget from the caller's
/// point of view; the routine does all the work.
pub async fn sync_calendar(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query("SELECT sp_sync_all_calendar_events()")
        .execute(pool)
        .await?;
    Ok(())
}

/// Elevate a user to hr. The routine is a plain role update: a nonexistent
/// uid is a silent no-op and still reports success.
pub async fn appoint_hr(pool: &PgPool, uid: &str) -> Result<(), AppError> {
    sqlx::query("SELECT sp_set_user_role($1, $2)")
        .bind(uid)
        .bind(Role::Hr)
        .execute(pool)
        .await?;
    Ok(())
}

/// Full user listing for the admin screen.
pub async fn list_users(pool: &PgPool) -> Result<Vec<Value>, AppError> {
    let rows = sqlx::query_scalar::<_, Value>("SELECT to_jsonb(t) FROM sp_list_users() AS t")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_defaults_to_seven() {
        assert_eq!(DashboardQuery::default().days_or_default(), 7);
        let query = DashboardQuery {
            days: Some(30),
            employee_id: None,
        };
        assert_eq!(query.days_or_default(), 30);
    }

    #[test]
    fn blank_employee_id_is_absent() {
        let query = DashboardQuery {
            days: None,
            employee_id: Some("".to_string()),
        };
        assert_eq!(query.employee_id().unwrap(), None);

        let bad = DashboardQuery {
            days: None,
            employee_id: Some("nope".to_string()),
        };
        assert!(bad.employee_id().is_err());
    }
}
