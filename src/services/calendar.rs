//! Calendar event operations.
//!
//! The only in-process logic is query-parameter normalization: blank
//! strings become absent filters before the routine call. Date ordering,
//! overlap detection, and recurrence expansion are deliberately absent.

use chrono::NaiveDate;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::calendar::{CalendarEvent, CalendarEventInput, CalendarQuery};
use crate::models::parse_uuid_opt;

/// Normalized listing filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventListParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub employee_id: Option<Uuid>,
    pub event_types: Option<Vec<String>>,
}

impl EventListParams {
    /// Normalize raw query parameters: empty strings become `None`, dates
    /// are parsed as `YYYY-MM-DD`, and `event_types` splits on commas.
    pub fn from_query(query: &CalendarQuery) -> Result<Self, AppError> {
        Ok(Self {
            from: parse_date_opt("from", query.from.as_deref())?,
            to: parse_date_opt("to", query.to.as_deref())?,
            employee_id: parse_uuid_opt(
                "employee_id",
                query.employee_id.as_deref().map(str::trim),
            )?,
            event_types: split_event_types(query.event_types.as_deref()),
        })
    }
}

fn parse_date_opt(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(|_| AppError::Validation(format!("{field} must be a valid date"))),
    }
}

fn split_event_types(value: Option<&str>) -> Option<Vec<String>> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }
    let types: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if types.is_empty() {
        None
    } else {
        Some(types)
    }
}

/// List events in an inclusive date range, optionally filtered by employee
/// and event types. One routine call.
pub async fn list(
    pool: &PgPool,
    params: &EventListParams,
) -> Result<Vec<CalendarEvent>, AppError> {
    let rows = sqlx::query_as::<_, CalendarEvent>(
        "SELECT * FROM sp_get_calendar_events($1, $2, $3, $4)",
    )
    .bind(params.from)
    .bind(params.to)
    .bind(params.employee_id)
    .bind(params.event_types.clone())
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create(pool: &PgPool, input: &CalendarEventInput) -> Result<(), AppError> {
    let id = match parse_uuid_opt("id", input.id.as_deref())? {
        Some(id) => id,
        None => Uuid::new_v4(),
    };
    call_upsert(pool, "sp_create_calendar_event", id, input).await
}

pub async fn update(pool: &PgPool, id: Uuid, input: &CalendarEventInput) -> Result<(), AppError> {
    call_upsert(pool, "sp_update_calendar_event", id, input).await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    sqlx::query("SELECT sp_delete_calendar_event($1)")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

async fn call_upsert(
    pool: &PgPool,
    routine: &str,
    id: Uuid,
    input: &CalendarEventInput,
) -> Result<(), AppError> {
    let sql = format!(
        "SELECT {routine}($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)"
    );
    sqlx::query(&sql)
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.event_type)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(&input.location)
        .bind(parse_uuid_opt("employee_id", input.employee_id.as_deref())?)
        .bind(input.attendees.as_ref().map(|a| Json(a.clone())))
        .bind(&input.color)
        .bind(input.recurrence_pattern.as_ref().map(|p| Json(p.clone())))
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_parameters_normalize_to_none() {
        let query = CalendarQuery {
            from: Some("".to_string()),
            to: None,
            employee_id: Some("  ".to_string()),
            event_types: Some("".to_string()),
        };
        let params = EventListParams::from_query(&query).unwrap();
        assert_eq!(params, EventListParams::default());
    }

    #[test]
    fn dates_parse_iso_format() {
        let query = CalendarQuery {
            from: Some("2025-05-01".to_string()),
            to: Some("2025-05-31".to_string()),
            employee_id: None,
            event_types: None,
        };
        let params = EventListParams::from_query(&query).unwrap();
        assert_eq!(params.from, NaiveDate::from_ymd_opt(2025, 5, 1));
        assert_eq!(params.to, NaiveDate::from_ymd_opt(2025, 5, 31));
    }

    #[test]
    fn malformed_date_is_a_validation_error() {
        let query = CalendarQuery {
            from: Some("05/01/2025".to_string()),
            ..Default::default()
        };
        let err = EventListParams::from_query(&query).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn event_types_split_and_trim() {
        let query = CalendarQuery {
            event_types: Some("meeting, training ,,holiday".to_string()),
            ..Default::default()
        };
        let params = EventListParams::from_query(&query).unwrap();
        assert_eq!(
            params.event_types,
            Some(vec![
                "meeting".to_string(),
                "training".to_string(),
                "holiday".to_string()
            ])
        );
    }
}
