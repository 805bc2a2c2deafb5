//! Calendar events.
//!
//! `attendees` and `recurrence_pattern` are JSON columns. The recurrence
//! pattern is stored and returned verbatim; nothing in the application
//! expands it into occurrences.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::{HEX_COLOR_RE, UUID_V4_RE};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub employee_id: Option<Uuid>,
    pub attendees: Option<Json<Vec<String>>>,
    pub color: Option<String>,
    pub recurrence_pattern: Option<Json<Value>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload forwarded to the calendar routines.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CalendarEventInput {
    #[validate(regex(path = *UUID_V4_RE, message = "Invalid id format"))]
    pub id: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description is too long"))]
    pub description: Option<String>,

    #[validate(length(max = 64, message = "event_type must not exceed 64 characters"))]
    pub event_type: Option<String>,

    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,

    #[validate(length(max = 255, message = "Location must not exceed 255 characters"))]
    pub location: Option<String>,

    #[validate(regex(path = *UUID_V4_RE, message = "Invalid employee_id"))]
    pub employee_id: Option<String>,

    pub attendees: Option<Vec<String>>,

    #[validate(regex(path = *HEX_COLOR_RE, message = "Color must be a hex value like #3B82F6"))]
    pub color: Option<String>,

    /// Persisted as-is; never interpreted.
    pub recurrence_pattern: Option<Value>,
}

/// Query parameters for the event listing.
///
/// Raw strings are kept so blank parameters normalize to "absent" the same
/// way the dashboard client sends them.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CalendarQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub employee_id: Option<String>,
    /// Comma-separated list of event types.
    pub event_types: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn color_must_be_hex() {
        let input = CalendarEventInput {
            id: None,
            title: "All hands".to_string(),
            description: None,
            event_type: Some("meeting".to_string()),
            start_date: Utc::now(),
            end_date: None,
            location: None,
            employee_id: None,
            attendees: None,
            color: Some("blue".to_string()),
            recurrence_pattern: None,
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("color"));
    }

    #[test]
    fn recurrence_pattern_accepts_arbitrary_json() {
        let input: CalendarEventInput = serde_json::from_value(serde_json::json!({
            "title": "Standup",
            "start_date": "2025-05-01T09:00:00Z",
            "recurrence_pattern": {"freq": "weekly", "by_day": ["MO", "WE"]}
        }))
        .unwrap();
        assert!(input.validate().is_ok());
        assert!(input.recurrence_pattern.is_some());
    }
}
