//! Training programs and enrollments.
//!
//! Programs have a capacity column but enrollment does not enforce it; that
//! check lives (if anywhere) in the database routines.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::UUID_V4_RE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "training_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TrainingStatus {
    Planned,
    Ongoing,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "attendance_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Registered,
    Attended,
    Absent,
    Completed,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TrainingProgram {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub trainer: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub cost_per_person: Option<f64>,
    pub status: TrainingStatus,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TrainingEnrollment {
    pub id: Uuid,
    pub training_program_id: Uuid,
    pub employee_id: Uuid,
    pub enrollment_date: Option<NaiveDate>,
    pub attendance_status: AttendanceStatus,
    pub completion_date: Option<NaiveDate>,
    pub certificate_issued: bool,
    pub feedback: Option<String>,
    pub rating: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload for training programs.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TrainingProgramInput {
    #[validate(regex(path = *UUID_V4_RE, message = "Invalid id format"))]
    pub id: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Training title is required"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description is too long"))]
    pub description: Option<String>,

    #[validate(length(max = 255, message = "Trainer must not exceed 255 characters"))]
    pub trainer: Option<String>,

    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    #[validate(length(max = 255, message = "Location must not exceed 255 characters"))]
    pub location: Option<String>,

    #[validate(range(min = 0, message = "Capacity must be a positive number"))]
    pub capacity: Option<i32>,

    #[validate(range(min = 0.0, message = "Cost must be a positive number"))]
    pub cost_per_person: Option<f64>,

    pub status: Option<TrainingStatus>,

    #[validate(regex(path = *UUID_V4_RE, message = "Invalid created_by id"))]
    pub created_by: Option<String>,
}

/// Create/update payload for an enrollment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EnrollmentInput {
    #[validate(regex(path = *UUID_V4_RE, message = "Invalid id format"))]
    pub id: Option<String>,

    #[validate(regex(path = *UUID_V4_RE, message = "Invalid employee_id"))]
    pub employee_id: String,

    pub enrollment_date: Option<NaiveDate>,
    pub attendance_status: Option<AttendanceStatus>,
    pub completion_date: Option<NaiveDate>,
    pub certificate_issued: Option<bool>,

    #[validate(length(max = 2000, message = "Feedback is too long"))]
    pub feedback: Option<String>,

    #[validate(range(min = 0, max = 5, message = "Rating must be between 0 and 5"))]
    pub rating: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn rating_bounded_to_five() {
        let input = EnrollmentInput {
            id: None,
            employee_id: "9f1b2a34-5c6d-4e7f-89ab-0123456789ab".to_string(),
            enrollment_date: None,
            attendance_status: None,
            completion_date: None,
            certificate_issued: None,
            feedback: None,
            rating: Some(6),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("rating"));
    }

    #[test]
    fn attendance_status_vocabulary() {
        let parsed: AttendanceStatus = serde_json::from_str("\"registered\"").unwrap();
        assert_eq!(parsed, AttendanceStatus::Registered);
        assert!(serde_json::from_str::<AttendanceStatus>("\"late\"").is_err());
    }
}
