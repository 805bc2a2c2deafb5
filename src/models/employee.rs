//! Employee records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::{CODE_RE, PERSON_NAME_RE, PHONE_RE, UUID_V4_RE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "employment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Active,
    Inactive,
    OnLeave,
}

/// Full employee row as returned by the employee routines.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Employee {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub employee_number: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department_id: Option<Uuid>,
    pub position: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub employment_status: EmploymentStatus,
    pub salary: Option<f64>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Minimal directory row used by pickers and the calendar attendee list.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EmployeeMin {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub position: Option<String>,
}

/// Create/update payload forwarded to the employee routines.
///
/// Entity references arrive as strings so malformed values surface as
/// field-level 400s instead of body-level deserialization failures.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EmployeeInput {
    #[validate(regex(path = *UUID_V4_RE, message = "Invalid id format"))]
    pub id: Option<String>,

    #[validate(regex(path = *UUID_V4_RE, message = "Invalid user_id"))]
    pub user_id: Option<String>,

    #[validate(
        length(max = 64, message = "Employee number must not exceed 64 characters"),
        regex(path = *CODE_RE, message = "Employee number contains invalid characters")
    )]
    pub employee_number: Option<String>,

    #[validate(
        length(min = 1, max = 128, message = "First name must be between 1 and 128 characters"),
        regex(path = *PERSON_NAME_RE, message = "First name contains invalid characters")
    )]
    pub first_name: String,

    #[validate(
        length(min = 1, max = 128, message = "Last name must be between 1 and 128 characters"),
        regex(path = *PERSON_NAME_RE, message = "Last name contains invalid characters")
    )]
    pub last_name: String,

    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,

    #[validate(regex(path = *PHONE_RE, message = "Please provide a valid phone number"))]
    pub phone: Option<String>,

    #[validate(regex(path = *UUID_V4_RE, message = "Invalid department_id"))]
    pub department_id: Option<String>,

    #[validate(length(max = 255, message = "Position must not exceed 255 characters"))]
    pub position: Option<String>,

    pub hire_date: Option<NaiveDate>,

    pub employment_status: Option<EmploymentStatus>,

    #[validate(range(min = 0.0, message = "Salary must be a positive number"))]
    pub salary: Option<f64>,

    #[validate(url(message = "photo_url must be a valid URL"))]
    pub photo_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn valid_input() -> EmployeeInput {
        EmployeeInput {
            id: None,
            user_id: None,
            employee_number: Some("EMP-0042".to_string()),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            phone: Some("+1 555 0100".to_string()),
            department_id: Some("9f1b2a34-5c6d-4e7f-89ab-0123456789ab".to_string()),
            position: Some("Rear Admiral".to_string()),
            hire_date: Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
            employment_status: Some(EmploymentStatus::Active),
            salary: Some(120_000.0),
            photo_url: None,
        }
    }

    #[test]
    fn valid_employee_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn negative_salary_rejected() {
        let mut input = valid_input();
        input.salary = Some(-1.0);
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("salary"));
    }

    #[test]
    fn malformed_department_id_names_the_field() {
        let mut input = valid_input();
        input.department_id = Some("not-a-uuid".to_string());
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("department_id"));
    }

    #[test]
    fn employment_status_uses_snake_case() {
        let status: EmploymentStatus = serde_json::from_str("\"on_leave\"").unwrap();
        assert_eq!(status, EmploymentStatus::OnLeave);
        assert!(serde_json::from_str::<EmploymentStatus>("\"retired\"").is_err());
    }
}
