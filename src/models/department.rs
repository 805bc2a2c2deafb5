//! Departments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::{CODE_RE, UUID_V4_RE};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Department {
    pub id: Uuid,
    pub name: String,
    pub code: Option<String>,
    pub description: Option<String>,
    pub head_employee_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Create/update payload forwarded to the department routines.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DepartmentInput {
    #[validate(regex(path = *UUID_V4_RE, message = "Invalid id format"))]
    pub id: Option<String>,

    #[validate(length(
        min = 2,
        max = 255,
        message = "Department name must be between 2 and 255 characters"
    ))]
    pub name: String,

    #[validate(
        length(max = 64, message = "Code must not exceed 64 characters"),
        regex(path = *CODE_RE, message = "Code can only contain letters, numbers, underscores and dashes")
    )]
    pub code: Option<String>,

    #[validate(length(max = 2000, message = "Description is too long"))]
    pub description: Option<String>,

    #[validate(regex(path = *UUID_V4_RE, message = "Invalid head_employee_id format"))]
    pub head_employee_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn head_employee_id_must_be_a_uuid() {
        let input = DepartmentInput {
            id: None,
            name: "Engineering".to_string(),
            code: Some("ENG".to_string()),
            description: None,
            head_employee_id: Some("12345".to_string()),
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("head_employee_id"));
    }

    #[test]
    fn short_name_rejected() {
        let input = DepartmentInput {
            id: None,
            name: "E".to_string(),
            code: None,
            description: None,
            head_employee_id: None,
        };
        assert!(input.validate().is_err());
    }
}
