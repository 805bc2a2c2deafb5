//! Performance evaluations.
//!
//! Validation is range checking only: the overall score is 0–100, the
//! individual skill scores are 0–10. No workflow beyond the status enum.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::UUID_V4_RE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "evaluation_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum EvaluationStatus {
    Draft,
    Submitted,
    Approved,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PerformanceEvaluation {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub evaluator_id: Option<Uuid>,
    pub evaluation_period: Option<String>,
    pub evaluation_date: Option<NaiveDate>,
    pub performance_score: Option<f64>,
    pub technical_skills: Option<i32>,
    pub communication: Option<i32>,
    pub teamwork: Option<i32>,
    pub leadership: Option<i32>,
    pub punctuality: Option<i32>,
    pub comments: Option<String>,
    pub goals_met: bool,
    pub status: EvaluationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload forwarded to the evaluation routines.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EvaluationInput {
    #[validate(regex(path = *UUID_V4_RE, message = "Invalid id format"))]
    pub id: Option<String>,

    #[validate(regex(path = *UUID_V4_RE, message = "Invalid employee_id"))]
    pub employee_id: String,

    #[validate(regex(path = *UUID_V4_RE, message = "Invalid evaluator_id"))]
    pub evaluator_id: Option<String>,

    #[validate(length(max = 100, message = "evaluation_period must not exceed 100 characters"))]
    pub evaluation_period: Option<String>,

    pub evaluation_date: Option<NaiveDate>,

    #[validate(range(min = 0.0, max = 100.0, message = "performance_score must be between 0 and 100"))]
    pub performance_score: Option<f64>,

    #[validate(range(min = 0, max = 10, message = "technical_skills must be between 0 and 10"))]
    pub technical_skills: Option<i32>,

    #[validate(range(min = 0, max = 10, message = "communication must be between 0 and 10"))]
    pub communication: Option<i32>,

    #[validate(range(min = 0, max = 10, message = "teamwork must be between 0 and 10"))]
    pub teamwork: Option<i32>,

    #[validate(range(min = 0, max = 10, message = "leadership must be between 0 and 10"))]
    pub leadership: Option<i32>,

    #[validate(range(min = 0, max = 10, message = "punctuality must be between 0 and 10"))]
    pub punctuality: Option<i32>,

    #[validate(length(max = 2000, message = "Comments too long"))]
    pub comments: Option<String>,

    pub goals_met: Option<bool>,
    pub status: Option<EvaluationStatus>,
}

/// Query filters for the by-employee listing.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EvaluationFilters {
    pub status: Option<EvaluationStatus>,
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn valid_input() -> EvaluationInput {
        EvaluationInput {
            id: None,
            employee_id: "9f1b2a34-5c6d-4e7f-89ab-0123456789ab".to_string(),
            evaluator_id: None,
            evaluation_period: Some("2025-H1".to_string()),
            evaluation_date: None,
            performance_score: Some(87.5),
            technical_skills: Some(9),
            communication: Some(7),
            teamwork: Some(8),
            leadership: Some(6),
            punctuality: Some(10),
            comments: None,
            goals_met: Some(true),
            status: Some(EvaluationStatus::Draft),
        }
    }

    #[test]
    fn valid_evaluation_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn overall_score_capped_at_100() {
        let mut input = valid_input();
        input.performance_score = Some(100.5);
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("performance_score"));
    }

    #[test]
    fn skill_scores_capped_at_10() {
        let mut input = valid_input();
        input.teamwork = Some(11);
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("teamwork"));
    }

    #[test]
    fn employee_id_required_and_uuid() {
        let mut input = valid_input();
        input.employee_id = "42".to_string();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("employee_id"));
    }
}
