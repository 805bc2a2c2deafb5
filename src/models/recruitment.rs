//! Recruitment postings and job applications.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::{PHONE_RE, UUID_V4_RE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "position_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PositionType {
    FullTime,
    PartTime,
    Contract,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "recruitment_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RecruitmentStatus {
    Open,
    Closed,
    Filled,
}

/// Status of a single job application. Transitions are unconstrained in
/// application code; the enum only bounds the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Reviewed,
    Shortlisted,
    Rejected,
    Hired,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Recruitment {
    pub id: Uuid,
    pub job_title: String,
    pub department_id: Option<Uuid>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub position_type: PositionType,
    pub salary_range: Option<String>,
    pub posting_date: Option<NaiveDate>,
    pub closing_date: Option<NaiveDate>,
    pub status: RecruitmentStatus,
    pub vacancies: Option<i32>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobApplication {
    pub id: Uuid,
    pub recruitment_id: Uuid,
    pub applicant_name: String,
    pub applicant_email: Option<String>,
    pub applicant_phone: Option<String>,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub application_date: Option<NaiveDate>,
    pub status: ApplicationStatus,
    pub interview_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create/update payload for recruitment postings.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecruitmentInput {
    #[validate(regex(path = *UUID_V4_RE, message = "Invalid id format"))]
    pub id: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Job title is required"))]
    pub job_title: String,

    #[validate(regex(path = *UUID_V4_RE, message = "Invalid department_id"))]
    pub department_id: Option<String>,

    #[validate(length(max = 2000, message = "Description is too long"))]
    pub description: Option<String>,

    #[validate(length(max = 2000, message = "Requirements are too long"))]
    pub requirements: Option<String>,

    pub position_type: Option<PositionType>,

    #[validate(length(max = 128, message = "Salary range must not exceed 128 characters"))]
    pub salary_range: Option<String>,

    pub posting_date: Option<NaiveDate>,
    pub closing_date: Option<NaiveDate>,
    pub status: Option<RecruitmentStatus>,

    #[validate(range(min = 0, message = "Vacancies must be a positive number"))]
    pub vacancies: Option<i32>,

    #[validate(regex(path = *UUID_V4_RE, message = "Invalid created_by id"))]
    pub created_by: Option<String>,
}

/// Create payload for a job application.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct JobApplicationInput {
    #[validate(regex(path = *UUID_V4_RE, message = "Invalid id format"))]
    pub id: Option<String>,

    #[validate(length(min = 1, max = 255, message = "Applicant name is required"))]
    pub applicant_name: String,

    #[validate(email(message = "Invalid email"))]
    pub applicant_email: Option<String>,

    #[validate(regex(path = *PHONE_RE, message = "Invalid phone number"))]
    pub applicant_phone: Option<String>,

    #[validate(url(message = "resume_url must be a valid URL"))]
    pub resume_url: Option<String>,

    #[validate(length(max = 2000, message = "Cover letter is too long"))]
    pub cover_letter: Option<String>,

    pub application_date: Option<NaiveDate>,
}

/// Status-only update for an application.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationStatusUpdate {
    pub status: ApplicationStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn application_status_vocabulary() {
        for (s, expected) in [
            ("pending", ApplicationStatus::Pending),
            ("shortlisted", ApplicationStatus::Shortlisted),
            ("hired", ApplicationStatus::Hired),
        ] {
            let parsed: ApplicationStatus =
                serde_json::from_str(&format!("\"{s}\"")).unwrap();
            assert_eq!(parsed, expected);
        }
        assert!(serde_json::from_str::<ApplicationStatus>("\"archived\"").is_err());
    }

    #[test]
    fn recruitment_requires_job_title() {
        let input = RecruitmentInput {
            id: None,
            job_title: "".to_string(),
            department_id: None,
            description: None,
            requirements: None,
            position_type: None,
            salary_range: None,
            posting_date: None,
            closing_date: None,
            status: None,
            vacancies: None,
            created_by: None,
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("job_title"));
    }

    #[test]
    fn applicant_email_validated_when_present() {
        let input = JobApplicationInput {
            id: None,
            applicant_name: "Jo Applicant".to_string(),
            applicant_email: Some("bad-address".to_string()),
            applicant_phone: None,
            resume_url: None,
            cover_letter: None,
            application_date: None,
        };
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("applicant_email"));
    }
}
