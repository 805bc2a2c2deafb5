//! Recruitment postings and job applications.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::recruitment::{
    ApplicationStatus, JobApplication, JobApplicationInput, PositionType, Recruitment,
    RecruitmentInput, RecruitmentStatus,
};
use crate::models::parse_uuid_opt;

pub async fn list(pool: &PgPool) -> Result<Vec<Recruitment>, AppError> {
    let rows = sqlx::query_as::<_, Recruitment>("SELECT * FROM sp_get_recruitments()")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Recruitment>, AppError> {
    let row = sqlx::query_as::<_, Recruitment>("SELECT * FROM sp_get_recruitment_by_id($1)")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &PgPool, input: &RecruitmentInput) -> Result<(), AppError> {
    let id = match parse_uuid_opt("id", input.id.as_deref())? {
        Some(id) => id,
        None => Uuid::new_v4(),
    };
    sqlx::query(
        "SELECT sp_create_recruitment($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
    )
    .bind(id)
    .bind(&input.job_title)
    .bind(parse_uuid_opt("department_id", input.department_id.as_deref())?)
    .bind(&input.description)
    .bind(&input.requirements)
    .bind(input.position_type.unwrap_or(PositionType::FullTime))
    .bind(&input.salary_range)
    .bind(input.posting_date)
    .bind(input.closing_date)
    .bind(input.status.unwrap_or(RecruitmentStatus::Open))
    .bind(input.vacancies)
    .bind(parse_uuid_opt("created_by", input.created_by.as_deref())?)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn update(pool: &PgPool, id: Uuid, input: &RecruitmentInput) -> Result<(), AppError> {
    sqlx::query(
        "SELECT sp_update_recruitment($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
    )
    .bind(id)
    .bind(&input.job_title)
    .bind(parse_uuid_opt("department_id", input.department_id.as_deref())?)
    .bind(&input.description)
    .bind(&input.requirements)
    .bind(input.position_type)
    .bind(&input.salary_range)
    .bind(input.posting_date)
    .bind(input.closing_date)
    .bind(input.status)
    .bind(input.vacancies)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    sqlx::query("SELECT sp_delete_recruitment($1)")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn list_applications(
    pool: &PgPool,
    recruitment_id: Uuid,
) -> Result<Vec<JobApplication>, AppError> {
    let rows = sqlx::query_as::<_, JobApplication>(
        "SELECT * FROM sp_get_applications_by_recruitment($1)",
    )
    .bind(recruitment_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_application(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<JobApplication>, AppError> {
    let row = sqlx::query_as::<_, JobApplication>("SELECT * FROM sp_get_application_by_id($1)")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create_application(
    pool: &PgPool,
    recruitment_id: Uuid,
    input: &JobApplicationInput,
) -> Result<(), AppError> {
    let id = match parse_uuid_opt("id", input.id.as_deref())? {
        Some(id) => id,
        None => Uuid::new_v4(),
    };
    sqlx::query("SELECT sp_add_application($1, $2, $3, $4, $5, $6, $7, $8)")
        .bind(id)
        .bind(recruitment_id)
        .bind(&input.applicant_name)
        .bind(&input.applicant_email)
        .bind(&input.applicant_phone)
        .bind(&input.resume_url)
        .bind(&input.cover_letter)
        .bind(input.application_date)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn update_application_status(
    pool: &PgPool,
    id: Uuid,
    status: ApplicationStatus,
) -> Result<(), AppError> {
    sqlx::query("SELECT sp_update_application_status($1, $2)")
        .bind(id)
        .bind(status)
        .execute(pool)
        .await?;
    Ok(())
}
