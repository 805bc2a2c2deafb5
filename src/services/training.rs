//! Training programs and enrollments. Capacity is carried, not enforced.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::parse_uuid;
use crate::models::parse_uuid_opt;
use crate::models::training::{
    AttendanceStatus, EnrollmentInput, TrainingEnrollment, TrainingProgram, TrainingProgramInput,
    TrainingStatus,
};

pub async fn list(pool: &PgPool) -> Result<Vec<TrainingProgram>, AppError> {
    let rows = sqlx::query_as::<_, TrainingProgram>("SELECT * FROM sp_get_training_programs()")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<TrainingProgram>, AppError> {
    let row = sqlx::query_as::<_, TrainingProgram>("SELECT * FROM sp_get_training_by_id($1)")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &PgPool, input: &TrainingProgramInput) -> Result<(), AppError> {
    let id = match parse_uuid_opt("id", input.id.as_deref())? {
        Some(id) => id,
        None => Uuid::new_v4(),
    };
    call_program_upsert(pool, "sp_create_training", id, input).await
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    input: &TrainingProgramInput,
) -> Result<(), AppError> {
    call_program_upsert(pool, "sp_update_training", id, input).await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    sqlx::query("SELECT sp_delete_training($1)")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

async fn call_program_upsert(
    pool: &PgPool,
    routine: &str,
    id: Uuid,
    input: &TrainingProgramInput,
) -> Result<(), AppError> {
    let sql = format!(
        "SELECT {routine}($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)"
    );
    sqlx::query(&sql)
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.trainer)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(&input.location)
        .bind(input.capacity)
        .bind(input.cost_per_person)
        .bind(input.status.unwrap_or(TrainingStatus::Planned))
        .bind(parse_uuid_opt("created_by", input.created_by.as_deref())?)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn list_enrollments(
    pool: &PgPool,
    program_id: Uuid,
) -> Result<Vec<TrainingEnrollment>, AppError> {
    let rows = sqlx::query_as::<_, TrainingEnrollment>(
        "SELECT * FROM sp_get_enrollments_by_program($1)",
    )
    .bind(program_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create_enrollment(
    pool: &PgPool,
    program_id: Uuid,
    input: &EnrollmentInput,
) -> Result<(), AppError> {
    let id = match parse_uuid_opt("id", input.id.as_deref())? {
        Some(id) => id,
        None => Uuid::new_v4(),
    };
    sqlx::query("SELECT sp_add_enrollment($1, $2, $3, $4, $5, $6, $7, $8, $9)")
        .bind(id)
        .bind(program_id)
        .bind(parse_uuid("employee_id", &input.employee_id)?)
        .bind(input.enrollment_date)
        .bind(
            input
                .attendance_status
                .unwrap_or(AttendanceStatus::Registered),
        )
        .bind(input.completion_date)
        .bind(input.certificate_issued.unwrap_or(false))
        .bind(&input.feedback)
        .bind(input.rating)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn update_enrollment(
    pool: &PgPool,
    id: Uuid,
    input: &EnrollmentInput,
) -> Result<(), AppError> {
    sqlx::query("SELECT sp_update_enrollment($1, $2, $3, $4, $5, $6, $7, $8)")
        .bind(id)
        .bind(parse_uuid("employee_id", &input.employee_id)?)
        .bind(input.enrollment_date)
        .bind(input.attendance_status)
        .bind(input.completion_date)
        .bind(input.certificate_issued)
        .bind(&input.feedback)
        .bind(input.rating)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete_enrollment(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    sqlx::query("SELECT sp_delete_enrollment($1)")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
