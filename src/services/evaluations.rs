//! Performance evaluation operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::evaluation::{
    EvaluationFilters, EvaluationInput, EvaluationStatus, PerformanceEvaluation,
};
use crate::models::{parse_uuid, parse_uuid_opt};

pub async fn list(pool: &PgPool) -> Result<Vec<PerformanceEvaluation>, AppError> {
    let rows =
        sqlx::query_as::<_, PerformanceEvaluation>("SELECT * FROM sp_get_all_evaluations()")
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

pub async fn find_by_id(
    pool: &PgPool,
    id: Uuid,
) -> Result<Option<PerformanceEvaluation>, AppError> {
    let row =
        sqlx::query_as::<_, PerformanceEvaluation>("SELECT * FROM sp_get_evaluation_by_id($1)")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(row)
}

pub async fn list_by_employee(
    pool: &PgPool,
    employee_id: Uuid,
    filters: &EvaluationFilters,
) -> Result<Vec<PerformanceEvaluation>, AppError> {
    let rows = sqlx::query_as::<_, PerformanceEvaluation>(
        "SELECT * FROM sp_get_evaluations_by_employee($1, $2, $3)",
    )
    .bind(employee_id)
    .bind(filters.status)
    .bind(filters.limit)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create(pool: &PgPool, input: &EvaluationInput) -> Result<(), AppError> {
    let id = match parse_uuid_opt("id", input.id.as_deref())? {
        Some(id) => id,
        None => Uuid::new_v4(),
    };
    call_upsert(pool, "sp_create_evaluation", id, input).await
}

pub async fn update(pool: &PgPool, id: Uuid, input: &EvaluationInput) -> Result<(), AppError> {
    call_upsert(pool, "sp_update_evaluation", id, input).await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    sqlx::query("SELECT sp_delete_evaluation($1)")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Create and update take the same fourteen parameters.
async fn call_upsert(
    pool: &PgPool,
    routine: &str,
    id: Uuid,
    input: &EvaluationInput,
) -> Result<(), AppError> {
    let sql = format!(
        "SELECT {routine}($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)"
    );
    sqlx::query(&sql)
        .bind(id)
        .bind(parse_uuid("employee_id", &input.employee_id)?)
        .bind(parse_uuid_opt("evaluator_id", input.evaluator_id.as_deref())?)
        .bind(&input.evaluation_period)
        .bind(input.evaluation_date)
        .bind(input.performance_score)
        .bind(input.technical_skills)
        .bind(input.communication)
        .bind(input.teamwork)
        .bind(input.leadership)
        .bind(input.punctuality)
        .bind(&input.comments)
        .bind(input.goals_met.unwrap_or(false))
        .bind(input.status.unwrap_or(EvaluationStatus::Draft))
        .execute(pool)
        .await?;
    Ok(())
}
