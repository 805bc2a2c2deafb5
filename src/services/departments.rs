//! Department operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::department::{Department, DepartmentInput};
use crate::models::parse_uuid_opt;

pub async fn list(pool: &PgPool) -> Result<Vec<Department>, AppError> {
    let rows = sqlx::query_as::<_, Department>("SELECT * FROM sp_get_departments()")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Department>, AppError> {
    let row = sqlx::query_as::<_, Department>("SELECT * FROM sp_get_department_by_id($1)")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &PgPool, input: &DepartmentInput) -> Result<(), AppError> {
    let id = match parse_uuid_opt("id", input.id.as_deref())? {
        Some(id) => id,
        None => Uuid::new_v4(),
    };
    sqlx::query("SELECT sp_create_department($1, $2, $3, $4, $5)")
        .bind(id)
        .bind(&input.name)
        .bind(&input.code)
        .bind(&input.description)
        .bind(parse_uuid_opt("head_employee_id", input.head_employee_id.as_deref())?)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn update(pool: &PgPool, id: Uuid, input: &DepartmentInput) -> Result<(), AppError> {
    sqlx::query("SELECT sp_update_department($1, $2, $3, $4, $5)")
        .bind(id)
        .bind(&input.name)
        .bind(&input.code)
        .bind(&input.description)
        .bind(parse_uuid_opt("head_employee_id", input.head_employee_id.as_deref())?)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    sqlx::query("SELECT sp_delete_department($1)")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
