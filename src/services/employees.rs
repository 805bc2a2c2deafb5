//! Employee operations. Each is a single routine invocation; the typed row
//! mapping happens here, at the data-access boundary.

use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::employee::{Employee, EmployeeInput, EmployeeMin, EmploymentStatus};
use crate::models::parse_uuid_opt;

pub async fn list(pool: &PgPool) -> Result<Vec<Employee>, AppError> {
    let rows = sqlx::query_as::<_, Employee>("SELECT * FROM sp_get_employees()")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn list_min(pool: &PgPool) -> Result<Vec<EmployeeMin>, AppError> {
    let rows = sqlx::query_as::<_, EmployeeMin>("SELECT * FROM sp_get_employees_min()")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Missing rows surface as success with null data, matching the list
/// endpoints' behavior.
pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Employee>, AppError> {
    let row = sqlx::query_as::<_, Employee>("SELECT * FROM sp_get_employee_by_id($1)")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn create(pool: &PgPool, input: &EmployeeInput) -> Result<(), AppError> {
    let id = match parse_uuid_opt("id", input.id.as_deref())? {
        Some(id) => id,
        None => Uuid::new_v4(),
    };
    call_upsert(pool, "sp_insert_employee", id, input).await
}

pub async fn update(pool: &PgPool, id: Uuid, input: &EmployeeInput) -> Result<(), AppError> {
    call_upsert(pool, "sp_update_employee", id, input).await
}

pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AppError> {
    sqlx::query("SELECT sp_delete_employee($1)")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Insert and update take the same thirteen parameters.
async fn call_upsert(
    pool: &PgPool,
    routine: &str,
    id: Uuid,
    input: &EmployeeInput,
) -> Result<(), AppError> {
    let sql = format!(
        "SELECT {routine}($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)"
    );
    sqlx::query(&sql)
        .bind(id)
        .bind(parse_uuid_opt("user_id", input.user_id.as_deref())?)
        .bind(&input.employee_number)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(parse_uuid_opt("department_id", input.department_id.as_deref())?)
        .bind(&input.position)
        .bind(input.hire_date)
        .bind(input.employment_status.unwrap_or(EmploymentStatus::Active))
        .bind(input.salary)
        .bind(&input.photo_url)
        .execute(pool)
        .await?;
    Ok(())
}
