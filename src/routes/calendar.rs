//! Calendar event routes. Open in this version: the dashboard embeds the
//! calendar for every signed-in role and the reviewed deployment never
//! gated it.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use uuid::Uuid;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::validation::ValidatedJson;
use crate::models::calendar::{CalendarEvent, CalendarEventInput, CalendarQuery};
use crate::services::calendar::{self as calendar_service, EventListParams};
use crate::AppState;

/// GET /api/v1/calendar/events?from=&to=&employee_id=&event_types=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<ApiResponse<Vec<CalendarEvent>>>, AppError> {
    let params = EventListParams::from_query(&query)?;
    let events = calendar_service::list(&state.db, &params).await?;
    Ok(ApiResponse::success(events))
}

/// POST /api/v1/calendar/events
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CalendarEventInput>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    calendar_service::create(&state.db, &body).await?;
    Ok(ApiResponse::ok())
}

/// PUT /api/v1/calendar/events/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(body): ValidatedJson<CalendarEventInput>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    calendar_service::update(&state.db, id, &body).await?;
    Ok(ApiResponse::ok())
}

/// DELETE /api/v1/calendar/events/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    calendar_service::delete(&state.db, id).await?;
    Ok(ApiResponse::ok())
}
