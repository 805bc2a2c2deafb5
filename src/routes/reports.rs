//! Report routes: fetch rows for a report key, then stream the requested
//! format or persist it and return a public URL.

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::errors::{ApiResponse, AppError};
use crate::services::reports::{self as report_service, ReportFormat, ReportQuery};
use crate::AppState;

/// GET /api/v1/reports/:report_name?format=json|csv|xlsx|pdf&save=1
pub async fn get_report(
    State(state): State<AppState>,
    Path(report_name): Path<String>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, AppError> {
    let format = query.format()?;
    let rows = report_service::fetch(&state.db, &report_name, &query).await?;

    let bytes = match format {
        ReportFormat::Json => {
            if !query.save() {
                return Ok(ApiResponse::success(rows).into_response());
            }
            serde_json::to_vec_pretty(&rows)
                .map_err(|e| AppError::Internal(format!("JSON encoding failed: {e}")))?
        }
        ReportFormat::Csv => report_service::to_csv(&rows)?.into_bytes(),
        ReportFormat::Xlsx => report_service::to_xlsx(&rows, &report_name)?,
        ReportFormat::Pdf => {
            report_service::to_pdf(&rows, &report_name.replace('_', " "))?
        }
    };

    if query.save() {
        let filename = report_service::save_to_disk(
            &state.config.reports_dir,
            &report_name,
            format.extension(),
            &bytes,
        )
        .await?;
        let url = format!(
            "{}/public/reports/{filename}",
            state.config.public_base_url.trim_end_matches('/')
        );
        return Ok(Json(json!({ "success": true, "url": url })).into_response());
    }

    let disposition = format!(
        "attachment; filename=\"{report_name}.{}\"",
        format.extension()
    );
    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
