//! Report generation: one fixed routine call per report key, formatted
//! through generic row-table writers.

use chrono::{Datelike, Utc};
use csv::{QuoteStyle, WriterBuilder};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use rust_xlsxwriter::Workbook;
use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;

use crate::errors::AppError;

/// Output format selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Csv,
    Xlsx,
    Pdf,
}

impl ReportFormat {
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            "pdf" => Ok(Self::Pdf),
            _ => Err(AppError::Validation("Unsupported format".to_string())),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Pdf => "pdf",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Csv => "text/csv",
            Self::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            Self::Pdf => "application/pdf",
        }
    }
}

/// Query parameters accepted by the report endpoint.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ReportQuery {
    pub format: Option<String>,
    pub save: Option<String>,
    pub months: Option<i32>,
    pub limit: Option<i64>,
    pub year: Option<i32>,
}

impl ReportQuery {
    pub fn format(&self) -> Result<ReportFormat, AppError> {
        match self.format.as_deref() {
            None | Some("") => Ok(ReportFormat::Json),
            Some(s) => ReportFormat::parse(s),
        }
    }

    pub fn save(&self) -> bool {
        matches!(self.save.as_deref(), Some("1") | Some("true"))
    }
}

/// Report keys exposed by the endpoint, each backed by one routine.
pub const REPORT_KEYS: [&str; 9] = [
    "employee_directory",
    "department_distribution",
    "employment_status",
    "new_hires",
    "evaluation_summary",
    "top_performers",
    "performance_trends",
    "open_positions",
    "application_pipeline",
];

/// Fetch the rows for a report key. Unknown keys are a 400.
pub async fn fetch(
    pool: &PgPool,
    report_name: &str,
    query: &ReportQuery,
) -> Result<Vec<Value>, AppError> {
    let rows = match report_name {
        "employee_directory" => {
            fetch_rows(pool, "SELECT to_jsonb(t) FROM sp_report_employee_directory() AS t").await?
        }
        "department_distribution" => {
            fetch_rows(
                pool,
                "SELECT to_jsonb(t) FROM sp_report_department_distribution() AS t",
            )
            .await?
        }
        "employment_status" => {
            fetch_rows(pool, "SELECT to_jsonb(t) FROM sp_report_employment_status() AS t").await?
        }
        "new_hires" => {
            sqlx::query_scalar::<_, Value>(
                "SELECT to_jsonb(t) FROM sp_report_new_hires($1) AS t",
            )
            .bind(query.months.unwrap_or(12))
            .fetch_all(pool)
            .await?
        }
        "evaluation_summary" => {
            fetch_rows(pool, "SELECT to_jsonb(t) FROM sp_report_evaluation_summary() AS t").await?
        }
        "top_performers" => {
            sqlx::query_scalar::<_, Value>(
                "SELECT to_jsonb(t) FROM sp_report_top_performers($1) AS t",
            )
            .bind(query.limit.unwrap_or(10))
            .fetch_all(pool)
            .await?
        }
        "performance_trends" => {
            sqlx::query_scalar::<_, Value>(
                "SELECT to_jsonb(t) FROM sp_report_performance_trends($1) AS t",
            )
            .bind(query.year.unwrap_or_else(|| Utc::now().year()))
            .fetch_all(pool)
            .await?
        }
        "open_positions" => {
            fetch_rows(pool, "SELECT to_jsonb(t) FROM sp_report_open_positions() AS t").await?
        }
        "application_pipeline" => {
            fetch_rows(
                pool,
                "SELECT to_jsonb(t) FROM sp_report_application_pipeline() AS t",
            )
            .await?
        }
        _ => return Err(AppError::Validation("Unknown report".to_string())),
    };
    Ok(rows)
}

async fn fetch_rows(pool: &PgPool, sql: &str) -> Result<Vec<Value>, AppError> {
    let rows = sqlx::query_scalar::<_, Value>(sql).fetch_all(pool).await?;
    Ok(rows)
}

/// Column names taken from the first row, in stable (sorted) order.
fn columns(rows: &[Value]) -> Vec<String> {
    rows.first()
        .and_then(Value::as_object)
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default()
}

fn cell_text(row: &Value, key: &str) -> String {
    match row.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Render rows as CSV. Zero rows yield an empty string with no header row,
/// the historical behavior of this endpoint.
pub fn to_csv(rows: &[Value]) -> Result<String, AppError> {
    if rows.is_empty() {
        return Ok(String::new());
    }
    let keys = columns(rows);
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());
    writer
        .write_record(&keys)
        .map_err(|e| AppError::Internal(format!("CSV write failed: {e}")))?;
    for row in rows {
        let record: Vec<String> = keys.iter().map(|k| cell_text(row, k)).collect();
        writer
            .write_record(&record)
            .map_err(|e| AppError::Internal(format!("CSV write failed: {e}")))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("CSV write failed: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::Internal(format!("CSV encoding failed: {e}")))
}

/// Render rows as a single-sheet workbook.
pub fn to_xlsx(rows: &[Value], sheet_name: &str) -> Result<Vec<u8>, AppError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|e| AppError::Internal(format!("XLSX write failed: {e}")))?;

    if rows.is_empty() {
        worksheet
            .write_string(0, 0, "No data")
            .map_err(|e| AppError::Internal(format!("XLSX write failed: {e}")))?;
    } else {
        let keys = columns(rows);
        for (col, key) in keys.iter().enumerate() {
            worksheet
                .write_string(0, col as u16, key)
                .map_err(|e| AppError::Internal(format!("XLSX write failed: {e}")))?;
        }
        for (row_idx, row) in rows.iter().enumerate() {
            for (col, key) in keys.iter().enumerate() {
                worksheet
                    .write_string((row_idx + 1) as u32, col as u16, cell_text(row, key))
                    .map_err(|e| AppError::Internal(format!("XLSX write failed: {e}")))?;
            }
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| AppError::Internal(format!("XLSX write failed: {e}")))
}

const PDF_PAGE_WIDTH_MM: f32 = 210.0;
const PDF_PAGE_HEIGHT_MM: f32 = 297.0;
const PDF_MARGIN_MM: f32 = 15.0;
const PDF_LINE_STEP_MM: f32 = 5.0;

/// Render rows as a simple line-per-row PDF table.
pub fn to_pdf(rows: &[Value], title: &str) -> Result<Vec<u8>, AppError> {
    let (doc, page, layer) = PdfDocument::new(
        title,
        Mm(PDF_PAGE_WIDTH_MM),
        Mm(PDF_PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| AppError::Internal(format!("PDF write failed: {e}")))?;

    let mut current = doc.get_page(page).get_layer(layer);
    let mut y = PDF_PAGE_HEIGHT_MM - PDF_MARGIN_MM;

    current.use_text(title, 14.0, Mm(PDF_MARGIN_MM), Mm(y), &font);
    y -= 2.0 * PDF_LINE_STEP_MM;

    if rows.is_empty() {
        current.use_text("No data", 10.0, Mm(PDF_MARGIN_MM), Mm(y), &font);
    } else {
        let keys = columns(rows);
        let header = keys
            .iter()
            .map(|k| k.to_uppercase())
            .collect::<Vec<_>>()
            .join(" | ");
        current.use_text(header, 10.0, Mm(PDF_MARGIN_MM), Mm(y), &font);
        y -= PDF_LINE_STEP_MM;

        for row in rows {
            if y < PDF_MARGIN_MM {
                let (next_page, next_layer) = doc.add_page(
                    Mm(PDF_PAGE_WIDTH_MM),
                    Mm(PDF_PAGE_HEIGHT_MM),
                    "Layer 1",
                );
                current = doc.get_page(next_page).get_layer(next_layer);
                y = PDF_PAGE_HEIGHT_MM - PDF_MARGIN_MM;
            }
            let line = keys
                .iter()
                .map(|k| cell_text(row, k))
                .collect::<Vec<_>>()
                .join(" | ");
            current.use_text(line, 10.0, Mm(PDF_MARGIN_MM), Mm(y), &font);
            y -= PDF_LINE_STEP_MM;
        }
    }

    doc.save_to_bytes()
        .map_err(|e| AppError::Internal(format!("PDF write failed: {e}")))
}

/// Persist a generated report under the public reports directory, returning
/// the saved filename.
pub async fn save_to_disk(
    dir: &str,
    report_name: &str,
    extension: &str,
    bytes: &[u8],
) -> Result<String, AppError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to create reports dir: {e}")))?;
    let filename = format!("{report_name}_{}.{extension}", Utc::now().timestamp_millis());
    let path = std::path::Path::new(dir).join(&filename);
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to write report: {e}")))?;
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_parse_and_default() {
        assert_eq!(ReportQuery::default().format().unwrap(), ReportFormat::Json);
        let query = ReportQuery {
            format: Some("csv".to_string()),
            ..Default::default()
        };
        assert_eq!(query.format().unwrap(), ReportFormat::Csv);
        let bad = ReportQuery {
            format: Some("docx".to_string()),
            ..Default::default()
        };
        assert!(bad.format().is_err());
    }

    #[test]
    fn save_flag_accepts_1_and_true() {
        for (raw, expected) in [
            (Some("1"), true),
            (Some("true"), true),
            (Some("0"), false),
            (None, false),
        ] {
            let query = ReportQuery {
                save: raw.map(str::to_string),
                ..Default::default()
            };
            assert_eq!(query.save(), expected);
        }
    }

    #[test]
    fn csv_with_zero_rows_is_empty() {
        assert_eq!(to_csv(&[]).unwrap(), "");
    }

    #[test]
    fn csv_quotes_every_cell() {
        let rows = vec![
            json!({"name": "Ada", "salary": 100}),
            json!({"name": "Grace, Adm.", "salary": null}),
        ];
        let csv = to_csv(&rows).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), "\"name\",\"salary\"");
        assert_eq!(lines.next().unwrap(), "\"Ada\",\"100\"");
        assert_eq!(lines.next().unwrap(), "\"Grace, Adm.\",\"\"");
    }

    #[test]
    fn xlsx_empty_rows_produces_a_workbook() {
        let bytes = to_xlsx(&[], "empty").unwrap();
        // XLSX files are zip archives.
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn pdf_renders_for_empty_and_populated_rows() {
        let empty = to_pdf(&[], "employee directory").unwrap();
        assert_eq!(&empty[..5], b"%PDF-");

        let rows: Vec<Value> = (0..200)
            .map(|i| json!({"employee": format!("e{i}"), "score": i}))
            .collect();
        let populated = to_pdf(&rows, "performance trends").unwrap();
        assert_eq!(&populated[..5], b"%PDF-");
    }

    #[tokio::test]
    async fn save_to_disk_writes_timestamped_file() {
        let dir = tempfile::tempdir().unwrap();
        let filename = save_to_disk(
            dir.path().to_str().unwrap(),
            "employee_directory",
            "csv",
            b"\"a\"\n",
        )
        .await
        .unwrap();
        assert!(filename.starts_with("employee_directory_"));
        assert!(filename.ends_with(".csv"));
        assert!(dir.path().join(&filename).exists());
    }

    #[test]
    fn every_report_key_is_known() {
        assert_eq!(REPORT_KEYS.len(), 9);
        assert!(REPORT_KEYS.contains(&"employee_directory"));
        assert!(REPORT_KEYS.contains(&"application_pipeline"));
    }
}
