//! Database models and request DTOs for all domain entities.

pub mod calendar;
pub mod department;
pub mod employee;
pub mod evaluation;
pub mod recruitment;
pub mod training;
pub mod user;

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::errors::AppError;

/// UUID v4, matching the format accepted for entity references.
pub(crate) static UUID_V4_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-4[0-9a-fA-F]{3}-[89abAB][0-9a-fA-F]{3}-[0-9a-fA-F]{12}$",
    )
    .expect("valid uuid regex")
});

/// Letters, spaces, apostrophes and hyphens — person names.
pub(crate) static PERSON_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("valid name regex"));

/// Letters, numbers, underscores and dashes — short business codes.
pub(crate) static CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_\-]*$").expect("valid code regex"));

/// Loose international phone number.
pub(crate) static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9\s\-().]{7,20}$").expect("valid phone regex"));

/// Hex color like `#3B82F6`.
pub(crate) static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid color regex"));

/// Parse an already-validated optional UUID string for binding.
pub(crate) fn parse_uuid_opt(field: &str, value: Option<&str>) -> Result<Option<Uuid>, AppError> {
    match value {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| AppError::Validation(format!("Invalid {field}"))),
    }
}

/// Parse a required UUID string for binding.
pub(crate) fn parse_uuid(field: &str, value: &str) -> Result<Uuid, AppError> {
    value
        .parse()
        .map_err(|_| AppError::Validation(format!("Invalid {field}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_v4_pattern_accepts_v4_only() {
        assert!(UUID_V4_RE.is_match("9f1b2a34-5c6d-4e7f-89ab-0123456789ab"));
        // version nibble is not 4
        assert!(!UUID_V4_RE.is_match("9f1b2a34-5c6d-1e7f-89ab-0123456789ab"));
        assert!(!UUID_V4_RE.is_match("not-a-uuid"));
    }

    #[test]
    fn parse_uuid_opt_treats_empty_as_none() {
        assert_eq!(parse_uuid_opt("department_id", Some("")).unwrap(), None);
        assert_eq!(parse_uuid_opt("department_id", None).unwrap(), None);
        assert!(parse_uuid_opt("department_id", Some("garbage")).is_err());
    }

    #[test]
    fn code_pattern_rejects_spaces() {
        assert!(CODE_RE.is_match("HR_OPS-1"));
        assert!(!CODE_RE.is_match("HR OPS"));
    }
}
