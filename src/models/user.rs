//! User identity and role types.
//!
//! Accounts are created in the identity provider; the database only keeps
//! the `{ uid, email, role }` mapping used for authorization. The role is
//! resolved per request and never cached.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{CODE_RE, PERSON_NAME_RE};

/// Application role gating access to administrative routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Admin,
    Hr,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Admin => "admin",
            Role::Hr => "hr",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "employee" => Ok(Role::Employee),
            "admin" => Ok(Role::Admin),
            "hr" => Ok(Role::Hr),
            _ => Err(()),
        }
    }
}

/// Registration payload forwarded to `sp_register`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUser {
    #[validate(
        length(min = 2, max = 50, message = "Name must be between 2 and 50 characters"),
        regex(path = *PERSON_NAME_RE, message = "Name can only contain letters and spaces")
    )]
    pub name: String,

    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,

    #[validate(
        length(min = 2, max = 50, message = "Username must be between 2 and 50 characters"),
        regex(path = *CODE_RE, message = "Username can only contain letters, numbers, and underscores")
    )]
    pub uid: String,

    #[serde(alias = "displayPicture")]
    #[validate(url(message = "Please provide a valid URL for the display picture"))]
    pub display_picture: Option<String>,

    pub role: Option<Role>,
}

/// Current-user view returned by `GET /auth/me`.
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub uid: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub role: Option<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Hr).unwrap(), "\"hr\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn role_round_trips_through_str() {
        for role in [Role::Employee, Role::Admin, Role::Hr] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
        assert!("manager".parse::<Role>().is_err());
    }

    #[test]
    fn register_user_validates_fields() {
        let body = RegisterUser {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            uid: "ada_l".to_string(),
            display_picture: Some("https://example.com/ada.png".to_string()),
            role: None,
        };
        assert!(body.validate().is_ok());

        let bad = RegisterUser {
            name: "A".to_string(),
            email: "nope".to_string(),
            uid: "a!".to_string(),
            display_picture: Some("not a url".to_string()),
            role: None,
        };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("uid"));
        assert!(fields.contains_key("display_picture"));
    }

    #[test]
    fn register_user_accepts_camel_case_alias() {
        let body: RegisterUser = serde_json::from_value(serde_json::json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "uid": "ada_l",
            "displayPicture": "https://example.com/ada.png"
        }))
        .unwrap();
        assert_eq!(
            body.display_picture.as_deref(),
            Some("https://example.com/ada.png")
        );
    }
}
