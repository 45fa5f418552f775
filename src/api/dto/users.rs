/*
 * Responsibility
 * - registration request / user response DTOs
 * - the response never includes the password hash
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::dto::looks_like_email;
use crate::repos::user_repo::UserRow;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), Vec<&'static str>> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push("Name is required");
        }
        if !looks_like_email(&self.email) {
            errors.push("Please include a valid email");
        }
        if self.password.len() < 6 {
            errors.push("Please provide a password with 6 or more characters");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            avatar: row.avatar,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RegisterRequest {
        RegisterRequest {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "hunter42".to_string(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn empty_body_reports_every_field() {
        let req = RegisterRequest {
            name: String::new(),
            email: String::new(),
            password: String::new(),
        };

        let errors = req.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Name is required",
                "Please include a valid email",
                "Please provide a password with 6 or more characters",
            ]
        );
    }

    #[test]
    fn short_password_is_rejected() {
        let req = RegisterRequest {
            password: "12345".to_string(),
            ..valid()
        };

        let errors = req.validate().unwrap_err();
        assert_eq!(errors, vec!["Please provide a password with 6 or more characters"]);
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let req = RegisterRequest {
            name: "   ".to_string(),
            ..valid()
        };

        assert!(req.validate().is_err());
    }
}
