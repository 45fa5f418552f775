/*
 * Responsibility
 * - login request/response DTOs
 * - validate() mirrors the client-side form checks; messages are shown verbatim
 */
use serde::{Deserialize, Serialize};

use crate::api::dto::looks_like_email;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    // Missing fields deserialize to "" so validate() can report them
    // instead of the request dying inside the JSON extractor.
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), Vec<&'static str>> {
        let mut errors = Vec::new();

        if !looks_like_email(&self.email) {
            errors.push("Please provide a valid email");
        }
        if self.password.is_empty() {
            errors.push("Password is Required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_reports_both_fields() {
        let req = LoginRequest {
            email: String::new(),
            password: String::new(),
        };

        let errors = req.validate().unwrap_err();
        assert_eq!(errors, vec!["Please provide a valid email", "Password is Required"]);
    }

    #[test]
    fn valid_credentials_pass() {
        let req = LoginRequest {
            email: "john@example.com".to_string(),
            password: "hunter42".to_string(),
        };

        assert!(req.validate().is_ok());
    }
}
