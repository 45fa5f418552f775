/*
 * Responsibility
 * - App-wide AppError definition
 * - IntoResponse mapping (HTTP status / JSON error body)
 * - Uniform conversion from repo / auth errors
 *
 * Body shapes match what the React client expects:
 * - single message:    { "msg": "..." }
 * - field validation:  { "errors": [ { "msg": "..." }, ... ] }
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;
use crate::services::auth::AuthError;

#[derive(Debug, Serialize)]
struct MsgBody {
    msg: String,
}

#[derive(Debug, Serialize)]
struct FieldErrorsBody {
    errors: Vec<FieldError>,
}

#[derive(Debug, Serialize)]
struct FieldError {
    msg: &'static str,
}

#[derive(Debug, Error)]
pub enum AppError {
    // 400 with an { errors: [...] } body, one entry per failed field check
    #[error("validation failed")]
    Validation(Vec<&'static str>),

    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),

    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::Validation(errors) => {
                let body = FieldErrorsBody {
                    errors: errors.into_iter().map(|msg| FieldError { msg }).collect(),
                };
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Server Error".to_string()),
        };

        (status, Json(MsgBody { msg })).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        tracing::error!(error = ?e, "repository error");
        match e {
            RepoError::Db(_) => AppError::Internal,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MissingToken => AppError::unauthorized("No token, authorization denied"),
            AuthError::InvalidToken(_) => AppError::unauthorized("Token is not valid"),
        }
    }
}
