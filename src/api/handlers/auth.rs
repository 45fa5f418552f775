/*
 * Responsibility
 * - GET /api/auth (current user from a verified token)
 * - POST /api/auth (login -> token)
 * - login rejections use the same shape as field validation so the client
 *   renders them in the form; email and password failures are distinct
 */
use axum::{Json, extract::State};

use crate::{
    api::dto::auth::{LoginRequest, TokenResponse},
    api::dto::users::UserResponse,
    api::extractors::Identity,
    error::AppError,
    repos::user_repo,
    services::password,
    state::AppState,
};

pub async fn current_user(
    State(state): State<AppState>,
    Identity(identity): Identity,
) -> Result<Json<UserResponse>, AppError> {
    let user_id = identity.user_uuid()?;

    let user = user_repo::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(user.into()))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    req.validate().map_err(AppError::Validation)?;

    let user = user_repo::find_by_email(&state.db, &req.email)
        .await?
        .ok_or_else(|| AppError::Validation(vec!["Invalid Email"]))?;

    if !password::verify(&user.password_hash, &req.password) {
        return Err(AppError::Validation(vec!["Invalid Password"]));
    }

    let token = state.tokens.issue(&user.id.to_string())?;
    Ok(Json(TokenResponse { token }))
}
