/*
 * Responsibility
 * - POST /api/users (registration)
 * - validate -> uniqueness check -> gravatar -> hash -> insert -> token
 */
use axum::{Json, extract::State};

use crate::{
    api::dto::auth::TokenResponse,
    api::dto::users::RegisterRequest,
    error::AppError,
    repos::user_repo,
    services::{gravatar, password},
    state::AppState,
};

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    req.validate().map_err(AppError::Validation)?;

    if user_repo::find_by_email(&state.db, &req.email).await?.is_some() {
        return Err(AppError::Validation(vec!["User already exists"]));
    }

    let avatar = gravatar::avatar_url(&req.email);
    let password_hash = password::hash(&req.password)?;

    let user = user_repo::create(&state.db, &req.name, &req.email, &password_hash, &avatar).await?;

    let token = state.tokens.issue(&user.id.to_string())?;
    Ok(Json(TokenResponse { token }))
}
