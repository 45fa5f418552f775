/*
 * Responsibility
 * - /api/profile handlers: own profile, upsert, public listing/lookup,
 *   experience/education entries, account deletion, GitHub repo proxy
 */
use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{
    api::dto::profile::{
        EducationRequest, ExperienceRequest, ProfileResponse, UpsertProfileRequest, non_empty,
    },
    api::extractors::Identity,
    error::AppError,
    repos::{profile_repo, profile_repo::NewProfile, user_repo},
    state::AppState,
};

fn no_profile() -> AppError {
    AppError::bad_request("There is no profile for this user")
}

pub async fn my_profile(
    State(state): State<AppState>,
    Identity(identity): Identity,
) -> Result<Json<ProfileResponse>, AppError> {
    let user_id = identity.user_uuid()?;

    let profile = profile_repo::find_by_user(&state.db, user_id)
        .await?
        .ok_or_else(no_profile)?;

    Ok(Json(profile.into()))
}

pub async fn upsert_profile(
    State(state): State<AppState>,
    Identity(identity): Identity,
    Json(req): Json<UpsertProfileRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    req.validate().map_err(AppError::Validation)?;
    let user_id = identity.user_uuid()?;

    let skills = req.skills_list();
    let social = req.social_links();

    let profile = profile_repo::upsert(
        &state.db,
        user_id,
        &NewProfile {
            company: non_empty(&req.company),
            website: non_empty(&req.website),
            location: non_empty(&req.location),
            bio: non_empty(&req.bio),
            status: &req.status,
            github_username: non_empty(&req.github_username),
            skills: &skills,
            social: &social,
        },
    )
    .await?;

    Ok(Json(profile.into()))
}

pub async fn list_profiles(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProfileResponse>>, AppError> {
    let rows = profile_repo::list(&state.db).await?;
    let res = rows.into_iter().map(ProfileResponse::from).collect();

    Ok(Json(res))
}

pub async fn profile_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = profile_repo::find_by_user(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::bad_request("Profile not found"))?;

    Ok(Json(profile.into()))
}

/// Removes the profile, the account, and nothing else: posts stay in the
/// feed under the author snapshot they were created with.
pub async fn delete_account(
    State(state): State<AppState>,
    Identity(identity): Identity,
) -> Result<Json<Value>, AppError> {
    let user_id = identity.user_uuid()?;

    profile_repo::delete_by_user(&state.db, user_id).await?;
    user_repo::delete(&state.db, user_id).await?;

    Ok(Json(json!({ "msg": "User Removed" })))
}

pub async fn add_experience(
    State(state): State<AppState>,
    Identity(identity): Identity,
    Json(req): Json<ExperienceRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    req.validate().map_err(AppError::Validation)?;
    let user_id = identity.user_uuid()?;

    let profile = profile_repo::add_experience(&state.db, user_id, &req.into_entry())
        .await?
        .ok_or_else(no_profile)?;

    Ok(Json(profile.into()))
}

pub async fn delete_experience(
    State(state): State<AppState>,
    Identity(identity): Identity,
    Path(entry_id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, AppError> {
    let user_id = identity.user_uuid()?;

    let profile = profile_repo::remove_experience(&state.db, user_id, entry_id)
        .await?
        .ok_or_else(no_profile)?;

    Ok(Json(profile.into()))
}

pub async fn add_education(
    State(state): State<AppState>,
    Identity(identity): Identity,
    Json(req): Json<EducationRequest>,
) -> Result<Json<ProfileResponse>, AppError> {
    req.validate().map_err(AppError::Validation)?;
    let user_id = identity.user_uuid()?;

    let profile = profile_repo::add_education(&state.db, user_id, &req.into_entry())
        .await?
        .ok_or_else(no_profile)?;

    Ok(Json(profile.into()))
}

pub async fn delete_education(
    State(state): State<AppState>,
    Identity(identity): Identity,
    Path(entry_id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, AppError> {
    let user_id = identity.user_uuid()?;

    let profile = profile_repo::remove_education(&state.db, user_id, entry_id)
        .await?
        .ok_or_else(no_profile)?;

    Ok(Json(profile.into()))
}

pub async fn github_repos(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Value>, AppError> {
    match state.github.user_repos(&username).await {
        Ok(Some(repos)) => Ok(Json(repos)),
        Ok(None) => Err(AppError::not_found("No Github profile found")),
        Err(err) => {
            tracing::warn!(error = %err, "github repo lookup failed");
            Err(AppError::Internal)
        }
    }
}
