/*
 * Responsibility
 * - SQLx operations for the profiles table
 * - experience/education/social are jsonb documents; skills is text[]
 * - every read joins users so responses can show the owner's name/avatar
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationEntry {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    #[serde(rename = "fieldofstudy")]
    pub field_of_study: String,
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: String,
    pub github_username: Option<String>,
    pub skills: Vec<String>,
    pub social: Json<SocialLinks>,
    pub experience: Json<Vec<ExperienceEntry>>,
    pub education: Json<Vec<EducationEntry>>,
    pub updated_at: DateTime<Utc>,
    // joined from users
    pub user_name: String,
    pub user_avatar: String,
}

/// Scalar fields for create-or-update, taken from a validated request.
#[derive(Debug)]
pub struct NewProfile<'a> {
    pub company: Option<&'a str>,
    pub website: Option<&'a str>,
    pub location: Option<&'a str>,
    pub bio: Option<&'a str>,
    pub status: &'a str,
    pub github_username: Option<&'a str>,
    pub skills: &'a [String],
    pub social: &'a SocialLinks,
}

pub async fn list(db: &PgPool) -> Result<Vec<ProfileRow>, RepoError> {
    let rows = sqlx::query_as::<_, ProfileRow>(
        r#"
        SELECT p.id, p.user_id, p.company, p.website, p.location, p.bio, p.status,
               p.github_username, p.skills, p.social, p.experience, p.education, p.updated_at,
               u.name AS user_name, u.avatar AS user_avatar
        FROM profiles p
        JOIN users u ON u.id = p.user_id
        ORDER BY p.updated_at DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn find_by_user(db: &PgPool, user_id: Uuid) -> Result<Option<ProfileRow>, RepoError> {
    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        SELECT p.id, p.user_id, p.company, p.website, p.location, p.bio, p.status,
               p.github_username, p.skills, p.social, p.experience, p.education, p.updated_at,
               u.name AS user_name, u.avatar AS user_avatar
        FROM profiles p
        JOIN users u ON u.id = p.user_id
        WHERE p.user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn upsert(
    db: &PgPool,
    user_id: Uuid,
    profile: &NewProfile<'_>,
) -> Result<ProfileRow, RepoError> {
    // On update, omitted optional fields keep their stored value;
    // status/skills/social are replaced wholesale.
    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        WITH upserted AS (
            INSERT INTO profiles
                (user_id, company, website, location, bio, status, github_username, skills, social)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (user_id) DO UPDATE SET
                company = COALESCE(EXCLUDED.company, profiles.company),
                website = COALESCE(EXCLUDED.website, profiles.website),
                location = COALESCE(EXCLUDED.location, profiles.location),
                bio = COALESCE(EXCLUDED.bio, profiles.bio),
                github_username = COALESCE(EXCLUDED.github_username, profiles.github_username),
                status = EXCLUDED.status,
                skills = EXCLUDED.skills,
                social = EXCLUDED.social,
                updated_at = now()
            RETURNING *
        )
        SELECT p.id, p.user_id, p.company, p.website, p.location, p.bio, p.status,
               p.github_username, p.skills, p.social, p.experience, p.education, p.updated_at,
               u.name AS user_name, u.avatar AS user_avatar
        FROM upserted p
        JOIN users u ON u.id = p.user_id
        "#,
    )
    .bind(user_id)
    .bind(profile.company)
    .bind(profile.website)
    .bind(profile.location)
    .bind(profile.bio)
    .bind(profile.status)
    .bind(profile.github_username)
    .bind(profile.skills)
    .bind(Json(profile.social))
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn add_experience(
    db: &PgPool,
    user_id: Uuid,
    entry: &ExperienceEntry,
) -> Result<Option<ProfileRow>, RepoError> {
    // Prepend: newest entry first.
    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        WITH updated AS (
            UPDATE profiles
            SET experience = $2::jsonb || experience,
                updated_at = now()
            WHERE user_id = $1
            RETURNING *
        )
        SELECT p.id, p.user_id, p.company, p.website, p.location, p.bio, p.status,
               p.github_username, p.skills, p.social, p.experience, p.education, p.updated_at,
               u.name AS user_name, u.avatar AS user_avatar
        FROM updated p
        JOIN users u ON u.id = p.user_id
        "#,
    )
    .bind(user_id)
    .bind(Json([entry]))
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn remove_experience(
    db: &PgPool,
    user_id: Uuid,
    entry_id: Uuid,
) -> Result<Option<ProfileRow>, RepoError> {
    // Removing an id that is not present leaves the document unchanged.
    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        WITH updated AS (
            UPDATE profiles
            SET experience = COALESCE(
                    (SELECT jsonb_agg(entry ORDER BY ord)
                     FROM jsonb_array_elements(profiles.experience) WITH ORDINALITY AS t(entry, ord)
                     WHERE entry->>'id' <> $2::text),
                    '[]'::jsonb
                ),
                updated_at = now()
            WHERE user_id = $1
            RETURNING *
        )
        SELECT p.id, p.user_id, p.company, p.website, p.location, p.bio, p.status,
               p.github_username, p.skills, p.social, p.experience, p.education, p.updated_at,
               u.name AS user_name, u.avatar AS user_avatar
        FROM updated p
        JOIN users u ON u.id = p.user_id
        "#,
    )
    .bind(user_id)
    .bind(entry_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn add_education(
    db: &PgPool,
    user_id: Uuid,
    entry: &EducationEntry,
) -> Result<Option<ProfileRow>, RepoError> {
    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        WITH updated AS (
            UPDATE profiles
            SET education = $2::jsonb || education,
                updated_at = now()
            WHERE user_id = $1
            RETURNING *
        )
        SELECT p.id, p.user_id, p.company, p.website, p.location, p.bio, p.status,
               p.github_username, p.skills, p.social, p.experience, p.education, p.updated_at,
               u.name AS user_name, u.avatar AS user_avatar
        FROM updated p
        JOIN users u ON u.id = p.user_id
        "#,
    )
    .bind(user_id)
    .bind(Json([entry]))
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn remove_education(
    db: &PgPool,
    user_id: Uuid,
    entry_id: Uuid,
) -> Result<Option<ProfileRow>, RepoError> {
    let row = sqlx::query_as::<_, ProfileRow>(
        r#"
        WITH updated AS (
            UPDATE profiles
            SET education = COALESCE(
                    (SELECT jsonb_agg(entry ORDER BY ord)
                     FROM jsonb_array_elements(profiles.education) WITH ORDINALITY AS t(entry, ord)
                     WHERE entry->>'id' <> $2::text),
                    '[]'::jsonb
                ),
                updated_at = now()
            WHERE user_id = $1
            RETURNING *
        )
        SELECT p.id, p.user_id, p.company, p.website, p.location, p.bio, p.status,
               p.github_username, p.skills, p.social, p.experience, p.education, p.updated_at,
               u.name AS user_name, u.avatar AS user_avatar
        FROM updated p
        JOIN users u ON u.id = p.user_id
        "#,
    )
    .bind(user_id)
    .bind(entry_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete_by_user(db: &PgPool, user_id: Uuid) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM profiles
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
