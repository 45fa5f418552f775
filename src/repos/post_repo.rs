/*
 * Responsibility
 * - posts CRUD
 * - likes/comments live inside the post document (jsonb); callers read the
 *   current arrays, modify them, and write the whole array back
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Like {
    pub user: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    // author snapshot, taken when the comment is written
    pub name: String,
    pub avatar: String,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct PostRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    // author snapshot, kept even after the account is gone
    pub name: String,
    pub avatar: String,
    pub likes: Json<Vec<Like>>,
    pub comments: Json<Vec<Comment>>,
    pub created_at: DateTime<Utc>,
}

pub async fn list(db: &PgPool) -> Result<Vec<PostRow>, RepoError> {
    let rows = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, user_id, text, name, avatar, likes, comments, created_at
        FROM posts
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn create(
    db: &PgPool,
    user_id: Uuid,
    text: &str,
    name: &str,
    avatar: &str,
) -> Result<PostRow, RepoError> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        INSERT INTO posts (user_id, text, name, avatar)
        VALUES ($1, $2, $3, $4)
        RETURNING id, user_id, text, name, avatar, likes, comments, created_at
        "#,
    )
    .bind(user_id)
    .bind(text)
    .bind(name)
    .bind(avatar)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn get(db: &PgPool, post_id: Uuid) -> Result<Option<PostRow>, RepoError> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        SELECT id, user_id, text, name, avatar, likes, comments, created_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn set_likes(
    db: &PgPool,
    post_id: Uuid,
    likes: &[Like],
) -> Result<Option<PostRow>, RepoError> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        UPDATE posts
        SET likes = $2
        WHERE id = $1
        RETURNING id, user_id, text, name, avatar, likes, comments, created_at
        "#,
    )
    .bind(post_id)
    .bind(Json(likes))
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn set_comments(
    db: &PgPool,
    post_id: Uuid,
    comments: &[Comment],
) -> Result<Option<PostRow>, RepoError> {
    let row = sqlx::query_as::<_, PostRow>(
        r#"
        UPDATE posts
        SET comments = $2
        WHERE id = $1
        RETURNING id, user_id, text, name, avatar, likes, comments, created_at
        "#,
    )
    .bind(post_id)
    .bind(Json(comments))
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, post_id: Uuid) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
