/*
 * Responsibility
 * - /api/posts handlers: feed, single post, create/delete,
 *   like/unlike, comments
 * - likes and comments are read-modify-write on the post document
 */
use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{
    api::dto::posts::{CommentRequest, CreatePostRequest, PostResponse},
    api::extractors::Identity,
    error::AppError,
    repos::{
        post_repo,
        post_repo::{Comment, Like},
        user_repo,
    },
    state::AppState,
};

pub async fn create_post(
    State(state): State<AppState>,
    Identity(identity): Identity,
    Json(req): Json<CreatePostRequest>,
) -> Result<Json<PostResponse>, AppError> {
    req.validate().map_err(AppError::Validation)?;
    let user_id = identity.user_uuid()?;

    // Snapshot the author's name/avatar into the post.
    let user = user_repo::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let post = post_repo::create(&state.db, user_id, &req.text, &user.name, &user.avatar).await?;

    Ok(Json(post.into()))
}

pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    let rows = post_repo::list(&state.db).await?;
    let res = rows.into_iter().map(PostResponse::from).collect();

    Ok(Json(res))
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<PostResponse>, AppError> {
    let post = post_repo::get(&state.db, post_id)
        .await?
        .ok_or_else(|| AppError::not_found("Post not found!"))?;

    Ok(Json(post.into()))
}

pub async fn delete_post(
    State(state): State<AppState>,
    Identity(identity): Identity,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let user_id = identity.user_uuid()?;

    let post = post_repo::get(&state.db, post_id)
        .await?
        .ok_or_else(|| AppError::not_found("Post not found"))?;

    // Only the author can remove a post.
    if post.user_id != user_id {
        return Err(AppError::unauthorized("User not Authorized"));
    }

    post_repo::delete(&state.db, post_id).await?;

    Ok(Json(json!({ "msg": "Post removed" })))
}

pub async fn like_post(
    State(state): State<AppState>,
    Identity(identity): Identity,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Vec<Like>>, AppError> {
    let user_id = identity.user_uuid()?;

    let post = post_repo::get(&state.db, post_id)
        .await?
        .ok_or_else(|| AppError::bad_request("Post not found"))?;

    let mut likes = post.likes.0;
    if likes.iter().any(|like| like.user == user_id) {
        return Err(AppError::bad_request("Post already been liked"));
    }
    likes.insert(0, Like { user: user_id });

    let post = post_repo::set_likes(&state.db, post_id, &likes)
        .await?
        .ok_or_else(|| AppError::bad_request("Post not found"))?;

    Ok(Json(post.likes.0))
}

pub async fn unlike_post(
    State(state): State<AppState>,
    Identity(identity): Identity,
    Path(post_id): Path<Uuid>,
) -> Result<Json<Vec<Like>>, AppError> {
    let user_id = identity.user_uuid()?;

    let post = post_repo::get(&state.db, post_id)
        .await?
        .ok_or_else(|| AppError::bad_request("Post not found"))?;

    let mut likes = post.likes.0;
    if !likes.iter().any(|like| like.user == user_id) {
        return Err(AppError::bad_request("Post has not been liked"));
    }
    likes.retain(|like| like.user != user_id);

    let post = post_repo::set_likes(&state.db, post_id, &likes)
        .await?
        .ok_or_else(|| AppError::bad_request("Post not found"))?;

    Ok(Json(post.likes.0))
}

pub async fn add_comment(
    State(state): State<AppState>,
    Identity(identity): Identity,
    Path(post_id): Path<Uuid>,
    Json(req): Json<CommentRequest>,
) -> Result<Json<Vec<Comment>>, AppError> {
    req.validate().map_err(AppError::Validation)?;
    let user_id = identity.user_uuid()?;

    let user = user_repo::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let post = post_repo::get(&state.db, post_id)
        .await?
        .ok_or_else(|| AppError::not_found("Post not found"))?;

    let mut comments = post.comments.0;
    comments.insert(
        0,
        Comment {
            id: Uuid::new_v4(),
            user: user_id,
            text: req.text,
            name: user.name,
            avatar: user.avatar,
            date: chrono::Utc::now(),
        },
    );

    let post = post_repo::set_comments(&state.db, post_id, &comments)
        .await?
        .ok_or_else(|| AppError::not_found("Post not found"))?;

    Ok(Json(post.comments.0))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    Identity(identity): Identity,
    Path((post_id, comment_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<Vec<Comment>>, AppError> {
    let user_id = identity.user_uuid()?;

    let post = post_repo::get(&state.db, post_id)
        .await?
        .ok_or_else(|| AppError::not_found("Post not found"))?;

    let mut comments = post.comments.0;
    let Some(pos) = comments.iter().position(|c| c.id == comment_id) else {
        return Err(AppError::not_found("Comment does not exist"));
    };

    // Only the comment's author can remove it.
    if comments[pos].user != user_id {
        return Err(AppError::unauthorized("User not Authorized"));
    }
    comments.remove(pos);

    let post = post_repo::set_comments(&state.db, post_id, &comments)
        .await?
        .ok_or_else(|| AppError::not_found("Post not found"))?;

    Ok(Json(post.comments.0))
}
