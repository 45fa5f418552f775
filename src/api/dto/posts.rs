/*
 * Responsibility
 * - post/comment request and response DTOs
 * - responses expose the stored document as-is (author snapshot included)
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::post_repo::{Comment, Like, PostRow};

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub text: String,
}

impl CreatePostRequest {
    pub fn validate(&self) -> Result<(), Vec<&'static str>> {
        if self.text.trim().is_empty() {
            return Err(vec!["Text is required"]);
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct CommentRequest {
    #[serde(default)]
    pub text: String,
}

impl CommentRequest {
    pub fn validate(&self) -> Result<(), Vec<&'static str>> {
        if self.text.trim().is_empty() {
            return Err(vec!["Text is required"]);
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub user: Uuid,
    pub text: String,
    pub name: String,
    pub avatar: String,
    pub likes: Vec<Like>,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
}

impl From<PostRow> for PostResponse {
    fn from(row: PostRow) -> Self {
        Self {
            id: row.id,
            user: row.user_id,
            text: row.text,
            name: row.name,
            avatar: row.avatar,
            likes: row.likes.0,
            comments: row.comments.0,
            created_at: row.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_rejected() {
        let req = CreatePostRequest {
            text: "   ".to_string(),
        };
        assert_eq!(req.validate().unwrap_err(), vec!["Text is required"]);
    }

    #[test]
    fn missing_text_deserializes_to_empty() {
        let req: CommentRequest = serde_json::from_str("{}").unwrap();
        assert!(req.validate().is_err());
    }
}
