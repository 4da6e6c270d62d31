//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{Post, PostSummary};

// ============================================================================
// Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

/// Update post request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Full post response, content included
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            post_id: post.post_id.into_uuid(),
            user_id: post.user_id.into_uuid(),
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// List entry response; has no content field by design
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummaryResponse {
    pub post_id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PostSummary> for PostSummaryResponse {
    fn from(summary: PostSummary) -> Self {
        Self {
            post_id: summary.post_id.into_uuid(),
            title: summary.title,
            created_at: summary.created_at,
            updated_at: summary.updated_at,
        }
    }
}
