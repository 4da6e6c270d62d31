//! Post Entities

use chrono::{DateTime, Utc};
use kernel::id::{PostId, UserId};

/// Post entity
///
/// `user_id` is set at creation and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Post {
    /// Internal UUID identifier
    pub post_id: PostId,
    /// Owning user
    pub user_id: UserId,
    /// Title
    pub title: String,
    /// Body text
    pub content: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post owned by the given user
    pub fn new(user_id: UserId, title: String, content: String) -> Self {
        let now = Utc::now();

        Self {
            post_id: PostId::new(),
            user_id,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the given user owns this post
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.user_id == *user_id
    }

    /// Project into the list summary (content excluded)
    pub fn summarize(&self) -> PostSummary {
        PostSummary {
            post_id: self.post_id,
            title: self.title.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// List projection of a post
///
/// Deliberately has no content field; listings never expose the body.
#[derive(Debug, Clone)]
pub struct PostSummary {
    pub post_id: PostId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
