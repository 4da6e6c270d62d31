//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{Post, PostSummary};
use crate::error::PostsResult;
use kernel::id::{PostId, UserId};

/// Post repository trait
#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    /// Create a new post
    async fn create(&self, post: &Post) -> PostsResult<()>;

    /// Find a post by ID, content included
    async fn find_by_id(&self, post_id: &PostId) -> PostsResult<Option<Post>>;

    /// List all posts as summaries, newest first
    async fn list_summaries(&self) -> PostsResult<Vec<PostSummary>>;

    /// Update title/content, filtered by post id AND owner id
    ///
    /// Returns the updated post, or `None` when no row matched both.
    async fn update_owned(
        &self,
        post_id: &PostId,
        owner: &UserId,
        title: &str,
        content: &str,
    ) -> PostsResult<Option<Post>>;

    /// Delete, filtered by post id AND owner id
    ///
    /// Returns whether a row was removed.
    async fn delete_owned(&self, post_id: &PostId, owner: &UserId) -> PostsResult<bool>;
}
