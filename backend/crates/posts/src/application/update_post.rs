//! Update Post Use Case

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::error::{PostsError, PostsResult};
use kernel::id::{PostId, UserId};

/// Update post input
pub struct UpdatePostInput {
    pub title: String,
    pub content: String,
}

/// Update post use case
pub struct UpdatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> UpdatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Update title/content of an owned post
    ///
    /// The read classifies the failure (404 vs 403); the mutation itself
    /// is filtered by id AND owner, so a concurrent delete degrades to
    /// NotFound rather than touching someone else's row.
    pub async fn execute(
        &self,
        post_id: PostId,
        owner: UserId,
        input: UpdatePostInput,
    ) -> PostsResult<Post> {
        let post = self
            .repo
            .find_by_id(&post_id)
            .await?
            .ok_or(PostsError::PostNotFound)?;

        if !post.is_owned_by(&owner) {
            return Err(PostsError::NotPostOwner);
        }

        let updated = self
            .repo
            .update_owned(&post_id, &owner, &input.title, &input.content)
            .await?
            .ok_or(PostsError::PostNotFound)?;

        tracing::info!(
            post_id = %updated.post_id,
            user_id = %owner,
            "Post updated"
        );

        Ok(updated)
    }
}
