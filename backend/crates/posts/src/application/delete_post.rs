//! Delete Post Use Case

use std::sync::Arc;

use crate::domain::repository::PostRepository;
use crate::error::{PostsError, PostsResult};
use kernel::id::{PostId, UserId};

/// Delete post use case
pub struct DeletePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> DeletePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Delete an owned post
    ///
    /// Same check-then-filtered-mutation shape as update.
    pub async fn execute(&self, post_id: PostId, owner: UserId) -> PostsResult<()> {
        let post = self
            .repo
            .find_by_id(&post_id)
            .await?
            .ok_or(PostsError::PostNotFound)?;

        if !post.is_owned_by(&owner) {
            return Err(PostsError::NotPostOwner);
        }

        let deleted = self.repo.delete_owned(&post_id, &owner).await?;
        if !deleted {
            return Err(PostsError::PostNotFound);
        }

        tracing::info!(
            post_id = %post_id,
            user_id = %owner,
            "Post deleted"
        );

        Ok(())
    }
}
