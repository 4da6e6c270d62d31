//! Get Post Use Case

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::error::{PostsError, PostsResult};
use kernel::id::PostId;

/// Get post use case
pub struct GetPostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> GetPostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch a single post including content
    ///
    /// A missing post is a NotFound error, not an empty success.
    pub async fn execute(&self, post_id: PostId) -> PostsResult<Post> {
        self.repo
            .find_by_id(&post_id)
            .await?
            .ok_or(PostsError::PostNotFound)
    }
}
