//! List Posts Use Case

use std::sync::Arc;

use crate::domain::entities::PostSummary;
use crate::domain::repository::PostRepository;
use crate::error::PostsResult;

/// List posts use case
pub struct ListPostsUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> ListPostsUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// List all posts as summaries, newest first
    pub async fn execute(&self) -> PostsResult<Vec<PostSummary>> {
        self.repo.list_summaries().await
    }
}
