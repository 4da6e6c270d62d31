//! Create Post Use Case

use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::error::PostsResult;
use kernel::id::UserId;

/// Create post input
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
}

/// Create post use case
pub struct CreatePostUseCase<R>
where
    R: PostRepository,
{
    repo: Arc<R>,
}

impl<R> CreatePostUseCase<R>
where
    R: PostRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a post owned by the authenticated user
    pub async fn execute(&self, owner: UserId, input: CreatePostInput) -> PostsResult<Post> {
        let post = Post::new(owner, input.title, input.content);

        self.repo.create(&post).await?;

        tracing::info!(
            post_id = %post.post_id,
            user_id = %post.user_id,
            "Post created"
        );

        Ok(post)
    }
}
