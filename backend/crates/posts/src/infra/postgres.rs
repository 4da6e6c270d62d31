//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Post, PostSummary};
use crate::domain::repository::PostRepository;
use crate::error::PostsResult;
use kernel::id::{PostId, UserId};

/// PostgreSQL-backed posts repository
#[derive(Clone)]
pub struct PgPostsRepository {
    pool: PgPool,
}

impl PgPostsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Post Repository Implementation
// ============================================================================

impl PostRepository for PgPostsRepository {
    async fn create(&self, post: &Post) -> PostsResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                user_id,
                title,
                content,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(post.post_id.as_uuid())
        .bind(post.user_id.as_uuid())
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostsResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                post_id,
                user_id,
                title,
                content,
                created_at,
                updated_at
            FROM posts
            WHERE post_id = $1
            "#,
        )
        .bind(post_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_post()))
    }

    async fn list_summaries(&self) -> PostsResult<Vec<PostSummary>> {
        // Content deliberately not selected
        let rows = sqlx::query_as::<_, PostSummaryRow>(
            r#"
            SELECT
                post_id,
                title,
                created_at,
                updated_at
            FROM posts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_summary()).collect())
    }

    async fn update_owned(
        &self,
        post_id: &PostId,
        owner: &UserId,
        title: &str,
        content: &str,
    ) -> PostsResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            UPDATE posts SET
                title = $3,
                content = $4,
                updated_at = $5
            WHERE post_id = $1 AND user_id = $2
            RETURNING
                post_id,
                user_id,
                title,
                content,
                created_at,
                updated_at
            "#,
        )
        .bind(post_id.as_uuid())
        .bind(owner.as_uuid())
        .bind(title)
        .bind(content)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.into_post()))
    }

    async fn delete_owned(&self, post_id: &PostId, owner: &UserId) -> PostsResult<bool> {
        let deleted = sqlx::query("DELETE FROM posts WHERE post_id = $1 AND user_id = $2")
            .bind(post_id.as_uuid())
            .bind(owner.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: Uuid,
    user_id: Uuid,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> Post {
        Post {
            post_id: PostId::from_uuid(self.post_id),
            user_id: UserId::from_uuid(self.user_id),
            title: self.title,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PostSummaryRow {
    post_id: Uuid,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostSummaryRow {
    fn into_summary(self) -> PostSummary {
        PostSummary {
            post_id: PostId::from_uuid(self.post_id),
            title: self.title,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
