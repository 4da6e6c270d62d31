//! HTTP Handlers
//!
//! Protected handlers take the authenticated identity explicitly as
//! `Extension<CurrentUser>`, inserted by the accounts auth middleware.

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use accounts::middleware::CurrentUser;
use kernel::id::PostId;

use crate::application::{
    CreatePostInput, CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase,
    UpdatePostInput, UpdatePostUseCase,
};
use crate::domain::repository::PostRepository;
use crate::error::PostsResult;
use crate::presentation::dto::{
    CreatePostRequest, PostResponse, PostSummaryResponse, UpdatePostRequest,
};

/// Shared state for posts handlers
#[derive(Clone)]
pub struct PostsAppState<R>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Create
// ============================================================================

/// POST /api/posts
pub async fn create_post<R>(
    State(state): State<PostsAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Json(req): Json<CreatePostRequest>,
) -> PostsResult<impl IntoResponse>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreatePostUseCase::new(state.repo.clone());

    let post = use_case
        .execute(
            current_user.user_id,
            CreatePostInput {
                title: req.title,
                content: req.content,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(PostResponse::from(post))))
}

// ============================================================================
// List
// ============================================================================

/// GET /api/posts
pub async fn list_posts<R>(
    State(state): State<PostsAppState<R>>,
) -> PostsResult<Json<Vec<PostSummaryResponse>>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPostsUseCase::new(state.repo.clone());

    let summaries = use_case.execute().await?;

    Ok(Json(
        summaries.into_iter().map(PostSummaryResponse::from).collect(),
    ))
}

// ============================================================================
// Get by id
// ============================================================================

/// GET /api/posts/{post_id}
pub async fn get_post<R>(
    State(state): State<PostsAppState<R>>,
    Path(post_id): Path<Uuid>,
) -> PostsResult<Json<PostResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetPostUseCase::new(state.repo.clone());

    let post = use_case.execute(PostId::from_uuid(post_id)).await?;

    Ok(Json(PostResponse::from(post)))
}

// ============================================================================
// Update
// ============================================================================

/// PUT /api/posts/{post_id}
pub async fn update_post<R>(
    State(state): State<PostsAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(post_id): Path<Uuid>,
    Json(req): Json<UpdatePostRequest>,
) -> PostsResult<Json<PostResponse>>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdatePostUseCase::new(state.repo.clone());

    let post = use_case
        .execute(
            PostId::from_uuid(post_id),
            current_user.user_id,
            UpdatePostInput {
                title: req.title,
                content: req.content,
            },
        )
        .await?;

    Ok(Json(PostResponse::from(post)))
}

// ============================================================================
// Delete
// ============================================================================

/// DELETE /api/posts/{post_id}
pub async fn delete_post<R>(
    State(state): State<PostsAppState<R>>,
    Extension(current_user): Extension<CurrentUser>,
    Path(post_id): Path<Uuid>,
) -> PostsResult<StatusCode>
where
    R: PostRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeletePostUseCase::new(state.repo.clone());

    use_case
        .execute(PostId::from_uuid(post_id), current_user.user_id)
        .await?;

    Ok(StatusCode::OK)
}
