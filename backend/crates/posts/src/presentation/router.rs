//! Posts Router
//!
//! Reads are public; mutations sit behind the accounts auth middleware.

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

use accounts::domain::repository::UserRepository;
use accounts::middleware::{AuthMiddlewareState, require_auth};

use crate::domain::repository::PostRepository;
use crate::infra::postgres::PgPostsRepository;
use crate::presentation::handlers::{self, PostsAppState};

/// Create the Posts router with PostgreSQL repository
pub fn posts_router<U>(repo: PgPostsRepository, auth: AuthMiddlewareState<U>) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
{
    posts_router_generic(repo, auth)
}

/// Create a generic Posts router for any repository implementation
pub fn posts_router_generic<R, U>(repo: R, auth: AuthMiddlewareState<U>) -> Router
where
    R: PostRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
{
    let state = PostsAppState {
        repo: Arc::new(repo),
    };

    let public = Router::new()
        .route("/posts", get(handlers::list_posts::<R>))
        .route("/posts/{post_id}", get(handlers::get_post::<R>))
        .with_state(state.clone());

    let protected = Router::new()
        .route("/posts", post(handlers::create_post::<R>))
        .route(
            "/posts/{post_id}",
            put(handlers::update_post::<R>).delete(handlers::delete_post::<R>),
        )
        .route_layer(middleware::from_fn_with_state(auth, require_auth::<U>))
        .with_state(state);

    public.merge(protected)
}
