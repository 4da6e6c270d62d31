//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.
//! On success the resolved identity is inserted into request extensions
//! as [`CurrentUser`], so handlers receive it explicitly via
//! `Extension<CurrentUser>` in their signatures.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::application::VerifyTokenUseCase;
use crate::application::config::AccountsConfig;
use crate::domain::repository::UserRepository;
use crate::error::AccountsError;
use kernel::id::UserId;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccountsConfig>,
}

/// Authenticated identity attached to the request
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid bearer token in the auth cookie
///
/// Rejects with 401 when the cookie is absent, lacks the `Bearer ` prefix,
/// fails signature verification, or names a user that no longer exists.
pub async fn require_auth<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let raw_cookie = platform::cookie::extract_cookie(req.headers(), &state.config.cookie_name);

    let token = match raw_cookie.as_deref().and_then(strip_bearer) {
        Some(token) => token.to_string(),
        None => return Err(AccountsError::TokenInvalid.into_response()),
    };

    let use_case = VerifyTokenUseCase::new(state.repo.clone(), state.config.clone());

    match use_case.execute(&token).await {
        Ok(user_id) => {
            req.extensions_mut().insert(CurrentUser { user_id });
            Ok(next.run(req).await)
        }
        Err(e) => Err(e.into_response()),
    }
}

/// Cookie values are `Bearer <token>`; anything else is malformed
fn strip_bearer(value: &str) -> Option<&str> {
    value.strip_prefix("Bearer ")
}
