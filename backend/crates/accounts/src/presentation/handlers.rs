//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

use platform::cookie::CookieConfig;

use crate::application::config::AccountsConfig;
use crate::application::{
    LoginInput, LoginUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AccountsResult;
use crate::presentation::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// Shared state for accounts handlers
#[derive(Clone)]
pub struct AccountsAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccountsConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/users
pub async fn register<R>(
    State(state): State<AccountsAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AccountsResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        email: req.email,
        password: req.password,
        name: req.name,
        age: req.age,
        gender: req.gender,
        profile_image: req.profile_image,
    };

    use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Account created".to_string(),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<R>(
    State(state): State<AccountsAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AccountsResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let input = LoginInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    // Success - set the bearer cookie
    let cookie = build_auth_cookie(&state.config, &output.token);

    Ok((
        StatusCode::OK,
        [(header::SET_COOKIE, cookie)],
        Json(LoginResponse {
            message: "Login successful".to_string(),
        }),
    ))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build the Set-Cookie value `authorization=Bearer <token>; ...`
fn build_auth_cookie(config: &AccountsConfig, token: &str) -> String {
    let cookie = CookieConfig {
        name: config.cookie_name.clone(),
        secure: config.cookie_secure,
        http_only: true,
        same_site: config.cookie_same_site,
        path: "/".to_string(),
        max_age_secs: None,
    };

    cookie.build_set_cookie(&format!("Bearer {}", token))
}
