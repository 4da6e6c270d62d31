//! Accounts Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgAccountsRepository;
use crate::presentation::handlers::{self, AccountsAppState};

/// Create the Accounts router with PostgreSQL repository
pub fn accounts_router(repo: PgAccountsRepository, config: AccountsConfig) -> Router {
    accounts_router_generic(repo, config)
}

/// Create a generic Accounts router for any repository implementation
pub fn accounts_router_generic<R>(repo: R, config: AccountsConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AccountsAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/users", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}
