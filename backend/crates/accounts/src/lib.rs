//! Accounts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and token signing
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User registration with a one-to-one profile row
//! - Email + password login issuing a bearer token in a cookie
//! - Auth middleware resolving the token to a user identity
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (per-record salt, optional pepper)
//! - Tokens are HMAC-SHA256 signed over the user id; the secret comes
//!   from configuration, never from source
//! - Login failures do not reveal whether the email exists

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AccountsConfig;
pub use error::{AccountsError, AccountsResult};
pub use infra::postgres::PgAccountsRepository;
pub use presentation::router::accounts_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgAccountsRepository as AccountsStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}

pub mod middleware {
    pub use crate::presentation::middleware::*;
}

#[cfg(test)]
mod tests;
