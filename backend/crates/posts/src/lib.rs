//! Posts Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity, summary projection, repository trait
//! - `application/` - One use case per operation
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Ownership Model
//! - Every post belongs to exactly one user; ownership never changes
//! - Reads are public; create/update/delete require the auth middleware
//! - Mutations are filtered by post id AND owner id, so the prior
//!   read-and-compare only classifies the error (404 vs 403)

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{PostsError, PostsResult};
pub use infra::postgres::PgPostsRepository;
pub use presentation::router::posts_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entities::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgPostsRepository as PostsStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
