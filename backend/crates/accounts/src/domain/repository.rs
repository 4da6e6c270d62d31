//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{user::User, user_info::UserInfo};
use crate::domain::value_object::email::Email;
use crate::error::AccountsResult;
use kernel::id::UserId;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Create a user together with its profile row
    ///
    /// Both rows are written in a single transaction; failure of the
    /// second write must roll back the first.
    async fn create_with_info(&self, user: &User, info: &UserInfo) -> AccountsResult<()>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AccountsResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AccountsResult<Option<User>>;

    /// Check if an email is already registered
    async fn exists_by_email(&self, email: &Email) -> AccountsResult<bool>;
}
