//! User Entity
//!
//! Core account entity: login identity and credential.
//! Profile data lives in the UserInfo entity.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_password::UserPassword};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Login email (unique, stored lowercase)
    pub email: Email,
    /// Argon2id password hash
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user
    pub fn new(email: Email, password_hash: UserPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
