//! User Info Entity
//!
//! One-to-one profile row created together with the User at registration.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::gender::Gender;

/// User profile entity
#[derive(Debug, Clone)]
pub struct UserInfo {
    /// Reference to the owning User (also the primary key)
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// Age as given at registration
    pub age: i32,
    /// Gender, always stored uppercase
    pub gender: Gender,
    /// Profile image reference
    pub profile_image: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl UserInfo {
    /// Create a new profile for a user
    pub fn new(
        user_id: UserId,
        name: String,
        age: i32,
        gender: Gender,
        profile_image: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            user_id,
            name,
            age,
            gender,
            profile_image,
            created_at: now,
            updated_at: now,
        }
    }
}
