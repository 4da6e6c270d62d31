//! Register Use Case
//!
//! Creates a new user account together with its profile row.

use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::domain::entity::{user::User, user_info::UserInfo};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    gender::Gender,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AccountsError, AccountsResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub profile_image: Option<String>,
}

/// Register output
pub struct RegisterOutput {
    pub user_id: kernel::id::UserId,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AccountsConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountsConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AccountsResult<RegisterOutput> {
        // Validate email
        let email = Email::new(input.email)
            .map_err(|e| AccountsError::Validation(e.message().to_string()))?;

        // Check if email is taken. The unique constraint still backstops
        // a concurrent registration with the same email.
        if self.repo.exists_by_email(&email).await? {
            return Err(AccountsError::EmailTaken);
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AccountsError::Validation(e.message().to_string()))?;
        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AccountsError::Internal(e.message().to_string()))?;

        // Gender is uppercased regardless of input case
        let gender = Gender::new(input.gender)
            .map_err(|e| AccountsError::Validation(e.message().to_string()))?;

        // Create user and its profile
        let user = User::new(email, password_hash);
        let info = UserInfo::new(
            user.user_id,
            input.name,
            input.age,
            gender,
            input.profile_image,
        );

        // One transaction: no orphaned user if the profile insert fails
        self.repo.create_with_info(&user, &info).await?;

        tracing::info!(
            user_id = %user.user_id,
            "User registered"
        );

        Ok(RegisterOutput {
            user_id: user.user_id,
        })
    }
}
