//! Login Use Case
//!
//! Authenticates a user and issues a signed bearer token.

use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::application::token::sign_user_token;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AccountsError, AccountsResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Signed token for the auth cookie
    pub token: String,
    pub user_id: kernel::id::UserId,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AccountsConfig>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountsConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: LoginInput) -> AccountsResult<LoginOutput> {
        // Unknown email, bad email syntax, and wrong password all
        // collapse into the same error.
        let email = Email::new(input.email).map_err(|_| AccountsError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AccountsError::InvalidCredentials)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AccountsError::InvalidCredentials)?;

        if !user.password_hash.verify(&raw_password, self.config.pepper()) {
            return Err(AccountsError::InvalidCredentials);
        }

        let token = sign_user_token(&self.config.token_secret, &user.user_id);

        tracing::info!(
            user_id = %user.user_id,
            "User logged in"
        );

        Ok(LoginOutput {
            token,
            user_id: user.user_id,
        })
    }
}
