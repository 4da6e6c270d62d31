//! Verify Token Use Case
//!
//! Resolves a bearer token to a user identity.

use std::sync::Arc;

use crate::application::config::AccountsConfig;
use crate::application::token::verify_user_token;
use crate::domain::repository::UserRepository;
use crate::error::{AccountsError, AccountsResult};
use kernel::id::UserId;

/// Verify token use case
pub struct VerifyTokenUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AccountsConfig>,
}

impl<R> VerifyTokenUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountsConfig>) -> Self {
        Self { repo, config }
    }

    /// Verify the token signature and resolve the embedded user id
    ///
    /// Tokens have no expiry, so the account's existence is re-checked:
    /// a token for a deleted user is just an invalid token.
    pub async fn execute(&self, token: &str) -> AccountsResult<UserId> {
        let user_id = verify_user_token(&self.config.token_secret, token)
            .ok_or(AccountsError::TokenInvalid)?;

        let user = self
            .repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AccountsError::TokenInvalid)?;

        Ok(user.user_id)
    }
}
