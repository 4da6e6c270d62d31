//! Application Configuration
//!
//! Configuration for the Accounts application layer.

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Accounts application configuration
#[derive(Debug, Clone)]
pub struct AccountsConfig {
    /// Auth cookie name
    pub cookie_name: String,
    /// Token secret key for HMAC signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            cookie_name: "authorization".to_string(),
            token_secret: [0u8; 32],
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
            password_pepper: None,
        }
    }
}

impl AccountsConfig {
    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            token_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
