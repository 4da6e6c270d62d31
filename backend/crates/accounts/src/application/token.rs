//! Bearer Token Signing and Verification
//!
//! Tokens embed the user identifier and are HMAC-SHA256 signed with the
//! configured secret: `<user_id>.<base64url signature>`. There is no
//! expiry; a token stays valid as long as the user exists.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use kernel::id::UserId;
use sha2::Sha256;
use uuid::Uuid;

/// Sign a token for the given user
pub fn sign_user_token(secret: &[u8; 32], user_id: &UserId) -> String {
    let user_id_str = user_id.to_string();

    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(user_id_str.as_bytes());
    let signature = mac.finalize().into_bytes();

    format!("{}.{}", user_id_str, URL_SAFE_NO_PAD.encode(signature))
}

/// Verify a token and extract the embedded user id
///
/// Returns `None` on any structural or signature failure; callers map
/// that to a single unauthenticated error.
pub fn verify_user_token(secret: &[u8; 32], token: &str) -> Option<UserId> {
    let (user_id_str, signature_b64) = token.split_once('.')?;
    if user_id_str.is_empty() || signature_b64.contains('.') {
        return None;
    }

    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret).expect("HMAC can take key of any size");
    mac.update(user_id_str.as_bytes());

    let signature = URL_SAFE_NO_PAD.decode(signature_b64).ok()?;
    mac.verify_slice(&signature).ok()?;

    let uuid: Uuid = user_id_str.parse().ok()?;
    Some(UserId::from_uuid(uuid))
}
