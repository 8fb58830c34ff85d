//! Bearer Token Issuance and Verification
//!
//! Tokens are `"{user_id}.{expires_at}.{signature}"` where the signature is
//! base64url HMAC-SHA256 over the first two segments with the server-held
//! secret. Clients treat the whole string as opaque; only this module ever
//! looks inside.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::application::config::AuthConfig;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Claims carried by a verified token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// The authenticated user
    pub user_id: UserId,
    /// Expiry as unix seconds
    pub expires_at: i64,
}

/// Issue a signed bearer token for a user, expiring `token_ttl` from now
pub fn issue(user_id: &UserId, config: &AuthConfig) -> String {
    let expires_at = Utc::now().timestamp() + config.token_ttl_secs();
    issue_at(user_id, expires_at, config)
}

/// Issue a token with an explicit expiry (split out for expiry tests)
pub(crate) fn issue_at(user_id: &UserId, expires_at: i64, config: &AuthConfig) -> String {
    let payload = format!("{}.{}", user_id, expires_at);
    format!("{}.{}", payload, sign(&payload, config))
}

/// Verify a token's signature and expiry, returning its claims
pub fn verify(token: &str, config: &AuthConfig) -> AuthResult<TokenClaims> {
    let (payload, signature_b64) = token.rsplit_once('.').ok_or(AuthError::TokenInvalid)?;
    let (user_id_str, expires_str) = payload.split_once('.').ok_or(AuthError::TokenInvalid)?;

    let mut mac = HmacSha256::new_from_slice(&config.token_secret)
        .expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());

    let signature = URL_SAFE_NO_PAD
        .decode(signature_b64)
        .map_err(|_| AuthError::TokenInvalid)?;

    mac.verify_slice(&signature)
        .map_err(|_| AuthError::TokenInvalid)?;

    let user_id = user_id_str
        .parse::<uuid::Uuid>()
        .map(UserId::from_uuid)
        .map_err(|_| AuthError::TokenInvalid)?;

    let expires_at: i64 = expires_str.parse().map_err(|_| AuthError::TokenInvalid)?;

    if expires_at <= Utc::now().timestamp() {
        return Err(AuthError::TokenInvalid);
    }

    Ok(TokenClaims {
        user_id,
        expires_at,
    })
}

fn sign(payload: &str, config: &AuthConfig) -> String {
    let mut mac = HmacSha256::new_from_slice(&config.token_secret)
        .expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}
