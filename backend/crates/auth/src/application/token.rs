//! Token Service
//!
//! Issues and validates stateless, signed, time-bounded bearer tokens.
//! Nothing is persisted server-side: a token is reconstructed and
//! verified from the bearer string on every request.
//!
//! Wire format: `base64url(subject|issued_at_ms|expires_at_ms).base64url(hmac)`
//! with HMAC-SHA256 over the raw payload bytes.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Claims carried by a validated token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject identity (email)
    pub subject: String,
    /// Issue time, unix millis
    pub issued_at_ms: i64,
    /// Expiry time, unix millis
    pub expires_at_ms: i64,
}

/// Stateless token service
///
/// Holds the process-wide signing secret, read-only after construction.
pub struct TokenService {
    secret: [u8; 32],
}

impl TokenService {
    pub fn new(secret: [u8; 32]) -> Self {
        Self { secret }
    }

    /// Issue a token for `subject`, valid for `ttl` from now
    pub fn issue(&self, subject: &str, ttl: std::time::Duration) -> String {
        self.issue_at(subject, ttl, Utc::now())
    }

    /// Issue a token with an explicit clock (test seam)
    pub fn issue_at(&self, subject: &str, ttl: std::time::Duration, now: DateTime<Utc>) -> String {
        let issued_at_ms = now.timestamp_millis();
        let expires_at_ms = issued_at_ms + ttl.as_millis() as i64;

        let payload = format!("{}|{}|{}", subject, issued_at_ms, expires_at_ms);

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload.as_bytes());
        let signature = mac.finalize().into_bytes();

        format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(payload.as_bytes()),
            URL_SAFE_NO_PAD.encode(signature)
        )
    }

    /// Validate a token against the signing secret and the current time
    pub fn validate(&self, token: &str) -> AuthResult<TokenClaims> {
        self.validate_at(token, Utc::now())
    }

    /// Validate with an explicit clock (test seam)
    ///
    /// The signature is checked before the payload is trusted, so a
    /// tampered token fails as a signature mismatch, not a parse error.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<TokenClaims> {
        let (payload_b64, signature_b64) = token
            .split_once('.')
            .ok_or(AuthError::TokenMalformed)?;
        if signature_b64.contains('.') {
            return Err(AuthError::TokenMalformed);
        }

        let payload = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| AuthError::TokenMalformed)?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| AuthError::TokenMalformed)?;

        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(&payload);
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::TokenSignatureMismatch)?;

        let payload = String::from_utf8(payload).map_err(|_| AuthError::TokenMalformed)?;

        let mut parts = payload.splitn(3, '|');
        let subject = parts.next().filter(|s| !s.is_empty());
        let issued_at_ms = parts.next().and_then(|s| s.parse::<i64>().ok());
        let expires_at_ms = parts.next().and_then(|s| s.parse::<i64>().ok());

        let (subject, issued_at_ms, expires_at_ms) = match (subject, issued_at_ms, expires_at_ms) {
            (Some(s), Some(i), Some(e)) => (s.to_string(), i, e),
            _ => return Err(AuthError::TokenMalformed),
        };

        if expires_at_ms <= issued_at_ms {
            return Err(AuthError::TokenMalformed);
        }

        if now.timestamp_millis() >= expires_at_ms {
            return Err(AuthError::TokenExpired);
        }

        Ok(TokenClaims {
            subject,
            issued_at_ms,
            expires_at_ms,
        })
    }
}
