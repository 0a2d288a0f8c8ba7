//! Application Configuration
//!
//! Configuration for the Auth application layer. The signing secret is
//! built once at startup and threaded through constructors; nothing in
//! this crate reads ambient global state.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for HMAC token signing (32 bytes)
    pub token_secret: [u8; 32],
    /// Token lifetime
    pub token_ttl: Duration,
    /// Request paths that bypass the authorization gate
    pub allow_list: Vec<String>,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: [0u8; 32],
            token_ttl: Duration::from_secs(12 * 3600), // 12 hours
            allow_list: vec![
                "/api/v1/auth/login".to_string(),
                "/api/v1/auth/register".to_string(),
            ],
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random signing secret (for development)
    pub fn with_random_secret() -> Self {
        Self {
            token_secret: platform::crypto::random_secret(),
            ..Default::default()
        }
    }

    /// Get token TTL in milliseconds
    pub fn token_ttl_ms(&self) -> i64 {
        self.token_ttl.as_millis() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allow_list_covers_auth_endpoints() {
        let config = AuthConfig::default();
        assert!(config.allow_list.iter().any(|p| p.ends_with("/login")));
        assert!(config.allow_list.iter().any(|p| p.ends_with("/register")));
    }

    #[test]
    fn test_random_secret_is_not_zero() {
        let config = AuthConfig::with_random_secret();
        assert!(config.token_secret.iter().any(|&b| b != 0));
    }
}
