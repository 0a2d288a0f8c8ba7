//! Credential Entity
//!
//! A subject identity paired with its hashed secret. The plaintext secret
//! never appears here; comparison always goes through the hasher's verify.

use chrono::{DateTime, Utc};
use kernel::email::Email;

use crate::domain::value_object::credential_password::CredentialPassword;

/// Credential entity
#[derive(Debug, Clone)]
pub struct Credential {
    /// Subject identity (unique email)
    pub subject: Email,
    /// Argon2id hash in PHC format
    pub password_hash: CredentialPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Credential {
    /// Create a new credential
    pub fn new(subject: Email, password_hash: CredentialPassword) -> Self {
        let now = Utc::now();
        Self {
            subject,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}
