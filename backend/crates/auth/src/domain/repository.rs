//! Repository Traits
//!
//! Interfaces for credential persistence. Implementations are in the
//! infrastructure layer.

use kernel::email::Email;

use crate::domain::entity::credential::Credential;
use crate::error::AuthResult;

/// Credential repository trait
#[trait_variant::make(CredentialRepository: Send)]
pub trait LocalCredentialRepository {
    /// Create a new credential
    async fn create(&self, credential: &Credential) -> AuthResult<()>;

    /// Find a credential by subject
    async fn find_by_subject(&self, subject: &Email) -> AuthResult<Option<Credential>>;

    /// Check if a subject is already registered
    async fn exists_by_subject(&self, subject: &Email) -> AuthResult<bool>;
}
