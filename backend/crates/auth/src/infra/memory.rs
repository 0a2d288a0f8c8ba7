//! In-Memory Repository Implementation
//!
//! Backing store for tests and local development; plugs into the same
//! generic router seam as the PostgreSQL implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use kernel::email::Email;

use crate::domain::entity::credential::Credential;
use crate::domain::repository::CredentialRepository;
use crate::error::{AuthError, AuthResult};

/// In-memory credential repository
#[derive(Clone, Default)]
pub struct InMemoryCredentialRepository {
    inner: Arc<RwLock<HashMap<String, Credential>>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialRepository for InMemoryCredentialRepository {
    async fn create(&self, credential: &Credential) -> AuthResult<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| AuthError::Internal("credential store lock poisoned".to_string()))?;

        // Mirrors the unique constraint on the subject column
        if map.contains_key(credential.subject.as_str()) {
            return Err(AuthError::SubjectTaken);
        }

        map.insert(credential.subject.as_str().to_string(), credential.clone());
        Ok(())
    }

    async fn find_by_subject(&self, subject: &Email) -> AuthResult<Option<Credential>> {
        let map = self
            .inner
            .read()
            .map_err(|_| AuthError::Internal("credential store lock poisoned".to_string()))?;

        Ok(map.get(subject.as_str()).cloned())
    }

    async fn exists_by_subject(&self, subject: &Email) -> AuthResult<bool> {
        let map = self
            .inner
            .read()
            .map_err(|_| AuthError::Internal("credential store lock poisoned".to_string()))?;

        Ok(map.contains_key(subject.as_str()))
    }
}
