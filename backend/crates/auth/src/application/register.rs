//! Register Use Case
//!
//! Creates a new admin credential.

use std::sync::Arc;

use kernel::email::Email;

use crate::application::config::AuthConfig;
use crate::domain::entity::credential::Credential;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::credential_password::{CredentialPassword, RawPassword};
use crate::error::{AuthError, AuthResult};

/// Register input
pub struct RegisterInput {
    pub email: String,
    pub password: String,
}

/// Register output
pub struct RegisterOutput {
    pub subject: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: CredentialRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: CredentialRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        // Validate subject
        let subject = Email::new(input.email)
            .map_err(|e| AuthError::Validation(e.message().to_string()))?;

        // Check if subject is taken
        if self.repo.exists_by_subject(&subject).await? {
            return Err(AuthError::SubjectTaken);
        }

        // Validate and hash password
        let raw_password = RawPassword::new(input.password)
            .map_err(|e| AuthError::PasswordValidation(e.message().to_string()))?;
        let password_hash = CredentialPassword::from_raw(&raw_password, self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let credential = Credential::new(subject, password_hash);
        self.repo.create(&credential).await?;

        tracing::info!(subject = %credential.subject, "Admin registered");

        Ok(RegisterOutput {
            subject: credential.subject.to_string(),
        })
    }
}
