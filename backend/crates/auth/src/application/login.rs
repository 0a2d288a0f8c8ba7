//! Login Use Case
//!
//! Authenticates a subject and issues a bearer token.

use std::sync::Arc;

use chrono::Utc;
use kernel::email::Email;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::credential_password::RawPassword;
use crate::error::{AuthError, AuthResult};

/// Login input
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Opaque bearer token
    pub token: String,
    /// Token expiry, unix millis
    pub expires_at_ms: i64,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: CredentialRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
}

impl<R> LoginUseCase<R>
where
    R: CredentialRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>, tokens: Arc<TokenService>) -> Self {
        Self {
            repo,
            config,
            tokens,
        }
    }

    /// Authenticate and issue a token
    ///
    /// `UnknownSubject` and `InvalidCredentials` are kept distinct for
    /// logging; both reach the client as the same generic 401.
    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // An address that fails validation cannot have been registered
        let subject = Email::new(input.email).map_err(|_| AuthError::UnknownSubject)?;

        let credential = self
            .repo
            .find_by_subject(&subject)
            .await?
            .ok_or(AuthError::UnknownSubject)?;

        let raw_password =
            RawPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        if !credential
            .password_hash
            .verify(&raw_password, self.config.pepper())
        {
            return Err(AuthError::InvalidCredentials);
        }

        let now = Utc::now();
        let token = self
            .tokens
            .issue_at(subject.as_str(), self.config.token_ttl, now);
        let expires_at_ms = now.timestamp_millis() + self.config.token_ttl_ms();

        tracing::info!(subject = %subject, "Admin signed in");

        Ok(LoginOutput {
            token,
            expires_at_ms,
        })
    }
}
