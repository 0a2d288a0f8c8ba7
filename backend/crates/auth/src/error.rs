//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Security note: `UnknownSubject` and `InvalidCredentials` are distinct
//! variants so logs can tell them apart, but both surface the identical
//! generic message. Callers must never leak which subjects exist.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credential exists for the subject (surfaced generically)
    #[error("Unknown subject")]
    UnknownSubject,

    /// Wrong password (surfaced generically)
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Subject already registered
    #[error("Email already registered")]
    SubjectTaken,

    /// Input validation error (e.g. malformed email)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Password policy violation
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Token could not be parsed
    #[error("Malformed token")]
    TokenMalformed,

    /// Token signature does not match the signing key
    #[error("Token signature mismatch")]
    TokenSignatureMismatch,

    /// Token has expired
    #[error("Token expired")]
    TokenExpired,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::UnknownSubject | AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::SubjectTaken => StatusCode::CONFLICT,
            AuthError::Validation(_) | AuthError::PasswordValidation(_) => StatusCode::BAD_REQUEST,
            AuthError::TokenMalformed
            | AuthError::TokenSignatureMismatch
            | AuthError::TokenExpired => StatusCode::UNAUTHORIZED,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UnknownSubject
            | AuthError::InvalidCredentials
            | AuthError::TokenMalformed
            | AuthError::TokenSignatureMismatch
            | AuthError::TokenExpired => ErrorKind::Unauthorized,
            AuthError::SubjectTaken => ErrorKind::Conflict,
            AuthError::Validation(_) | AuthError::PasswordValidation(_) => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Credential failures collapse into one generic message here. Token
    /// failures likewise surface without detail on the cause.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::UnknownSubject | AuthError::InvalidCredentials => {
                AppError::unauthorized("Invalid email or password")
            }
            AuthError::TokenMalformed
            | AuthError::TokenSignatureMismatch
            | AuthError::TokenExpired => AppError::unauthorized("Unauthorized"),
            AuthError::SubjectTaken => AppError::conflict("Email already registered")
                .with_action("Use a different email address"),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::UnknownSubject => {
                tracing::warn!("Login attempt for unknown subject");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Validation(err.message().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_failures_surface_identically() {
        let unknown = AuthError::UnknownSubject.to_app_error();
        let wrong = AuthError::InvalidCredentials.to_app_error();
        assert_eq!(unknown.message(), wrong.message());
        assert_eq!(unknown.status_code(), 401);
        assert_eq!(wrong.status_code(), 401);
    }

    #[test]
    fn test_token_failures_surface_without_cause() {
        for err in [
            AuthError::TokenMalformed,
            AuthError::TokenSignatureMismatch,
            AuthError::TokenExpired,
        ] {
            let app = err.to_app_error();
            assert_eq!(app.status_code(), 401);
            assert_eq!(app.message(), "Unauthorized");
        }
    }

    #[test]
    fn test_subject_taken_is_conflict() {
        assert_eq!(AuthError::SubjectTaken.status_code(), StatusCode::CONFLICT);
    }
}
