//! Employee Error Types
//!
//! This module provides employee-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Employee-specific result type alias
pub type EmployeeResult<T> = Result<T, EmployeeError>;

/// Employee-specific error variants
#[derive(Debug, Error)]
pub enum EmployeeError {
    /// Employee or attachment not found
    #[error("Employee not found")]
    NotFound,

    /// Email already used by another employee
    #[error("Email ID already exists")]
    EmailTaken,

    /// Input validation error
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Required multipart field missing
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Attachment write failed; the enclosing mutation must abort
    #[error("Failed to write attachment: {0}")]
    StorageWrite(std::io::Error),

    /// Attachment read failed (not absence, a real I/O error)
    #[error("Failed to read attachment: {0}")]
    StorageRead(std::io::Error),

    /// Attachment delete failed; callers log this and continue
    #[error("Failed to delete attachment: {0}")]
    StorageDelete(std::io::Error),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EmployeeError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            EmployeeError::NotFound => StatusCode::NOT_FOUND,
            EmployeeError::EmailTaken => StatusCode::CONFLICT,
            EmployeeError::Validation(_) | EmployeeError::MissingField(_) => {
                StatusCode::BAD_REQUEST
            }
            EmployeeError::StorageWrite(_)
            | EmployeeError::StorageRead(_)
            | EmployeeError::StorageDelete(_)
            | EmployeeError::Database(_)
            | EmployeeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            EmployeeError::NotFound => ErrorKind::NotFound,
            EmployeeError::EmailTaken => ErrorKind::Conflict,
            EmployeeError::Validation(_) | EmployeeError::MissingField(_) => ErrorKind::BadRequest,
            EmployeeError::StorageWrite(_)
            | EmployeeError::StorageRead(_)
            | EmployeeError::StorageDelete(_)
            | EmployeeError::Database(_)
            | EmployeeError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            EmployeeError::EmailTaken => AppError::conflict("Email ID already exists")
                .with_action("Use a different email address"),
            EmployeeError::StorageWrite(_) | EmployeeError::StorageRead(_) => {
                AppError::internal("Attachment storage error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            EmployeeError::Database(e) => {
                tracing::error!(error = %e, "Employee database error");
            }
            EmployeeError::StorageWrite(e) => {
                tracing::error!(error = %e, "Attachment write failed");
            }
            EmployeeError::StorageRead(e) => {
                tracing::error!(error = %e, "Attachment read failed");
            }
            EmployeeError::Internal(msg) => {
                tracing::error!(message = %msg, "Employee internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Employee error");
            }
        }
    }
}

impl IntoResponse for EmployeeError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(EmployeeError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(EmployeeError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            EmployeeError::MissingField("firstName".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            EmployeeError::StorageWrite(std::io::Error::other("disk full")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_storage_errors_do_not_leak_io_detail() {
        let err = EmployeeError::StorageWrite(std::io::Error::other("/var/data/secret"));
        let app = err.to_app_error();
        assert!(!app.message().contains("/var/data"));
    }
}
