//! API DTOs (Data Transfer Objects)
//!
//! Employee mutations arrive as multipart/form-data carrying structured
//! fields plus an optional binary `file` part; `EmployeeForm` does the
//! extraction.

use axum::extract::Multipart;
use axum::extract::multipart::Field;
use serde::Serialize;

use crate::application::Upload;
use crate::domain::entity::employee::Employee;
use crate::error::{EmployeeError, EmployeeResult};

// ============================================================================
// Responses
// ============================================================================

/// Employee response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email_id: String,
    pub department: String,
    /// Stored name of the current attachment, if any
    pub image_name: Option<String>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.employee_id.to_string(),
            first_name: employee.first_name,
            last_name: employee.last_name,
            email_id: employee.email.into_db(),
            department: employee.department,
            image_name: employee.image_name.map(|n| n.into_db()),
        }
    }
}

/// Delete response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub deleted: bool,
}

// ============================================================================
// Multipart form extraction
// ============================================================================

/// Structured fields + optional upload from a multipart request
#[derive(Debug)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub upload: Option<Upload>,
}

impl EmployeeForm {
    /// Extract the form from a multipart body
    ///
    /// All text fields are required; the `file` part is optional and an
    /// empty file part counts as no upload.
    pub async fn from_multipart(mut multipart: Multipart) -> EmployeeResult<Self> {
        let mut first_name = None;
        let mut last_name = None;
        let mut email = None;
        let mut department = None;
        let mut upload = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| EmployeeError::Validation(e.to_string()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                "firstName" => first_name = Some(text(field).await?),
                "lastName" => last_name = Some(text(field).await?),
                "emailId" => email = Some(text(field).await?),
                "department" => department = Some(text(field).await?),
                "file" => {
                    let original_filename = field.file_name().unwrap_or("file").to_string();
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| EmployeeError::Validation(e.to_string()))?;
                    if !bytes.is_empty() {
                        upload = Some(Upload {
                            bytes: bytes.to_vec(),
                            original_filename,
                        });
                    }
                }
                _ => {}
            }
        }

        Ok(Self {
            first_name: first_name
                .ok_or_else(|| EmployeeError::MissingField("firstName".to_string()))?,
            last_name: last_name
                .ok_or_else(|| EmployeeError::MissingField("lastName".to_string()))?,
            email: email.ok_or_else(|| EmployeeError::MissingField("emailId".to_string()))?,
            department: department
                .ok_or_else(|| EmployeeError::MissingField("department".to_string()))?,
            upload,
        })
    }
}

async fn text(field: Field<'_>) -> EmployeeResult<String> {
    field
        .text()
        .await
        .map_err(|e| EmployeeError::Validation(e.to_string()))
}
