//! Create Employee Use Case
//!
//! Creates a record, storing its attachment first so a failed write
//! leaves the record store untouched.

use std::sync::Arc;

use kernel::email::Email;

use crate::application::Upload;
use crate::domain::entity::employee::Employee;
use crate::domain::repository::{AttachmentStore, EmployeeRepository};
use crate::error::{EmployeeError, EmployeeResult};

/// Create employee input
pub struct CreateEmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub upload: Option<Upload>,
}

/// Create employee use case
pub struct CreateEmployeeUseCase<R, S>
where
    R: EmployeeRepository,
    S: AttachmentStore,
{
    repo: Arc<R>,
    attachments: Arc<S>,
}

impl<R, S> CreateEmployeeUseCase<R, S>
where
    R: EmployeeRepository,
    S: AttachmentStore,
{
    pub fn new(repo: Arc<R>, attachments: Arc<S>) -> Self {
        Self { repo, attachments }
    }

    pub async fn execute(&self, input: CreateEmployeeInput) -> EmployeeResult<Employee> {
        let email = Email::new(input.email)
            .map_err(|e| EmployeeError::Validation(e.message().to_string()))?;

        // Uniqueness is verified before any file write
        if self.repo.exists_by_email(&email).await? {
            return Err(EmployeeError::EmailTaken);
        }

        let image_name = match &input.upload {
            Some(upload) => Some(
                self.attachments
                    .store(&upload.bytes, &upload.original_filename)
                    .await?,
            ),
            None => None,
        };

        let employee = Employee::new(
            input.first_name,
            input.last_name,
            email,
            input.department,
            image_name,
        );

        if let Err(e) = self.repo.create(&employee).await {
            // The record never existed, so the fresh file is unreferenced
            if let Some(name) = &employee.image_name {
                if let Err(del) = self.attachments.delete(name).await {
                    tracing::warn!(
                        stored_name = %name,
                        error = %del,
                        "Failed to clean up attachment after aborted create"
                    );
                }
            }
            return Err(e);
        }

        tracing::info!(
            employee_id = %employee.employee_id,
            email = %employee.email,
            has_image = employee.image_name.is_some(),
            "Employee created"
        );

        Ok(employee)
    }
}
