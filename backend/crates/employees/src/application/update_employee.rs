//! Update Employee Use Case
//!
//! Replaces field values and, when a new upload is present, supersedes
//! the record's attachment. The per-record lock is held across the
//! whole replace-then-persist window.

use std::sync::Arc;

use kernel::email::Email;
use kernel::id::EmployeeId;

use crate::application::Upload;
use crate::application::locks::RecordLocks;
use crate::domain::entity::employee::Employee;
use crate::domain::repository::{AttachmentStore, EmployeeRepository};
use crate::error::{EmployeeError, EmployeeResult};

/// Update employee input
pub struct UpdateEmployeeInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub upload: Option<Upload>,
}

/// Update employee use case
pub struct UpdateEmployeeUseCase<R, S>
where
    R: EmployeeRepository,
    S: AttachmentStore,
{
    repo: Arc<R>,
    attachments: Arc<S>,
    locks: Arc<RecordLocks>,
}

impl<R, S> UpdateEmployeeUseCase<R, S>
where
    R: EmployeeRepository,
    S: AttachmentStore,
{
    pub fn new(repo: Arc<R>, attachments: Arc<S>, locks: Arc<RecordLocks>) -> Self {
        Self {
            repo,
            attachments,
            locks,
        }
    }

    pub async fn execute(
        &self,
        employee_id: EmployeeId,
        input: UpdateEmployeeInput,
    ) -> EmployeeResult<Employee> {
        let lock = self.locks.lock_for(&employee_id);
        let _guard = lock.lock().await;

        let mut employee = self
            .repo
            .find_by_id(&employee_id)
            .await?
            .ok_or(EmployeeError::NotFound)?;

        let email = Email::new(input.email)
            .map_err(|e| EmployeeError::Validation(e.message().to_string()))?;

        // Uniqueness is verified before any file write
        if email != employee.email && self.repo.exists_by_email(&email).await? {
            return Err(EmployeeError::EmailTaken);
        }

        if let Some(upload) = &input.upload {
            // Capture the current stored name before mutating the record
            let old = employee.image_name.clone();
            let new_name = self
                .attachments
                .replace(old.as_ref(), &upload.bytes, &upload.original_filename)
                .await?;
            employee.set_image(new_name);
        }

        employee.apply_update(input.first_name, input.last_name, email, input.department);
        self.repo.update(&employee).await?;

        tracing::info!(
            employee_id = %employee.employee_id,
            replaced_image = input.upload.is_some(),
            "Employee updated"
        );

        Ok(employee)
    }
}
