//! Delete Employee Use Case
//!
//! Removes the record and its attachment as one logical operation.
//! Attachment delete failure is logged, not surfaced: an orphaned file
//! is acceptable, a failed delete request is not.

use std::sync::Arc;

use kernel::id::EmployeeId;

use crate::application::locks::RecordLocks;
use crate::domain::repository::{AttachmentStore, EmployeeRepository};
use crate::error::{EmployeeError, EmployeeResult};

/// Delete employee use case
pub struct DeleteEmployeeUseCase<R, S>
where
    R: EmployeeRepository,
    S: AttachmentStore,
{
    repo: Arc<R>,
    attachments: Arc<S>,
    locks: Arc<RecordLocks>,
}

impl<R, S> DeleteEmployeeUseCase<R, S>
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

    pub async fn execute(&self, employee_id: EmployeeId) -> EmployeeResult<()> {
        let lock = self.locks.lock_for(&employee_id);
        let _guard = lock.lock().await;

        let employee = self
            .repo
            .find_by_id(&employee_id)
            .await?
            .ok_or(EmployeeError::NotFound)?;

        self.repo.delete(&employee_id).await?;

        if let Some(name) = &employee.image_name {
            if let Err(e) = self.attachments.delete(name).await {
                tracing::warn!(
                    stored_name = %name,
                    error = %e,
                    "Failed to delete attachment for removed employee"
                );
            }
        }

        tracing::info!(employee_id = %employee_id, "Employee deleted");

        Ok(())
    }
}
