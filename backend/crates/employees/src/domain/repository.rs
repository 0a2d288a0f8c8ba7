//! Repository and Storage Traits
//!
//! Interfaces for employee persistence and attachment storage.
//! Implementations are in the infrastructure layer.

use kernel::email::Email;
use kernel::id::EmployeeId;

use crate::domain::entity::employee::Employee;
use crate::domain::value_object::stored_name::StoredName;
use crate::error::EmployeeResult;

/// Employee repository trait
#[trait_variant::make(EmployeeRepository: Send)]
pub trait LocalEmployeeRepository {
    /// Create a new employee
    async fn create(&self, employee: &Employee) -> EmployeeResult<()>;

    /// Find employee by ID
    async fn find_by_id(&self, employee_id: &EmployeeId) -> EmployeeResult<Option<Employee>>;

    /// List all employees
    async fn list(&self) -> EmployeeResult<Vec<Employee>>;

    /// Check if an email is already used by a record
    async fn exists_by_email(&self, email: &Email) -> EmployeeResult<bool>;

    /// Update an employee
    async fn update(&self, employee: &Employee) -> EmployeeResult<()>;

    /// Delete an employee
    async fn delete(&self, employee_id: &EmployeeId) -> EmployeeResult<()>;
}

/// Attachment store trait
///
/// Ordering guarantee implementations must uphold: new content is
/// durably written before old content is removed, so a crash between
/// the two leaves a valid, fully-written file behind.
#[trait_variant::make(AttachmentStore: Send)]
pub trait LocalAttachmentStore {
    /// Write `bytes` under a fresh collision-free stored name
    async fn store(&self, bytes: &[u8], original_filename: &str) -> EmployeeResult<StoredName>;

    /// Store new content, then delete the superseded file if present
    ///
    /// Delete failure is logged and does not roll back the new write.
    async fn replace(
        &self,
        old: Option<&StoredName>,
        bytes: &[u8],
        original_filename: &str,
    ) -> EmployeeResult<StoredName>;

    /// Remove the file if present; absence is not an error
    async fn delete(&self, stored_name: &StoredName) -> EmployeeResult<()>;

    /// Read the file's content, or `None` if absent
    async fn read(&self, stored_name: &StoredName) -> EmployeeResult<Option<Vec<u8>>>;
}
