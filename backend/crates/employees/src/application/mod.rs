//! Application Layer
//!
//! Use cases orchestrating the employee repository and attachment store.

pub mod create_employee;
pub mod delete_employee;
pub mod locks;
pub mod update_employee;

// Re-exports
pub use create_employee::{CreateEmployeeInput, CreateEmployeeUseCase};
pub use delete_employee::DeleteEmployeeUseCase;
pub use locks::RecordLocks;
pub use update_employee::{UpdateEmployeeInput, UpdateEmployeeUseCase};

/// Raw upload payload extracted from a multipart request
#[derive(Debug, Clone)]
pub struct Upload {
    pub bytes: Vec<u8>,
    pub original_filename: String,
}
