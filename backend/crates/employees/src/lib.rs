//! Employees Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository and storage traits
//! - `application/` - Use cases orchestrating records and attachments
//! - `infra/` - Database, filesystem, and in-memory implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Attachment lifecycle
//! Each record carries at most one live attachment. Uploads are written
//! under `<uuid>_<sanitized-name>` in one flat content directory; a
//! replace writes the new file before deleting the old, and delete
//! failures are logged rather than surfaced. Concurrent mutations of a
//! single record are serialized with per-record locks.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use domain::entity::employee::Employee;
pub use domain::value_object::stored_name::StoredName;
pub use error::{EmployeeError, EmployeeResult};
pub use infra::fs::FsAttachmentStore;
pub use infra::memory::InMemoryEmployeeRepository;
pub use infra::postgres::PgEmployeeRepository;
pub use presentation::router::{employees_router, employees_router_generic};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
