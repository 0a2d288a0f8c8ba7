//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::EmployeesAppState;
pub use router::{employees_router, employees_router_generic};
