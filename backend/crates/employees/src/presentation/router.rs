//! Employees Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::locks::RecordLocks;
use crate::domain::repository::{AttachmentStore, EmployeeRepository};
use crate::infra::fs::FsAttachmentStore;
use crate::infra::postgres::PgEmployeeRepository;
use crate::presentation::handlers::{self, EmployeesAppState};

/// Create the Employees router with PostgreSQL repository and filesystem store
pub fn employees_router(repo: PgEmployeeRepository, attachments: FsAttachmentStore) -> Router {
    employees_router_generic(repo, attachments)
}

/// Create a generic Employees router for any backend implementations
pub fn employees_router_generic<R, S>(repo: R, attachments: S) -> Router
where
    R: EmployeeRepository + Clone + Send + Sync + 'static,
    S: AttachmentStore + Clone + Send + Sync + 'static,
{
    let state = EmployeesAppState {
        repo: Arc::new(repo),
        attachments: Arc::new(attachments),
        locks: Arc::new(RecordLocks::new()),
    };

    Router::new()
        .route(
            "/employees",
            get(handlers::list_employees::<R, S>).post(handlers::create_employee::<R, S>),
        )
        .route(
            "/employees/{id}",
            get(handlers::get_employee::<R, S>)
                .put(handlers::update_employee::<R, S>)
                .delete(handlers::delete_employee::<R, S>),
        )
        .route("/images/{stored_name}", get(handlers::get_image::<R, S>))
        .with_state(state)
}
