//! HTTP Handlers

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;
use uuid::Uuid;

use kernel::id::EmployeeId;

use crate::application::locks::RecordLocks;
use crate::application::{
    CreateEmployeeInput, CreateEmployeeUseCase, DeleteEmployeeUseCase, UpdateEmployeeInput,
    UpdateEmployeeUseCase,
};
use crate::domain::repository::{AttachmentStore, EmployeeRepository};
use crate::domain::value_object::stored_name::StoredName;
use crate::error::{EmployeeError, EmployeeResult};
use crate::presentation::dto::{DeleteResponse, EmployeeForm, EmployeeResponse};

/// Shared state for employee handlers
#[derive(Clone)]
pub struct EmployeesAppState<R, S>
where
    R: EmployeeRepository + Clone + Send + Sync + 'static,
    S: AttachmentStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub attachments: Arc<S>,
    pub locks: Arc<RecordLocks>,
}

// ============================================================================
// List / Get
// ============================================================================

/// GET /api/v1/employees
pub async fn list_employees<R, S>(
    State(state): State<EmployeesAppState<R, S>>,
) -> EmployeeResult<Json<Vec<EmployeeResponse>>>
where
    R: EmployeeRepository + Clone + Send + Sync + 'static,
    S: AttachmentStore + Clone + Send + Sync + 'static,
{
    let employees = state.repo.list().await?;

    Ok(Json(
        employees.into_iter().map(EmployeeResponse::from).collect(),
    ))
}

/// GET /api/v1/employees/{id}
pub async fn get_employee<R, S>(
    State(state): State<EmployeesAppState<R, S>>,
    Path(id): Path<Uuid>,
) -> EmployeeResult<Json<EmployeeResponse>>
where
    R: EmployeeRepository + Clone + Send + Sync + 'static,
    S: AttachmentStore + Clone + Send + Sync + 'static,
{
    let employee = state
        .repo
        .find_by_id(&EmployeeId::from_uuid(id))
        .await?
        .ok_or(EmployeeError::NotFound)?;

    Ok(Json(EmployeeResponse::from(employee)))
}

// ============================================================================
// Create / Update / Delete
// ============================================================================

/// POST /api/v1/employees (multipart/form-data)
pub async fn create_employee<R, S>(
    State(state): State<EmployeesAppState<R, S>>,
    multipart: Multipart,
) -> EmployeeResult<impl IntoResponse>
where
    R: EmployeeRepository + Clone + Send + Sync + 'static,
    S: AttachmentStore + Clone + Send + Sync + 'static,
{
    let form = EmployeeForm::from_multipart(multipart).await?;

    let use_case = CreateEmployeeUseCase::new(state.repo.clone(), state.attachments.clone());

    let employee = use_case
        .execute(CreateEmployeeInput {
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            department: form.department,
            upload: form.upload,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(EmployeeResponse::from(employee))))
}

/// PUT /api/v1/employees/{id} (multipart/form-data, file optional)
pub async fn update_employee<R, S>(
    State(state): State<EmployeesAppState<R, S>>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> EmployeeResult<Json<EmployeeResponse>>
where
    R: EmployeeRepository + Clone + Send + Sync + 'static,
    S: AttachmentStore + Clone + Send + Sync + 'static,
{
    let form = EmployeeForm::from_multipart(multipart).await?;

    let use_case = UpdateEmployeeUseCase::new(
        state.repo.clone(),
        state.attachments.clone(),
        state.locks.clone(),
    );

    let employee = use_case
        .execute(
            EmployeeId::from_uuid(id),
            UpdateEmployeeInput {
                first_name: form.first_name,
                last_name: form.last_name,
                email: form.email,
                department: form.department,
                upload: form.upload,
            },
        )
        .await?;

    Ok(Json(EmployeeResponse::from(employee)))
}

/// DELETE /api/v1/employees/{id}
pub async fn delete_employee<R, S>(
    State(state): State<EmployeesAppState<R, S>>,
    Path(id): Path<Uuid>,
) -> EmployeeResult<Json<DeleteResponse>>
where
    R: EmployeeRepository + Clone + Send + Sync + 'static,
    S: AttachmentStore + Clone + Send + Sync + 'static,
{
    let use_case = DeleteEmployeeUseCase::new(
        state.repo.clone(),
        state.attachments.clone(),
        state.locks.clone(),
    );

    use_case.execute(EmployeeId::from_uuid(id)).await?;

    Ok(Json(DeleteResponse { deleted: true }))
}

// ============================================================================
// Attachment retrieval
// ============================================================================

/// GET /api/v1/images/{stored_name}
pub async fn get_image<R, S>(
    State(state): State<EmployeesAppState<R, S>>,
    Path(stored_name): Path<String>,
) -> EmployeeResult<impl IntoResponse>
where
    R: EmployeeRepository + Clone + Send + Sync + 'static,
    S: AttachmentStore + Clone + Send + Sync + 'static,
{
    let stored_name = StoredName::parse(&stored_name)?;

    let bytes = state
        .attachments
        .read(&stored_name)
        .await?
        .ok_or(EmployeeError::NotFound)?;

    let content_type = mime_guess::from_path(stored_name.as_str())
        .first_or_octet_stream()
        .to_string();

    Ok(([(header::CONTENT_TYPE, content_type)], bytes))
}
