//! In-Memory Repository Implementation
//!
//! Backing store for tests and local development; plugs into the same
//! generic router seam as the PostgreSQL implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use kernel::email::Email;
use kernel::id::EmployeeId;
use uuid::Uuid;

use crate::domain::entity::employee::Employee;
use crate::domain::repository::EmployeeRepository;
use crate::error::{EmployeeError, EmployeeResult};

/// In-memory employee repository
#[derive(Clone, Default)]
pub struct InMemoryEmployeeRepository {
    inner: Arc<RwLock<HashMap<Uuid, Employee>>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_err() -> EmployeeError {
        EmployeeError::Internal("employee store lock poisoned".to_string())
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, employee: &Employee) -> EmployeeResult<()> {
        let mut map = self.inner.write().map_err(|_| Self::lock_err())?;

        // Mirrors the unique constraint on the email column
        if map.values().any(|e| e.email == employee.email) {
            return Err(EmployeeError::EmailTaken);
        }

        map.insert(employee.employee_id.into_uuid(), employee.clone());
        Ok(())
    }

    async fn find_by_id(&self, employee_id: &EmployeeId) -> EmployeeResult<Option<Employee>> {
        let map = self.inner.read().map_err(|_| Self::lock_err())?;
        Ok(map.get(employee_id.as_uuid()).cloned())
    }

    async fn list(&self) -> EmployeeResult<Vec<Employee>> {
        let map = self.inner.read().map_err(|_| Self::lock_err())?;
        let mut employees: Vec<Employee> = map.values().cloned().collect();
        employees.sort_by_key(|e| e.created_at);
        Ok(employees)
    }

    async fn exists_by_email(&self, email: &Email) -> EmployeeResult<bool> {
        let map = self.inner.read().map_err(|_| Self::lock_err())?;
        Ok(map.values().any(|e| &e.email == email))
    }

    async fn update(&self, employee: &Employee) -> EmployeeResult<()> {
        let mut map = self.inner.write().map_err(|_| Self::lock_err())?;

        if !map.contains_key(employee.employee_id.as_uuid()) {
            return Err(EmployeeError::NotFound);
        }

        map.insert(employee.employee_id.into_uuid(), employee.clone());
        Ok(())
    }

    async fn delete(&self, employee_id: &EmployeeId) -> EmployeeResult<()> {
        let mut map = self.inner.write().map_err(|_| Self::lock_err())?;
        map.remove(employee_id.as_uuid());
        Ok(())
    }
}
