//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::email::Email;
use kernel::id::EmployeeId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::employee::Employee;
use crate::domain::repository::EmployeeRepository;
use crate::domain::value_object::stored_name::StoredName;
use crate::error::EmployeeResult;

/// PostgreSQL-backed employee repository
#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl EmployeeRepository for PgEmployeeRepository {
    async fn create(&self, employee: &Employee) -> EmployeeResult<()> {
        sqlx::query(
            r#"
            INSERT INTO employees (
                employee_id,
                first_name,
                last_name,
                email,
                department,
                image_name,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(employee.employee_id.as_uuid())
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(employee.email.as_str())
        .bind(&employee.department)
        .bind(employee.image_name.as_ref().map(|n| n.as_str()))
        .bind(employee.created_at)
        .bind(employee.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, employee_id: &EmployeeId) -> EmployeeResult<Option<Employee>> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT
                employee_id,
                first_name,
                last_name,
                email,
                department,
                image_name,
                created_at,
                updated_at
            FROM employees
            WHERE employee_id = $1
            "#,
        )
        .bind(employee_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(EmployeeRow::into_employee))
    }

    async fn list(&self) -> EmployeeResult<Vec<Employee>> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT
                employee_id,
                first_name,
                last_name,
                email,
                department,
                image_name,
                created_at,
                updated_at
            FROM employees
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(EmployeeRow::into_employee).collect())
    }

    async fn exists_by_email(&self, email: &Email) -> EmployeeResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM employees WHERE email = $1)",
        )
        .bind(email.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn update(&self, employee: &Employee) -> EmployeeResult<()> {
        sqlx::query(
            r#"
            UPDATE employees SET
                first_name = $2,
                last_name = $3,
                email = $4,
                department = $5,
                image_name = $6,
                updated_at = $7
            WHERE employee_id = $1
            "#,
        )
        .bind(employee.employee_id.as_uuid())
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(employee.email.as_str())
        .bind(&employee.department)
        .bind(employee.image_name.as_ref().map(|n| n.as_str()))
        .bind(employee.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, employee_id: &EmployeeId) -> EmployeeResult<()> {
        sqlx::query("DELETE FROM employees WHERE employee_id = $1")
            .bind(employee_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

// ============================================================================
// Row Mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    employee_id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    department: String,
    image_name: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl EmployeeRow {
    fn into_employee(self) -> Employee {
        Employee {
            employee_id: EmployeeId::from_uuid(self.employee_id),
            first_name: self.first_name,
            last_name: self.last_name,
            email: Email::from_db(self.email),
            department: self.department,
            image_name: self.image_name.map(StoredName::from_db),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
