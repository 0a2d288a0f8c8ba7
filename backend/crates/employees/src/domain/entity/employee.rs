//! Employee Entity

use chrono::{DateTime, Utc};
use kernel::email::Email;
use kernel::id::EmployeeId;

use crate::domain::value_object::stored_name::StoredName;

/// Employee entity
///
/// `image_name` points at the single live attachment for this record;
/// the employee use cases keep it consistent with the content directory.
#[derive(Debug, Clone)]
pub struct Employee {
    /// Internal UUID identifier
    pub employee_id: EmployeeId,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email (unique identifying field)
    pub email: Email,
    /// Department
    pub department: String,
    /// Stored name of the current attachment, if any
    pub image_name: Option<StoredName>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Create a new employee
    pub fn new(
        first_name: String,
        last_name: String,
        email: Email,
        department: String,
        image_name: Option<StoredName>,
    ) -> Self {
        let now = Utc::now();
        Self {
            employee_id: EmployeeId::new(),
            first_name,
            last_name,
            email,
            department,
            image_name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply updated field values
    pub fn apply_update(
        &mut self,
        first_name: String,
        last_name: String,
        email: Email,
        department: String,
    ) {
        self.first_name = first_name;
        self.last_name = last_name;
        self.email = email;
        self.department = department;
        self.updated_at = Utc::now();
    }

    /// Point the record at a new stored attachment
    pub fn set_image(&mut self, image_name: StoredName) {
        self.image_name = Some(image_name);
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee::new(
            "Ada".to_string(),
            "Lovelace".to_string(),
            Email::new("ada@example.com").unwrap(),
            "Engineering".to_string(),
            None,
        )
    }

    #[test]
    fn test_new_employee_has_no_image() {
        let employee = sample();
        assert!(employee.image_name.is_none());
        assert_eq!(employee.created_at, employee.updated_at);
    }

    #[test]
    fn test_set_image_touches_updated_at() {
        let mut employee = sample();
        let before = employee.updated_at;
        employee.set_image(StoredName::generate("photo.png"));
        assert!(employee.image_name.is_some());
        assert!(employee.updated_at >= before);
    }
}
