//! Employee — the single record type held by the registry.

use serde::Serialize;

use crate::id::EmployeeId;

/// A persisted employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub age: i64,
    pub department: String,
}

/// Field values for an employee that has not been assigned an id yet.
///
/// Used both for inserts and as the full replacement payload of an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub age: i64,
    pub department: String,
}

impl NewEmployee {
    #[must_use]
    pub fn new(name: impl Into<String>, age: i64, department: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            department: department.into(),
        }
    }

    /// Attach a store-assigned id, producing a full [`Employee`].
    #[must_use]
    pub fn with_id(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            name: self.name,
            age: self.age,
            department: self.department,
        }
    }
}
