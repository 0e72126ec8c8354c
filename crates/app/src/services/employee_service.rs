//! Employee service — use-cases for managing employee records.

use roster_domain::employee::{Employee, NewEmployee};
use roster_domain::error::{NotFoundError, RosterError};
use roster_domain::id::EmployeeId;

use crate::ports::EmployeeRepository;

fn not_found(id: EmployeeId) -> RosterError {
    NotFoundError {
        entity: "Employee",
        id: id.to_string(),
    }
    .into()
}

/// Application service for employee CRUD operations.
pub struct EmployeeService<R> {
    repo: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Insert a new employee and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, employee), fields(employee_name = %employee.name))]
    pub async fn create_employee(&self, employee: NewEmployee) -> Result<Employee, RosterError> {
        let created = self.repo.create(employee).await?;
        tracing::debug!(id = %created.id, "employee created");
        Ok(created)
    }

    /// List every employee.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, RosterError> {
        self.repo.get_all().await
    }

    /// Look up an employee by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] when no employee with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_employee(&self, id: EmployeeId) -> Result<Employee, RosterError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Replace the name, age, and department of an existing employee.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] when no employee with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self, changes))]
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        changes: NewEmployee,
    ) -> Result<Employee, RosterError> {
        self.repo
            .update(changes.with_id(id))
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete an employee by id.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] when no employee with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_employee(&self, id: EmployeeId) -> Result<(), RosterError> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}
