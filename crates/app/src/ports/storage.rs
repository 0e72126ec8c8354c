//! Storage port — repository trait for employee persistence.

use std::future::Future;

use roster_domain::employee::{Employee, NewEmployee};
use roster_domain::error::RosterError;
use roster_domain::id::EmployeeId;

/// Row-level access to the employee table.
///
/// Implementations acquire a store handle per call and release it before the
/// returned future completes, on success and on error alike.
pub trait EmployeeRepository {
    /// Insert a new row and return it with its store-assigned id.
    fn create(
        &self,
        employee: NewEmployee,
    ) -> impl Future<Output = Result<Employee, RosterError>> + Send;

    /// Fetch a single row, `None` when `id` matches nothing.
    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, RosterError>> + Send;

    /// Fetch every row in store order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Employee>, RosterError>> + Send;

    /// Overwrite all mutable fields of the row matching `employee.id`.
    ///
    /// Returns the stored row, or `None` when no row matched (nothing is written).
    fn update(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<Option<Employee>, RosterError>> + Send;

    /// Remove the row matching `id`. Returns `false` when no row matched.
    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<bool, RosterError>> + Send;
}
