//! `SQLite` implementation of [`EmployeeRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use roster_app::ports::EmployeeRepository;
use roster_domain::employee::{Employee, NewEmployee};
use roster_domain::error::RosterError;
use roster_domain::id::EmployeeId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Employee`].
struct Wrapper(Employee);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Employee> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Employee {
            id: EmployeeId::new(row.try_get("id")?),
            name: row.try_get("name")?,
            age: row.try_get("age")?,
            department: row.try_get("department")?,
        }))
    }
}

const INSERT: &str = "INSERT INTO employees (name, age, department) VALUES (?, ?, ?) RETURNING id, name, age, department";
const SELECT_BY_ID: &str = "SELECT id, name, age, department FROM employees WHERE id = ?";
const SELECT_ALL: &str = "SELECT id, name, age, department FROM employees";
const UPDATE: &str = "UPDATE employees SET name = ?, age = ?, department = ? WHERE id = ? RETURNING id, name, age, department";
const DELETE_BY_ID: &str = "DELETE FROM employees WHERE id = ?";

/// `SQLite`-backed employee repository.
///
/// Every call acquires its own pooled connection, which goes back to the pool
/// when the call's future completes or is dropped.
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl EmployeeRepository for SqliteEmployeeRepository {
    fn create(
        &self,
        employee: NewEmployee,
    ) -> impl Future<Output = Result<Employee, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut conn = pool.acquire().await.map_err(StorageError::from)?;
            let row: Wrapper = sqlx::query_as(INSERT)
                .bind(&employee.name)
                .bind(employee.age)
                .bind(&employee.department)
                .fetch_one(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }

    fn get_by_id(
        &self,
        id: EmployeeId,
    ) -> impl Future<Output = Result<Option<Employee>, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut conn = pool.acquire().await.map_err(StorageError::from)?;
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Employee>, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut conn = pool.acquire().await.map_err(StorageError::from)?;
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        employee: Employee,
    ) -> impl Future<Output = Result<Option<Employee>, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut conn = pool.acquire().await.map_err(StorageError::from)?;
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(&employee.name)
                .bind(employee.age)
                .bind(&employee.department)
                .bind(employee.id.as_i64())
                .fetch_optional(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn delete(&self, id: EmployeeId) -> impl Future<Output = Result<bool, RosterError>> + Send {
        let pool = self.pool.clone();
        async move {
            let mut conn = pool.acquire().await.map_err(StorageError::from)?;
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&mut *conn)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}
