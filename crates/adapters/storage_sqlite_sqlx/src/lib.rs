//! # roster-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `roster-app::ports::storage`
//! - Create the database file when missing and run embedded migrations
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `roster-app` (for port traits) and `roster-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod employee_repo;
mod error;
mod pool;

pub use employee_repo::SqliteEmployeeRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
