//! Persistence contracts and their embedded SurrealDB implementations.

pub mod employee;
pub mod employee_role;

pub use employee::SurrealEmployeeRepository;
pub use employee_role::SurrealEmployeeRoleRepository;

use crate::db::models::{Employee, EmployeeRole};
use async_trait::async_trait;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid id: {0}")]
    InvalidId(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence contract for employees.
///
/// Ids cross this boundary as "table:key" strings. Substitutable in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn add(&self, employee: Employee) -> RepoResult<Employee>;
    async fn update(&self, id: &str, employee: Employee) -> RepoResult<Employee>;
    async fn delete(&self, id: &str) -> RepoResult<bool>;
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>>;
    async fn find_all(&self) -> RepoResult<Vec<Employee>>;
}

/// Persistence contract for employee roles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRoleRepository: Send + Sync {
    async fn add(&self, role: EmployeeRole) -> RepoResult<EmployeeRole>;
    async fn update(&self, id: &str, role: EmployeeRole) -> RepoResult<EmployeeRole>;
    async fn delete(&self, id: &str) -> RepoResult<bool>;
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<EmployeeRole>>;
    async fn find_all(&self) -> RepoResult<Vec<EmployeeRole>>;
}
