//! Employee service

use super::ServiceResult;
use crate::db::models::Employee;
use crate::db::repository::{EmployeeRepository, RepoError, RepoResult};
use crate::validation;

pub struct EmployeeService<R> {
    repository: R,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Validate and insert. Invalid employees never reach the store.
    pub async fn add(&self, employee: Employee) -> RepoResult<ServiceResult<Employee>> {
        let errors = validation::check(&employee);
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "employee rejected by validation");
            return Ok(ServiceResult::rejected(errors));
        }
        let created = self.repository.add(employee).await?;
        Ok(ServiceResult::persisted(created))
    }

    /// Validate and replace the record at `id`.
    ///
    /// The record must already exist; the id in the path wins over any id the
    /// entity carries.
    pub async fn update(&self, id: &str, employee: Employee) -> RepoResult<ServiceResult<Employee>> {
        let errors = validation::check(&employee);
        if !errors.is_empty() {
            tracing::debug!(%id, count = errors.len(), "employee update rejected by validation");
            return Ok(ServiceResult::rejected(errors));
        }
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))?;
        let updated = self.repository.update(id, employee).await?;
        Ok(ServiceResult::persisted(updated))
    }

    /// Remove by id. No validation.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        self.repository.delete(id).await
    }

    /// Fetch by id; `None` when the store has no such record.
    pub async fn get(&self, id: &str) -> RepoResult<Option<Employee>> {
        self.repository.find_by_id(id).await
    }

    /// Fetch the full collection, possibly empty.
    pub async fn list(&self) -> RepoResult<Vec<Employee>> {
        self.repository.find_all().await
    }
}
