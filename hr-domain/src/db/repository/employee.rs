//! Employee repository backed by the embedded SurrealDB engine.

use super::{EmployeeRepository, RepoError, RepoResult};
use crate::db::models::Employee;
use async_trait::async_trait;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "employee";

#[derive(Clone)]
pub struct SurrealEmployeeRepository {
    db: Surreal<Db>,
}

impl SurrealEmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    fn record_id(id: &str) -> RepoResult<RecordId> {
        id.parse().map_err(|_| RepoError::InvalidId(id.to_string()))
    }
}

#[async_trait]
impl EmployeeRepository for SurrealEmployeeRepository {
    /// Insert a new record; the store assigns the id.
    async fn add(&self, mut employee: Employee) -> RepoResult<Employee> {
        employee.id = None;
        let created: Option<Employee> = self.db.create(TABLE).content(employee).await?;
        let created =
            created.ok_or_else(|| RepoError::Database("employee was not created".to_string()))?;
        tracing::debug!(id = ?created.id, "employee created");
        Ok(created)
    }

    /// Full content replacement of an existing record.
    async fn update(&self, id: &str, mut employee: Employee) -> RepoResult<Employee> {
        let record = Self::record_id(id)?;
        // The id column is immutable; the record key wins over any embedded id
        employee.id = None;
        let updated: Option<Employee> = self.db.update(record).content(employee).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
    }

    async fn delete(&self, id: &str) -> RepoResult<bool> {
        let record = Self::record_id(id)?;
        let deleted: Option<Employee> = self.db.delete(record).await?;
        Ok(deleted.is_some())
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let record = Self::record_id(id)?;
        let employee: Option<Employee> = self.db.select(record).await?;
        Ok(employee)
    }

    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .db
            .query("SELECT * FROM employee ORDER BY surname, first_name")
            .await?
            .take(0)?;
        Ok(employees)
    }
}
