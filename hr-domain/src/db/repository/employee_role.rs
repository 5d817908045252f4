//! Employee role repository backed by the embedded SurrealDB engine.

use super::{EmployeeRoleRepository, RepoError, RepoResult};
use crate::db::models::EmployeeRole;
use async_trait::async_trait;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "employee_role";

#[derive(Clone)]
pub struct SurrealEmployeeRoleRepository {
    db: Surreal<Db>,
}

impl SurrealEmployeeRoleRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    fn record_id(id: &str) -> RepoResult<RecordId> {
        id.parse().map_err(|_| RepoError::InvalidId(id.to_string()))
    }
}

#[async_trait]
impl EmployeeRoleRepository for SurrealEmployeeRoleRepository {
    async fn add(&self, mut role: EmployeeRole) -> RepoResult<EmployeeRole> {
        role.id = None;
        let created: Option<EmployeeRole> = self.db.create(TABLE).content(role).await?;
        let created = created
            .ok_or_else(|| RepoError::Database("employee role was not created".to_string()))?;
        tracing::debug!(id = ?created.id, "employee role created");
        Ok(created)
    }

    async fn update(&self, id: &str, mut role: EmployeeRole) -> RepoResult<EmployeeRole> {
        let record = Self::record_id(id)?;
        role.id = None;
        let updated: Option<EmployeeRole> = self.db.update(record).content(role).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("EmployeeRole {id} not found")))
    }

    async fn delete(&self, id: &str) -> RepoResult<bool> {
        let record = Self::record_id(id)?;
        let deleted: Option<EmployeeRole> = self.db.delete(record).await?;
        Ok(deleted.is_some())
    }

    async fn find_by_id(&self, id: &str) -> RepoResult<Option<EmployeeRole>> {
        let record = Self::record_id(id)?;
        let role: Option<EmployeeRole> = self.db.select(record).await?;
        Ok(role)
    }

    async fn find_all(&self) -> RepoResult<Vec<EmployeeRole>> {
        let roles: Vec<EmployeeRole> = self
            .db
            .query("SELECT * FROM employee_role ORDER BY name")
            .await?
            .take(0)?;
        Ok(roles)
    }
}
