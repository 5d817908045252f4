//! Employee role service

use super::ServiceResult;
use crate::db::models::EmployeeRole;
use crate::db::repository::{EmployeeRoleRepository, RepoError, RepoResult};
use crate::validation;

pub struct EmployeeRoleService<R> {
    repository: R,
}

impl<R: EmployeeRoleRepository> EmployeeRoleService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Validate and insert. Invalid roles never reach the store.
    pub async fn add(&self, role: EmployeeRole) -> RepoResult<ServiceResult<EmployeeRole>> {
        let errors = validation::check(&role);
        if !errors.is_empty() {
            tracing::debug!(count = errors.len(), "role rejected by validation");
            return Ok(ServiceResult::rejected(errors));
        }
        let created = self.repository.add(role).await?;
        Ok(ServiceResult::persisted(created))
    }

    /// Validate and replace the record at `id`. The record must already exist.
    pub async fn update(
        &self,
        id: &str,
        role: EmployeeRole,
    ) -> RepoResult<ServiceResult<EmployeeRole>> {
        let errors = validation::check(&role);
        if !errors.is_empty() {
            tracing::debug!(%id, count = errors.len(), "role update rejected by validation");
            return Ok(ServiceResult::rejected(errors));
        }
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("EmployeeRole {id} not found")))?;
        let updated = self.repository.update(id, role).await?;
        Ok(ServiceResult::persisted(updated))
    }

    /// Remove by id. No validation.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        self.repository.delete(id).await
    }

    /// Fetch by id; `None` when the store has no such record.
    pub async fn get(&self, id: &str) -> RepoResult<Option<EmployeeRole>> {
        self.repository.find_by_id(id).await
    }

    /// Fetch the full collection, possibly empty.
    pub async fn list(&self) -> RepoResult<Vec<EmployeeRole>> {
        self.repository.find_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::MockEmployeeRoleRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn add_returns_error_when_validation_fails() {
        let mut repo = MockEmployeeRoleRepository::new();
        repo.expect_add().times(0);
        let service = EmployeeRoleService::new(repo);

        let result = service.add(EmployeeRole::new("")).await.unwrap();

        assert!(result.is_rejected());
        assert!(result.entity.is_none());
    }

    #[tokio::test]
    async fn add_persists_role_when_validation_passes() {
        let mut repo = MockEmployeeRoleRepository::new();
        repo.expect_add()
            .with(eq(EmployeeRole::new("Teste")))
            .times(1)
            .returning(|r| Ok(r));
        let service = EmployeeRoleService::new(repo);

        let result = service.add(EmployeeRole::new("Teste")).await.unwrap();

        assert!(!result.is_rejected());
        assert_eq!(result.entity.unwrap().name, "Teste");
    }

    #[tokio::test]
    async fn update_returns_error_when_validation_fails() {
        let mut repo = MockEmployeeRoleRepository::new();
        repo.expect_find_by_id().times(0);
        repo.expect_update().times(0);
        let service = EmployeeRoleService::new(repo);

        let result = service
            .update("employee_role:1", EmployeeRole::new(""))
            .await
            .unwrap();

        assert!(result.is_rejected());
    }

    #[tokio::test]
    async fn update_replaces_role_when_validation_passes() {
        let mut repo = MockEmployeeRoleRepository::new();
        repo.expect_find_by_id()
            .with(eq("employee_role:1"))
            .times(1)
            .returning(|_| Ok(Some(EmployeeRole::new("Teste"))));
        repo.expect_update()
            .with(eq("employee_role:1"), eq(EmployeeRole::new("Teste")))
            .times(1)
            .returning(|_, r| Ok(r));
        let service = EmployeeRoleService::new(repo);

        let result = service
            .update("employee_role:1", EmployeeRole::new("Teste"))
            .await
            .unwrap();

        assert!(!result.is_rejected());
    }

    #[tokio::test]
    async fn delete_delegates_to_repository() {
        let mut repo = MockEmployeeRoleRepository::new();
        repo.expect_delete()
            .with(eq("employee_role:1"))
            .times(1)
            .returning(|_| Ok(true));
        let service = EmployeeRoleService::new(repo);

        assert!(service.delete("employee_role:1").await.unwrap());
    }

    #[tokio::test]
    async fn get_returns_stored_role() {
        let mut repo = MockEmployeeRoleRepository::new();
        repo.expect_find_by_id()
            .with(eq("employee_role:1"))
            .returning(|_| Ok(Some(EmployeeRole::new("Teste"))));
        let service = EmployeeRoleService::new(repo);

        let result = service.get("employee_role:1").await.unwrap();

        assert_eq!(result, Some(EmployeeRole::new("Teste")));
    }

    #[tokio::test]
    async fn list_returns_stored_roles() {
        let roles = vec![EmployeeRole::new("teste1"), EmployeeRole::new("teste2")];
        let expected = roles.clone();
        let mut repo = MockEmployeeRoleRepository::new();
        repo.expect_find_all().returning(move || Ok(roles.clone()));
        let service = EmployeeRoleService::new(repo);

        assert_eq!(service.list().await.unwrap(), expected);
    }

    #[tokio::test]
    async fn list_returns_empty_when_store_is_empty() {
        let mut repo = MockEmployeeRoleRepository::new();
        repo.expect_find_all().returning(|| Ok(Vec::new()));
        let service = EmployeeRoleService::new(repo);

        assert!(service.list().await.unwrap().is_empty());
    }
}
