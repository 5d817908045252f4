//! HR record-keeping domain layer.
//!
//! Two entities (Employee, EmployeeRole) with CRUD operations, field-level
//! validation, and a persistence abstraction backed by an embedded document
//! store. Services orchestrate validate-then-persist: invalid entities are
//! returned with their rule failures and never reach the repository.

pub mod db;
pub mod services;
pub mod validation;

pub use db::models::{Employee, EmployeeRole};
pub use db::repository::{RepoError, RepoResult};
pub use services::{EmployeeRoleService, EmployeeService, ServiceResult};
