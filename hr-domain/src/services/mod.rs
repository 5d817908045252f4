//! Domain services — validate-then-persist orchestration.
//!
//! Each write runs the field rules first and never touches the repository
//! when they fail. Repository failures propagate unchanged.

pub mod employee;
pub mod employee_role;

pub use employee::EmployeeService;
pub use employee_role::EmployeeRoleService;

use crate::validation::FieldError;

/// Outcome of a write: the persisted entity, or the rule failures that blocked it.
#[derive(Debug)]
pub struct ServiceResult<T> {
    pub entity: Option<T>,
    pub errors: Vec<FieldError>,
}

impl<T> ServiceResult<T> {
    pub fn persisted(entity: T) -> Self {
        Self {
            entity: Some(entity),
            errors: Vec::new(),
        }
    }

    pub fn rejected(errors: Vec<FieldError>) -> Self {
        Self {
            entity: None,
            errors,
        }
    }

    pub fn is_rejected(&self) -> bool {
        !self.errors.is_empty()
    }
}
