//! Employee role model

use super::serde_helpers;
use crate::validation::not_blank;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

/// Employee role ID type
pub type EmployeeRoleId = RecordId;

/// A job role employees are assigned to. Independent lifecycle from Employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EmployeeRole {
    /// Assigned by the store on add
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<EmployeeRoleId>,
    #[validate(custom(function = not_blank, message = "role name must not be empty"))]
    pub name: String,
}

impl EmployeeRole {
    /// Create a role that has not been persisted yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}
