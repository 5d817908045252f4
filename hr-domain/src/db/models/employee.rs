//! Employee model

use super::serde_helpers;
use super::EmployeeRole;
use crate::validation::not_blank;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

/// Employee ID type
pub type EmployeeId = RecordId;

/// An employee record. The role is embedded by value, not resolved by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Employee {
    /// Assigned by the store on add
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<EmployeeId>,
    #[validate(custom(function = not_blank, message = "first name must not be empty"))]
    pub first_name: String,
    #[validate(custom(function = not_blank, message = "surname must not be empty"))]
    pub surname: String,
    pub birthday: NaiveDate,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub active: bool,
    pub salary: Decimal,
    #[validate(nested)]
    pub role: EmployeeRole,
}

fn default_true() -> bool {
    true
}

impl Employee {
    /// Create an employee that has not been persisted yet
    pub fn new(
        first_name: impl Into<String>,
        surname: impl Into<String>,
        birthday: NaiveDate,
        active: bool,
        salary: Decimal,
        role: EmployeeRole,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            surname: surname.into(),
            birthday,
            active,
            salary,
            role,
        }
    }
}
