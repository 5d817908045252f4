//! Domain models persisted in the document store.

pub mod employee;
pub mod employee_role;
pub mod serde_helpers;

pub use employee::{Employee, EmployeeId};
pub use employee_role::{EmployeeRole, EmployeeRoleId};
