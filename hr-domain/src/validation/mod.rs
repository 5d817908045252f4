//! Field validation on domain models.
//!
//! Rules live on the models as `validator` derive attributes; [`check`] is the
//! single entry point. It is pure: no I/O, no store access.

use std::fmt;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

/// A single failed rule on a named field, e.g. `role.name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Run every rule on the model and collect the failures.
///
/// Returns an empty vec when the model is valid. Nested model failures are
/// reported with a dotted field path.
pub fn check<T: Validate>(model: &T) -> Vec<FieldError> {
    match model.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => {
            let mut out = flatten(&errors, "");
            // HashMap iteration order is unstable; keep reports deterministic
            out.sort_by(|a, b| a.field.cmp(&b.field));
            out
        }
    }
}

fn flatten(errors: &ValidationErrors, prefix: &str) -> Vec<FieldError> {
    let mut out = Vec::new();
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(failures) => {
                for failure in failures {
                    out.push(FieldError {
                        field: path.clone(),
                        message: message_of(failure),
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                out.extend(flatten(nested, &path));
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    out.extend(flatten(nested, &format!("{path}[{index}]")));
                }
            }
        }
    }
    out
}

fn message_of(failure: &ValidationError) -> String {
    failure
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| failure.code.to_string())
}

/// Required-text rule: rejects empty and whitespace-only values.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::{Employee, EmployeeRole};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn employee(first_name: &str, surname: &str, role_name: &str) -> Employee {
        Employee::new(
            first_name,
            surname,
            NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            true,
            Decimal::new(50_000, 0),
            EmployeeRole::new(role_name),
        )
    }

    #[test]
    fn valid_employee_has_no_errors() {
        assert!(check(&employee("Teste", "Teste", "Dev")).is_empty());
    }

    #[test]
    fn blank_fields_are_reported_per_field() {
        let errors = check(&employee("", " ", "Dev"));
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["first_name", "surname"]);
        assert_eq!(errors[0].message, "first name must not be empty");
    }

    #[test]
    fn nested_role_violation_uses_dotted_path() {
        let errors = check(&employee("Teste", "Teste", ""));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "role.name");
        assert_eq!(errors[0].message, "role name must not be empty");
    }

    #[test]
    fn role_checks_itself() {
        assert!(check(&EmployeeRole::new("Teste")).is_empty());
        let errors = check(&EmployeeRole::new("   "));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }
}
