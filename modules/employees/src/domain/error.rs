use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors using thiserror
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Employee not found with UUID: {id}")]
    EmployeeNotFound { id: Uuid },

    /// Field names are the wire names (`firstName`, `contractHireDate`, ...).
    #[error("Missing required fields: {}", missing_fields.join(", "))]
    Validation { missing_fields: Vec<&'static str> },
}

impl DomainError {
    pub fn employee_not_found(id: Uuid) -> Self {
        Self::EmployeeNotFound { id }
    }

    pub fn missing_fields(missing_fields: Vec<&'static str>) -> Self {
        Self::Validation { missing_fields }
    }
}
