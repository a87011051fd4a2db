use thiserror::Error;
use uuid::Uuid;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmployeesError {
    #[error("Employee not found: {id}")]
    NotFound { id: Uuid },

    #[error("Missing required fields: {}", fields.join(", "))]
    Validation { fields: Vec<String> },
}

impl EmployeesError {
    pub fn not_found(id: Uuid) -> Self {
        Self::NotFound { id }
    }

    pub fn validation<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Validation {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}
