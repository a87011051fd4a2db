use uuid::Uuid;

use crate::contract::{
    error::EmployeesError,
    model::{Employee, NewEmployee},
};

/// Public API trait for the employees module that other modules can use
pub trait EmployeesApi: Send + Sync {
    /// List every stored employee, in no particular order
    fn list_employees(&self) -> Vec<Employee>;

    /// Get an employee by ID
    fn get_employee(&self, id: Uuid) -> Result<Employee, EmployeesError>;

    /// Create a new employee
    fn create_employee(&self, new_employee: NewEmployee) -> Result<Employee, EmployeesError>;
}
