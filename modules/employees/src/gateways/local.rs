use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::EmployeesApi,
    error::EmployeesError,
    model::{Employee, NewEmployee},
};
use crate::domain::{error::DomainError, service::Service};

/// Local implementation of the EmployeesApi trait that delegates to the domain service
pub struct EmployeesLocalClient {
    service: Arc<Service>,
}

impl EmployeesLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl EmployeesApi for EmployeesLocalClient {
    fn list_employees(&self) -> Vec<Employee> {
        self.service.list_employees()
    }

    fn get_employee(&self, id: Uuid) -> Result<Employee, EmployeesError> {
        self.service.get_employee(id).map_err(EmployeesError::from)
    }

    fn create_employee(&self, new_employee: NewEmployee) -> Result<Employee, EmployeesError> {
        self.service
            .create_employee(new_employee)
            .map_err(EmployeesError::from)
    }
}

impl From<DomainError> for EmployeesError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::EmployeeNotFound { id } => EmployeesError::not_found(id),
            DomainError::Validation { missing_fields } => EmployeesError::validation(missing_fields),
        }
    }
}
