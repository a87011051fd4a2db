use std::sync::Arc;

use crate::contract::model::{Employee, EmployeeProfile, NewEmployee};
use crate::domain::error::DomainError;
use crate::domain::repo::EmployeesRepository;
use crate::domain::seed;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// Domain service with business rules for employee management.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn EmployeesRepository>,
    config: ServiceConfig,
}

/// Configuration for the domain service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Load the demonstration employees when the service is constructed.
    pub seed_demo_data: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
        }
    }
}

impl Service {
    /// Create a service on top of `repo`.
    ///
    /// Demo records are written before this returns, so no caller can
    /// observe the store ahead of seeding.
    pub fn new(repo: Arc<dyn EmployeesRepository>, config: ServiceConfig) -> Self {
        let service = Self { repo, config };
        if service.config.seed_demo_data {
            service.seed_demo_data();
        }
        service
    }

    #[instrument(name = "employees.service.list_employees", skip(self))]
    pub fn list_employees(&self) -> Vec<Employee> {
        debug!("Listing employees");
        let employees = self.repo.list();
        debug!("Successfully listed {} employees", employees.len());
        employees
    }

    #[instrument(name = "employees.service.get_employee", skip(self), fields(employee_id = %id))]
    pub fn get_employee(&self, id: Uuid) -> Result<Employee, DomainError> {
        debug!("Getting employee by id");
        let employee = self
            .repo
            .get(id)
            .ok_or_else(|| DomainError::employee_not_found(id))?;
        debug!("Successfully retrieved employee");
        Ok(employee)
    }

    #[instrument(name = "employees.service.create_employee", skip(self, new_employee))]
    pub fn create_employee(&self, new_employee: NewEmployee) -> Result<Employee, DomainError> {
        info!("Creating new employee");

        let profile = validate_new_employee(new_employee)?;
        let employee = Employee::new(Uuid::new_v4(), profile);

        self.repo.put(employee.clone());

        info!(
            employee_id = %employee.id(),
            full_name = %employee.full_name(),
            "Successfully created employee"
        );
        Ok(employee)
    }

    fn seed_demo_data(&self) {
        let profiles = match seed::demo_profiles() {
            Ok(profiles) => profiles,
            Err(e) => {
                error!("Failed to build demo employees: {}", e);
                return;
            }
        };
        for profile in profiles {
            self.repo.put(Employee::new(Uuid::new_v4(), profile));
        }
        info!(count = self.repo.len(), "Seeded demo employees");
    }
}

// --- validation helpers ---

/// Turn creation input into a complete profile, reporting every absent
/// required field at once.
fn validate_new_employee(new_employee: NewEmployee) -> Result<EmployeeProfile, DomainError> {
    let presence = [
        ("firstName", new_employee.first_name.is_some()),
        ("lastName", new_employee.last_name.is_some()),
        ("salary", new_employee.salary.is_some()),
        ("age", new_employee.age.is_some()),
        ("jobTitle", new_employee.job_title.is_some()),
        ("email", new_employee.email.is_some()),
        ("contractHireDate", new_employee.contract_hire_date.is_some()),
    ];
    let missing: Vec<&'static str> = presence
        .iter()
        .filter(|(_, present)| !present)
        .map(|(field, _)| *field)
        .collect();

    let NewEmployee {
        first_name,
        last_name,
        salary,
        age,
        job_title,
        email,
        contract_hire_date,
        contract_termination_date,
    } = new_employee;

    match (
        first_name,
        last_name,
        salary,
        age,
        job_title,
        email,
        contract_hire_date,
    ) {
        (
            Some(first_name),
            Some(last_name),
            Some(salary),
            Some(age),
            Some(job_title),
            Some(email),
            Some(contract_hire_date),
        ) => Ok(EmployeeProfile {
            first_name,
            last_name,
            salary,
            age,
            job_title,
            email,
            contract_hire_date,
            contract_termination_date,
        }),
        _ => {
            debug!(?missing, "Rejecting employee with missing fields");
            Err(DomainError::missing_fields(missing))
        }
    }
}
