use dashmap::DashMap;
use uuid::Uuid;

use crate::contract::model::Employee;
use crate::domain::repo::EmployeesRepository;

/// Process-local employee store.
///
/// Each record is inserted whole under its shard lock, so readers see either
/// the previous value or the complete new one.
#[derive(Debug, Default)]
pub struct InMemoryEmployeesRepository {
    employees: DashMap<Uuid, Employee>,
}

impl InMemoryEmployeesRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmployeesRepository for InMemoryEmployeesRepository {
    fn put(&self, employee: Employee) {
        self.employees.insert(employee.id(), employee);
    }

    fn get(&self, id: Uuid) -> Option<Employee> {
        self.employees.get(&id).map(|entry| entry.value().clone())
    }

    fn list(&self) -> Vec<Employee> {
        self.employees
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn len(&self) -> usize {
        self.employees.len()
    }
}
