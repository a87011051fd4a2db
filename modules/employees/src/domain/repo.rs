use crate::contract::model::Employee;
use uuid::Uuid;

/// Port for the domain layer: storage operations the domain needs.
///
/// Implementations must be safe under concurrent `put`/`get`/`list` and must
/// hand out copies, never references into their internal state.
pub trait EmployeesRepository: Send + Sync {
    /// Insert or overwrite the record stored under `employee.id()`.
    fn put(&self, employee: Employee);
    /// Load an employee by id.
    fn get(&self, id: Uuid) -> Option<Employee>;
    /// Snapshot of every stored employee. Order is unspecified.
    fn list(&self) -> Vec<Employee>;
    /// Number of stored employees.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
