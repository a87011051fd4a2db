use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Caller-supplied attributes of an employee, all required fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeProfile {
    pub first_name: String,
    pub last_name: String,
    pub salary: i32,
    pub age: i32,
    pub job_title: String,
    pub email: String,
    pub contract_hire_date: DateTime<Utc>,
    pub contract_termination_date: Option<DateTime<Utc>>,
}

/// Pure employee model for inter-module communication (no serde).
///
/// Built once through [`Employee::new`]; there are no setters, so `id` and
/// `full_name` stay exactly as they were at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id: Uuid,
    full_name: String,
    profile: EmployeeProfile,
}

impl Employee {
    pub fn new(id: Uuid, profile: EmployeeProfile) -> Self {
        let full_name = format!("{} {}", profile.first_name, profile.last_name)
            .trim()
            .to_string();
        Self {
            id,
            full_name,
            profile,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.profile.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.profile.last_name
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn salary(&self) -> i32 {
        self.profile.salary
    }

    pub fn age(&self) -> i32 {
        self.profile.age
    }

    pub fn job_title(&self) -> &str {
        &self.profile.job_title
    }

    pub fn email(&self) -> &str {
        &self.profile.email
    }

    pub fn contract_hire_date(&self) -> DateTime<Utc> {
        self.profile.contract_hire_date
    }

    /// `None` while the employee is still under contract.
    pub fn contract_termination_date(&self) -> Option<DateTime<Utc>> {
        self.profile.contract_termination_date
    }

    pub fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }
}

/// Data for creating a new employee.
///
/// Every field is optional so that absent input can be reported back
/// instead of failing at deserialization time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewEmployee {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub salary: Option<i32>,
    pub age: Option<i32>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub contract_hire_date: Option<DateTime<Utc>>,
    pub contract_termination_date: Option<DateTime<Utc>>,
}

impl From<EmployeeProfile> for NewEmployee {
    fn from(p: EmployeeProfile) -> Self {
        Self {
            first_name: Some(p.first_name),
            last_name: Some(p.last_name),
            salary: Some(p.salary),
            age: Some(p.age),
            job_title: Some(p.job_title),
            email: Some(p.email),
            contract_hire_date: Some(p.contract_hire_date),
            contract_termination_date: p.contract_termination_date,
        }
    }
}
