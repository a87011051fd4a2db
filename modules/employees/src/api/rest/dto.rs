use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::contract::model::{Employee, NewEmployee};

/// REST DTO for employee representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub uuid: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub salary: i32,
    pub age: i32,
    pub job_title: String,
    pub email: String,
    pub contract_hire_date: DateTime<Utc>,
    /// `null` while the employee is still under contract.
    pub contract_termination_date: Option<DateTime<Utc>>,
}

/// REST DTO for creating a new employee.
///
/// Fields are optional on the wire; absent ones are reported back in a 400.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeReq {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub salary: Option<i32>,
    pub age: Option<i32>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub contract_hire_date: Option<DateTime<Utc>>,
    pub contract_termination_date: Option<DateTime<Utc>>,
}

// Conversion implementations between REST DTOs and contract models

impl From<Employee> for EmployeeDto {
    fn from(e: Employee) -> Self {
        Self {
            uuid: e.id(),
            first_name: e.first_name().to_string(),
            last_name: e.last_name().to_string(),
            full_name: e.full_name().to_string(),
            salary: e.salary(),
            age: e.age(),
            job_title: e.job_title().to_string(),
            email: e.email().to_string(),
            contract_hire_date: e.contract_hire_date(),
            contract_termination_date: e.contract_termination_date(),
        }
    }
}

impl From<CreateEmployeeReq> for NewEmployee {
    fn from(req: CreateEmployeeReq) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            salary: req.salary,
            age: req.age,
            job_title: req.job_title,
            email: req.email,
            contract_hire_date: req.contract_hire_date,
            contract_termination_date: req.contract_termination_date,
        }
    }
}
