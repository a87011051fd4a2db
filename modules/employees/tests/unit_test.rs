use chrono::{TimeZone, Utc};
use uuid::Uuid;

use employees::contract::{error::EmployeesError, model::*};
use employees::domain::error::DomainError;
// Note: These internal module imports are only for testing
// External consumers should only use the `contract` module

fn profile(first: &str, last: &str) -> EmployeeProfile {
    EmployeeProfile {
        first_name: first.to_string(),
        last_name: last.to_string(),
        salary: 1,
        age: 2,
        job_title: "Title".to_string(),
        email: "e@example.com".to_string(),
        contract_hire_date: Utc.with_ymd_and_hms(2020, 5, 1, 0, 0, 0).unwrap(),
        contract_termination_date: None,
    }
}

#[test]
fn test_employee_derives_full_name() {
    let id = Uuid::new_v4();
    let employee = Employee::new(id, profile("Ada", "Lovelace"));

    assert_eq!(employee.id(), id);
    assert_eq!(employee.full_name(), "Ada Lovelace");
    assert_eq!(employee.first_name(), "Ada");
    assert_eq!(employee.last_name(), "Lovelace");
    assert_eq!(employee.contract_termination_date(), None);
}

#[test]
fn test_full_name_is_trimmed_when_a_name_is_empty() {
    assert_eq!(
        Employee::new(Uuid::new_v4(), profile("", "Lovelace")).full_name(),
        "Lovelace"
    );
    assert_eq!(
        Employee::new(Uuid::new_v4(), profile("Ada", "")).full_name(),
        "Ada"
    );
    assert_eq!(Employee::new(Uuid::new_v4(), profile("", "")).full_name(), "");
}

#[test]
fn test_full_name_keeps_inner_whitespace() {
    let employee = Employee::new(Uuid::new_v4(), profile(" Ada ", " Lovelace "));
    assert_eq!(employee.full_name(), "Ada   Lovelace");
}

#[test]
fn test_new_employee_from_profile_is_complete() {
    let new_employee = NewEmployee::from(profile("Ada", "Lovelace"));
    assert_eq!(new_employee.first_name.as_deref(), Some("Ada"));
    assert!(new_employee.contract_hire_date.is_some());
    assert!(new_employee.contract_termination_date.is_none());
}

#[test]
fn test_contract_errors() {
    let id = Uuid::new_v4();
    match EmployeesError::not_found(id) {
        EmployeesError::NotFound { id: error_id } => assert_eq!(error_id, id),
        _ => panic!("Expected NotFound error"),
    }

    let error = EmployeesError::validation(["firstName", "email"]);
    assert_eq!(error.to_string(), "Missing required fields: firstName, email");
}

#[test]
fn test_domain_errors() {
    let id = Uuid::new_v4();
    let error = DomainError::employee_not_found(id);
    assert!(error.to_string().contains(&id.to_string()));

    let error = DomainError::missing_fields(vec!["age", "jobTitle"]);
    match &error {
        DomainError::Validation { missing_fields } => {
            assert_eq!(missing_fields, &vec!["age", "jobTitle"]);
        }
        _ => panic!("Expected Validation error"),
    }
    assert_eq!(error.to_string(), "Missing required fields: age, jobTitle");
}

#[test]
fn test_domain_error_maps_to_contract_error() {
    let id = Uuid::new_v4();
    assert_eq!(
        EmployeesError::from(DomainError::employee_not_found(id)),
        EmployeesError::not_found(id)
    );
    assert_eq!(
        EmployeesError::from(DomainError::missing_fields(vec!["email"])),
        EmployeesError::validation(["email"])
    );
}
