#![allow(dead_code)]

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use employees::contract::model::NewEmployee;
use employees::domain::service::{Service, ServiceConfig};
use employees::infra::storage::InMemoryEmployeesRepository;

/// Service over a fresh store with no demo data.
pub fn empty_service() -> Service {
    Service::new(
        Arc::new(InMemoryEmployeesRepository::new()),
        ServiceConfig {
            seed_demo_data: false,
        },
    )
}

/// Service over a fresh store with the demo employees loaded.
pub fn seeded_service() -> Service {
    Service::new(
        Arc::new(InMemoryEmployeesRepository::new()),
        ServiceConfig::default(),
    )
}

/// Creation input with every required field present and no termination date.
pub fn complete_input(first: &str, last: &str) -> NewEmployee {
    NewEmployee {
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        salary: Some(75_000),
        age: Some(35),
        job_title: Some("Engineer".to_string()),
        email: Some("someone@example.com".to_string()),
        contract_hire_date: Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).single(),
        contract_termination_date: None,
    }
}
