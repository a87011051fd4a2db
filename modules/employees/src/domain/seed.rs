//! Demonstration records loaded into a fresh store.

use chrono::{DateTime, ParseError, Utc};

use crate::contract::model::EmployeeProfile;

fn utc(rfc3339: &str) -> Result<DateTime<Utc>, ParseError> {
    rfc3339.parse()
}

/// Profiles for the three demo employees. Only the last one has left.
pub fn demo_profiles() -> Result<Vec<EmployeeProfile>, ParseError> {
    Ok(vec![
        EmployeeProfile {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            salary: 100_000,
            age: 30,
            job_title: "Senior Software Engineer".to_string(),
            email: "john.doe@example.com".to_string(),
            contract_hire_date: utc("2024-12-10T00:00:00Z")?,
            contract_termination_date: None,
        },
        EmployeeProfile {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            salary: 100_000,
            age: 28,
            job_title: "Product Manager".to_string(),
            email: "jane.smith@example.com".to_string(),
            contract_hire_date: utc("2023-12-10T00:00:00Z")?,
            contract_termination_date: None,
        },
        EmployeeProfile {
            first_name: "Zachary".to_string(),
            last_name: "Lima".to_string(),
            salary: 90_000,
            age: 23,
            job_title: "Software Engineer".to_string(),
            email: "zachary.lima@example.com".to_string(),
            contract_hire_date: utc("2024-12-10T00:00:00Z")?,
            contract_termination_date: Some(utc("2025-12-10T00:00:00Z")?),
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn demo_dates_are_midnight_utc() {
        let profiles = demo_profiles().expect("demo dates parse");
        assert_eq!(profiles.len(), 3);

        let hire = profiles[1].contract_hire_date;
        assert_eq!((hire.year(), hire.month(), hire.day()), (2023, 12, 10));
        assert_eq!(hire.hour(), 0);

        let left = profiles[2].contract_termination_date.expect("Zachary has left");
        assert_eq!(left.to_rfc3339(), "2025-12-10T00:00:00+00:00");
        assert!(profiles[..2]
            .iter()
            .all(|p| p.contract_termination_date.is_none()));
    }

    #[test]
    fn malformed_date_is_an_error() {
        assert!(utc("2024-13-10T00:00:00Z").is_err());
        assert!(utc("2024-12-10").is_err());
    }
}
