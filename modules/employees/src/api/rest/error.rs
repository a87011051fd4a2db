use axum::http::{HeaderMap, StatusCode};

use crate::api::rest::problem::{FieldError, Problem, ProblemResponse};
use crate::domain::error::DomainError;

/// Request id header stamped by the HTTP host.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Helper to create a Problem with less boilerplate
fn from_parts(
    status: StatusCode,
    code: &str,
    title: &str,
    detail: impl Into<String>,
    instance: &str,
    headers: &HeaderMap,
) -> Problem {
    let request_id = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    Problem::new(status, title, detail)
        .with_type(format!("https://errors.example.com/{}", code))
        .with_code(code)
        .with_instance(instance)
        .with_request_id(request_id)
}

/// Map domain error to RFC9457 ProblemResponse
pub fn map_domain_error(e: &DomainError, instance: &str, headers: &HeaderMap) -> ProblemResponse {
    match e {
        DomainError::EmployeeNotFound { id } => from_parts(
            StatusCode::NOT_FOUND,
            "EMPLOYEES_NOT_FOUND",
            "Employee not found",
            format!("Employee not found with UUID: {}", id),
            instance,
            headers,
        )
        .into(),
        DomainError::Validation { missing_fields } => from_parts(
            StatusCode::BAD_REQUEST,
            "EMPLOYEES_VALIDATION",
            "Validation error",
            e.to_string(),
            instance,
            headers,
        )
        .with_errors(missing_fields.iter().map(|f| FieldError::missing(f)).collect())
        .into(),
    }
}

/// Problem for input that never reached the domain (bad path id, malformed body).
pub fn bad_request(detail: impl Into<String>, instance: &str, headers: &HeaderMap) -> ProblemResponse {
    from_parts(
        StatusCode::BAD_REQUEST,
        "EMPLOYEES_BAD_REQUEST",
        "Bad request",
        detail,
        instance,
        headers,
    )
    .into()
}
