use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    http::{HeaderMap, StatusCode, Uri},
    response::Json,
    Extension,
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

use crate::api::rest::dto::{CreateEmployeeReq, EmployeeDto};
use crate::api::rest::error::{bad_request, map_domain_error};
use crate::api::rest::problem::{Problem, ProblemResponse};
use crate::domain::service::Service;

/// List all employees
#[utoipa::path(
    get,
    path = "/api/v1/employee",
    operation_id = "employees.list_employees",
    tag = "employees",
    responses(
        (status = 200, description = "All employees", body = [EmployeeDto])
    )
)]
pub async fn list_employees(Extension(svc): Extension<Arc<Service>>) -> Json<Vec<EmployeeDto>> {
    info!("Listing employees");

    let employees = svc
        .list_employees()
        .into_iter()
        .map(EmployeeDto::from)
        .collect();
    Json(employees)
}

/// Get a specific employee by UUID
#[utoipa::path(
    get,
    path = "/api/v1/employee/{uuid}",
    operation_id = "employees.get_employee",
    tag = "employees",
    params(("uuid" = Uuid, Path, description = "Employee UUID")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeDto),
        (status = 400, description = "Malformed UUID", body = Problem, content_type = "application/problem+json"),
        (status = 404, description = "Not Found", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn get_employee(
    Extension(svc): Extension<Arc<Service>>,
    id: Result<Path<Uuid>, PathRejection>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Json<EmployeeDto>, ProblemResponse> {
    let Path(id) = id.map_err(|rejection| {
        error!("Rejected employee id: {}", rejection);
        bad_request(rejection.body_text(), uri.path(), &headers)
    })?;
    info!("Getting employee with id: {}", id);

    match svc.get_employee(id) {
        Ok(employee) => Ok(Json(EmployeeDto::from(employee))),
        Err(e) => {
            error!("Failed to get employee {}: {}", id, e);
            Err(map_domain_error(&e, uri.path(), &headers))
        }
    }
}

/// Create a new employee
#[utoipa::path(
    post,
    path = "/api/v1/employee",
    operation_id = "employees.create_employee",
    tag = "employees",
    request_body = CreateEmployeeReq,
    responses(
        (status = 201, description = "Created employee", body = EmployeeDto),
        (status = 400, description = "Missing fields or malformed body", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn create_employee(
    uri: Uri,
    headers: HeaderMap,
    Extension(svc): Extension<Arc<Service>>,
    req_body: Result<Json<CreateEmployeeReq>, JsonRejection>,
) -> Result<(StatusCode, Json<EmployeeDto>), ProblemResponse> {
    let Json(req_body) = req_body.map_err(|rejection| {
        error!("Rejected employee body: {}", rejection);
        bad_request(rejection.body_text(), uri.path(), &headers)
    })?;
    info!("Handling create employee request");

    match svc.create_employee(req_body.into()) {
        Ok(employee) => {
            info!("Created employee with id: {}", employee.id());
            Ok((StatusCode::CREATED, Json(EmployeeDto::from(employee))))
        }
        Err(e) => {
            error!("Failed to create employee: {}", e);
            Err(map_domain_error(&e, uri.path(), &headers))
        }
    }
}
