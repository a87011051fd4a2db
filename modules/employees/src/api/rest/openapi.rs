use utoipa::OpenApi;

use crate::api::rest::dto::{CreateEmployeeReq, EmployeeDto};
use crate::api::rest::handlers;
use crate::api::rest::problem::{FieldError, Problem};

/// OpenAPI document for the employee endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_employees,
        handlers::get_employee,
        handlers::create_employee
    ),
    components(schemas(EmployeeDto, CreateEmployeeReq, Problem, FieldError)),
    tags((name = "employees", description = "Employee records"))
)]
pub struct EmployeesApiDoc;
