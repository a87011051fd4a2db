use axum::{routing::get, Extension, Router};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Collection path served by this module.
pub const EMPLOYEES_PATH: &str = "/api/v1/employee";

/// Mount the employee endpoints onto `router`.
///
/// Only GET and POST are routed; any other method on these paths gets a 405
/// from the method router.
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    // GET /api/v1/employee - list, POST /api/v1/employee - create
    // GET /api/v1/employee/{uuid} - fetch one
    let employees = Router::new()
        .route(
            EMPLOYEES_PATH,
            get(handlers::list_employees).post(handlers::create_employee),
        )
        .route(
            &format!("{EMPLOYEES_PATH}/{{uuid}}"),
            get(handlers::get_employee),
        )
        .layer(Extension(service));

    router.merge(employees)
}
