use std::sync::Arc;

use tracing::{debug, info};

use crate::api::rest::{openapi::EmployeesApiDoc, routes};
use crate::config::EmployeesConfig;
use crate::contract::client::EmployeesApi;
use crate::domain::service::{Service, ServiceConfig};
use crate::gateways::local::EmployeesLocalClient;
use crate::infra::storage::InMemoryEmployeesRepository;

/// Name under which the module reads its configuration from the host's module bag.
pub const MODULE_NAME: &str = "employees";

/// Employees module: owns one store and the service in front of it.
///
/// Build it once per process; every REST handler and local client shares the
/// same service instance.
#[derive(Clone)]
pub struct Employees {
    service: Arc<Service>,
}

impl Employees {
    /// Wire an in-memory repository to the domain service.
    pub fn new(cfg: &EmployeesConfig) -> Self {
        info!("Initializing employees module");
        debug!("Loaded employees config: seed_demo_data={}", cfg.seed_demo_data);

        let repo = InMemoryEmployeesRepository::new();
        let service = Service::new(Arc::new(repo), ServiceConfig::from(cfg));

        Self {
            service: Arc::new(service),
        }
    }

    /// Build from the raw per-module config value; `None` means defaults.
    pub fn from_module_config(raw: Option<&serde_json::Value>) -> anyhow::Result<Self> {
        let cfg = EmployeesConfig::from_module_config(raw)?;
        Ok(Self::new(&cfg))
    }

    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }

    /// Local in-process client for other modules.
    pub fn client(&self) -> Arc<dyn EmployeesApi> {
        Arc::new(EmployeesLocalClient::new(self.service()))
    }

    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering employees REST routes");
        routes::register_routes(router, self.service())
    }

    pub fn openapi(&self) -> utoipa::openapi::OpenApi {
        use utoipa::OpenApi;
        EmployeesApiDoc::openapi()
    }
}
