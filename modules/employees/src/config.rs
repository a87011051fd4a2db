use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::domain::service::ServiceConfig;

/// Configuration for the employees module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmployeesConfig {
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,
}

impl Default for EmployeesConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: default_seed_demo_data(),
        }
    }
}

impl EmployeesConfig {
    /// Parse the raw per-module config value; `None` means defaults.
    pub fn from_module_config(raw: Option<&serde_json::Value>) -> anyhow::Result<Self> {
        match raw {
            Some(value) => serde_json::from_value(value.clone())
                .context("Invalid configuration for module 'employees'"),
            None => Ok(Self::default()),
        }
    }
}

fn default_seed_demo_data() -> bool {
    true
}

impl From<&EmployeesConfig> for ServiceConfig {
    fn from(cfg: &EmployeesConfig) -> Self {
        Self {
            seed_demo_data: cfg.seed_demo_data,
        }
    }
}
