pub mod doctor;
pub mod list;
pub mod serve;

use crate::domain::ContainerRuntime;
use crate::infra::{AppConfig, DockerAdapter};
use crate::services::ContainerService;
use std::sync::Arc;

/// Wiring shared by every subcommand.
pub struct AppContext {
    pub config: AppConfig,
    pub container_service: Arc<ContainerService>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let runtime = Arc::new(DockerAdapter::new(config.docker_settings()));
        Self::with_runtime(config, runtime)
    }

    pub fn with_runtime(config: AppConfig, runtime: Arc<dyn ContainerRuntime>) -> Self {
        Self {
            config,
            container_service: Arc::new(ContainerService::new(runtime)),
        }
    }
}
