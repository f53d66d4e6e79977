use crate::domain::report::render_report;
use crate::domain::{ContainerRuntime, ContainerSummary, DaemonInfo, RuntimeError};
use std::sync::Arc;
use tracing::{error, info, instrument};

pub const DAEMON_UNAVAILABLE_PREFIX: &str =
    "Error: Unable to connect to Docker daemon. Is Docker running? Details: ";
pub const UNEXPECTED_ERROR_PREFIX: &str =
    "Error: An unexpected error occurred while listing containers: ";

pub struct ContainerService {
    runtime: Arc<dyn ContainerRuntime>,
}

impl ContainerService {
    pub fn new(runtime: Arc<dyn ContainerRuntime>) -> Self {
        Self { runtime }
    }

    /// Lists running containers as a text report.
    ///
    /// Always returns text: failures come back as an `Error: ...` string and
    /// are logged, never propagated.
    #[instrument(skip(self))]
    pub async fn list_running_containers(&self) -> String {
        match self.fetch_running().await {
            Ok(containers) => {
                info!("{} container(s) em execução", containers.len());
                render_report(&containers)
            }
            Err(RuntimeError::DaemonUnavailable(details)) => {
                error!("erro do Docker ao listar containers: {details}");
                format!("{DAEMON_UNAVAILABLE_PREFIX}{details}")
            }
            Err(RuntimeError::Unexpected(details)) => {
                error!("erro inesperado ao listar containers: {details}");
                format!("{UNEXPECTED_ERROR_PREFIX}{details}")
            }
        }
    }

    pub async fn daemon_info(&self) -> Result<DaemonInfo, RuntimeError> {
        self.runtime.daemon_info().await
    }

    /// Runs the runtime call on its own task so a panic inside the backend
    /// surfaces as an unexpected error instead of unwinding through the caller.
    async fn fetch_running(&self) -> Result<Vec<ContainerSummary>, RuntimeError> {
        let runtime = Arc::clone(&self.runtime);

        tokio::spawn(async move { runtime.list_running().await })
            .await
            .unwrap_or_else(|join_err| Err(RuntimeError::Unexpected(panic_message(join_err))))
    }
}

fn panic_message(err: tokio::task::JoinError) -> String {
    if !err.is_panic() {
        return err.to_string();
    }

    let payload = err.into_panic();
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "task panicked".to_string()
    }
}
