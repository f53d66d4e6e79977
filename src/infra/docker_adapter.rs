use crate::domain::{
    ContainerRuntime, ContainerSummary, DaemonInfo, HostBinding, PortMap, RuntimeError,
    display_image, display_name, short_container_id,
};
use async_trait::async_trait;
use bollard::Docker;
use bollard::container::{InspectContainerOptions, ListContainersOptions};
use bollard::models::{self, ContainerInspectResponse, ImageInspect};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// How to reach the daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerSettings {
    /// Explicit unix socket; `None` means the environment (`DOCKER_HOST`,
    /// `DOCKER_TLS_VERIFY`, `DOCKER_CERT_PATH`) or the platform default.
    pub socket: Option<PathBuf>,
    pub timeout_secs: u64,
}

impl Default for DockerSettings {
    fn default() -> Self {
        Self {
            socket: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// `ContainerRuntime` backed by the Docker Engine API.
///
/// A fresh client is built for every call and dropped when the call returns.
#[derive(Debug, Clone, Default)]
pub struct DockerAdapter {
    settings: DockerSettings,
}

impl DockerAdapter {
    pub fn new(settings: DockerSettings) -> Self {
        Self { settings }
    }

    fn connect(&self) -> Result<Docker, RuntimeError> {
        let docker = match &self.settings.socket {
            Some(socket) => Docker::connect_with_socket(
                &socket.to_string_lossy(),
                self.settings.timeout_secs,
                bollard::API_DEFAULT_VERSION,
            )?,
            None => Docker::connect_with_defaults()?,
        };

        Ok(docker.with_timeout(Duration::from_secs(self.settings.timeout_secs)))
    }
}

impl From<bollard::errors::Error> for RuntimeError {
    fn from(err: bollard::errors::Error) -> Self {
        use bollard::errors::Error;

        match err {
            // The daemon answered, but with a body we cannot decode.
            Error::JsonDataError { .. } | Error::JsonSerdeError { .. } => {
                RuntimeError::Unexpected(err.to_string())
            }
            _ => RuntimeError::DaemonUnavailable(err.to_string()),
        }
    }
}

#[async_trait]
impl ContainerRuntime for DockerAdapter {
    async fn list_running(&self) -> Result<Vec<ContainerSummary>, RuntimeError> {
        let docker = self.connect()?;

        let mut filters = HashMap::new();
        filters.insert("status".to_string(), vec!["running".to_string()]);

        let listed = docker
            .list_containers(Some(ListContainersOptions::<String> {
                all: false,
                filters,
                ..Default::default()
            }))
            .await?;

        debug!("daemon reported {} running container(s)", listed.len());

        let mut summaries = Vec::with_capacity(listed.len());
        for entry in &listed {
            let id = entry.id.as_deref().ok_or_else(|| {
                RuntimeError::Unexpected("container list entry without an id".to_string())
            })?;

            let inspected = docker
                .inspect_container(id, None::<InspectContainerOptions>)
                .await?;

            let image_ref = entry
                .image_id
                .clone()
                .or_else(|| inspected.image.clone())
                .ok_or_else(|| {
                    RuntimeError::Unexpected(format!("container {id} has no image reference"))
                })?;
            let image = docker.inspect_image(&image_ref).await?;

            summaries.push(to_summary(entry, inspected, image)?);
        }

        Ok(summaries)
    }

    async fn daemon_info(&self) -> Result<DaemonInfo, RuntimeError> {
        let docker = self.connect()?;
        docker.ping().await?;
        let version = docker.version().await?;

        Ok(DaemonInfo {
            version: version.version.unwrap_or_default(),
            api_version: version.api_version.unwrap_or_default(),
            os: version.os.unwrap_or_default(),
            arch: version.arch.unwrap_or_default(),
        })
    }
}

/// Folds the list entry, its inspect record and its image into a summary.
fn to_summary(
    listed: &models::ContainerSummary,
    inspected: ContainerInspectResponse,
    image: ImageInspect,
) -> Result<ContainerSummary, RuntimeError> {
    let id = listed
        .id
        .as_deref()
        .or(inspected.id.as_deref())
        .ok_or_else(|| RuntimeError::Unexpected("container without an id".to_string()))?;

    let name = inspected
        .name
        .as_deref()
        .or_else(|| listed.names.as_ref().and_then(|names| names.first()).map(String::as_str))
        .map(display_name)
        .unwrap_or_default();

    let image_id = image
        .id
        .as_deref()
        .or(listed.image_id.as_deref())
        .unwrap_or_default();
    let tags = image.repo_tags.clone().unwrap_or_default();

    let status = inspected
        .state
        .as_ref()
        .and_then(|state| state.status.as_ref())
        .map(ToString::to_string)
        .or_else(|| listed.state.clone())
        .unwrap_or_default();

    let ports = inspected
        .network_settings
        .and_then(|settings| settings.ports)
        .map(convert_ports)
        .unwrap_or_default();

    Ok(ContainerSummary {
        id: short_container_id(id),
        name,
        image: display_image(&tags, image_id),
        status,
        ports,
    })
}

fn convert_ports(ports: models::PortMap) -> PortMap {
    ports
        .into_iter()
        .map(|(container_port, bindings)| {
            let bindings = bindings
                .unwrap_or_default()
                .into_iter()
                .map(|binding| HostBinding::from_parts(binding.host_ip, binding.host_port))
                .collect();
            (container_port, bindings)
        })
        .collect()
}
