use super::{ContainerSummary, DaemonInfo};
use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

/// Failures reported by a container runtime backend.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuntimeError {
    /// The daemon could not be reached or reported an error.
    #[error("{0}")]
    DaemonUnavailable(String),
    /// Anything else, e.g. a response missing required fields.
    #[error("{0}")]
    Unexpected(String),
}

/// Trait for container runtime operations
#[async_trait]
pub trait ContainerRuntime: Send + Sync + Debug {
    /// List containers currently in the running state
    async fn list_running(&self) -> Result<Vec<ContainerSummary>, RuntimeError>;

    /// Ping the daemon and fetch its version details
    async fn daemon_info(&self) -> Result<DaemonInfo, RuntimeError>;
}
