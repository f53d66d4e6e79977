pub mod cli;
pub mod domain;
pub mod infra;
pub mod mcp;
pub mod services;

// Make test_support available for integration tests
pub mod test_support;

pub use domain::{ContainerRuntime, ContainerSummary, HostBinding, RuntimeError};
pub use infra::{AppConfig, DockerAdapter, DockerSettings};
pub use mcp::DockerServer;
pub use services::ContainerService;
