mod container_service;

pub use container_service::{
    ContainerService, DAEMON_UNAVAILABLE_PREFIX, UNEXPECTED_ERROR_PREFIX,
};
