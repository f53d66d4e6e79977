mod container;
pub mod report;
pub mod traits;

pub use container::{
    ContainerSummary, DEFAULT_HOST_IP, DEFAULT_HOST_PORT, DaemonInfo, HostBinding, PortMap,
    display_image, display_name, short_container_id, short_image_id,
};
pub use traits::{ContainerRuntime, RuntimeError};
