use std::collections::BTreeMap;

pub const DEFAULT_HOST_IP: &str = "0.0.0.0";
pub const DEFAULT_HOST_PORT: &str = "?";

const SHORT_CONTAINER_ID_LEN: usize = 12;
const SHORT_IMAGE_ID_LEN: usize = 10;
const DIGEST_PREFIX: &str = "sha256:";

/// A host-side binding for a published container port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostBinding {
    pub host_ip: String,
    pub host_port: String,
}

impl HostBinding {
    /// Builds a binding, substituting defaults for whatever the daemon omitted.
    pub fn from_parts(host_ip: Option<String>, host_port: Option<String>) -> Self {
        Self {
            host_ip: host_ip.unwrap_or_else(|| DEFAULT_HOST_IP.to_string()),
            host_port: host_port.unwrap_or_else(|| DEFAULT_HOST_PORT.to_string()),
        }
    }
}

/// Container-side `port/protocol` mapped to its host bindings.
///
/// An empty binding list means the port is exposed but not published.
pub type PortMap = BTreeMap<String, Vec<HostBinding>>;

/// Snapshot of one running container, taken at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSummary {
    pub id: String,
    pub name: String,
    pub image: String,
    pub status: String,
    pub ports: PortMap,
}

/// Version details reported by the daemon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DaemonInfo {
    pub version: String,
    pub api_version: String,
    pub os: String,
    pub arch: String,
}

pub fn short_container_id(id: &str) -> String {
    id.chars().take(SHORT_CONTAINER_ID_LEN).collect()
}

/// Short form of an image id: `sha256:` plus ten hex digits, or the first
/// ten characters of an unprefixed id.
pub fn short_image_id(id: &str) -> String {
    let len = if id.starts_with(DIGEST_PREFIX) {
        DIGEST_PREFIX.len() + SHORT_IMAGE_ID_LEN
    } else {
        SHORT_IMAGE_ID_LEN
    };
    id.chars().take(len).collect()
}

/// First tag when the image has any, otherwise its short id.
pub fn display_image(tags: &[String], image_id: &str) -> String {
    tags.first()
        .cloned()
        .unwrap_or_else(|| short_image_id(image_id))
}

/// Daemon names carry a leading slash (`/web`).
pub fn display_name(raw: &str) -> String {
    raw.trim_start_matches('/').to_string()
}
