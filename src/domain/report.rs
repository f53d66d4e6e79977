//! Text rendering of running-container snapshots.

use super::{ContainerSummary, PortMap};

pub const NO_RUNNING_CONTAINERS: &str = "No running containers found.";
pub const NO_EXPOSED_PORTS: &str = "No exposed ports";

/// Renders the full report handed back to the caller.
pub fn render_report(containers: &[ContainerSummary]) -> String {
    if containers.is_empty() {
        return NO_RUNNING_CONTAINERS.to_string();
    }

    let mut out = format!("Found {} running container(s):\n\n", containers.len());

    for container in containers {
        let ports = if container.ports.is_empty() {
            NO_EXPOSED_PORTS.to_string()
        } else {
            format_ports(&container.ports)
        };

        out.push_str(&format!("Container: {}\n", container.name));
        out.push_str(&format!("  ID: {}\n", container.id));
        out.push_str(&format!("  Image: {}\n", container.image));
        out.push_str(&format!("  Status: {}\n", container.status));
        out.push_str(&format!("  Ports: {ports}\n"));
        out.push('\n');
    }

    out.trim_end().to_string()
}

/// One entry per host binding, or `<port> (not bound)` for unpublished ports.
pub fn format_ports(ports: &PortMap) -> String {
    let mut entries = Vec::new();

    for (container_port, bindings) in ports {
        if bindings.is_empty() {
            entries.push(format!("{container_port} (not bound)"));
            continue;
        }
        for binding in bindings {
            entries.push(format!(
                "{}:{} -> {container_port}",
                binding.host_ip, binding.host_port
            ));
        }
    }

    entries.join(", ")
}
