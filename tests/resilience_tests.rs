mod common;

use docker_mcp::domain::RuntimeError;
use docker_mcp::infra::{DockerAdapter, DockerSettings};
use docker_mcp::mcp::DockerServer;
use docker_mcp::services::ContainerService;
use docker_mcp::test_support::MockRuntime;
use std::path::PathBuf;
use std::sync::Arc;

#[tokio::test]
async fn test_unreachable_daemon_yields_error_text() {
    // Points at a socket that cannot exist; the real adapter must still answer with text.
    let adapter = DockerAdapter::new(DockerSettings {
        socket: Some(PathBuf::from("/nonexistent/dir/docker.sock")),
        timeout_secs: 2,
    });
    let service = ContainerService::new(Arc::new(adapter));

    let output = service.list_running_containers().await;

    assert!(
        output.starts_with("Error: Unable to connect to Docker daemon. Is Docker running? Details: "),
        "unexpected output: {output}"
    );
}

#[tokio::test]
async fn test_undecodable_daemon_reply_is_unexpected() {
    let dir = tempfile::tempdir().unwrap();
    let socket = dir.path().join("docker.sock");
    common::spawn_unix_daemon(&socket, r#"[{"Id": 42, garbage"#);

    let adapter = DockerAdapter::new(DockerSettings {
        socket: Some(socket),
        timeout_secs: 5,
    });
    let service = ContainerService::new(Arc::new(adapter));

    let output = service.list_running_containers().await;

    assert!(
        output.starts_with("Error: An unexpected error occurred while listing containers: "),
        "unexpected output: {output}"
    );
}

#[tokio::test]
async fn test_running_list_from_unix_socket_daemon() {
    let dir = tempfile::tempdir().unwrap();
    let socket = dir.path().join("docker.sock");
    common::spawn_unix_daemon(&socket, "[]");

    let adapter = DockerAdapter::new(DockerSettings {
        socket: Some(socket),
        timeout_secs: 5,
    });
    let service = ContainerService::new(Arc::new(adapter));

    assert_eq!(
        service.list_running_containers().await,
        "No running containers found."
    );
}

#[tokio::test]
async fn test_tool_call_reports_failure_as_content() {
    let mock = Arc::new(MockRuntime::new());
    mock.set_failure(RuntimeError::DaemonUnavailable(
        "permission denied".to_string(),
    ));
    let server = DockerServer::new("docker", Arc::new(ContainerService::new(mock)));

    let result = server.list_containers().await.unwrap();
    let json = serde_json::to_value(result).unwrap();

    assert_ne!(json["isError"], true);
    assert_eq!(
        json["content"][0]["text"],
        "Error: Unable to connect to Docker daemon. Is Docker running? Details: permission denied"
    );
}

#[tokio::test]
async fn test_service_recovers_after_failure() {
    let mock = Arc::new(MockRuntime::new());
    let service = ContainerService::new(mock.clone());

    mock.set_failure(RuntimeError::DaemonUnavailable("down".to_string()));
    assert!(service.list_running_containers().await.starts_with("Error:"));

    mock.clear_failure();
    assert_eq!(
        service.list_running_containers().await,
        "No running containers found."
    );
}

#[tokio::test]
async fn test_panic_in_backend_is_reported_not_raised() {
    let mock = Arc::new(MockRuntime::new());
    mock.set_panic("boom");
    let service = ContainerService::new(mock);

    assert_eq!(
        service.list_running_containers().await,
        "Error: An unexpected error occurred while listing containers: boom"
    );
}

#[tokio::test]
async fn test_concurrent_callers_are_independent() {
    let mock = Arc::new(MockRuntime::new());
    let service = Arc::new(ContainerService::new(mock.clone()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = service.clone();
            tokio::spawn(async move { service.list_running_containers().await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), "No running containers found.");
    }
    assert_eq!(mock.get_commands().len(), 8);
}
