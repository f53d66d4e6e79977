use crate::services::ContainerService;
use anyhow::{Context, Result, anyhow};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::transport::stdio;
use rmcp::{ErrorData as McpError, ServerHandler, ServiceExt, tool, tool_handler, tool_router};
use std::sync::Arc;
use tracing::info;

pub const LIST_CONTAINERS: &str = "list_containers";

const INSTRUCTIONS: &str = "Inspect the local Docker daemon. \
`list_containers` reports every running container with its ID, name, image, status and port mappings.";

/// Tool handler registered under the configured server name (`docker` by default).
#[derive(Clone)]
pub struct DockerServer {
    name: String,
    service: Arc<ContainerService>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl DockerServer {
    pub fn new(name: impl Into<String>, service: Arc<ContainerService>) -> Self {
        Self {
            name: name.into(),
            service,
            tool_router: Self::tool_router(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the registered tools, in registration order.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }

    #[tool(
        description = "List all running Docker containers. Returns a formatted list with each container's ID, name, image, status and port mappings."
    )]
    pub async fn list_containers(&self) -> Result<CallToolResult, McpError> {
        let report = self.service.list_running_containers().await;
        Ok(CallToolResult::success(vec![Content::text(report)]))
    }

    /// Serves on the process' stdin/stdout until the client disconnects.
    pub async fn serve_stdio(self) -> Result<()> {
        info!("servidor MCP '{}' aguardando mensagens", self.name);

        let running = self
            .serve(stdio())
            .await
            .map_err(|err| anyhow!("iniciando sessão MCP: {err}"))?;
        running.waiting().await.context("aguardando fim da sessão MCP")?;

        info!("stdin encerrado, finalizando servidor");
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for DockerServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}
