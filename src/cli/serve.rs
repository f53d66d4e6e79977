use super::AppContext;
use crate::mcp::DockerServer;
use anyhow::Result;

pub fn build_server(ctx: &AppContext) -> DockerServer {
    DockerServer::new(ctx.config.server_name(), ctx.container_service.clone())
}

pub async fn run(ctx: &AppContext) -> Result<()> {
    build_server(ctx).serve_stdio().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::AppConfig;
    use crate::test_support::MockRuntime;
    use std::sync::Arc;

    #[test]
    fn test_server_name_comes_from_config() {
        let config = AppConfig::parse("[server]\nname = \"containers\"\n").unwrap();
        let ctx = AppContext::with_runtime(config, Arc::new(MockRuntime::new()));

        assert_eq!(build_server(&ctx).name(), "containers");
    }

    #[test]
    fn test_default_server_name() {
        let ctx = AppContext::with_runtime(AppConfig::default(), Arc::new(MockRuntime::new()));
        assert_eq!(build_server(&ctx).name(), "docker");
    }
}
