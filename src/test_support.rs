use crate::domain::{ContainerRuntime, ContainerSummary, DaemonInfo, RuntimeError};
use async_trait::async_trait;
use std::sync::RwLock;

/// In-memory `ContainerRuntime` for tests.
#[derive(Debug)]
pub struct MockRuntime {
    containers: RwLock<Vec<ContainerSummary>>,
    commands: RwLock<Vec<String>>,
    failure: RwLock<Option<RuntimeError>>,
    panic_with: RwLock<Option<String>>,
}

impl MockRuntime {
    pub fn new() -> Self {
        Self {
            containers: RwLock::new(Vec::new()),
            commands: RwLock::new(Vec::new()),
            failure: RwLock::new(None),
            panic_with: RwLock::new(None),
        }
    }

    pub fn add_container(&self, container: ContainerSummary) {
        self.containers.write().unwrap().push(container);
    }

    /// Every subsequent call fails with `error`.
    pub fn set_failure(&self, error: RuntimeError) {
        *self.failure.write().unwrap() = Some(error);
    }

    pub fn clear_failure(&self) {
        *self.failure.write().unwrap() = None;
    }

    /// `list_running` panics with `message`.
    pub fn set_panic(&self, message: &str) {
        *self.panic_with.write().unwrap() = Some(message.to_string());
    }

    pub fn get_commands(&self) -> Vec<String> {
        self.commands.read().unwrap().clone()
    }

    fn record_command(&self, cmd: &str) {
        self.commands.write().unwrap().push(cmd.to_string());
    }

    fn check_fail(&self) -> Result<(), RuntimeError> {
        match self.failure.read().unwrap().as_ref() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl Default for MockRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContainerRuntime for MockRuntime {
    async fn list_running(&self) -> Result<Vec<ContainerSummary>, RuntimeError> {
        self.record_command("list_running");

        let panic_with = self.panic_with.read().unwrap().clone();
        if let Some(message) = panic_with {
            panic!("{}", message);
        }

        self.check_fail()?;
        Ok(self.containers.read().unwrap().clone())
    }

    async fn daemon_info(&self) -> Result<DaemonInfo, RuntimeError> {
        self.record_command("daemon_info");
        self.check_fail()?;

        Ok(DaemonInfo {
            version: "mock".to_string(),
            api_version: "1.45".to_string(),
            os: "linux".to_string(),
            arch: "amd64".to_string(),
        })
    }
}
