use super::docker_adapter::{DEFAULT_TIMEOUT_SECS, DockerSettings};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_CONFIG_FILE_NAME: &str = "config.toml";
pub const DEFAULT_SERVER_NAME: &str = "docker";

pub fn default_config_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/root"))
        .join(".config/docker-mcp")
}

pub fn default_config_path() -> PathBuf {
    default_config_dir().join(DEFAULT_CONFIG_FILE_NAME)
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct DockerConfig {
    pub socket: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub name: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub docker: DockerConfig,
    #[serde(default)]
    pub server: ServerConfig,
    /// File the config was read from; `None` when running on defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl AppConfig {
    /// Loads the config named on the command line, or the default file when
    /// it exists, or falls back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                let path = expand_path(&path.to_string_lossy());
                if !path.exists() {
                    bail!("arquivo de configuração não encontrado: {:?}", path);
                }
                Self::from_file(&path)
            }
            None => {
                let path = default_config_path();
                if path.exists() {
                    Self::from_file(&path)
                } else {
                    debug!("nenhum arquivo de configuração em {:?}, usando padrões", path);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("lendo {:?}", path))?;
        let mut config =
            Self::parse(&content).with_context(|| format!("parseando {:?}", path))?;
        config.source = Some(path.to_path_buf());
        info!("configuração carregada de {:?}", path);
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if is_blank(self.docker.socket.as_deref()) {
            bail!("docker.socket não pode ser vazio");
        }
        if self.docker.timeout_secs == Some(0) {
            bail!("docker.timeout_secs deve ser maior que zero");
        }
        if is_blank(self.server.name.as_deref()) {
            bail!("server.name não pode ser vazio");
        }
        Ok(())
    }

    pub fn docker_settings(&self) -> DockerSettings {
        DockerSettings {
            socket: self.docker.socket.as_deref().map(socket_path),
            timeout_secs: self.docker.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn server_name(&self) -> &str {
        self.server.name.as_deref().unwrap_or(DEFAULT_SERVER_NAME)
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.trim().is_empty())
}

/// Accepts both `unix:///run/docker.sock` and a bare path, with `~` expanded.
fn socket_path(raw: &str) -> PathBuf {
    expand_path(raw.trim_start_matches("unix://"))
}

fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::parse("").unwrap();
        let settings = config.docker_settings();

        assert_eq!(settings.socket, None);
        assert_eq!(settings.timeout_secs, 120);
        assert_eq!(config.server_name(), "docker");
        assert_eq!(config.source, None);
    }

    #[test]
    fn test_full_config() {
        let config = AppConfig::parse(
            r#"
[docker]
socket = "unix:///var/run/docker.sock"
timeout_secs = 15

[server]
name = "containers"
"#,
        )
        .unwrap();
        let settings = config.docker_settings();

        assert_eq!(settings.socket, Some(PathBuf::from("/var/run/docker.sock")));
        assert_eq!(settings.timeout_secs, 15);
        assert_eq!(config.server_name(), "containers");
    }

    #[test]
    fn test_tilde_is_expanded() {
        let config = AppConfig::parse("[docker]\nsocket = \"~/.docker/run/docker.sock\"\n").unwrap();
        let socket = config.docker_settings().socket.unwrap();
        assert!(!socket.to_string_lossy().starts_with('~'));
        assert!(socket.ends_with(".docker/run/docker.sock"));
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(AppConfig::parse("[docker]\ntimeout_secs = 0\n").is_err());
        assert!(AppConfig::parse("[docker]\nsocket = \"  \"\n").is_err());
        assert!(AppConfig::parse("[server]\nname = \"\"\n").is_err());
        assert!(AppConfig::parse("[docker]\nhost = \"tcp://x\"\n").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[docker]\ntimeout_secs = 5\n").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.docker_settings().timeout_secs, 5);
        assert_eq!(config.source, Some(path));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }
}
