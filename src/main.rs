use anyhow::Result;
use clap::{Parser, Subcommand};
use docker_mcp::AppConfig;
use docker_mcp::cli::{AppContext, doctor, list, serve};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "docker-mcp",
    version,
    about = "MCP server exposing Docker container inspection"
)]
struct Cli {
    /// Arquivo de configuração (default: ~/.config/docker-mcp/config.toml)
    #[arg(long, env = "DOCKER_MCP_CONFIG")]
    config: Option<PathBuf>,

    /// Filtro de log quando RUST_LOG não está definido
    #[arg(long, env = "DOCKER_MCP_LOG", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Servidor MCP via stdio (padrão)
    Serve,
    /// Lista os containers em execução uma vez
    List,
    /// Verifica a conexão com o daemon Docker
    Doctor,
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // stdout is the protocol channel
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let config = AppConfig::load(cli.config.as_deref())?;
    let ctx = AppContext::new(config);

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::run(&ctx).await,
        Commands::List => list::run(&ctx, &mut std::io::stdout()).await,
        Commands::Doctor => {
            if !doctor::run(&ctx, &mut std::io::stdout()).await? {
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
