use super::AppContext;
use anyhow::{Context, Result};
use std::io::Write;

/// Checks that the daemon answers and reports its version.
///
/// Returns `Ok(false)` when the daemon is unreachable; the details are printed.
pub async fn run(ctx: &AppContext, out: &mut impl Write) -> Result<bool> {
    writeln!(out, "🔍 Checando conexão com o Docker...").context("escrevendo saída")?;

    match &ctx.config.source {
        Some(path) => writeln!(out, "✅ Config: {:?}", path)?,
        None => writeln!(out, "ℹ️  Sem arquivo de config (usando padrões)")?,
    }

    match &ctx.config.docker_settings().socket {
        Some(socket) => writeln!(out, "🔌 Socket: {:?}", socket)?,
        None => writeln!(out, "🔌 Socket: padrão do ambiente (DOCKER_HOST)")?,
    }

    match ctx.container_service.daemon_info().await {
        Ok(info) => {
            writeln!(
                out,
                "✅ Docker {} (API {}) em {}/{}",
                info.version, info.api_version, info.os, info.arch
            )?;
            Ok(true)
        }
        Err(err) => {
            writeln!(out, "⚠️  Docker indisponível: {err}")?;
            Ok(false)
        }
    }
}
