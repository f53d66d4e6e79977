use super::AppContext;
use anyhow::{Context, Result};
use std::io::Write;

/// Prints the running-container report once.
pub async fn run(ctx: &AppContext, out: &mut impl Write) -> Result<()> {
    let report = ctx.container_service.list_running_containers().await;
    writeln!(out, "{report}").context("escrevendo relatório")?;
    Ok(())
}
