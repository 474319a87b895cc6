//! Serve command.

use anyhow::{Context as _, Result};
use shelf_api::ApiConfig;

use super::ServeArgs;
use crate::context::Context;

/// Run the serve command.
pub async fn run(args: ServeArgs, ctx: &Context) -> Result<()> {
    let config = resolve_port(args.port, ctx.config.server.port, ApiConfig::from_env)
        .context("Invalid server environment")?;

    ctx.output.info(&format!("Serving books on http://{}", config.address()));
    ctx.output.debug("Press Ctrl+C to stop");

    shelf_api::start_server(config)
        .await
        .context("API server failed")?;

    ctx.output.success("Server stopped");
    Ok(())
}

/// Flag, then config file, then environment. The environment is only read
/// when neither of the others sets a port.
fn resolve_port<E>(
    flag: Option<u16>,
    configured: Option<u16>,
    from_env: impl FnOnce() -> Result<ApiConfig, E>,
) -> Result<ApiConfig, E> {
    match flag.or(configured) {
        Some(port) => Ok(ApiConfig { port }),
        None => from_env(),
    }
}
