//! Config command.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Path => show_path(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    let storefront = &ctx.config.storefront;

    ctx.output.header("Storefront");
    ctx.output.kv("api_base", &storefront.api_base);
    ctx.output.kv("external_url", &storefront.external_url);
    ctx.output.kv("exchange_rate", &storefront.exchange_rate.to_string());
    ctx.output.kv("external_limit", &storefront.external_limit.to_string());
    ctx.output.kv("external_id_base", &storefront.external_id_base.to_string());
    ctx.output.kv(
        "request_timeout_secs",
        &storefront
            .request_timeout_secs
            .map_or_else(|| "none".to_string(), |secs| secs.to_string()),
    );

    ctx.output.header("Server");
    ctx.output.kv(
        "port",
        &ctx.config
            .server
            .port
            .map_or_else(|| "from PORT (default 4000)".to_string(), |port| port.to_string()),
    );

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("shelf.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn show_path(ctx: &Context) -> Result<()> {
    match &ctx.config_path {
        Some(path) => ctx.output.info(&path.display().to_string()),
        None => ctx.output.warn("No config file found, using defaults"),
    }
    Ok(())
}
