//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};
use storefront_core::{generate_default_config, CONFIG_FILE_NAMES};

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let rendered = toml::to_string_pretty(&ctx.config).context("Failed to format config")?;
    println!("{}", rendered);
    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    ctx.output.success(&format!("Created: {}", config_path.display()));
    ctx.output.info("Set catalog.fixtures_dir, then run `storefront render`.");
    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    ctx.config.validate()?;

    let mut warnings: Vec<String> = Vec::new();
    let catalog = &ctx.config.catalog;
    if catalog.base_url.is_none() && catalog.fixtures_dir.is_none() {
        warnings.push("neither catalog.base_url nor catalog.fixtures_dir is set".to_string());
    }
    if let Some(dir) = &catalog.fixtures_dir {
        let dir = ctx.resolve_config_path(dir);
        if !dir.is_dir() {
            warnings.push(format!("catalog.fixtures_dir {} does not exist", dir.display()));
        }
    }
    if !ctx.config.contact.whatsapp_url.starts_with("https://") {
        warnings.push("contact.whatsapp_url should be an https link".to_string());
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }
    ctx.output.success("Configuration is valid (with warnings)");
    Ok(())
}
