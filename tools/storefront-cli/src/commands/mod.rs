//! CLI command implementations.

pub mod config;
pub mod render;

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Display locale (`fr` or `ar`). Defaults to `storefront.default_locale`.
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Directory holding `taxonomy.json` and `products.json`.
    /// Defaults to `catalog.fixtures_dir`.
    #[arg(short, long)]
    pub fixtures: Option<PathBuf>,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Render the first paint, before catalog data arrives.
    #[arg(long)]
    pub skeleton: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
