//! Error types shared by the storefront crates.

use std::path::PathBuf;

/// Errors raised while streaming a page.
#[derive(Debug, thiserror::Error)]
pub enum SectionError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Shell already sent or page completed")]
    ShellAlreadySent,

    #[error("Page already completed")]
    Completed,

    #[error("Streaming error: {0}")]
    StreamError(String),
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse JSON config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid config: {0}")]
    Invalid(String),
}
