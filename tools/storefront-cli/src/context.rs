//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use storefront_core::StorefrontConfig;

use crate::output::Output;

/// Execution context for CLI commands.
#[derive(Debug)]
pub struct Context {
    pub config: StorefrontConfig,
    /// File the config came from, if any.
    pub config_path: Option<PathBuf>,
    pub output: Output,
    pub cwd: PathBuf,
}

impl Context {
    /// Load the config from `config_path`, or search upward from the working
    /// directory. Defaults apply when nothing is found.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_in(cwd, config_path, output)
    }

    fn load_in(cwd: PathBuf, config_path: Option<&str>, output: Output) -> Result<Self> {
        let (config_path, config) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                let config = StorefrontConfig::load(&path)?;
                (Some(path), config)
            }
            None => match StorefrontConfig::find(&cwd)? {
                Some((path, config)) => (Some(path), config),
                None => (None, StorefrontConfig::default()),
            },
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: impl AsRef<Path>) -> PathBuf {
        resolve(&self.cwd, path)
    }

    /// Resolve a path from the config file, relative to that file's directory.
    pub fn resolve_config_path(&self, path: &Path) -> PathBuf {
        match self.config_path.as_deref().and_then(Path::parent) {
            Some(dir) => resolve(dir, path),
            None => self.resolve_path(path),
        }
    }
}

fn resolve(base: &Path, path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
