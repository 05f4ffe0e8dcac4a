//! Storefront configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::locale::Locale;

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Default WhatsApp deep link for the contact strip.
pub const DEFAULT_WHATSAPP_URL: &str = "https://wa.me/213550000000";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub storefront: StoreSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub hero: HeroSettings,

    #[serde(default)]
    pub contact: ContactSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            toml::from_str(&content).map_err(|source| ConfigError::Toml {
                path: path.to_path_buf(),
                source,
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Search `start` and its ancestors for a config file. The nearest file
    /// wins; if it fails to load, the error is returned rather than falling
    /// back to a file further up.
    pub fn find(start: &Path) -> Result<Option<(PathBuf, Self)>, ConfigError> {
        let nearest = start.ancestors().find_map(|dir| {
            CONFIG_FILE_NAMES
                .iter()
                .map(|name| dir.join(name))
                .find(|candidate| candidate.is_file())
        });

        match nearest {
            Some(path) => {
                let config = Self::load(&path)?;
                Ok(Some((path, config)))
            }
            None => Ok(None),
        }
    }

    /// Reject values that would break rendering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.product_limit == 0 {
            return Err(ConfigError::Invalid(
                "catalog.product_limit must be at least 1".to_string(),
            ));
        }
        if self.hero.rotate_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "hero.rotate_interval_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Page-level settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Locale used when the request expresses no preference.
    #[serde(default)]
    pub default_locale: Locale,

    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "Computer House | Maison Tech".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            default_locale: Locale::default(),
            title: default_title(),
        }
    }
}

/// Where catalog data comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Base URL of the catalog API (used by the HTTP source).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Directory holding `taxonomy.json` and `products.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixtures_dir: Option<PathBuf>,

    /// Page-size hint for the featured products request.
    #[serde(default = "default_product_limit")]
    pub product_limit: u32,
}

fn default_product_limit() -> u32 {
    12
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            fixtures_dir: None,
            product_limit: default_product_limit(),
        }
    }
}

/// Hero slider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroSettings {
    #[serde(default = "default_rotate_interval_ms")]
    pub rotate_interval_ms: u64,
}

fn default_rotate_interval_ms() -> u64 {
    5000
}

impl HeroSettings {
    pub fn rotate_interval(&self) -> Duration {
        Duration::from_millis(self.rotate_interval_ms)
    }
}

impl Default for HeroSettings {
    fn default() -> Self {
        Self {
            rotate_interval_ms: default_rotate_interval_ms(),
        }
    }
}

/// Contact strip settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSettings {
    #[serde(default = "default_whatsapp_url")]
    pub whatsapp_url: String,
}

fn default_whatsapp_url() -> String {
    DEFAULT_WHATSAPP_URL.to_string()
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            whatsapp_url: default_whatsapp_url(),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON lines, for log aggregation.
    #[default]
    Json,
    /// Human-readable, for development.
    Human,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive; `RUST_LOG` overrides it.
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Contents of a fresh `storefront.toml`.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront home page configuration

[storefront]
default_locale = "fr"
title = "{title}"

[catalog]
# base_url = "https://api.example.dz/store"
# fixtures_dir = "fixtures"
product_limit = 12

[hero]
rotate_interval_ms = 5000

[contact]
whatsapp_url = "{whatsapp}"

[logging]
level = "info"
format = "human"
"#,
        title = default_title(),
        whatsapp = DEFAULT_WHATSAPP_URL,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.storefront.default_locale, Locale::Fr);
        assert_eq!(config.catalog.product_limit, 12);
        assert_eq!(config.hero.rotate_interval(), Duration::from_secs(5));
        assert_eq!(config.contact.whatsapp_url, DEFAULT_WHATSAPP_URL);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_generated_config_parses() {
        let config: StorefrontConfig = toml::from_str(&generate_default_config()).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.logging.format, LogFormat::Human);
        assert_eq!(config.catalog.base_url, None);
    }

    #[test]
    fn test_load_toml_with_partial_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(
            &path,
            "[storefront]\ndefault_locale = \"ar\"\n\n[catalog]\nproduct_limit = 8\n",
        )
        .unwrap();

        let config = StorefrontConfig::load(&path).unwrap();
        assert_eq!(config.storefront.default_locale, Locale::Ar);
        assert_eq!(config.catalog.product_limit, 8);
        assert_eq!(config.hero.rotate_interval_ms, 5000);
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.json");
        std::fs::write(&path, r#"{"hero": {"rotate_interval_ms": 3000}}"#).unwrap();

        let config = StorefrontConfig::load(&path).unwrap();
        assert_eq!(config.hero.rotate_interval_ms, 3000);
    }

    #[test]
    fn test_rejects_zero_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "[catalog]\nproduct_limit = 0\n").unwrap();

        let err = StorefrontConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_find_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".storefront.toml"), "[hero]\nrotate_interval_ms = 700\n")
            .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (path, config) = StorefrontConfig::find(&nested).unwrap().unwrap();
        assert!(path.ends_with(".storefront.toml"));
        assert_eq!(config.hero.rotate_interval_ms, 700);
    }

    #[test]
    fn test_find_reports_invalid_nearest_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("storefront.json"), r#"{"hero": {"rotate_interval_ms": 700}}"#)
            .unwrap();
        let nested = dir.path().join("shop");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("storefront.toml"), "[catalog]\nproduct_limit = 0\n").unwrap();

        let err = StorefrontConfig::find(&nested).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        std::fs::write(nested.join("storefront.toml"), "[catalog\n").unwrap();
        let err = StorefrontConfig::find(&nested).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = StorefrontConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
