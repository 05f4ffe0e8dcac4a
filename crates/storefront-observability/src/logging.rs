//! Subscriber setup.

use storefront_core::{LogFormat, LoggingSettings};
use tracing_subscriber::EnvFilter;

/// Build the event filter: `RUST_LOG` when set, else the configured level.
///
/// An unparsable level falls back to `info`.
pub fn env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber, writing to stderr (Spin captures it).
///
/// Returns `false` if a subscriber was already installed, which happens when
/// a Spin instance is reused across requests.
pub fn init_logging(settings: &LoggingSettings) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(settings));

    let installed = match settings.format {
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
        LogFormat::Human => builder.with_target(false).try_init(),
    };
    installed.is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_accepts_directives() {
        let settings = LoggingSettings {
            level: "home_sections=debug,info".to_string(),
            format: LogFormat::Human,
        };
        let filter = env_filter(&settings);
        if std::env::var_os("RUST_LOG").is_none() {
            assert!(filter.to_string().contains("home_sections=debug"));
        }
    }

    #[test]
    fn test_second_init_is_reported() {
        let settings = LoggingSettings::default();
        let _ = init_logging(&settings);
        assert!(!init_logging(&settings));
    }
}
