use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_logging;
pub use settings::{AnalyticsConfig, Config, LogFormat, LoggingConfig, ServerConfig};

/// Default file name looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "journal.toml";

/// Prefix for environment overrides, e.g. `JOURNAL__SERVER__PORT=8080`.
pub const ENV_PREFIX: &str = "JOURNAL";

/// Loads the application configuration.
///
/// Reads the given TOML file (or `journal.toml` in the working directory when
/// `path` is `None`), layers `JOURNAL__*` environment variables on top,
/// deserializes into our strongly-typed `Config` and validates it. A missing
/// file is not an error: every section has defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(p) => config::File::from(p).required(true),
        None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_report_contract() {
        let config = Config::default();
        assert_eq!(config.analytics.weekly_window, 12);
        assert_eq!(config.analytics.unknown_label, "Unknown");
        assert_eq!(config.server.port, 3000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn loads_partial_file_over_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[analytics]\nweekly_window = 8\n\n[server]\nport = 8088").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.analytics.weekly_window, 8);
        assert_eq!(config.analytics.unknown_label, "Unknown");
        assert_eq!(config.server.port, 8088);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn rejects_zero_weekly_window() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[analytics]\nweekly_window = 0").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = load_config(Some(Path::new("/definitely/not/here/journal.toml")));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
