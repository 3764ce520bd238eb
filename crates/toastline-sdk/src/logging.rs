//! Logging setup for applications embedding Toastline

use tracing_subscriber::EnvFilter;

use toastline_core::{LogFormat, LoggingConfig, PresenterConfig, ToastError, ToastResult};

/// Build the filter for `config`. `RUST_LOG`, when set, takes precedence.
pub fn env_filter(config: &LoggingConfig) -> ToastResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| {
        ToastError::config_with_context(
            format!("Invalid log level: {}", e),
            format!("logging.level = {:?}", config.level),
        )
    })
}

/// Install the global tracing subscriber.
///
/// Fails when the level is not a valid filter directive or a subscriber is
/// already installed.
pub fn init_logging(config: &LoggingConfig) -> ToastResult<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| ToastError::config(format!("Failed to install log subscriber: {}", e)))
}

/// Install the global tracing subscriber from the `[logging]` table of a
/// presenter configuration
pub fn init_from_config(config: &PresenterConfig) -> ToastResult<()> {
    init_logging(&config.logging)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_is_config_error() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let config = LoggingConfig {
            level: "toastline=loud".to_string(),
            ..LoggingConfig::default()
        };
        let err = env_filter(&config).unwrap_err();
        assert_eq!(err.error_code(), "TOAST_CONFIG");
    }

    #[test]
    fn test_second_init_fails() {
        let config = LoggingConfig {
            format: LogFormat::Compact,
            ..LoggingConfig::default()
        };
        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
        assert!(init_from_config(&PresenterConfig::default()).is_err());
    }
}
