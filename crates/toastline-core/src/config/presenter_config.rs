//! Presenter configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::LoggingConfig;
use crate::animation::Animation;
use crate::error::{ToastError, ToastResult};
use crate::request::Lifetime;

/// What the presenter does when the display service breaks the lifecycle
/// contract (shown twice, interaction before shown, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractPolicy {
    /// Log a warning and ignore the callback
    #[default]
    Lenient,
    /// Panic. Meant for test suites exercising a display-service integration.
    Strict,
}

/// Defaults applied by a presenter when a request does not override them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    pub default_lifetime: Lifetime,
    pub default_animation: Animation,
    /// Whether [`Presenter::dismiss_all`](crate::presenter::Presenter::dismiss_all) animates
    pub dismiss_animated: bool,
    pub contract_policy: ContractPolicy,
    pub logging: LoggingConfig,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            default_lifetime: Lifetime::default(),
            default_animation: Animation::default(),
            dismiss_animated: true,
            contract_policy: ContractPolicy::Lenient,
            logging: LoggingConfig::default(),
        }
    }
}

impl PresenterConfig {
    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> ToastResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load a TOML file
    pub fn load(path: impl AsRef<Path>) -> ToastResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| ToastError::io_with_path(e.to_string(), path.display().to_string()))?;
        Self::from_toml_str(&source).map_err(|e| match e {
            ToastError::Config { message, .. } => {
                ToastError::config_with_context(message, path.display().to_string())
            }
            other => other,
        })
    }

    #[must_use]
    pub fn with_lifetime(mut self, lifetime: Lifetime) -> Self {
        self.default_lifetime = lifetime;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.default_animation = animation;
        self
    }

    #[must_use]
    pub fn with_contract_policy(mut self, policy: ContractPolicy) -> Self {
        self.contract_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Curve;
    use crate::config::LogFormat;
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = PresenterConfig::default();
        assert_eq!(config.default_lifetime, Lifetime::Finite(Duration::from_secs(2)));
        assert_eq!(config.contract_policy, ContractPolicy::Lenient);
        assert!(config.dismiss_animated);
    }

    #[test]
    fn test_parse_full_document() {
        let config = PresenterConfig::from_toml_str(
            r#"
            default_lifetime = { finite = "3s" }
            dismiss_animated = false
            contract_policy = "strict"

            [default_animation]
            in_curve = "spring"

            [logging]
            level = "debug"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_lifetime, Lifetime::seconds(3));
        assert!(!config.dismiss_animated);
        assert_eq!(config.contract_policy, ContractPolicy::Strict);
        assert_eq!(config.default_animation.in_curve, Curve::Spring);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_until_interaction_lifetime() {
        let config =
            PresenterConfig::from_toml_str(r#"default_lifetime = "until_interaction""#).unwrap();
        assert_eq!(config.default_lifetime, Lifetime::UntilInteraction);
    }

    #[test]
    fn test_unknown_policy_is_config_error() {
        let error = PresenterConfig::from_toml_str(r#"contract_policy = "fatal""#).unwrap_err();
        assert_eq!(error.error_code(), "TOAST_CONFIG");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "contract_policy = \"strict\"").unwrap();

        let config = PresenterConfig::load(file.path()).unwrap();
        assert_eq!(config.contract_policy, ContractPolicy::Strict);
    }

    #[test]
    fn test_load_missing_file() {
        let error = PresenterConfig::load("/definitely/not/here.toml").unwrap_err();
        assert_eq!(error.error_code(), "TOAST_IO");
        assert_eq!(error.context(), Some("/definitely/not/here.toml"));
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dismiss_animated = \"sometimes\"").unwrap();

        let error = PresenterConfig::load(file.path()).unwrap_err();
        assert_eq!(error.error_code(), "TOAST_CONFIG");
        assert_eq!(error.context(), Some(file.path().display().to_string().as_str()));
    }
}
