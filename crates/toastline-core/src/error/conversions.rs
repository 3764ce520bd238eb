//! From trait implementations for ToastError conversions

use super::types::ToastError;

impl From<std::io::Error> for ToastError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<toml::de::Error> for ToastError {
    fn from(error: toml::de::Error) -> Self {
        Self::config(error.to_string())
    }
}
