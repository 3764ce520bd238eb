//! Core error types for Toastline

use std::fmt;

use thiserror::Error;

use crate::presentation::{PresentationId, PresentationState};

/// Result type alias for Toastline operations
pub type ToastResult<T> = Result<T, ToastError>;

/// Lifecycle notification kinds that can arrive out of order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    Presented,
    Interaction,
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Presented => write!(f, "presented"),
            Self::Interaction => write!(f, "interaction"),
        }
    }
}

/// A display-service callback that the presentation state does not allow.
///
/// These indicate a faulty display-service integration, not a misuse by the
/// code that requested the presentation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("{event} notification for presentation {id} received while {state}")]
    OutOfOrder {
        id: PresentationId,
        event: LifecycleEvent,
        state: PresentationState,
    },
}

impl LifecycleError {
    /// The presentation the rejected notification was addressed to
    pub fn id(&self) -> &PresentationId {
        match self {
            Self::OutOfOrder { id, .. } => id,
        }
    }
}

/// Main error type for Toastline
#[derive(Error, Debug, Clone)]
pub enum ToastError {
    /// Presentation lifecycle contract violations
    #[error("Lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        context: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// The process-wide presenter was used before one was installed
    #[error("No default presenter has been installed")]
    NoDefaultPresenter,

    /// A second process-wide presenter was installed
    #[error("A default presenter is already installed")]
    AlreadyInstalled,

    /// The UI queue behind a dispatcher has shut down
    #[error("Dispatcher is closed, the job was dropped")]
    DispatcherClosed,
}

impl ToastError {
    /// Get the error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Lifecycle(_) => "TOAST_LIFECYCLE",
            Self::Config { .. } => "TOAST_CONFIG",
            Self::Io { .. } => "TOAST_IO",
            Self::NoDefaultPresenter => "TOAST_NO_DEFAULT_PRESENTER",
            Self::AlreadyInstalled => "TOAST_ALREADY_INSTALLED",
            Self::DispatcherClosed => "TOAST_DISPATCHER_CLOSED",
        }
    }

    /// Get optional context about the error
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Config { context, .. } => context.as_deref(),
            Self::Io { path, .. } => path.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ToastError::config("bad").error_code(), "TOAST_CONFIG");
        assert_eq!(ToastError::io("gone").error_code(), "TOAST_IO");
        assert_eq!(
            ToastError::NoDefaultPresenter.error_code(),
            "TOAST_NO_DEFAULT_PRESENTER"
        );
    }

    #[test]
    fn test_lifecycle_error_display() {
        let error = LifecycleError::OutOfOrder {
            id: PresentationId::from("abc"),
            event: LifecycleEvent::Interaction,
            state: PresentationState::Pending,
        };
        assert_eq!(
            error.to_string(),
            "interaction notification for presentation abc received while pending"
        );

        let wrapped: ToastError = error.into();
        assert_eq!(wrapped.error_code(), "TOAST_LIFECYCLE");
    }

    #[test]
    fn test_config_error_context() {
        let error = ToastError::config_with_context("unknown policy", "contract_policy");
        assert_eq!(error.context(), Some("contract_policy"));
        assert_eq!(error.to_string(), "Configuration error: unknown policy");
    }
}
