//! Toastline Core Library
//!
//! This crate provides the presentation lifecycle of transient notifications:
//! the per-presentation handle with its event channels, the dismissal token
//! handed to handlers, and the presenter that drives a display service.
//!
//! Rendering is out of scope. A [`DisplayService`] implementation owns the
//! on-screen side and reports back through [`DisplayCallbacks`].

pub mod animation;
pub mod attributes;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod display;
pub mod error;
pub mod interaction;
pub mod notification;
pub mod presentation;
pub mod presenter;
pub mod request;
pub mod signal;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use animation::{Animation, Curve, Direction, PresentationType};
pub use attributes::{Color, NotificationAttributes, ToastSize};
pub use config::{ContractPolicy, LogFormat, LoggingConfig, PresenterConfig};
pub use context::{DefaultContext, PresentationContext, context_fn};
pub use dispatch::{Dispatcher, InlineDispatcher, QueueDispatcher, UiQueue};
pub use display::{DisplayCallbacks, DisplayService};
pub use error::{LifecycleError, ToastError, ToastResult};
pub use interaction::UserInteraction;
pub use notification::{Notification, NotificationContent};
pub use presentation::{Dismisser, Presentation, PresentationId, PresentationState};
pub use presenter::{PresentOptions, Presenter, PresenterBuilder};
pub use request::{Lifetime, ToastRequest};
pub use signal::Signal;
