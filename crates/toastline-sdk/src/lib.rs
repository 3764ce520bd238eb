//! Toastline SDK
//!
//! This crate provides what an application needs around the core lifecycle:
//! a headless tokio-driven display service, an optional process-wide default
//! presenter and logging setup.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use toastline_sdk::{HeadlessDisplay, Lifetime, PresentOptions, Presenter, UserInteraction};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let display = Arc::new(HeadlessDisplay::spawn());
//! let presenter = Presenter::builder(display).build();
//!
//! presenter
//!     .present(
//!         "Message sent",
//!         PresentOptions::new().lifetime(Lifetime::seconds(3)),
//!     )
//!     .on_interaction(UserInteraction::TAP, |_, _, dismisser| dismisser.dismiss(true))
//!     .on_dismissed(|text| println!("{text} went away"));
//! # }
//! ```

pub mod default_presenter;
pub mod headless;
pub mod logging;

pub use default_presenter::{default_presenter, install_default, present};
pub use headless::{HeadlessDisplay, HeadlessWorker};
pub use logging::{init_from_config, init_logging};

// Re-export commonly used types from core
pub use toastline_core::{
    Animation, ContractPolicy, Dismisser, DisplayCallbacks, DisplayService, LoggingConfig,
    Notification, NotificationAttributes, NotificationContent, PresentOptions, Presentation,
    PresentationId, PresentationState, Presenter, PresenterConfig, Lifetime, ToastError,
    ToastResult, UserInteraction,
};
