//! Error types for Toastline
//!
//! Two layers of errors live here:
//! - [`LifecycleError`]: a display-service callback arrived in a state that does
//!   not permit it. Returned by [`Presentation`](crate::presentation::Presentation)
//!   notify methods and absorbed by the presenter.
//! - [`ToastError`]: crate-wide error for configuration, I/O and the default
//!   presenter boundary.

mod constructors;
mod conversions;
mod types;

pub use types::{LifecycleError, LifecycleEvent, ToastError, ToastResult};
