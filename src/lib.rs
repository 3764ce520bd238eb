//! Toastline
//!
//! Transient on-screen notifications with a typed presentation lifecycle.
//! Every presentation hands back a handle with three event channels
//! (presented, interaction, dismissed) and a dismissal token that stays safe
//! to use after the handle is gone.
//!
//! See [`toastline_core`] for the lifecycle model and [`toastline_sdk`] for the
//! headless display service and process-wide helpers.

pub use toastline_core as core;
pub use toastline_sdk::*;
