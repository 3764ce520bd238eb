//! Configuration for Toastline
//!
//! Configuration is plain serde data, usually read from a TOML file:
//!
//! ```toml
//! default_lifetime = "3s"
//! dismiss_animated = true
//! contract_policy = "lenient"
//!
//! [default_animation]
//! in_curve = "spring"
//!
//! [logging]
//! level = "debug"
//! format = "compact"
//! ```

mod logging_config;
mod presenter_config;

pub use logging_config::{LogFormat, LoggingConfig};
pub use presenter_config::{ContractPolicy, PresenterConfig};
