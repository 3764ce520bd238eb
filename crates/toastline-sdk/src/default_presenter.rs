//! Process-wide default presenter
//!
//! Applications that want a single shared presenter install one at startup.
//! The core crate never reaches for it; only code at the application boundary
//! does.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::info;

use toastline_core::{
    NotificationContent, PresentOptions, Presentation, Presenter, ToastError, ToastResult,
};

static DEFAULT_PRESENTER: OnceCell<Arc<Presenter>> = OnceCell::new();

/// Install the process-wide presenter. Only the first call succeeds.
pub fn install_default(presenter: Presenter) -> ToastResult<Arc<Presenter>> {
    let presenter = Arc::new(presenter);
    DEFAULT_PRESENTER
        .set(presenter.clone())
        .map_err(|_| ToastError::AlreadyInstalled)?;
    info!("Default presenter installed");
    Ok(presenter)
}

/// Get the process-wide presenter
pub fn default_presenter() -> ToastResult<Arc<Presenter>> {
    DEFAULT_PRESENTER
        .get()
        .cloned()
        .ok_or(ToastError::NoDefaultPresenter)
}

/// Present `notification` through the process-wide presenter
pub fn present<N>(notification: N, options: PresentOptions<N>) -> ToastResult<Arc<Presentation<N>>>
where
    N: NotificationContent + Clone + Send + Sync + 'static,
{
    Ok(default_presenter()?.present(notification, options))
}
