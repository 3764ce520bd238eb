//! Display service seam
//!
//! The display service is the external collaborator that renders, times and
//! tears down toasts. Toastline hands it a [`ToastRequest`] together with the
//! callbacks that drive the presentation lifecycle.

use std::fmt;
use std::sync::Arc;

#[cfg(test)]
use mockall::automock;

use crate::interaction::UserInteraction;
use crate::presentation::PresentationId;
use crate::request::ToastRequest;

/// Called once when the toast becomes visible
pub type ShownCallback = Box<dyn FnOnce() + Send>;

/// Called once when the toast has been torn down, for whatever reason
pub type FinishedCallback = Box<dyn FnOnce() + Send>;

/// Called for every gesture performed on the visible toast
pub type InteractionResponder = Arc<dyn Fn(UserInteraction) + Send + Sync>;

/// Lifecycle callbacks handed to [`DisplayService::show`]
pub struct DisplayCallbacks {
    pub on_shown: ShownCallback,
    pub on_finished: FinishedCallback,
    pub on_interaction: InteractionResponder,
}

impl DisplayCallbacks {
    /// Callbacks that do nothing
    pub fn noop() -> Self {
        Self {
            on_shown: Box::new(|| {}),
            on_finished: Box::new(|| {}),
            on_interaction: Arc::new(|_| {}),
        }
    }
}

impl fmt::Debug for DisplayCallbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisplayCallbacks").finish_non_exhaustive()
    }
}

/// External service that actually puts toasts on screen.
///
/// Contract expected by the presentation lifecycle:
/// - `on_shown` is called at most once, before any interaction.
/// - `on_interaction` is called zero or more times between shown and finished.
/// - `on_finished` is called once when the toast is gone, including when it
///   was dismissed before ever being shown.
///
/// Callbacks may be invoked from any thread.
///
/// A presentation holds its lifecycle lock while its observers run. A display
/// service that finishes toasts synchronously inside `dismiss` therefore must
/// not let observers of two presentations finish each other from different
/// threads at the same time; those calls take the two locks in opposite order.
/// Finishing from the thread that runs the observer, or deferring `on_finished`
/// to the UI thread, is always safe.
#[cfg_attr(test, automock)]
pub trait DisplayService: Send + Sync {
    /// Queue `request` for display
    fn show(&self, request: ToastRequest, callbacks: DisplayCallbacks);

    /// Tear down every displayed or queued toast matching `id`. Fire-and-forget.
    fn dismiss(&self, id: &PresentationId, animated: bool);
}
