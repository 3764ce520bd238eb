//! Dismissal capability handed to presentation observers

use std::fmt;
use std::sync::{Arc, Weak};

use tracing::{debug, warn};

use super::{Presentation, PresentationId};
use crate::display::DisplayService;

/// Ability to end one specific presentation early.
///
/// A dismisser never keeps its presentation alive. Once every owner of the
/// presentation has released it, [`Dismisser::dismiss`] becomes a logged no-op.
pub struct Dismisser<N> {
    presentation: Weak<Presentation<N>>,
    id: PresentationId,
    display: Arc<dyn DisplayService>,
}

impl<N: Send + Sync + 'static> Dismisser<N> {
    /// Create a dismisser for `presentation` that routes requests to `display`
    pub fn new(presentation: &Arc<Presentation<N>>, display: Arc<dyn DisplayService>) -> Self {
        Self {
            presentation: Arc::downgrade(presentation),
            id: presentation.id().clone(),
            display,
        }
    }

    /// Get the identifier of the related presentation
    pub fn id(&self) -> &PresentationId {
        &self.id
    }

    /// Whether the related presentation is still allocated
    pub fn is_alive(&self) -> bool {
        self.presentation.strong_count() > 0
    }

    /// Ask the display service to dismiss the related notification
    pub fn dismiss(&self, animated: bool) {
        self.request(animated, None);
    }

    /// Dismiss the related notification and call `handler` once it is gone.
    ///
    /// The handler is registered before the request goes out, so it observes
    /// the dismissal even when the display service finishes synchronously. It
    /// is never called if the presentation has already been released or
    /// already dismissed.
    pub fn dismiss_with<F>(&self, animated: bool, handler: F)
    where
        F: Fn(&N) + Send + Sync + 'static,
    {
        self.request(animated, Some(Box::new(handler)));
    }

    fn request(&self, animated: bool, handler: Option<Box<dyn Fn(&N) + Send + Sync>>) {
        let Some(presentation) = self.presentation.upgrade() else {
            warn!(
                id = %self.id,
                "Dismisser::dismiss called after the presentation was released; \
                 nothing will be dismissed and no handler will run"
            );
            return;
        };

        if let Some(handler) = handler {
            if presentation.is_dismissed() {
                debug!(id = %self.id, "Dismissal handler registered after dismissal; it will not fire");
            }
            presentation.on_dismissed(move |notification| handler(notification));
        }

        self.display.dismiss(&self.id, animated);
    }
}

impl<N> Clone for Dismisser<N> {
    fn clone(&self) -> Self {
        Self {
            presentation: Weak::clone(&self.presentation),
            id: self.id.clone(),
            display: Arc::clone(&self.display),
        }
    }
}

impl<N> fmt::Debug for Dismisser<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dismisser")
            .field("id", &self.id)
            .field("alive", &(self.presentation.strong_count() > 0))
            .finish()
    }
}
