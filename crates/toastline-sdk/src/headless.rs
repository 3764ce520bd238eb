//! Headless display service
//!
//! Runs toasts on a tokio task without rendering anything. Toasts are shown
//! one at a time in submission order: the entrance animation time elapses,
//! `on_shown` fires, the toast stays for its lifetime (or until dismissed),
//! the exit animation time elapses and `on_finished` fires.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use toastline_core::display::{DisplayCallbacks, DisplayService, InteractionResponder};
use toastline_core::{PresentationId, ToastRequest, UserInteraction};

struct Queued {
    request: ToastRequest,
    callbacks: DisplayCallbacks,
    cancel: CancellationToken,
}

struct Slot {
    cancel: CancellationToken,
    animated: bool,
}

struct Visible {
    id: PresentationId,
    on_interaction: InteractionResponder,
    dismiss_on_interaction: bool,
}

#[derive(Default)]
struct State {
    visible: Option<Visible>,
    queued: usize,
    slots: HashMap<PresentationId, Slot>,
}

/// In-process display service driven by tokio timers
#[derive(Clone)]
pub struct HeadlessDisplay {
    toast_tx: mpsc::UnboundedSender<Queued>,
    state: Arc<Mutex<State>>,
}

/// Task half of a [`HeadlessDisplay`]
pub struct HeadlessWorker {
    toast_rx: mpsc::UnboundedReceiver<Queued>,
    state: Arc<Mutex<State>>,
}

impl HeadlessDisplay {
    /// Create a display and the worker that must be run for toasts to progress
    pub fn new() -> (Self, HeadlessWorker) {
        let (toast_tx, toast_rx) = mpsc::unbounded_channel();
        let state = Arc::new(Mutex::new(State::default()));
        (
            Self {
                toast_tx,
                state: state.clone(),
            },
            HeadlessWorker { toast_rx, state },
        )
    }

    /// Create a display whose worker runs on the current tokio runtime.
    ///
    /// Panics when called outside a runtime, like [`tokio::spawn`].
    pub fn spawn() -> Self {
        let (display, worker) = Self::new();
        tokio::spawn(worker.run());
        display
    }

    /// Simulate a user gesture on the visible toast.
    ///
    /// Returns `false` when `id` is not the toast on screen.
    pub fn interact(&self, id: &PresentationId, interaction: UserInteraction) -> bool {
        let (responder, dismiss) = {
            let state = self.state.lock();
            match &state.visible {
                Some(visible) if &visible.id == id => {
                    (visible.on_interaction.clone(), visible.dismiss_on_interaction)
                }
                _ => {
                    debug!(id = %id, "Interaction ignored, toast is not visible");
                    return false;
                }
            }
        };

        responder(interaction);
        if dismiss {
            self.dismiss(id, true);
        }
        true
    }

    /// Identifier of the toast currently on screen
    pub fn visible(&self) -> Option<PresentationId> {
        self.state.lock().visible.as_ref().map(|v| v.id.clone())
    }

    /// Number of toasts waiting for their turn
    pub fn queued(&self) -> usize {
        self.state.lock().queued
    }
}

impl DisplayService for HeadlessDisplay {
    fn show(&self, request: ToastRequest, callbacks: DisplayCallbacks) {
        let cancel = CancellationToken::new();
        {
            let mut state = self.state.lock();
            state.slots.insert(
                request.id.clone(),
                Slot {
                    cancel: cancel.clone(),
                    animated: true,
                },
            );
            state.queued += 1;
        }

        let toast = Queued {
            request,
            callbacks,
            cancel,
        };
        if let Err(mpsc::error::SendError(toast)) = self.toast_tx.send(toast) {
            warn!(id = %toast.request.id, "Headless worker has stopped, finishing toast immediately");
            {
                let mut state = self.state.lock();
                state.queued -= 1;
                state.slots.remove(&toast.request.id);
            }
            (toast.callbacks.on_finished)();
        }
    }

    fn dismiss(&self, id: &PresentationId, animated: bool) {
        let mut state = self.state.lock();
        match state.slots.get_mut(id) {
            Some(slot) => {
                slot.animated = animated;
                slot.cancel.cancel();
            }
            None => debug!(id = %id, "Dismiss ignored, toast already finished"),
        }
    }
}

impl std::fmt::Debug for HeadlessDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("HeadlessDisplay")
            .field("visible", &state.visible.as_ref().map(|v| &v.id))
            .field("queued", &state.queued)
            .finish()
    }
}

impl HeadlessWorker {
    /// Show toasts until every [`HeadlessDisplay`] handle is dropped
    pub async fn run(mut self) {
        while let Some(toast) = self.toast_rx.recv().await {
            self.present(toast).await;
        }
        debug!("Headless display stopped");
    }

    async fn present(&self, toast: Queued) {
        let Queued {
            request,
            callbacks,
            cancel,
        } = toast;
        let DisplayCallbacks {
            on_shown,
            on_finished,
            on_interaction,
        } = callbacks;
        let id = request.id.clone();

        self.state.lock().queued -= 1;
        if cancel.is_cancelled() {
            debug!(id = %id, "Toast dismissed while queued");
            self.state.lock().slots.remove(&id);
            on_finished();
            return;
        }

        let entered = tokio::select! {
            _ = sleep(request.animation.in_duration) => true,
            _ = cancel.cancelled() => false,
        };

        if entered {
            on_shown();
            self.state.lock().visible = Some(Visible {
                id: id.clone(),
                on_interaction,
                dismiss_on_interaction: request.lifetime.forces_user_interaction(),
            });

            match request.lifetime.duration() {
                Some(duration) => {
                    tokio::select! {
                        _ = sleep(duration) => debug!(id = %id, "Toast lifetime elapsed"),
                        _ = cancel.cancelled() => {}
                    }
                }
                None => cancel.cancelled().await,
            }
        }

        let animated = {
            let mut state = self.state.lock();
            state.visible = None;
            state.slots.remove(&id).is_none_or(|slot| slot.animated)
        };
        if animated {
            sleep(request.animation.out_duration).await;
        }
        on_finished();
    }
}

impl std::fmt::Debug for HeadlessWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessWorker").finish_non_exhaustive()
    }
}
