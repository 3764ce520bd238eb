//! Recording display service used by unit tests

use parking_lot::Mutex;

use crate::display::{
    DisplayCallbacks, DisplayService, FinishedCallback, InteractionResponder, ShownCallback,
};
use crate::interaction::UserInteraction;
use crate::presentation::PresentationId;
use crate::request::ToastRequest;

struct Entry {
    request: ToastRequest,
    on_shown: Option<ShownCallback>,
    on_finished: Option<FinishedCallback>,
    on_interaction: InteractionResponder,
}

/// Keeps every shown request and lets the test drive its callbacks by hand
#[derive(Default)]
pub(crate) struct RecordingDisplay {
    entries: Mutex<Vec<Entry>>,
    dismissals: Mutex<Vec<(PresentationId, bool)>>,
    finish_on_dismiss: bool,
}

impl RecordingDisplay {
    /// A display that finishes a toast synchronously inside `dismiss`
    pub(crate) fn finishing_on_dismiss() -> Self {
        Self {
            finish_on_dismiss: true,
            ..Self::default()
        }
    }

    pub(crate) fn requests(&self) -> Vec<ToastRequest> {
        self.entries.lock().iter().map(|e| e.request.clone()).collect()
    }

    pub(crate) fn dismissals(&self) -> Vec<(PresentationId, bool)> {
        self.dismissals.lock().clone()
    }

    pub(crate) fn show_at(&self, index: usize) {
        let callback = self.entries.lock()[index].on_shown.take();
        if let Some(callback) = callback {
            callback();
        }
    }

    pub(crate) fn interact_at(&self, index: usize, interaction: UserInteraction) {
        let responder = self.entries.lock()[index].on_interaction.clone();
        responder(interaction);
    }

    pub(crate) fn finish_at(&self, index: usize) {
        let callback = self.entries.lock()[index].on_finished.take();
        if let Some(callback) = callback {
            callback();
        }
    }

    pub(crate) fn has_pending_finish(&self, index: usize) -> bool {
        self.entries.lock()[index].on_finished.is_some()
    }
}

impl DisplayService for RecordingDisplay {
    fn show(&self, request: ToastRequest, callbacks: DisplayCallbacks) {
        self.entries.lock().push(Entry {
            request,
            on_shown: Some(callbacks.on_shown),
            on_finished: Some(callbacks.on_finished),
            on_interaction: callbacks.on_interaction,
        });
    }

    fn dismiss(&self, id: &PresentationId, animated: bool) {
        self.dismissals.lock().push((id.clone(), animated));
        if !self.finish_on_dismiss {
            return;
        }
        let callback = self
            .entries
            .lock()
            .iter_mut()
            .find(|entry| &entry.request.id == id)
            .and_then(|entry| entry.on_finished.take());
        if let Some(callback) = callback {
            callback();
        }
    }
}
