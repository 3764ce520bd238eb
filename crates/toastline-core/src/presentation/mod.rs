//! Presentation handles
//!
//! A [`Presentation`] represents one in-flight toast. It is created before the
//! display service is asked to show anything, receives lifecycle notifications
//! from the display-service integration, and fans them out to the handlers
//! registered by the caller.
//!
//! ```text
//! Pending ──notify_presented──▶ Shown ──notify_dismissed──▶ Dismissed
//!    │                          │  ▲                            ▲
//!    │                          └──┘ notify_interaction         │
//!    └──────────────────────notify_dismissed────────────────────┘
//! ```
//!
//! Lifecycle notifications for one presentation are serialised: a dismissal
//! arriving on another thread waits for an in-progress interaction traversal.
//! The dismissal channel fires at most once. The lock stays held while
//! observers run, so observers must not block on another thread that is
//! delivering a notification to a different presentation whose observers in
//! turn wait on this one.

mod dismisser;
mod id;

pub use dismisser::Dismisser;
pub use id::PresentationId;

use std::cell::Cell;
use std::fmt;
use std::sync::Arc;

use parking_lot::ReentrantMutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LifecycleError, LifecycleEvent};
use crate::interaction::UserInteraction;
use crate::signal::Signal;

/// Lifecycle state of a presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationState {
    /// Submitted to the display service, not yet visible
    Pending,
    /// Visible; interactions may arrive
    Shown,
    /// Terminal
    Dismissed,
}

impl fmt::Display for PresentationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Shown => write!(f, "shown"),
            Self::Dismissed => write!(f, "dismissed"),
        }
    }
}

/// Payload of the presented channel
pub struct Presented<N> {
    pub notification: N,
    pub dismisser: Dismisser<N>,
}

/// Payload of the interaction channel
pub struct Interacted<N> {
    pub notification: N,
    pub interaction: UserInteraction,
    pub dismisser: Dismisser<N>,
}

/// Handle for one in-flight notification presentation.
///
/// Handlers are registered through chained calls that return the handle itself:
///
/// ```rust
/// use toastline_core::presentation::{Presentation, PresentationId};
/// use toastline_core::UserInteraction;
///
/// let presentation = Presentation::<String>::create(PresentationId::new());
/// presentation
///     .on_presented(|text, _dismisser| println!("showing {text}"))
///     .on_interaction(UserInteraction::ANY_TAP, |_, _, dismisser| dismisser.dismiss(true))
///     .on_dismissed(|text| println!("{text} is gone"));
/// ```
pub struct Presentation<N> {
    id: PresentationId,
    lifecycle: ReentrantMutex<Cell<PresentationState>>,
    presented: Signal<Presented<N>>,
    interacted: Signal<Interacted<N>>,
    dismissed: Signal<N>,
}

impl<N: Send + Sync + 'static> Presentation<N> {
    /// Create a pending presentation with empty channels
    pub fn create(id: PresentationId) -> Arc<Self> {
        Arc::new(Self {
            id,
            lifecycle: ReentrantMutex::new(Cell::new(PresentationState::Pending)),
            presented: Signal::named("presented"),
            interacted: Signal::named("interaction"),
            dismissed: Signal::named("dismissed"),
        })
    }

    /// Get the presentation identifier
    pub fn id(&self) -> &PresentationId {
        &self.id
    }

    /// Get the current lifecycle state
    pub fn state(&self) -> PresentationState {
        self.lifecycle.lock().get()
    }

    /// Whether the dismissal has already been delivered
    pub fn is_dismissed(&self) -> bool {
        self.state() == PresentationState::Dismissed
    }

    /// Add a handler called when the notification appears on screen
    pub fn on_presented<F>(&self, handler: F) -> &Self
    where
        F: Fn(&N, &Dismisser<N>) + Send + Sync + 'static,
    {
        self.presented
            .subscribe(move |event: &Presented<N>| handler(&event.notification, &event.dismisser));
        self
    }

    /// Add a handler for the interactions in `mask`.
    ///
    /// The handler receives a performed interaction only when it shares at
    /// least one gesture with `mask`.
    pub fn on_interaction<F>(&self, mask: UserInteraction, handler: F) -> &Self
    where
        F: Fn(&N, UserInteraction, &Dismisser<N>) + Send + Sync + 'static,
    {
        self.interacted.subscribe(move |event: &Interacted<N>| {
            if mask.matches(event.interaction) {
                handler(&event.notification, event.interaction, &event.dismisser);
            }
        });
        self
    }

    /// Add a handler called once the notification has been dismissed
    pub fn on_dismissed<F>(&self, handler: F) -> &Self
    where
        F: Fn(&N) + Send + Sync + 'static,
    {
        self.dismissed.subscribe(handler);
        self
    }

    /// Deliver the "shown" callback of the display service.
    ///
    /// Moves `Pending` to `Shown`; any other state is rejected.
    pub fn notify_presented(
        &self,
        notification: N,
        dismisser: Dismisser<N>,
    ) -> Result<(), LifecycleError> {
        let lifecycle = self.lifecycle.lock();
        let state = lifecycle.get();
        if state != PresentationState::Pending {
            return Err(self.out_of_order(LifecycleEvent::Presented, state));
        }
        lifecycle.set(PresentationState::Shown);
        debug!(id = %self.id, "Presentation shown");

        self.presented.fire(Presented {
            notification,
            dismisser,
        });
        Ok(())
    }

    /// Deliver a user interaction reported by the display service.
    ///
    /// Only legal while `Shown`.
    pub fn notify_interaction(
        &self,
        interaction: UserInteraction,
        notification: N,
        dismisser: Dismisser<N>,
    ) -> Result<(), LifecycleError> {
        let lifecycle = self.lifecycle.lock();
        let state = lifecycle.get();
        if state != PresentationState::Shown {
            return Err(self.out_of_order(LifecycleEvent::Interaction, state));
        }
        debug!(id = %self.id, ?interaction, "Presentation interaction");

        self.interacted.fire(Interacted {
            notification,
            interaction,
            dismisser,
        });
        Ok(())
    }

    /// Deliver the "finished" callback of the display service.
    ///
    /// Returns `false` without firing when the dismissal was already delivered.
    pub fn notify_dismissed(&self, notification: N) -> bool {
        let lifecycle = self.lifecycle.lock();
        if lifecycle.get() == PresentationState::Dismissed {
            return false;
        }
        lifecycle.set(PresentationState::Dismissed);
        debug!(id = %self.id, "Presentation dismissed");

        self.dismissed.fire(notification);
        true
    }

    fn out_of_order(&self, event: LifecycleEvent, state: PresentationState) -> LifecycleError {
        LifecycleError::OutOfOrder {
            id: self.id.clone(),
            event,
            state,
        }
    }
}

impl<N> fmt::Debug for Presentation<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Presentation")
            .field("id", &self.id)
            .field("state", &self.lifecycle.lock().get())
            .field("presented", &self.presented)
            .field("interacted", &self.interacted)
            .field("dismissed", &self.dismissed)
            .finish()
    }
}
