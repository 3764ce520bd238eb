//! Presenter: wires presentation requests to a display service
//!
//! The presenter is an explicitly constructed service. For every request it
//! mints an identifier, builds the [`ToastRequest`], creates the
//! [`Presentation`] handle and then dispatches `show` to the UI thread with
//! callbacks that drive the handle's lifecycle.

mod options;

pub use options::PresentOptions;

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, warn};

use crate::attributes::NotificationAttributes;
use crate::config::{ContractPolicy, PresenterConfig};
use crate::dispatch::{Dispatcher, InlineDispatcher};
use crate::display::{
    DisplayCallbacks, DisplayService, FinishedCallback, InteractionResponder, ShownCallback,
};
use crate::error::LifecycleError;
use crate::interaction::UserInteraction;
use crate::notification::NotificationContent;
use crate::presentation::{Dismisser, Presentation, PresentationId};
use crate::request::ToastRequest;

/// Presents notifications through a [`DisplayService`]
pub struct Presenter {
    display: Arc<dyn DisplayService>,
    dispatcher: Arc<dyn Dispatcher>,
    config: PresenterConfig,
    /// Presentations submitted and not yet finished, with their text
    active: Arc<DashMap<PresentationId, String>>,
}

impl Presenter {
    /// Create a presenter with an explicit dispatcher and configuration
    pub fn new(
        display: Arc<dyn DisplayService>,
        dispatcher: Arc<dyn Dispatcher>,
        config: PresenterConfig,
    ) -> Self {
        Self {
            display,
            dispatcher,
            config,
            active: Arc::new(DashMap::new()),
        }
    }

    /// Start building a presenter around `display`
    pub fn builder(display: Arc<dyn DisplayService>) -> PresenterBuilder {
        PresenterBuilder {
            display,
            dispatcher: None,
            config: PresenterConfig::default(),
        }
    }

    /// Get the presenter configuration
    pub fn config(&self) -> &PresenterConfig {
        &self.config
    }

    /// Present `notification` with the configured defaults
    pub fn show<N>(&self, notification: N) -> Arc<Presentation<N>>
    where
        N: NotificationContent + Clone + Send + Sync + 'static,
    {
        self.present(notification, PresentOptions::default())
    }

    /// Present `notification`.
    ///
    /// The returned handle exists before the display service sees the request.
    /// Handlers chained onto it right away observe every event as long as
    /// `show` runs after this call returns: either the dispatcher defers it
    /// (such as [`QueueDispatcher`](crate::dispatch::QueueDispatcher)) or the
    /// display service reports `on_shown` asynchronously. With the default
    /// [`InlineDispatcher`] and a display service that calls `on_shown` inside
    /// `show`, the presented event fires before this returns; register the
    /// handler through [`PresentOptions::on_presented`] instead.
    ///
    /// If the dispatcher cannot run the job, the presentation is finished
    /// on the spot: it leaves the active registry and its dismissed channel fires.
    pub fn present<N>(&self, notification: N, options: PresentOptions<N>) -> Arc<Presentation<N>>
    where
        N: NotificationContent + Clone + Send + Sync + 'static,
    {
        let id = PresentationId::new();
        let attributes = match &options.context {
            Some(context) => context.attributes_for(&notification),
            None => NotificationAttributes::default(),
        };
        let request = ToastRequest::new(
            id.clone(),
            &notification,
            attributes,
            options.animation.unwrap_or(self.config.default_animation),
            options.lifetime.unwrap_or(self.config.default_lifetime),
        );

        let presentation = Presentation::create(id.clone());
        let dismisser = Dismisser::new(&presentation, self.display.clone());
        if let Some(handler) = options.on_presented {
            presentation.on_presented(move |notification, dismisser| handler(notification, dismisser));
        }

        self.active.insert(id.clone(), request.text.clone());
        let undelivered = notification.clone();
        let callbacks = self.callbacks(&presentation, notification, dismisser);
        debug!(id = %id, lifetime = ?request.lifetime, "Presenting notification");

        let display = self.display.clone();
        let dispatched = self
            .dispatcher
            .dispatch(Box::new(move || display.show(request, callbacks)));
        if let Err(error) = dispatched {
            warn!(id = %id, %error, "Could not dispatch show, finishing presentation");
            self.active.remove(&id);
            presentation.notify_dismissed(undelivered);
        }

        presentation
    }

    /// Ask the display service to dismiss the presentation with `id`
    pub fn dismiss(&self, id: &PresentationId, animated: bool) {
        self.display.dismiss(id, animated);
    }

    /// Dismiss every presentation that has not finished yet
    pub fn dismiss_all(&self) -> usize {
        let ids = self.active_ids();
        for id in &ids {
            self.display.dismiss(id, self.config.dismiss_animated);
        }
        ids.len()
    }

    /// Identifiers of presentations submitted and not yet finished
    pub fn active_ids(&self) -> Vec<PresentationId> {
        self.active.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn is_active(&self, id: &PresentationId) -> bool {
        self.active.contains_key(id)
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    fn callbacks<N>(
        &self,
        presentation: &Arc<Presentation<N>>,
        notification: N,
        dismisser: Dismisser<N>,
    ) -> DisplayCallbacks
    where
        N: Clone + Send + Sync + 'static,
    {
        let policy = self.config.contract_policy;

        let on_shown: ShownCallback = {
            let presentation = presentation.clone();
            let notification = notification.clone();
            let dismisser = dismisser.clone();
            Box::new(move || {
                if let Err(error) = presentation.notify_presented(notification, dismisser) {
                    contract_violation(policy, error);
                }
            })
        };

        let on_interaction: InteractionResponder = {
            let presentation = presentation.clone();
            let notification = notification.clone();
            Arc::new(move |interaction: UserInteraction| {
                let outcome = presentation.notify_interaction(
                    interaction,
                    notification.clone(),
                    dismisser.clone(),
                );
                if let Err(error) = outcome {
                    contract_violation(policy, error);
                }
            })
        };

        let on_finished: FinishedCallback = {
            let presentation = presentation.clone();
            let active = self.active.clone();
            Box::new(move || {
                active.remove(presentation.id());
                presentation.notify_dismissed(notification);
            })
        };

        DisplayCallbacks {
            on_shown,
            on_finished,
            on_interaction,
        }
    }
}

impl fmt::Debug for Presenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Presenter")
            .field("config", &self.config)
            .field("active", &self.active.len())
            .finish_non_exhaustive()
    }
}

fn contract_violation(policy: ContractPolicy, error: LifecycleError) {
    match policy {
        ContractPolicy::Lenient => {
            warn!(id = %error.id(), %error, "Display service broke the lifecycle contract, ignoring callback");
        }
        ContractPolicy::Strict => panic!("display service broke the lifecycle contract: {error}"),
    }
}

/// Builder for [`Presenter`]
pub struct PresenterBuilder {
    display: Arc<dyn DisplayService>,
    dispatcher: Option<Arc<dyn Dispatcher>>,
    config: PresenterConfig,
}

impl PresenterBuilder {
    /// Run `show` through `dispatcher` instead of on the calling thread.
    ///
    /// Without one, `show` runs inline inside [`Presenter::present`].
    #[must_use]
    pub fn dispatcher(mut self, dispatcher: Arc<dyn Dispatcher>) -> Self {
        self.dispatcher = Some(dispatcher);
        self
    }

    #[must_use]
    pub fn config(mut self, config: PresenterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Presenter {
        let dispatcher = self
            .dispatcher
            .unwrap_or_else(|| Arc::new(InlineDispatcher));
        Presenter::new(self.display, dispatcher, self.config)
    }
}
