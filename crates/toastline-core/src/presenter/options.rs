//! Per-call presentation options

use std::fmt;
use std::sync::Arc;

use crate::animation::Animation;
use crate::context::PresentationContext;
use crate::presentation::Dismisser;
use crate::request::Lifetime;

pub(super) type PresentedHandler<N> = Box<dyn Fn(&N, &Dismisser<N>) + Send + Sync>;

/// Overrides for a single [`Presenter::present`](super::Presenter::present) call.
///
/// Anything left unset falls back to the presenter configuration.
pub struct PresentOptions<N> {
    pub(super) context: Option<Arc<dyn PresentationContext<N>>>,
    pub(super) animation: Option<Animation>,
    pub(super) lifetime: Option<Lifetime>,
    pub(super) on_presented: Option<PresentedHandler<N>>,
}

impl<N> PresentOptions<N> {
    pub fn new() -> Self {
        Self {
            context: None,
            animation: None,
            lifetime: None,
            on_presented: None,
        }
    }

    /// Decide the visual attributes through `context`
    #[must_use]
    pub fn context(mut self, context: impl PresentationContext<N> + 'static) -> Self {
        self.context = Some(Arc::new(context));
        self
    }

    /// Share one context between many presentations
    #[must_use]
    pub fn shared_context(mut self, context: Arc<dyn PresentationContext<N>>) -> Self {
        self.context = Some(context);
        self
    }

    #[must_use]
    pub fn animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    #[must_use]
    pub fn lifetime(mut self, lifetime: Lifetime) -> Self {
        self.lifetime = Some(lifetime);
        self
    }

    /// Handler registered on the presented channel before the request is submitted
    #[must_use]
    pub fn on_presented<F>(mut self, handler: F) -> Self
    where
        F: Fn(&N, &Dismisser<N>) + Send + Sync + 'static,
    {
        self.on_presented = Some(Box::new(handler));
        self
    }
}

impl<N> Default for PresentOptions<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Debug for PresentOptions<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresentOptions")
            .field("context", &self.context.is_some())
            .field("animation", &self.animation)
            .field("lifetime", &self.lifetime)
            .field("on_presented", &self.on_presented.is_some())
            .finish()
    }
}
