//! Presentation contexts
//!
//! A context decides the visual attributes of each notification at
//! presentation time, so one presenter can style success and error toasts
//! differently.

use crate::attributes::NotificationAttributes;

/// Maps a notification to its rendering attributes
pub trait PresentationContext<N>: Send + Sync {
    fn attributes_for(&self, notification: &N) -> NotificationAttributes;
}

/// Context that returns [`NotificationAttributes::default`] for everything
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultContext;

impl<N> PresentationContext<N> for DefaultContext {
    fn attributes_for(&self, _notification: &N) -> NotificationAttributes {
        NotificationAttributes::default()
    }
}

/// Fixed attributes for every notification
impl<N> PresentationContext<N> for NotificationAttributes {
    fn attributes_for(&self, _notification: &N) -> NotificationAttributes {
        self.clone()
    }
}

/// Context backed by a closure
pub struct FnContext<F>(F);

impl<N, F> PresentationContext<N> for FnContext<F>
where
    F: Fn(&N) -> NotificationAttributes + Send + Sync,
{
    fn attributes_for(&self, notification: &N) -> NotificationAttributes {
        (self.0)(notification)
    }
}

/// Build a context from a closure
pub fn context_fn<N, F>(body: F) -> FnContext<F>
where
    F: Fn(&N) -> NotificationAttributes + Send + Sync,
{
    FnContext(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Color;
    use crate::notification::Notification;

    #[test]
    fn test_default_context() {
        let attributes = DefaultContext.attributes_for(&Notification::new("hi"));
        assert_eq!(attributes, NotificationAttributes::default());
    }

    #[test]
    fn test_closure_context() {
        let context = context_fn(|notification: &Notification| {
            if notification.text.starts_with("Error") {
                NotificationAttributes::default().with_background(Color::rgb(0.8, 0.1, 0.1))
            } else {
                NotificationAttributes::default()
            }
        });

        let error = context.attributes_for(&Notification::new("Error: disk full"));
        assert_eq!(error.background_color, Color::rgb(0.8, 0.1, 0.1));

        let info = context.attributes_for(&Notification::new("Saved"));
        assert_eq!(info.background_color, Color::DARK_GRAY);
    }

    #[test]
    fn test_fixed_attributes_context() {
        let fixed = NotificationAttributes::default().with_background(Color::BLACK);
        let attributes = PresentationContext::<Notification>::attributes_for(
            &fixed,
            &Notification::new("x"),
        );
        assert_eq!(attributes.background_color, Color::BLACK);
    }
}
