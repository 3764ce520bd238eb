//! The request handed to the display service

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Animation;
use crate::attributes::NotificationAttributes;
use crate::notification::NotificationContent;
use crate::presentation::PresentationId;

/// How long a toast stays on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifetime {
    /// Auto-dismiss after the given time on screen
    Finite(#[serde(with = "humantime_serde")] Duration),
    /// Stay until the user interacts with it or it is dismissed explicitly
    UntilInteraction,
}

impl Lifetime {
    pub fn seconds(seconds: u64) -> Self {
        Self::Finite(Duration::from_secs(seconds))
    }

    /// Time on screen, if bounded
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Self::Finite(duration) => Some(*duration),
            Self::UntilInteraction => None,
        }
    }

    pub fn forces_user_interaction(&self) -> bool {
        matches!(self, Self::UntilInteraction)
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::Finite(Duration::from_secs(2))
    }
}

/// Everything a display service needs to render one toast.
///
/// Built once per presentation and consumed by [`DisplayService::show`](crate::display::DisplayService::show).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToastRequest {
    pub id: PresentationId,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
    pub attributes: NotificationAttributes,
    pub animation: Animation,
    pub lifetime: Lifetime,
}

impl ToastRequest {
    pub fn new<N: NotificationContent>(
        id: PresentationId,
        notification: &N,
        attributes: NotificationAttributes,
        animation: Animation,
        lifetime: Lifetime,
    ) -> Self {
        Self {
            id,
            text: notification.text().to_string(),
            subtext: notification.subtext().map(str::to_string),
            attributes,
            animation,
            lifetime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Notification;

    #[test]
    fn test_lifetime_defaults() {
        assert_eq!(Lifetime::default().duration(), Some(Duration::from_secs(2)));
        assert!(!Lifetime::default().forces_user_interaction());
        assert!(Lifetime::UntilInteraction.forces_user_interaction());
        assert_eq!(Lifetime::UntilInteraction.duration(), None);
    }

    #[test]
    fn test_request_copies_notification_text() {
        let notification = Notification::new("Upload finished").with_subtext("3 files");
        let request = ToastRequest::new(
            PresentationId::from("id-1"),
            &notification,
            NotificationAttributes::default(),
            Animation::none(),
            Lifetime::seconds(5),
        );

        assert_eq!(request.text, "Upload finished");
        assert_eq!(request.subtext.as_deref(), Some("3 files"));
        assert_eq!(request.lifetime, Lifetime::Finite(Duration::from_secs(5)));
    }

    #[test]
    fn test_request_serializes_for_display_services() {
        let request = ToastRequest::new(
            PresentationId::from("id-2"),
            &"Copied",
            NotificationAttributes::default(),
            Animation::linear(),
            Lifetime::UntilInteraction,
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["id"], "id-2");
        assert_eq!(json["text"], "Copied");
        assert!(json.get("subtext").is_none());
        assert_eq!(json["lifetime"], "until_interaction");
        assert_eq!(json["animation"]["in_duration"], "400ms");
    }
}
