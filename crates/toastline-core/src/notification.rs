//! Notification content

use serde::{Deserialize, Serialize};

/// Anything that can be shown as a toast
pub trait NotificationContent {
    /// Main line of the toast
    fn text(&self) -> &str;

    /// Optional second line
    fn subtext(&self) -> Option<&str> {
        None
    }
}

/// Plain text notification with an optional subtitle
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Notification {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtext: Option<String>,
}

impl Notification {
    /// Create a notification with text only
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            subtext: None,
        }
    }

    /// Set the subtitle
    #[must_use]
    pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }
}

impl NotificationContent for Notification {
    fn text(&self) -> &str {
        &self.text
    }

    fn subtext(&self) -> Option<&str> {
        self.subtext.as_deref()
    }
}

impl NotificationContent for String {
    fn text(&self) -> &str {
        self
    }
}

impl NotificationContent for &'static str {
    fn text(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_subtext() {
        let notification = Notification::new("AAA").with_subtext("BBB");
        assert_eq!(notification.text(), "AAA");
        assert_eq!(notification.subtext(), Some("BBB"));
    }

    #[test]
    fn test_text_only_has_no_subtext() {
        let notification = Notification::new("AAA");
        assert_eq!(notification.subtext(), None);
    }

    #[test]
    fn test_fields_are_independent() {
        let mut notification = Notification::new("AAA").with_subtext("BBB");
        notification.text = "CCC".into();
        assert_eq!(notification.text(), "CCC");
        assert_eq!(notification.subtext(), Some("BBB"));

        notification.subtext = Some("DDD".into());
        assert_eq!(notification.text(), "CCC");
        assert_eq!(notification.subtext(), Some("DDD"));
    }

    #[test]
    fn test_strings_are_notifications() {
        assert_eq!("Saved".text(), "Saved");
        assert_eq!(String::from("Saved").subtext(), None);
    }
}
