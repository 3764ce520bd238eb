//! Presentation identifiers

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier minted for every presentation request
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresentationId(String);

impl PresentationId {
    /// Mint a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PresentationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PresentationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for PresentationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PresentationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for PresentationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minted_ids_are_unique() {
        let first = PresentationId::new();
        let second = PresentationId::new();
        assert_ne!(first, second);
        assert_eq!(first.as_str().len(), 36);
    }

    #[test]
    fn test_display_and_conversions() {
        let id = PresentationId::from("toast-1");
        assert_eq!(id.to_string(), "toast-1");
        assert_eq!(PresentationId::from("toast-1".to_string()), id);
    }
}
