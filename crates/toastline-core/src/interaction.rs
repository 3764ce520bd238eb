//! User interaction kinds
//!
//! A [`UserInteraction`] value describes either which gesture(s) a display
//! service reported or which gesture(s) an observer cares about. A fired
//! interaction is delivered to an observer when the two masks share at least
//! one bit.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Set of gestures performed on (or awaited from) a toast.
    ///
    /// ```rust
    /// use toastline_core::UserInteraction;
    ///
    /// let wanted = UserInteraction::ANY_SWIPE;
    /// assert!(wanted.matches(UserInteraction::SWIPE_UP));
    /// assert!(!UserInteraction::SWIPE_UP.matches(UserInteraction::SWIPE_DOWN));
    /// ```
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct UserInteraction: u16 {
        /// Single one-finger tap.
        const TAP                   = 1 << 0;
        /// Double one-finger tap.
        const DOUBLE_TAP            = 1 << 1;
        /// Single two-finger tap.
        const TWO_FINGER_TAP        = 1 << 2;
        /// Double two-finger tap.
        const TWO_FINGER_DOUBLE_TAP = 1 << 3;

        const SWIPE_UP              = 1 << 4;
        const SWIPE_LEFT            = 1 << 5;
        const SWIPE_DOWN            = 1 << 6;
        const SWIPE_RIGHT           = 1 << 7;

        /// Any of the tap gestures.
        const ANY_TAP = Self::TAP.bits()
            | Self::DOUBLE_TAP.bits()
            | Self::TWO_FINGER_TAP.bits()
            | Self::TWO_FINGER_DOUBLE_TAP.bits();
        /// Any of the swipe gestures.
        const ANY_SWIPE = Self::SWIPE_UP.bits()
            | Self::SWIPE_LEFT.bits()
            | Self::SWIPE_DOWN.bits()
            | Self::SWIPE_RIGHT.bits();
        /// Every gesture.
        const ALL = Self::ANY_TAP.bits() | Self::ANY_SWIPE.bits();
    }
}

impl UserInteraction {
    /// Whether an observer subscribed to `self` should receive `fired`.
    pub fn matches(self, fired: UserInteraction) -> bool {
        self.intersects(fired)
    }

    /// Whether any tap gesture is set
    pub fn is_tap(self) -> bool {
        self.intersects(Self::ANY_TAP)
    }

    /// Whether any swipe gesture is set
    pub fn is_swipe(self) -> bool {
        self.intersects(Self::ANY_SWIPE)
    }

    /// Build from a raw mask reported by a display service, dropping unknown bits
    pub fn from_raw(bits: u16) -> Self {
        Self::from_bits_truncate(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_swipe_does_not_match_other_direction() {
        assert!(!UserInteraction::SWIPE_UP.matches(UserInteraction::SWIPE_DOWN));
        assert!(UserInteraction::SWIPE_UP.matches(UserInteraction::SWIPE_UP));
    }

    #[test]
    fn test_grouping_flags() {
        assert!(UserInteraction::ANY_SWIPE.matches(UserInteraction::SWIPE_UP));
        assert!(UserInteraction::ANY_TAP.matches(UserInteraction::TWO_FINGER_DOUBLE_TAP));
        assert!(!UserInteraction::ANY_TAP.matches(UserInteraction::SWIPE_LEFT));
        assert!(UserInteraction::ALL.matches(UserInteraction::SWIPE_RIGHT));
        assert_eq!(
            UserInteraction::ALL,
            UserInteraction::ANY_TAP | UserInteraction::ANY_SWIPE
        );
    }

    #[test]
    fn test_multi_bit_fired_mask() {
        let fired = UserInteraction::TAP | UserInteraction::ANY_TAP;
        assert!(UserInteraction::DOUBLE_TAP.matches(fired));

        let wanted = UserInteraction::DOUBLE_TAP | UserInteraction::SWIPE_DOWN;
        assert!(wanted.matches(UserInteraction::SWIPE_DOWN));
        assert!(!wanted.matches(UserInteraction::TAP));
    }

    #[test]
    fn test_empty_mask_matches_nothing() {
        assert!(!UserInteraction::empty().matches(UserInteraction::ALL));
    }

    #[test]
    fn test_classification_and_raw() {
        assert!(UserInteraction::TAP.is_tap());
        assert!(!UserInteraction::TAP.is_swipe());
        assert_eq!(UserInteraction::from_raw(0x10), UserInteraction::SWIPE_UP);
        assert_eq!(UserInteraction::from_raw(0xFF00), UserInteraction::empty());
    }
}
