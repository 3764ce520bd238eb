//! Entrance and exit animation of a toast

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Motion curve of the entrance or exit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Curve {
    #[default]
    Linear,
    Spring,
    Gravity,
}

/// Screen edge the toast enters from or leaves toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

/// How the toast treats the content underneath while animating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationType {
    /// Slide over the content
    #[default]
    Cover,
    /// Push the content out of the way
    Push,
}

const DEFAULT_PHASE_DURATION: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Animation {
    pub in_curve: Curve,
    pub in_direction: Direction,
    #[serde(with = "humantime_serde")]
    pub in_duration: Duration,

    pub out_curve: Curve,
    pub out_direction: Direction,
    #[serde(with = "humantime_serde")]
    pub out_duration: Duration,

    /// Only used by [`Curve::Spring`]
    pub spring_damping: f32,
    /// Only used by [`Curve::Spring`]
    pub spring_initial_velocity: f32,
    /// Only used by [`Curve::Gravity`]
    pub gravity_magnitude: f32,

    pub presentation_type: PresentationType,
}

impl Default for Animation {
    fn default() -> Self {
        Self::linear()
    }
}

impl Animation {
    /// Appear and disappear without animating
    pub fn none() -> Self {
        Self {
            in_duration: Duration::ZERO,
            out_duration: Duration::ZERO,
            ..Self::linear()
        }
    }

    pub fn linear() -> Self {
        Self {
            in_curve: Curve::Linear,
            in_direction: Direction::Top,
            in_duration: DEFAULT_PHASE_DURATION,
            out_curve: Curve::Linear,
            out_direction: Direction::Top,
            out_duration: DEFAULT_PHASE_DURATION,
            spring_damping: 0.6,
            spring_initial_velocity: 1.0,
            gravity_magnitude: 1.0,
            presentation_type: PresentationType::Cover,
        }
    }

    pub fn spring() -> Self {
        Self::linear().with_curve(Curve::Spring)
    }

    pub fn gravity() -> Self {
        Self::linear().with_curve(Curve::Gravity)
    }

    /// Use `curve` for both entrance and exit
    #[must_use]
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.in_curve = curve;
        self.out_curve = curve;
        self
    }

    #[must_use]
    pub fn with_directions(mut self, entrance: Direction, exit: Direction) -> Self {
        self.in_direction = entrance;
        self.out_direction = exit;
        self
    }

    #[must_use]
    pub fn with_durations(mut self, entrance: Duration, exit: Duration) -> Self {
        self.in_duration = entrance;
        self.out_duration = exit;
        self
    }

    #[must_use]
    pub fn with_spring(mut self, damping: f32, initial_velocity: f32) -> Self {
        self.spring_damping = damping;
        self.spring_initial_velocity = initial_velocity;
        self
    }

    #[must_use]
    pub fn with_gravity(mut self, magnitude: f32) -> Self {
        self.gravity_magnitude = magnitude;
        self
    }

    #[must_use]
    pub fn with_presentation_type(mut self, presentation_type: PresentationType) -> Self {
        self.presentation_type = presentation_type;
        self
    }

    /// Combined length of the entrance and exit phases
    pub fn total_duration(&self) -> Duration {
        self.in_duration + self.out_duration
    }
}
