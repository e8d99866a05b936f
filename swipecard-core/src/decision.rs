//! Settle-or-dismiss classification of a released card

use crate::config::SwipeConfig;

/// Exponential friction: `v(t) = v0 * e^(-friction * t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialDecay {
    /// Friction coefficient in 1/s.
    pub friction: f32,
}

impl ExponentialDecay {
    /// Decay with the given friction.
    pub fn new(friction: f32) -> Self {
        Self { friction }
    }

    /// Where a value released at `offset` with `velocity` comes to rest.
    pub fn target(&self, offset: f32, velocity: f32) -> f32 {
        offset + velocity / self.friction
    }
}

/// Direction a dismissed card flies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlingDirection {
    /// Toward negative offsets.
    Left,
    /// Toward positive offsets.
    Right,
}

impl FlingDirection {
    /// Direction of travel for a projected resting offset.
    pub fn of(projected: f32) -> Self {
        if projected < 0.0 {
            FlingDirection::Left
        } else {
            FlingDirection::Right
        }
    }

    /// `-1.0` for left, `1.0` for right.
    pub fn sign(self) -> f32 {
        match self {
            FlingDirection::Left => -1.0,
            FlingDirection::Right => 1.0,
        }
    }
}

/// Parameters of a dismiss animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fling {
    /// Projected resting offset that triggered the dismissal.
    pub projected: f32,
    /// Magnitude of the outbound leg, in `[0, max_fling_factor * width]`.
    pub distance: f32,
    /// Side the card leaves by.
    pub direction: FlingDirection,
}

/// Outcome of a release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// Not enough momentum; return to offset 0.
    Settle {
        /// Where decay alone would have stopped the card.
        projected: f32,
    },
    /// Fly off and leave the stack.
    Dismiss(Fling),
}

impl Decision {
    /// The card leaves the stack.
    pub fn is_dismiss(&self) -> bool {
        matches!(self, Decision::Dismiss(_))
    }
}

/// Decides what a released card does from its offset and velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionPolicy {
    /// Projections beyond this distance dismiss.
    pub card_width: f32,
    /// Added to the projection to size the flight.
    pub card_height: f32,
    /// Flight cap in card widths.
    pub max_fling_factor: f32,
    /// Momentum model for the projection.
    pub decay: ExponentialDecay,
}

impl DecisionPolicy {
    /// Policy for the card geometry and friction in `config`.
    pub fn new(config: &SwipeConfig) -> Self {
        Self {
            card_width: config.card.width,
            card_height: config.card.height,
            max_fling_factor: config.dismiss.max_fling_factor,
            decay: ExponentialDecay::new(config.gesture.decay_friction),
        }
    }

    /// Farthest a dismissed card ever travels.
    pub fn max_fling_distance(&self) -> f32 {
        self.card_width * self.max_fling_factor
    }

    /// Settle when the projected resting offset stays within one card
    /// width, otherwise dismiss with flight `min(|projected| + height, cap)`.
    /// Non-finite inputs count as zero.
    pub fn decide(&self, offset: f32, velocity: f32) -> Decision {
        let offset = if offset.is_finite() { offset } else { 0.0 };
        let velocity = if velocity.is_finite() { velocity } else { 0.0 };
        let projected = self.decay.target(offset, velocity);

        if projected.abs() <= self.card_width {
            tracing::debug!(offset, velocity, projected, "release settles");
            return Decision::Settle { projected };
        }

        let distance = (projected.abs() + self.card_height).min(self.max_fling_distance());
        let fling = Fling {
            projected,
            distance,
            direction: FlingDirection::of(projected),
        };
        tracing::debug!(offset, velocity, projected, distance, "release dismisses");
        Decision::Dismiss(fling)
    }
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self::new(&SwipeConfig::default())
    }
}
