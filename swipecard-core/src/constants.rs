//! Swipecard tuning constants
//!
//! Defaults for card geometry, fan presentation, gesture tracking and the
//! settle/dismiss animations. [`crate::config::SwipeConfig`] starts from these
//! values; tuning should happen here so every consumer stays consistent.
//!
//! Distances are logical pixels, durations are milliseconds, velocities are
//! logical pixels per second.

/// Card geometry.
pub mod card {
    /// Card width; also the basis of the dismiss distance.
    pub const WIDTH: f32 = 320.0;
    /// Card height; folded into the fling distance.
    pub const HEIGHT: f32 = 360.0;
    /// Corner radius of the card background.
    pub const CORNER_RADIUS: f32 = 8.0;
    /// Vertical padding around the placeholder content.
    pub const PADDING_VERTICAL: f32 = 24.0;
    /// Horizontal padding around the placeholder content.
    pub const PADDING_HORIZONTAL: f32 = 32.0;
    /// Diameter of the placeholder avatar.
    pub const AVATAR_SIZE: f32 = 36.0;
    /// Height of a placeholder text bar.
    pub const BAR_HEIGHT: f32 = 12.0;
    /// Gap between avatar and bars.
    pub const AVATAR_GAP: f32 = 8.0;
    /// Gap between the two bars.
    pub const BAR_GAP: f32 = 6.0;
    /// Share of the inner width used by the placeholder row.
    pub const ROW_WIDTH_FRACTION: f32 = 0.5;
    /// Width of the second bar relative to the first.
    pub const SECOND_BAR_FRACTION: f32 = 0.6;
    /// Placeholder fill alpha (black).
    pub const PLACEHOLDER_ALPHA: f32 = 0.3;
}

/// Receding fan of cards behind the front card.
pub mod fan {
    /// Lateral offset per position behind the front.
    pub const SPACING: f32 = 12.0;
    /// Scale lost per position behind the front.
    pub const SCALE_FALLOFF: f32 = 0.05;
    /// Duration of the re-settle after the stack changes.
    pub const TRANSITION_MS: u64 = 300;
}

/// Fling-out animation.
pub mod dismiss {
    /// Total keyframe duration.
    pub const DURATION_MS: u64 = 600;
    /// Flight distance cap as a multiple of card width.
    pub const MAX_FLING_FACTOR: f32 = 2.0;
    /// Tuck value reached before coming to rest.
    pub const OVERSHOOT: f32 = 40.0;
    /// Time reserved at the end to return from the tuck to rest.
    pub const TAIL_TRIM_MS: u64 = 70;
    /// Cubic bezier control points of the outbound leg (ease-in-out).
    pub const EASE_IN_OUT: (f32, f32, f32, f32) = (0.42, 0.0, 0.58, 1.0);
}

/// Pointer tracking.
pub mod gesture {
    /// Exponential decay friction (1/s) used to project where a fling coasts.
    pub const DECAY_FRICTION: f32 = 4.2;
    /// Trailing window of samples considered for release velocity.
    pub const VELOCITY_HORIZON_MS: u64 = 100;
    /// A gap longer than this between samples means the pointer was at rest.
    pub const ASSUME_STOPPED_MS: u64 = 40;
    /// Samples retained per session.
    pub const HISTORY_SIZE: usize = 20;
    /// Velocity clamp.
    pub const MAX_VELOCITY: f32 = 8_000.0;
}

/// Snap-back spring.
pub mod settle {
    /// Spring stiffness.
    pub const STIFFNESS: f32 = 1_500.0;
    /// Damping ratio; 1.0 is critically damped (no bounce).
    pub const DAMPING_RATIO: f32 = 1.0;
    /// Distance from rest considered settled.
    pub const POSITION_THRESHOLD: f32 = 0.5;
    /// Speed considered settled.
    pub const VELOCITY_THRESHOLD: f32 = 1.0;
}

/// Deck mounted by the player on startup, front card first.
pub const DEFAULT_DECK: [u32; 4] = [0xff90caf9, 0xfffafafa, 0xffef9a9a, 0xfffff59d];
