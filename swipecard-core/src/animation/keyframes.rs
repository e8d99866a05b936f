//! Fling-out curve as a pure function of elapsed time
//!
//! ```text
//! offset
//!   ^            tuck
//!   |  start     ___
//!   |    \      /   \__ rest (0)
//!   |     \    /
//!   |      \__/ apex = direction * distance
//!   +-----|----|----|--|----> time
//!         0  D/2  D-tail D
//! ```

use std::time::Duration;

use super::easing::{CubicBezier, EasingFunction};
use crate::config::DismissConfig;
use crate::decision::Fling;

/// Keyframes of one dismiss animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DismissKeyframes {
    /// Offset at release.
    pub start: f32,
    /// Signed outbound extreme.
    pub apex: f32,
    /// Signed overshoot on the way back, opposite to the apex.
    pub tuck: f32,
    /// Total length; the card is back at rest afterwards.
    pub duration: Duration,
    /// Time of the apex; half the duration.
    pub apex_at: Duration,
    /// Time of the tuck; duration minus the tail.
    pub tuck_at: Duration,
    /// Easing of the outbound leg.
    pub outbound: EasingFunction,
}

impl DismissKeyframes {
    /// Keyframes for flinging a card from `start` as described by `fling`.
    pub fn new(start: f32, fling: &Fling, cfg: &DismissConfig) -> Self {
        let duration = Duration::from_millis(cfg.duration_ms);
        let sign = fling.direction.sign();
        Self {
            start,
            apex: sign * fling.distance,
            tuck: -sign * cfg.overshoot,
            duration,
            apex_at: duration / 2,
            tuck_at: duration.saturating_sub(Duration::from_millis(cfg.tail_trim_ms)),
            outbound: EasingFunction::Bezier(CubicBezier::EASE_IN_OUT),
        }
    }

    /// Offset at `elapsed` since the animation started; rest (0) once the
    /// duration has passed.
    pub fn sample(&self, elapsed: Duration) -> f32 {
        if elapsed.is_zero() {
            return self.start;
        }
        if elapsed < self.apex_at {
            let t = progress(elapsed, Duration::ZERO, self.apex_at);
            return lerp(self.start, self.apex, self.outbound.apply(t));
        }
        if elapsed < self.tuck_at {
            let t = progress(elapsed, self.apex_at, self.tuck_at);
            return lerp(self.apex, self.tuck, t);
        }
        if elapsed < self.duration {
            let t = progress(elapsed, self.tuck_at, self.duration);
            return lerp(self.tuck, 0.0, t);
        }
        0.0
    }

    /// The curve has returned to rest.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

fn progress(elapsed: Duration, from: Duration, to: Duration) -> f32 {
    let span = to.saturating_sub(from).as_secs_f32();
    if span <= 0.0 {
        return 1.0;
    }
    (elapsed.saturating_sub(from).as_secs_f32() / span).clamp(0.0, 1.0)
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::FlingDirection;

    fn left_fling() -> DismissKeyframes {
        let fling = Fling {
            projected: -900.0,
            distance: 640.0,
            direction: FlingDirection::Left,
        };
        DismissKeyframes::new(-120.0, &fling, &DismissConfig::default())
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn keyframe_values() {
        let kf = left_fling();
        assert_eq!(kf.sample(ms(0)), -120.0);
        assert_eq!(kf.sample(ms(300)), -640.0);
        assert_eq!(kf.sample(ms(530)), 40.0);
        assert_eq!(kf.sample(ms(600)), 0.0);
        assert_eq!(kf.sample(ms(5_000)), 0.0);
    }

    #[test]
    fn outbound_leg_is_eased() {
        let kf = left_fling();
        // Ease-in-out crosses the midpoint at half time.
        let mid = kf.sample(ms(150));
        assert!((mid - (-380.0)).abs() < 0.5, "mid {mid}");
        // Slow start: after 10% of the leg, well under 10% of the distance.
        let early = kf.sample(ms(30));
        assert!(early > -120.0 - 52.0);
    }

    #[test]
    fn right_fling_mirrors() {
        let fling = Fling {
            projected: 900.0,
            distance: 640.0,
            direction: FlingDirection::Right,
        };
        let kf = DismissKeyframes::new(0.0, &fling, &DismissConfig::default());
        assert_eq!(kf.sample(ms(300)), 640.0);
        assert_eq!(kf.sample(ms(530)), -40.0);
    }

    #[test]
    fn magnitude_never_exceeds_the_apex() {
        let kf = left_fling();
        for step in 0..=600 {
            assert!(kf.sample(ms(step)).abs() <= 640.0);
        }
    }
}
