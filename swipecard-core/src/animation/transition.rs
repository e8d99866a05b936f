//! Time-based tween between two values, retargetable mid-flight

use std::time::{Duration, Instant};

use super::easing::EasingFunction;

/// Values a [`Transition`] can interpolate.
pub trait Lerp: Copy {
    /// Value a fraction `t` of the way from `self` to `to`.
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

/// Generic transition state for animating between values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition<T: Lerp> {
    /// Value when the current transition started.
    pub from: T,
    /// Target value.
    pub to: T,
    /// `None` while at rest.
    pub start_time: Option<Instant>,
    /// Length of each transition.
    pub duration: Duration,
    /// Curve applied to progress.
    pub easing: EasingFunction,
}

impl<T: Lerp> Transition<T> {
    /// A transition resting at `initial_value`.
    pub fn new(initial_value: T, duration: Duration, easing: EasingFunction) -> Self {
        Self {
            from: initial_value,
            to: initial_value,
            start_time: None,
            duration,
            easing,
        }
    }

    /// Start moving toward `target`, continuing from wherever the current
    /// transition is at `now`.
    pub fn transition_to(&mut self, target: T, now: Instant) {
        self.from = self.value_at(now);
        self.to = target;
        self.start_time = Some(now);
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress_at(&self, now: Instant) -> f32 {
        let Some(start) = self.start_time else {
            return 1.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let raw =
            now.saturating_duration_since(start).as_secs_f32() / self.duration.as_secs_f32();
        self.easing.apply(raw)
    }

    /// Interpolated value at `now`.
    pub fn value_at(&self, now: Instant) -> T {
        let t = self.progress_at(now);
        if t >= 1.0 {
            self.to
        } else {
            self.from.lerp(self.to, t)
        }
    }

    /// Check if still moving at `now`
    pub fn is_transitioning(&self, now: Instant) -> bool {
        self.start_time
            .is_some_and(|start| now.saturating_duration_since(start) < self.duration)
    }

    /// Drop the start time once the transition is complete.
    pub fn settle(&mut self, now: Instant) {
        if self.start_time.is_some() && !self.is_transitioning(now) {
            self.from = self.to;
            self.start_time = None;
        }
    }

    /// Where the transition is heading.
    pub fn target(&self) -> T {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rests_until_retargeted() {
        let now = Instant::now();
        let t = Transition::new(1.0_f32, Duration::from_millis(300), EasingFunction::Linear);
        assert_eq!(t.value_at(now), 1.0);
        assert!(!t.is_transitioning(now));
    }

    #[test]
    fn linear_midpoint_and_end() {
        let now = Instant::now();
        let mut t = Transition::new(0.0_f32, Duration::from_millis(300), EasingFunction::Linear);
        t.transition_to(30.0, now);
        assert!((t.value_at(now + Duration::from_millis(150)) - 15.0).abs() < 1e-3);
        assert_eq!(t.value_at(now + Duration::from_millis(300)), 30.0);
        assert!(!t.is_transitioning(now + Duration::from_millis(300)));
    }

    #[test]
    fn retarget_continues_from_current_value() {
        let now = Instant::now();
        let mut t = Transition::new(0.0_f32, Duration::from_millis(100), EasingFunction::Linear);
        t.transition_to(100.0, now);
        let halfway = now + Duration::from_millis(50);
        t.transition_to(0.0, halfway);
        assert!((t.value_at(halfway) - 50.0).abs() < 1e-3);
    }

    #[test]
    fn settle_clears_finished_transition() {
        let now = Instant::now();
        let mut t =
            Transition::new(0.0_f32, Duration::from_millis(10), EasingFunction::EaseOutCubic);
        t.transition_to(5.0, now);
        t.settle(now + Duration::from_millis(20));
        assert_eq!(t.start_time, None);
        assert_eq!(t.from, 5.0);
    }
}
