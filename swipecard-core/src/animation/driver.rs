//! Owner of a card's live offset and its settle/dismiss animations

use std::time::{Duration, Instant};

use super::keyframes::DismissKeyframes;
use super::spring::SettleSpring;
use crate::config::SwipeConfig;
use crate::decision::Fling;

/// The animation currently driving a card's offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActiveAnimation {
    /// Springing back to rest.
    Settle {
        /// Curve being sampled.
        spring: SettleSpring,
        /// Frame clock origin.
        started_at: Instant,
    },
    /// Flying off and tucking back.
    Dismiss {
        /// Curve being sampled.
        keyframes: DismissKeyframes,
        /// Frame clock origin.
        started_at: Instant,
        /// Offset magnitude at which the card leaves the stack.
        hurdle: f32,
        /// Elapsed time of the previous frame, to catch an apex skipped
        /// between frames.
        last_elapsed: Duration,
    },
}

/// Result of advancing the driver by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DriverTick {
    /// Offset after this frame.
    pub offset: f32,
    /// The dismiss animation crossed the removal hurdle on this frame.
    /// Reported at most once per dismiss cycle.
    pub cleared_hurdle: bool,
    /// The animation ended on this frame.
    pub finished: bool,
}

/// Owns a card's live horizontal offset and whichever animation moves it.
#[derive(Debug, Clone)]
pub struct AnimationDriver {
    config: SwipeConfig,
    offset: f32,
    animation: Option<ActiveAnimation>,
    /// Latched once the current dismiss cycle has requested removal.
    cleared_hurdle: bool,
}

impl AnimationDriver {
    /// Driver at rest at offset 0.
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            offset: 0.0,
            animation: None,
            cleared_hurdle: false,
        }
    }

    /// Live offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// The running animation, if any.
    pub fn animation(&self) -> Option<&ActiveAnimation> {
        self.animation.as_ref()
    }

    /// Frames are needed.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// A dismiss curve is running.
    pub fn is_dismissing(&self) -> bool {
        matches!(self.animation, Some(ActiveAnimation::Dismiss { .. }))
    }

    /// The current or last dismiss cycle already requested removal.
    pub fn has_cleared_hurdle(&self) -> bool {
        self.cleared_hurdle
    }

    /// Stop any animation, leaving the offset where the last frame put it.
    pub fn stop(&mut self) {
        if self.animation.take().is_some() {
            tracing::trace!(offset = self.offset, "animation stopped");
        }
    }

    /// Jump to `offset` without easing; stops any animation.
    pub fn snap_to(&mut self, offset: f32) {
        self.stop();
        self.offset = offset;
    }

    /// Spring back to rest, seeded with the release velocity.
    pub fn settle(&mut self, velocity: f32, now: Instant) {
        let spring = SettleSpring::new(self.offset, 0.0, velocity, &self.config.settle);
        self.animation = Some(ActiveAnimation::Settle {
            spring,
            started_at: now,
        });
    }

    /// Fly off as described by `fling`, re-arming the removal latch.
    pub fn dismiss(&mut self, fling: &Fling, now: Instant) {
        let keyframes = DismissKeyframes::new(self.offset, fling, &self.config.dismiss);
        let cap = self.config.card.width * self.config.dismiss.max_fling_factor;
        self.cleared_hurdle = false;
        self.animation = Some(ActiveAnimation::Dismiss {
            keyframes,
            started_at: now,
            hurdle: cap.min(fling.distance),
            last_elapsed: Duration::ZERO,
        });
    }

    /// Advance to `now`. Returns `None` when nothing is animating.
    pub fn tick(&mut self, now: Instant) -> Option<DriverTick> {
        let animation = self.animation.as_mut()?;
        let mut tick = DriverTick::default();

        match animation {
            ActiveAnimation::Settle { spring, started_at } => {
                let elapsed = now.saturating_duration_since(*started_at);
                if spring.is_settled(elapsed) {
                    self.offset = spring.target;
                    tick.finished = true;
                } else {
                    self.offset = spring.sample(elapsed).0;
                }
            }
            ActiveAnimation::Dismiss {
                keyframes,
                started_at,
                hurdle,
                last_elapsed,
            } => {
                let elapsed = now.saturating_duration_since(*started_at);
                self.offset = keyframes.sample(elapsed);

                let skipped_apex =
                    *last_elapsed < keyframes.apex_at && elapsed >= keyframes.apex_at;
                let peak = if skipped_apex {
                    self.offset.abs().max(keyframes.apex.abs())
                } else {
                    self.offset.abs()
                };
                *last_elapsed = elapsed;

                if peak >= *hurdle && !self.cleared_hurdle {
                    self.cleared_hurdle = true;
                    tick.cleared_hurdle = true;
                    tracing::debug!(
                        offset = self.offset,
                        hurdle = *hurdle,
                        "dismiss cleared hurdle"
                    );
                }
                if keyframes.is_finished(elapsed) {
                    tick.finished = true;
                }
            }
        }

        if tick.finished {
            self.animation = None;
        }
        tick.offset = self.offset;
        Some(tick)
    }
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}
