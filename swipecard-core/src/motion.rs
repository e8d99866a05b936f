//! Per-card gesture/animation state machine
//!
//! ```text
//!            Down                 Up/Cancel (settle)
//!   Idle ───────────▶ Dragging ─────────────────────▶ Settling
//!    ▲                 │  ▲ Move                        │
//!    │                 │  └──┘                          │ done
//!    │                 │ Up/Cancel (dismiss)            ▼
//!    │                 └──────────────────────────▶ Dismissing ──▶ Idle
//!    │                                                   done
//!    └── Down from Settling or Dismissing stops the animation first
//! ```

use std::time::Instant;

use crate::animation::AnimationDriver;
use crate::config::SwipeConfig;
use crate::decision::{Decision, DecisionPolicy};
use crate::gesture::{GestureTracker, PointerEvent, Side};

/// Where a card is in its gesture/animation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// At rest.
    #[default]
    Idle,
    /// Following the pointer.
    Dragging,
    /// Springing back after a gentle release.
    Settling,
    /// Flying off after a fling.
    Dismissing,
}

/// What changed after feeding the machine an event or a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionUpdate {
    /// Offset to render.
    pub offset: f32,
    /// Phase after the event.
    pub phase: Phase,
    /// Set on the release that produced it.
    pub decision: Option<Decision>,
    /// The owner should remove this card from its stack now.
    pub remove: bool,
}

/// Gesture tracking, release decision and offset animation for one card.
#[derive(Debug, Clone)]
pub struct CardMotion {
    phase: Phase,
    tracker: GestureTracker,
    driver: AnimationDriver,
    policy: DecisionPolicy,
}

impl CardMotion {
    /// Idle card at rest.
    pub fn new(config: &SwipeConfig) -> Self {
        Self {
            phase: Phase::Idle,
            tracker: GestureTracker::new(config.card.width, config.gesture),
            driver: AnimationDriver::new(*config),
            policy: DecisionPolicy::new(config),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Live horizontal offset to render.
    pub fn offset(&self) -> f32 {
        self.driver.offset()
    }

    /// Half of the card under the pointer while dragging.
    pub fn side(&self) -> Option<Side> {
        self.tracker.session().map(|session| session.side())
    }

    /// Frames are needed.
    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    /// Feed one pointer event through the phase machine.
    pub fn handle(&mut self, event: PointerEvent) -> MotionUpdate {
        let mut decision = None;
        match event {
            PointerEvent::Down { position, at } => {
                // A new gesture always pre-empts the running animation.
                self.driver.stop();
                self.tracker.begin(position, at, self.driver.offset());
                self.transition(Phase::Dragging);
            }
            PointerEvent::Move { position, at } => {
                if let Some(offset) = self.tracker.drag(position, at) {
                    self.driver.snap_to(offset);
                }
            }
            PointerEvent::Up { position, at } => {
                if let Some(release) = self.tracker.finish(position, at) {
                    decision = Some(self.release(release.offset, release.velocity, at));
                }
            }
            PointerEvent::Cancel { at } => {
                if let Some(release) = self.tracker.cancel() {
                    decision = Some(self.release(release.offset, release.velocity, at));
                }
            }
        }

        MotionUpdate {
            offset: self.driver.offset(),
            phase: self.phase,
            decision,
            remove: false,
        }
    }

    /// Advance the running animation to `now`.
    pub fn tick(&mut self, now: Instant) -> MotionUpdate {
        let mut remove = false;
        if let Some(tick) = self.driver.tick(now) {
            remove = tick.cleared_hurdle;
            if tick.finished {
                self.transition(Phase::Idle);
            }
        }
        MotionUpdate {
            offset: self.driver.offset(),
            phase: self.phase,
            decision: None,
            remove,
        }
    }

    fn release(&mut self, offset: f32, velocity: f32, at: Instant) -> Decision {
        self.driver.snap_to(offset);
        let decision = self.policy.decide(offset, velocity);
        match &decision {
            Decision::Settle { .. } => {
                self.driver.settle(velocity, at);
                self.transition(Phase::Settling);
            }
            Decision::Dismiss(fling) => {
                self.driver.dismiss(fling, at);
                self.transition(Phase::Dismissing);
            }
        }
        decision
    }

    fn transition(&mut self, next: Phase) {
        if self.phase != next {
            tracing::trace!(from = ?self.phase, to = ?next, "card phase");
            self.phase = next;
        }
    }
}
