//! Drag accumulation for one card

use std::time::Instant;

use super::velocity::VelocityTracker;
use super::{Point, Side};
use crate::config::GestureConfig;

/// Everything known about one active drag on one card.
#[derive(Debug, Clone)]
pub struct DragSession {
    /// Cumulative horizontal offset of the card.
    offset: f32,
    /// Most recent pointer position in the card's resting frame.
    last_position: Point,
    /// Half of the card the pointer was over before the latest move.
    side: Side,
    velocity: VelocityTracker,
}

impl DragSession {
    /// Card offset the drag has reached.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Half of the card under the pointer.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Latest pointer position.
    pub fn last_position(&self) -> Point {
        self.last_position
    }
}

/// Result of ending a drag, by release or cancellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    /// Offset at release.
    pub offset: f32,
    /// Horizontal velocity in units per second.
    pub velocity: f32,
    /// Half of the card last under the pointer.
    pub side: Side,
}

/// Turns a card's pointer stream into an offset to follow and, on release,
/// a velocity to decide with.
#[derive(Debug, Clone)]
pub struct GestureTracker {
    card_width: f32,
    cfg: GestureConfig,
    session: Option<DragSession>,
}

impl GestureTracker {
    /// Tracker for a card `card_width` wide.
    pub fn new(card_width: f32, cfg: GestureConfig) -> Self {
        Self {
            card_width,
            cfg,
            session: None,
        }
    }

    /// A drag is in progress.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The active drag, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Start a drag at `position`, continuing from the card's current
    /// `offset`. Any unfinished session is discarded.
    pub fn begin(&mut self, position: Point, at: Instant, offset: f32) {
        let mut velocity = VelocityTracker::new(&self.cfg);
        velocity.add(at, offset);
        self.session = Some(DragSession {
            offset,
            last_position: position,
            side: Side::of(position.x, self.card_width),
            velocity,
        });
    }

    /// Apply a pointer move. Returns the offset the card should snap to, or
    /// `None` if no drag is in progress.
    pub fn drag(&mut self, position: Point, at: Instant) -> Option<f32> {
        let session = self.session.as_mut()?;
        let delta = position.x - session.last_position.x;
        session.side = Side::of(session.last_position.x, self.card_width);
        session.last_position = position;
        session.offset += delta;
        session.velocity.add(at, session.offset);
        Some(session.offset)
    }

    /// End the drag with the pointer lifted at `position`.
    pub fn finish(&mut self, position: Point, at: Instant) -> Option<DragRelease> {
        self.drag(position, at)?;
        self.release()
    }

    /// End the drag without a final position; uses the best-known samples.
    pub fn cancel(&mut self) -> Option<DragRelease> {
        self.release()
    }

    fn release(&mut self) -> Option<DragRelease> {
        let session = self.session.take()?;
        Some(DragRelease {
            offset: session.offset,
            velocity: session.velocity.velocity(),
            side: session.side,
        })
    }
}
