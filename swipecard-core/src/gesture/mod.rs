//! Pointer input for a single card
//!
//! Positions are expressed in the card's resting frame: the fan offset and
//! scale are already removed, the card's own drag offset is not. Moving the
//! pointer by `dx` therefore moves the card by `dx`.

pub mod tracker;
pub mod velocity;

use std::time::Instant;

pub use tracker::{DragRelease, DragSession, GestureTracker};
pub use velocity::VelocityTracker;

/// A position in card-local logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate, the swipe axis.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Point at `(x, y)`.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Which half of the card the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// Left half, including the midpoint.
    #[default]
    Left,
    /// Right half.
    Right,
}

impl Side {
    /// Left when `x` is at or before the horizontal midpoint.
    pub fn of(x: f32, card_width: f32) -> Self {
        if x <= card_width / 2.0 {
            Side::Left
        } else {
            Side::Right
        }
    }
}

/// Pointer stream delivered to a card by the host UI.
///
/// `at` is when the event happened; `position` is where, in the card's
/// resting frame.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// First contact.
    Down { position: Point, at: Instant },
    /// Motion while pressed.
    Move { position: Point, at: Instant },
    /// Release.
    Up { position: Point, at: Instant },
    /// The host lost the pointer (window left, touch stolen).
    Cancel { at: Instant },
}

impl PointerEvent {
    /// Timestamp of the event.
    pub fn at(&self) -> Instant {
        match self {
            PointerEvent::Down { at, .. }
            | PointerEvent::Move { at, .. }
            | PointerEvent::Up { at, .. }
            | PointerEvent::Cancel { at } => *at,
        }
    }
}
