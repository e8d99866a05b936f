//! Offset animations for a single card
//!
//! All curves are pure functions of elapsed time so they can be sampled on
//! any frame clock; [`AnimationDriver`] owns the live offset and decides
//! which curve is sampling it.

pub mod driver;
pub mod easing;
pub mod keyframes;
pub mod spring;
pub mod transition;

pub use driver::{ActiveAnimation, AnimationDriver, DriverTick};
pub use easing::{CubicBezier, EasingFunction};
pub use keyframes::DismissKeyframes;
pub use spring::SettleSpring;
pub use transition::{Lerp, Transition};
