//! # Swipecard Core
//!
//! Framework-independent logic behind a stack of swipeable cards: pointer
//! tracking, the settle-or-dismiss decision, the spring and keyframe
//! animations that move a released card, and the observable stack the cards
//! live in.
//!
//! ## Data flow
//!
//! ```text
//! PointerEvent ─▶ GestureTracker ─▶ DecisionPolicy ─▶ AnimationDriver
//!                                                         │ cleared hurdle
//!                                                         ▼
//!                                    StackEvent ◀── CardStack::remove
//! ```
//!
//! - [`gesture`]: drag accumulation and release velocity
//! - [`decision`]: exponential-decay projection and fling distance
//! - [`animation`]: settle spring, dismiss keyframes, the per-card driver
//! - [`motion`]: the per-card phase machine tying the three together
//! - [`arena`]: per-card motion state keyed by [`card::CardId`]
//! - [`stack`]: ordered cards, fan presentation, change events
//!
//! ## Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use swipecard_core::{
//!     CardArena, CardStack, PointerEvent, Point, SwipeConfig, constants::DEFAULT_DECK,
//! };
//!
//! let config = SwipeConfig::default();
//! let mut stack = CardStack::from_deck(&DEFAULT_DECK, config.fan);
//! let mut arena = CardArena::new(config);
//! arena.sync(stack.ids());
//!
//! let front = stack.front().unwrap().id;
//! let start = Instant::now();
//! arena.handle(front, PointerEvent::Down { position: Point::new(160.0, 100.0), at: start })?;
//! for i in 1..=5u64 {
//!     let position = Point::new(160.0 - i as f32 * 50.0, 100.0);
//!     let at = start + Duration::from_millis(i * 10);
//!     arena.handle(front, PointerEvent::Move { position, at })?;
//! }
//! arena.handle(front, PointerEvent::Up {
//!     position: Point::new(-90.0, 100.0),
//!     at: start + Duration::from_millis(60),
//! })?;
//!
//! for frame in 1..=40u64 {
//!     for (id, update) in arena.tick(start + Duration::from_millis(60 + frame * 16)) {
//!         if update.remove {
//!             stack.remove(id);
//!         }
//!     }
//! }
//! assert_eq!(stack.len(), 3);
//! # Ok::<(), swipecard_core::SwipeError>(())
//! ```

pub mod animation;
pub mod arena;
pub mod card;
pub mod config;
pub mod constants;
pub mod decision;
pub mod error;
pub mod gesture;
pub mod motion;
pub mod stack;

pub use animation::{AnimationDriver, DriverTick, EasingFunction, Transition};
pub use arena::CardArena;
pub use card::{Card, CardId, CardStyle, PlaceholderBlock, Rgba};
pub use config::SwipeConfig;
pub use decision::{Decision, DecisionPolicy, Fling, FlingDirection};
pub use error::{Result, SwipeError};
pub use gesture::{GestureTracker, Point, PointerEvent, Side};
pub use motion::{CardMotion, MotionUpdate, Phase};
pub use stack::{CardStack, Presentation, StackEvent};
