//! Swipecard Player library
//!
//! The desktop host for the swipeable card stack. The executable in
//! `src/main.rs` only initializes logging and runs [`app::run`]; everything
//! else lives here so the update flow can be driven from tests without a
//! window.

pub mod app;
pub mod messages;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;
pub mod widgets;
