//! Root-level subscription composition

use std::time::Instant;

use iced::{Subscription, window};

use crate::messages::Message;
use crate::state::State;

/// Frame ticks while anything animates, nothing otherwise.
pub fn subscription(state: &State) -> Subscription<Message> {
    if state.is_animating(Instant::now()) {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}
