use std::time::Instant;

use swipecard_core::{CardId, PointerEvent};

#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer input routed to the card it grabbed.
    Pointer(CardId, PointerEvent),
    /// Frame-synchronized tick with timestamp from `window::frames()`
    Frame(Instant),
}
