use std::time::Instant;

use iced::Task;
use swipecard_core::{CardId, PointerEvent, SwipeError};

use crate::messages::Message;
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::Pointer(id, event) => handle_pointer(state, id, event),
        Message::Frame(now) => handle_frame(state, now),
    }
    Task::none()
}

fn handle_pointer(state: &mut State, id: CardId, event: PointerEvent) {
    match state.arena.handle(id, event) {
        Ok(update) => {
            if let Some(decision) = update.decision {
                log::debug!("Card {id} released at {:.1}: {decision:?}", update.offset);
            }
        }
        // The card can leave the stack between press and release.
        Err(SwipeError::UnknownCard(id)) => {
            log::debug!("Dropping pointer event for departed card {id}");
        }
        Err(err) => log::warn!("Pointer event for card {id} failed: {err}"),
    }
}

fn handle_frame(state: &mut State, now: Instant) {
    for (id, update) in state.arena.tick(now) {
        if update.remove && state.stack.remove(id).is_none() {
            log::debug!("Card {id} cleared its hurdle but stays in the stack");
        }
    }

    state.drain_stack_events(now);

    for transition in state.presentations.values_mut() {
        transition.settle(now);
    }
}
