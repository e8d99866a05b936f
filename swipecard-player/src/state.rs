use std::collections::HashMap;
use std::time::Instant;

use swipecard_core::card::CardStyle;
use swipecard_core::{
    CardArena, CardId, CardStack, EasingFunction, Presentation, StackEvent, SwipeConfig,
    Transition,
};
use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::app::AppConfig;
use crate::widgets::CardView;

/// Everything the window renders and mutates.
#[derive(Debug)]
pub struct State {
    pub config: SwipeConfig,
    pub stack: CardStack,
    pub arena: CardArena,
    pub stack_events: broadcast::Receiver<StackEvent>,
    /// Animated fan position per card, retargeted whenever the stack changes.
    pub presentations: HashMap<CardId, Transition<Presentation>>,
}

impl State {
    pub fn new(config: &AppConfig) -> Self {
        let swipe = config.swipe;
        let stack = CardStack::from_deck(&config.deck, swipe.fan);
        let stack_events = stack.subscribe();

        let mut arena = CardArena::new(swipe);
        arena.sync(stack.ids());

        let presentations = stack
            .presentations()
            .into_iter()
            .map(|(id, presentation)| (id, presentation_transition(&swipe, presentation)))
            .collect();

        Self {
            config: swipe,
            stack,
            arena,
            stack_events,
            presentations,
        }
    }

    /// Apply pending stack notifications: prune motion state of removed
    /// cards and retarget the fan of the survivors.
    pub fn drain_stack_events(&mut self, now: Instant) -> usize {
        let mut applied = 0;
        loop {
            match self.stack_events.try_recv() {
                Ok(StackEvent::Removed { id, index, remaining }) => {
                    log::debug!("Card {id} left index {index}, {remaining} remaining");
                    self.arena.remove(id);
                    self.presentations.remove(&id);
                    applied += 1;
                }
                Ok(StackEvent::Pushed { id, index }) => {
                    log::debug!("Card {id} pushed at index {index}");
                    self.arena.register(id);
                    applied += 1;
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    log::warn!("Missed {skipped} stack events, resyncing");
                    self.arena.sync(self.stack.ids());
                    self.presentations.retain(|id, _| self.stack.get(*id).is_some());
                    applied += 1;
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            }
        }

        if applied > 0 {
            self.retarget_presentations(now);
        }
        applied
    }

    fn retarget_presentations(&mut self, now: Instant) {
        for (id, target) in self.stack.presentations() {
            match self.presentations.get_mut(&id) {
                Some(transition) => transition.transition_to(target, now),
                None => {
                    self.presentations
                        .insert(id, presentation_transition(&self.config, target));
                }
            }
        }
    }

    /// Current fan position of a card, mid-transition if one is running.
    pub fn presentation(&self, id: CardId, now: Instant) -> Option<Presentation> {
        self.presentations
            .get(&id)
            .map(|transition| transition.value_at(now))
    }

    /// Frames are needed while a card moves or the fan is re-laying out.
    pub fn is_animating(&self, now: Instant) -> bool {
        self.arena.is_animating()
            || self
                .presentations
                .values()
                .any(|transition| transition.is_transitioning(now))
    }

    /// Snapshot of the stack for drawing, back to front.
    pub fn card_views(&self, now: Instant) -> Vec<CardView> {
        let total = self.stack.len();
        self.stack
            .iter()
            .enumerate()
            .map(|(index, card)| CardView {
                id: card.id,
                style: CardStyle {
                    corner_radius: self.config.card.corner_radius,
                    ..card.style
                },
                presentation: self
                    .presentation(card.id, now)
                    .unwrap_or_else(|| self.stack.presentation_for(index, total)),
                offset: self.arena.offset(card.id),
                side: self.arena.get(card.id).ok().and_then(|motion| motion.side()),
            })
            .collect()
    }
}

fn presentation_transition(
    config: &SwipeConfig,
    presentation: Presentation,
) -> Transition<Presentation> {
    Transition::new(
        presentation,
        config.fan.transition(),
        EasingFunction::EaseOutCubic,
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use swipecard_core::Card;

    use super::*;

    #[test]
    fn lagged_receiver_resyncs_from_the_stack() {
        let mut state = State::new(&AppConfig::default());
        let originals: Vec<_> = state.stack.ids().collect();

        // The removals fall out of the channel once it overflows.
        for id in &originals[..3] {
            assert!(state.stack.remove(*id).is_some());
        }
        for i in 0..70u32 {
            state.stack.push(Card::from_argb(0xff00_0000 | i)).unwrap();
        }

        assert!(state.drain_stack_events(Instant::now()) > 0);

        let ids: HashSet<_> = state.stack.ids().collect();
        assert_eq!(ids.len(), 71);
        assert_eq!(state.arena.len(), ids.len());
        assert!(ids.iter().all(|id| state.arena.contains(*id)));
        assert_eq!(state.presentations.keys().copied().collect::<HashSet<_>>(), ids);
        for id in &originals[..3] {
            assert!(!state.arena.contains(*id));
            assert!(!state.presentations.contains_key(id));
        }
    }
}
