//! Motion state of every card, keyed by id

use std::collections::HashMap;
use std::time::Instant;

use crate::card::CardId;
use crate::config::SwipeConfig;
use crate::error::{Result, SwipeError};
use crate::gesture::PointerEvent;
use crate::motion::{CardMotion, MotionUpdate, Phase};

/// Per-card motion state, looked up by card id.
#[derive(Debug, Clone)]
pub struct CardArena {
    config: SwipeConfig,
    cards: HashMap<CardId, CardMotion>,
}

impl CardArena {
    /// Empty arena; cards get motion state built from `config`.
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            cards: HashMap::new(),
        }
    }

    /// Track exactly `ids`: register new cards, drop the rest.
    pub fn sync(&mut self, ids: impl IntoIterator<Item = CardId>) {
        let mut next = HashMap::with_capacity(self.cards.len());
        for id in ids {
            let motion = self
                .cards
                .remove(&id)
                .unwrap_or_else(|| CardMotion::new(&self.config));
            next.insert(id, motion);
        }
        self.cards = next;
    }

    /// Start tracking `id` if it is not tracked yet.
    pub fn register(&mut self, id: CardId) {
        self.cards
            .entry(id)
            .or_insert_with(|| CardMotion::new(&self.config));
    }

    /// Forget a card; its state is discarded with it.
    pub fn remove(&mut self, id: CardId) -> Option<CardMotion> {
        self.cards.remove(&id)
    }

    /// `id` is tracked.
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    /// Number of tracked cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Motion state of `id`, or [`SwipeError::UnknownCard`].
    pub fn get(&self, id: CardId) -> Result<&CardMotion> {
        self.cards.get(&id).ok_or(SwipeError::UnknownCard(id))
    }

    /// Live offset of a card; untracked cards rest at 0.
    pub fn offset(&self, id: CardId) -> f32 {
        self.cards.get(&id).map_or(0.0, CardMotion::offset)
    }

    /// Phase of a card; untracked cards are idle.
    pub fn phase(&self, id: CardId) -> Phase {
        self.cards.get(&id).map_or(Phase::Idle, CardMotion::phase)
    }

    /// Route a pointer event to its card.
    pub fn handle(&mut self, id: CardId, event: PointerEvent) -> Result<MotionUpdate> {
        let motion = self.cards.get_mut(&id).ok_or(SwipeError::UnknownCard(id))?;
        Ok(motion.handle(event))
    }

    /// Advance every animating card. Returns the updates of cards that moved.
    pub fn tick(&mut self, now: Instant) -> Vec<(CardId, MotionUpdate)> {
        self.cards
            .iter_mut()
            .filter(|(_, motion)| motion.is_animating())
            .map(|(id, motion)| (*id, motion.tick(now)))
            .collect()
    }

    /// Whether any card needs frames.
    pub fn is_animating(&self) -> bool {
        self.cards.values().any(CardMotion::is_animating)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::gesture::Point;

    fn down(x: f32, at: Instant) -> PointerEvent {
        PointerEvent::Down {
            position: Point::new(x, 10.0),
            at,
        }
    }

    fn mv(x: f32, at: Instant) -> PointerEvent {
        PointerEvent::Move {
            position: Point::new(x, 10.0),
            at,
        }
    }

    #[test]
    fn events_for_unknown_cards_are_errors() {
        let mut arena = CardArena::new(SwipeConfig::default());
        let at = Instant::now();
        let err = arena
            .handle(CardId::new(), PointerEvent::Cancel { at })
            .unwrap_err();
        assert!(matches!(err, SwipeError::UnknownCard(_)));
    }

    #[test]
    fn sync_keeps_existing_state_and_prunes_the_rest() {
        let (a, b, c) = (CardId::new(), CardId::new(), CardId::new());
        let mut arena = CardArena::new(SwipeConfig::default());
        arena.sync([a, b]);

        let now = Instant::now();
        arena.handle(a, down(10.0, now)).unwrap();
        arena.handle(a, mv(40.0, now)).unwrap();

        arena.sync([a, c]);
        assert_eq!(arena.offset(a), 30.0);
        assert_eq!(arena.phase(a), Phase::Dragging);
        assert!(!arena.contains(b));
        assert!(arena.contains(c));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn cards_animate_independently() {
        let (a, b) = (CardId::new(), CardId::new());
        let mut arena = CardArena::new(SwipeConfig::default());
        arena.sync([a, b]);

        let now = Instant::now();
        arena.handle(a, down(0.0, now)).unwrap();
        arena.handle(a, mv(60.0, now)).unwrap();
        let released = now + Duration::from_millis(200);
        let up = PointerEvent::Up {
            position: Point::new(60.0, 10.0),
            at: released,
        };
        arena.handle(a, up).unwrap();

        assert!(arena.is_animating());
        let moved = arena.tick(now + Duration::from_millis(216));
        assert_eq!(moved.len(), 1);
        assert_eq!(moved[0].0, a);
        assert_eq!(arena.offset(b), 0.0);
    }
}
