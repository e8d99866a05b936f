//! Observable, ordered stack of cards
//!
//! Index 0 is the back of the stack; the last card is the front one the user
//! swipes. Mutations are announced on a broadcast channel so a render layer
//! can diff instead of re-reading the whole stack.

use tokio::sync::broadcast;

use crate::animation::Lerp;
use crate::card::{Card, CardId};
use crate::config::FanConfig;
use crate::error::{Result, SwipeError};

const EVENT_CAPACITY: usize = 64;

/// Change notifications emitted by [`CardStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackEvent {
    /// A card was added at `index` (always the front).
    Pushed {
        /// The new card.
        id: CardId,
        /// Its position, back to front.
        index: usize,
    },
    /// A card left the stack; `remaining` is the new size.
    Removed {
        /// The departed card.
        id: CardId,
        /// Where it was, back to front.
        index: usize,
        /// Stack size after removal.
        remaining: usize,
    },
}

/// Where a card sits in the fan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Presentation {
    /// Uniform scale around the card center.
    pub scale: f32,
    /// Lateral resting offset.
    pub offset_x: f32,
}

impl Presentation {
    /// `scale = 1 - depth * falloff`, `offset_x = depth * spacing`, where
    /// `depth = total - index`.
    pub fn for_position(index: usize, total: usize, fan: &FanConfig) -> Self {
        let depth = total.saturating_sub(index) as f32;
        Self {
            scale: 1.0 - depth * fan.scale_falloff,
            offset_x: depth * fan.spacing,
        }
    }
}

impl Lerp for Presentation {
    fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            scale: self.scale.lerp(to.scale, t),
            offset_x: self.offset_x.lerp(to.offset_x, t),
        }
    }
}

/// Cards back to front, announcing every change on a broadcast channel.
#[derive(Debug)]
pub struct CardStack {
    cards: Vec<Card>,
    fan: FanConfig,
    events: broadcast::Sender<StackEvent>,
}

impl CardStack {
    /// Build a stack, back card first. Ids must be unique.
    pub fn new(cards: impl IntoIterator<Item = Card>, fan: FanConfig) -> Result<Self> {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let mut stack = Self {
            cards: Vec::new(),
            fan,
            events,
        };
        for card in cards {
            stack.insert(card)?;
        }
        Ok(stack)
    }

    /// Build a stack from packed `0xAARRGGBB` colors listed front card
    /// first.
    pub fn from_deck(deck: &[u32], fan: FanConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            cards: deck.iter().rev().map(|argb| Card::from_argb(*argb)).collect(),
            fan,
            events,
        }
    }

    /// Receive every subsequent change.
    pub fn subscribe(&self) -> broadcast::Receiver<StackEvent> {
        self.events.subscribe()
    }

    /// Number of cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// No cards at all. Never true after a removal, only for an empty
    /// constructor input.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards back to front.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Iterate back to front.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Ids back to front.
    pub fn ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().map(|card| card.id)
    }

    /// Look up a card by id.
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Position of a card, back to front.
    pub fn index_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    /// The card drawn on top.
    pub fn front(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Fan layout parameters.
    pub fn fan(&self) -> &FanConfig {
        &self.fan
    }

    /// Add a card at the front.
    pub fn push(&mut self, card: Card) -> Result<()> {
        let id = card.id;
        self.insert(card)?;
        let _ = self.events.send(StackEvent::Pushed {
            id,
            index: self.cards.len() - 1,
        });
        Ok(())
    }

    fn insert(&mut self, card: Card) -> Result<()> {
        if self.get(card.id).is_some() {
            tracing::warn!(id = %card.id, "rejected duplicate card");
            return Err(SwipeError::DuplicateCard(card.id));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Remove the card with `id`, preserving the order of the rest.
    ///
    /// The last remaining card is never removed, and unknown ids are
    /// ignored; both return `None`.
    pub fn remove(&mut self, id: CardId) -> Option<Card> {
        if self.cards.len() <= 1 {
            tracing::debug!(%id, "keeping the last card");
            return None;
        }
        let index = self.index_of(id)?;
        let card = self.cards.remove(index);
        let remaining = self.cards.len();
        tracing::info!(%id, index, remaining, "card removed");
        let _ = self.events.send(StackEvent::Removed {
            id,
            index,
            remaining,
        });
        Some(card)
    }

    /// Fan presentation of the card at `index` in a stack of `total`.
    pub fn presentation_for(&self, index: usize, total: usize) -> Presentation {
        Presentation::for_position(index, total, &self.fan)
    }

    /// Presentation of every card, back to front.
    pub fn presentations(&self) -> Vec<(CardId, Presentation)> {
        let total = self.cards.len();
        self.cards
            .iter()
            .enumerate()
            .map(|(index, card)| (card.id, self.presentation_for(index, total)))
            .collect()
    }
}
