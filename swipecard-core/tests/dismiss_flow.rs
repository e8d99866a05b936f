use std::time::{Duration, Instant};

use swipecard_core::constants::DEFAULT_DECK;
use swipecard_core::{
    CardArena, CardId, CardStack, Phase, Point, PointerEvent, StackEvent, SwipeConfig,
};

fn down(x: f32, at: Instant) -> PointerEvent {
    PointerEvent::Down {
        position: Point::new(x, 120.0),
        at,
    }
}

fn moved(x: f32, at: Instant) -> PointerEvent {
    PointerEvent::Move {
        position: Point::new(x, 120.0),
        at,
    }
}

fn up(x: f32, at: Instant) -> PointerEvent {
    PointerEvent::Up {
        position: Point::new(x, 120.0),
        at,
    }
}

struct Harness {
    stack: CardStack,
    arena: CardArena,
    start: Instant,
}

impl Harness {
    fn new() -> Self {
        let config = SwipeConfig::default();
        let stack = CardStack::from_deck(&DEFAULT_DECK, config.fan);
        let mut arena = CardArena::new(config);
        arena.sync(stack.ids());
        Self {
            stack,
            arena,
            start: Instant::now(),
        }
    }

    fn at(&self, ms: u64) -> Instant {
        self.start + Duration::from_millis(ms)
    }

    fn fling(&mut self, id: CardId, step: f32, from_ms: u64) -> u64 {
        let mut t = from_ms;
        let mut x = 160.0;
        let at = self.at(t);
        self.arena.handle(id, down(x, at)).unwrap();
        for _ in 0..6 {
            t += 10;
            x += step;
            let at = self.at(t);
            self.arena.handle(id, moved(x, at)).unwrap();
        }
        t += 8;
        let at = self.at(t);
        self.arena.handle(id, up(x, at)).unwrap();
        t
    }

    /// Run frames until nothing animates; returns how many removals the
    /// stack accepted.
    fn run_frames(&mut self, from_ms: u64) -> usize {
        let mut removed = 0;
        let mut t = from_ms;
        while self.arena.is_animating() {
            t += 16;
            for (id, update) in self.arena.tick(self.at(t)) {
                if update.remove && self.stack.remove(id).is_some() {
                    removed += 1;
                }
            }
            assert!(t < from_ms + 5_000, "animation never finished");
        }
        removed
    }
}

#[tokio::test]
async fn fling_removes_front_card_and_notifies_subscribers() {
    let mut h = Harness::new();
    let mut events = h.stack.subscribe();
    let front = h.stack.front().unwrap().id;

    let released = h.fling(front, -45.0, 0);
    assert_eq!(h.arena.phase(front), Phase::Dismissing);
    assert_eq!(h.run_frames(released), 1);

    assert_eq!(h.stack.len(), 3);
    assert!(h.stack.get(front).is_none());
    let event = events.recv().await.unwrap();
    assert_eq!(
        event,
        StackEvent::Removed {
            id: front,
            index: 3,
            remaining: 3
        }
    );
}

#[test]
fn flinging_every_card_stops_at_one() {
    let mut h = Harness::new();
    let mut t = 0;
    for round in 0..6 {
        let front = h.stack.front().unwrap().id;
        let step = if round % 2 == 0 { 45.0 } else { -45.0 };
        t = h.fling(front, step, t);
        h.run_frames(t);
        t += 1_000;
        h.arena.sync(h.stack.ids());
    }
    assert_eq!(h.stack.len(), 1);
    // The survivor is back at rest after its own dismiss cycle.
    let survivor = h.stack.front().unwrap().id;
    assert_eq!(h.arena.offset(survivor), 0.0);
}

#[test]
fn gentle_release_leaves_stack_untouched() {
    let mut h = Harness::new();
    let front = h.stack.front().unwrap().id;
    let released = h.fling(front, 5.0, 0);
    assert_eq!(h.arena.phase(front), Phase::Settling);
    assert_eq!(h.run_frames(released), 0);
    assert_eq!(h.stack.len(), 4);
    assert_eq!(h.arena.offset(front), 0.0);
}
