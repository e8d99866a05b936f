use std::time::{Duration, Instant};

use swipecard_core::{CardId, Phase, Point, PointerEvent};
use swipecard_player::app::AppConfig;
use swipecard_player::messages::Message;
use swipecard_player::state::State;
use swipecard_player::update::update;

fn at(start: Instant, ms: u64) -> Instant {
    start + Duration::from_millis(ms)
}

fn pointer(state: &mut State, id: CardId, event: PointerEvent) {
    let _ = update(state, Message::Pointer(id, event));
}

fn point(x: f32) -> Point {
    Point::new(x, 180.0)
}

/// Press, drag in six 10ms steps of `step`, release. Returns the release time.
fn drag(state: &mut State, start: Instant, step: f32) -> u64 {
    let id = state.stack.front().unwrap().id;
    let mut x = 160.0;
    let position = point(x);
    pointer(state, id, PointerEvent::Down { position, at: start });

    let mut t = 0;
    for _ in 0..6 {
        t += 10;
        x += step;
        let (position, now) = (point(x), at(start, t));
        pointer(state, id, PointerEvent::Move { position, at: now });
    }

    t += 8;
    let (position, now) = (point(x), at(start, t));
    pointer(state, id, PointerEvent::Up { position, at: now });
    t
}

fn run_frames(state: &mut State, start: Instant, mut t: u64) -> u64 {
    while state.is_animating(at(start, t)) {
        t += 16;
        let _ = update(state, Message::Frame(at(start, t)));
        assert!(t < 10_000, "frames never stopped");
    }
    t
}

#[test]
fn fling_removes_front_card_and_relayouts_the_fan() {
    let mut state = State::new(&AppConfig::default());
    let start = Instant::now();
    let front = state.stack.front().unwrap().id;

    let released = drag(&mut state, start, 45.0);
    assert_eq!(state.arena.phase(front), Phase::Dismissing);

    // Frame by frame until the card leaves the stack.
    let mut t = released;
    while state.stack.get(front).is_some() {
        t += 16;
        let _ = update(&mut state, Message::Frame(at(start, t)));
        assert!(t < released + 1_000, "card never removed");
    }

    assert_eq!(state.stack.len(), 3);
    assert!(!state.arena.contains(front));
    assert!(!state.presentations.contains_key(&front));
    assert!(state.is_animating(at(start, t + 1)));

    run_frames(&mut state, start, t);
    let views = state.card_views(at(start, t + 1_000));
    assert_eq!(views.len(), 3);
    for (index, view) in views.iter().enumerate() {
        assert_eq!(view.presentation, state.stack.presentation_for(index, 3));
    }
}

#[test]
fn gentle_drag_settles_without_removal() {
    let mut state = State::new(&AppConfig::default());
    let start = Instant::now();
    let front = state.stack.front().unwrap().id;

    let released = drag(&mut state, start, 4.0);
    assert_eq!(state.arena.phase(front), Phase::Settling);
    run_frames(&mut state, start, released);

    assert_eq!(state.stack.len(), 4);
    assert_eq!(state.arena.offset(front), 0.0);
    assert_eq!(state.arena.phase(front), Phase::Idle);
}

#[test]
fn last_card_cannot_be_flung_away() {
    let config = AppConfig::default().with_deck(vec![0xff90caf9]);
    let mut state = State::new(&config);
    let start = Instant::now();
    let only = state.stack.front().unwrap().id;

    let released = drag(&mut state, start, -45.0);
    run_frames(&mut state, start, released);

    assert_eq!(state.stack.len(), 1);
    assert_eq!(state.stack.front().unwrap().id, only);
    assert_eq!(state.arena.offset(only), 0.0);
}

#[test]
fn events_for_departed_cards_are_ignored() {
    let mut state = State::new(&AppConfig::default());
    let at = Instant::now();
    pointer(&mut state, CardId::new(), PointerEvent::Cancel { at });
    assert_eq!(state.stack.len(), 4);
    assert!(!state.arena.is_animating());
}
