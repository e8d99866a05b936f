use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use swipecard_core::config::FanConfig;
use swipecard_core::{Card, CardStack, Decision, DecisionPolicy, Presentation, SwipeConfig};

fn stack_of(n: usize) -> CardStack {
    let cards = (0..n).map(|i| Card::from_argb(0xff000000 | (i as u32 * 0x010101)));
    CardStack::new(cards, FanConfig::default()).expect("unique ids")
}

#[test]
fn removing_from_larger_stacks_shrinks_by_one_and_keeps_order() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let size = rng.random_range(2..12);
        let mut stack = stack_of(size);
        let before: Vec<_> = stack.ids().collect();
        let victim = before[rng.random_range(0..size)];

        assert!(stack.remove(victim).is_some());

        let expected: Vec<_> = before.into_iter().filter(|id| *id != victim).collect();
        assert_eq!(stack.len(), size - 1);
        assert_eq!(stack.ids().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn single_card_stack_is_a_floor() {
    let mut stack = stack_of(1);
    let id = stack.front().unwrap().id;
    for _ in 0..3 {
        assert!(stack.remove(id).is_none());
    }
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.front().unwrap().id, id);
}

#[test]
fn settle_scenario() {
    let mut config = SwipeConfig::default();
    config.card.width = 320.0;
    config.card.height = 360.0;
    let policy = DecisionPolicy::new(&config);

    match policy.decide(50.0, 0.0) {
        Decision::Settle { projected } => assert_eq!(projected, 50.0),
        other => panic!("expected settle, got {other:?}"),
    }
}

#[test]
fn high_flick_scenario() {
    let policy = DecisionPolicy::default();
    let projected = policy.decay.target(0.0, 5000.0);
    assert!(projected > 320.0);

    match policy.decide(0.0, 5000.0) {
        Decision::Dismiss(fling) => {
            assert_eq!(fling.distance, (projected + 360.0).min(640.0));
        }
        other => panic!("expected dismiss, got {other:?}"),
    }
}

#[test]
fn removal_recomputes_presentation_for_new_total() {
    let mut stack = stack_of(4);
    let victim = stack.cards()[2].id;
    stack.remove(victim);

    let fan = FanConfig::default();
    let presentations = stack.presentations();
    assert_eq!(presentations.len(), 3);
    for (index, (_, presentation)) in presentations.iter().enumerate() {
        assert_eq!(*presentation, Presentation::for_position(index, 3, &fan));
    }
}

#[test]
fn double_remove_on_two_card_stack() {
    let mut stack = stack_of(2);
    let id = stack.front().unwrap().id;
    assert!(stack.remove(id).is_some());
    assert!(stack.remove(id).is_none());
    assert_eq!(stack.len(), 1);
}
