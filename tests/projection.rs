mod common;

use std::time::Instant;

use common::{drag, items, recording_deck, run_frames, TestItem, SCREEN_WIDTH};
use swipedeck::ui::deck::{
    project, CardRenderer, DeckMetrics, DeckState, Offset, Projection, Sequence, StackView,
    SwipeDeck, SwipeDirection, MAX_ROTATION_DEG,
};

/// Renders each card as its name.
struct Names;

impl CardRenderer<TestItem> for Names {
    type Visual = String;

    fn render_card(&self, item: &TestItem) -> String {
        item.name.to_string()
    }

    fn render_empty(&self) -> String {
        "empty".to_string()
    }
}

#[test]
fn initial_stack_shows_every_card_with_top_last() {
    let (deck, _log) = recording_deck(&["A", "B", "C"]);

    let Projection::Stack(cards) = deck.projection() else {
        panic!("Expected a stack");
    };
    let names: Vec<_> = cards.iter().map(|card| card.item.name).collect();
    assert_eq!(names, vec!["C", "B", "A"]);

    let top = &cards[2];
    assert_eq!(top.depth, 0);
    assert_eq!(top.translate, Offset::ZERO);
    assert_eq!(top.rotation_deg, 0.0);
    assert!(top.interactive);
    assert!(cards[..2].iter().all(|card| !card.interactive));
}

#[test]
fn queued_cards_cascade_by_depth() {
    let state = DeckState::new(
        Sequence::new(items(&["A", "B", "C"])),
        DeckMetrics::new(SCREEN_WIDTH).with_cascade_step(4.0),
    );

    let Projection::Stack(cards) = project(&state) else {
        panic!("Expected a stack");
    };
    let translations: Vec<_> = cards.iter().map(|card| (card.depth, card.translate)).collect();
    assert_eq!(
        translations,
        vec![
            (2, Offset::new(0.0, 8.0)),
            (1, Offset::new(0.0, 4.0)),
            (0, Offset::ZERO),
        ]
    );
}

#[test]
fn dragged_card_follows_offset_and_rotates() {
    let (mut deck, _log) = recording_deck(&["A", "B"]);
    assert!(deck.drag_start());
    deck.drag_move(300.0, -20.0);

    let projection = deck.projection();
    let top = projection.top().expect("top card");
    assert_eq!(top.item.name, "A");
    assert_eq!(top.translate, Offset::new(300.0, -20.0));
    // 300 of a 600 rotation domain
    assert!((top.rotation_deg - MAX_ROTATION_DEG / 2.0).abs() < 1e-3);
}

#[test]
fn rotation_clamps_past_the_domain() {
    let (mut deck, _log) = recording_deck(&["A"]);
    assert!(deck.drag_start());
    deck.drag_move(-10_000.0, 0.0);

    let projection = deck.projection();
    let top = projection.top().expect("top card");
    assert_eq!(top.rotation_deg, -MAX_ROTATION_DEG);
    assert_eq!(top.translate.x, -10_000.0);
}

#[test]
fn last_card_renders_alone_and_then_empty() {
    let (mut deck, _log) = recording_deck(&["A", "B"]);
    let mut now = Instant::now();
    deck.force_swipe(SwipeDirection::Left, now);
    now = run_frames(&mut deck, now);

    let Projection::Stack(cards) = deck.projection() else {
        panic!("Expected a stack");
    };
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].item.name, "B");
    assert_eq!(cards[0].position, 1);

    drag(&mut deck, 250.0, 0.0, now);
    run_frames(&mut deck, now);
    assert_eq!(deck.projection(), Projection::Exhausted);
}

#[test]
fn compose_keys_layers_by_item_id() {
    let (deck, _log) = recording_deck(&["A", "B"]);

    match deck.render(&Names) {
        StackView::Cards(layers) => {
            let keyed: Vec<_> = layers
                .iter()
                .map(|layer| (layer.key, layer.visual.as_str()))
                .collect();
            assert_eq!(keyed, vec![(2, "B"), (1, "A")]);
        }
        StackView::Empty(_) => panic!("Expected cards"),
    }
}

#[test]
fn exhausted_deck_renders_empty_visual() {
    let deck = SwipeDeck::new(Vec::<TestItem>::new(), DeckMetrics::new(SCREEN_WIDTH));
    assert_eq!(deck.render(&Names), StackView::Empty("empty".to_string()));
}

#[test]
fn projection_does_not_touch_state() {
    let (mut deck, _log) = recording_deck(&["A", "B"]);
    assert!(deck.drag_start());
    deck.drag_move(42.0, 7.0);
    let before = deck.state().clone();

    let _ = deck.projection();
    let _ = deck.render(&Names);

    assert_eq!(deck.state(), &before);
}
