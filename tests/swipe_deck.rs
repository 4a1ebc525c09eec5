mod common;

use std::time::Instant;

use common::{
    after, drag, item, items, metrics, recording_deck, recording_deck_over, run_frames, TestItem,
};
use swipedeck::ui::deck::{
    Offset, Sequence, SpringConfig, SwipeDeck, SwipeDirection, SwipeOutcome, SPRING_SETTLE_LIMIT,
};

#[test]
fn right_swipe_commits_and_reports_pre_advance_item() {
    let (mut deck, log) = recording_deck(&["A", "B"]);
    let start = Instant::now();

    drag(&mut deck, 150.0, 0.0, start);
    assert!(deck.is_animating());
    assert_eq!(deck.index(), 0, "index advances only after the animation");
    assert!(log.lock().is_empty(), "callback waits for the animation");

    run_frames(&mut deck, start);

    assert_eq!(deck.index(), 1);
    assert_eq!(deck.offset(), Offset::ZERO);
    assert_eq!(deck.top_item(), Some(&item(2, "B")));
    assert_eq!(*log.lock(), vec![(SwipeDirection::Right, item(1, "A"))]);
}

#[test]
fn short_left_drag_springs_back_without_callback() {
    let (mut deck, log) = recording_deck(&["A", "B"]);
    let start = Instant::now();

    assert!(deck.drag_start());
    deck.drag_move(-40.0, 10.0);
    assert_eq!(deck.offset(), Offset::new(-40.0, 10.0));
    assert_eq!(deck.drag_end(-40.0, 10.0, start), Some(SwipeOutcome::Cancel));

    let mid = after(start, 50);
    deck.on_frame(mid);
    assert!(deck.offset().max_abs() < 40.0);

    run_frames(&mut deck, mid);
    assert_eq!(deck.index(), 0);
    assert_eq!(deck.offset(), Offset::ZERO);
    assert!(log.lock().is_empty());
}

#[test]
fn release_exactly_on_threshold_cancels() {
    let (mut deck, log) = recording_deck(&["A", "B"]);
    assert_eq!(deck.metrics().swipe_threshold(), 100.0);

    for dx in [100.0, -100.0] {
        let start = Instant::now();
        assert!(deck.drag_start());
        assert_eq!(deck.drag_end(dx, 0.0, start), Some(SwipeOutcome::Cancel));
        run_frames(&mut deck, start);
    }

    assert_eq!(deck.index(), 0);
    assert!(log.lock().is_empty());
}

#[test]
fn left_commit_uses_left_callback_only() {
    let (mut deck, log) = recording_deck(&["A", "B"]);
    let start = Instant::now();

    assert!(deck.drag_start());
    assert_eq!(
        deck.drag_end(-101.0, 0.0, start),
        Some(SwipeOutcome::Commit(SwipeDirection::Left))
    );
    run_frames(&mut deck, start);

    assert_eq!(*log.lock(), vec![(SwipeDirection::Left, item(1, "A"))]);
}

#[test]
fn callback_fires_once_per_commit() {
    let (mut deck, log) = recording_deck(&["A", "B"]);
    let start = Instant::now();

    drag(&mut deck, 150.0, 0.0, start);
    let end = run_frames(&mut deck, start);
    deck.on_frame(after(end, 16));
    deck.animation_done();
    deck.on_frame(after(end, 500));

    assert_eq!(log.lock().len(), 1);
}

#[test]
fn animation_done_completes_commit_immediately() {
    let (mut deck, log) = recording_deck(&["A", "B"]);
    drag(&mut deck, 200.0, 0.0, Instant::now());

    deck.animation_done();

    assert!(!deck.is_animating());
    assert_eq!(deck.index(), 1);
    assert_eq!(log.lock().len(), 1);
}

#[test]
fn swiping_every_card_exhausts_the_deck() {
    let (mut deck, log) = recording_deck(&["A", "B"]);
    let mut now = Instant::now();

    for direction in [SwipeDirection::Right, SwipeDirection::Left] {
        assert!(deck.force_swipe(direction, now));
        now = run_frames(&mut deck, now);
    }

    assert!(deck.is_exhausted());
    assert_eq!(deck.index(), deck.len());
    assert_eq!(deck.top_item(), None);
    assert!(!deck.drag_start());
    assert!(!deck.force_swipe(SwipeDirection::Right, now));
    assert_eq!(
        *log.lock(),
        vec![
            (SwipeDirection::Right, item(1, "A")),
            (SwipeDirection::Left, item(2, "B")),
        ]
    );
}

#[test]
fn empty_deck_starts_exhausted() {
    let (mut deck, log) = recording_deck(&[]);
    assert!(deck.is_empty());
    assert!(deck.is_exhausted());
    assert!(!deck.drag_start());
    assert_eq!(deck.drag_end(300.0, 0.0, Instant::now()), None);
    assert!(log.lock().is_empty());
}

#[test]
fn force_swipe_is_rejected_while_animating() {
    let (mut deck, log) = recording_deck(&["A", "B", "C"]);
    let start = Instant::now();

    assert!(deck.force_swipe(SwipeDirection::Right, start));
    assert!(!deck.force_swipe(SwipeDirection::Left, after(start, 10)));
    run_frames(&mut deck, start);

    assert_eq!(deck.index(), 1);
    assert_eq!(*log.lock(), vec![(SwipeDirection::Right, item(1, "A"))]);
}

#[test]
fn force_swipe_takes_over_an_active_drag() {
    let (mut deck, log) = recording_deck(&["A", "B"]);
    let start = Instant::now();

    assert!(deck.drag_start());
    deck.drag_move(30.0, 0.0);
    assert!(deck.force_swipe(SwipeDirection::Left, start));
    assert!(!deck.is_dragging());
    run_frames(&mut deck, start);

    assert_eq!(*log.lock(), vec![(SwipeDirection::Left, item(1, "A"))]);
}

#[test]
fn drag_is_refused_during_animation() {
    let (mut deck, _log) = recording_deck(&["A", "B"]);
    let start = Instant::now();

    drag(&mut deck, 150.0, 0.0, start);
    assert!(!deck.drag_start());
    deck.drag_move(-500.0, 0.0);
    assert!(deck.is_animating());
    assert_ne!(deck.offset(), Offset::new(-500.0, 0.0));
}

#[test]
fn new_sequence_restarts_at_first_card() {
    let (mut deck, _log) = recording_deck(&["A", "B", "C"]);
    let mut now = Instant::now();
    for _ in 0..2 {
        deck.force_swipe(SwipeDirection::Right, now);
        now = run_frames(&mut deck, now);
    }
    assert_eq!(deck.index(), 2);

    deck.reset_for_new_sequence(items(&["A", "B", "C"]));

    assert_eq!(deck.index(), 0);
    assert_eq!(deck.top_item(), Some(&item(1, "A")));
}

#[test]
fn same_sequence_instance_keeps_position() {
    let sequence = Sequence::new(items(&["A", "B", "C"]));
    let (mut deck, _log) = recording_deck_over(sequence.clone());
    let start = Instant::now();

    deck.force_swipe(SwipeDirection::Right, start);
    run_frames(&mut deck, start);
    deck.reset_for_new_sequence(sequence);

    assert_eq!(deck.index(), 1);
}

#[test]
fn replacing_mid_commit_reports_captured_item_and_keeps_new_deck_at_start() {
    let (mut deck, log) = recording_deck(&["A", "B"]);
    let start = Instant::now();

    drag(&mut deck, 150.0, 0.0, start);
    deck.reset_for_new_sequence(vec![item(7, "X")]);
    assert_eq!(deck.index(), 0);
    run_frames(&mut deck, start);

    assert_eq!(*log.lock(), vec![(SwipeDirection::Right, item(1, "A"))]);
    assert_eq!(deck.index(), 0);
    assert_eq!(deck.top_item(), Some(&item(7, "X")));
}

#[test]
fn replacing_with_empty_mid_commit_keeps_index_in_bounds() {
    let (mut deck, log) = recording_deck(&["A", "B"]);
    let start = Instant::now();

    drag(&mut deck, 150.0, 0.0, start);
    deck.reset_for_new_sequence(Vec::<TestItem>::new());
    run_frames(&mut deck, start);

    assert!(deck.index() <= deck.len());
    assert!(deck.is_exhausted());
    assert_eq!(log.lock().len(), 1);
}

#[test]
fn replacing_mid_drag_drops_the_drag() {
    let (mut deck, _log) = recording_deck(&["A"]);
    assert!(deck.drag_start());
    deck.drag_move(60.0, 0.0);

    deck.reset_for_new_sequence(items(&["B"]));

    assert!(!deck.is_dragging());
    assert_eq!(deck.offset(), Offset::ZERO);
    assert_eq!(deck.drag_end(200.0, 0.0, Instant::now()), None);
}

#[test]
fn deck_without_callbacks_still_advances() {
    let mut deck = SwipeDeck::new(items(&["A", "B"]), metrics());
    let start = Instant::now();
    drag(&mut deck, -300.0, 0.0, start);
    run_frames(&mut deck, start);
    assert_eq!(deck.index(), 1);
}

#[test]
fn commit_then_cancel_on_next_card() {
    let (mut deck, log) = recording_deck(&["A", "B"]);
    let start = Instant::now();

    drag(&mut deck, 150.0, 0.0, start);
    let now = run_frames(&mut deck, start);
    assert_eq!(deck.index(), 1);
    assert_eq!(*log.lock(), vec![(SwipeDirection::Right, item(1, "A"))]);

    assert!(deck.drag_start());
    deck.drag_move(-40.0, 0.0);
    assert_eq!(deck.drag_end(-40.0, 0.0, now), Some(SwipeOutcome::Cancel));
    run_frames(&mut deck, now);

    assert_eq!(deck.index(), 1);
    assert_eq!(deck.offset(), Offset::ZERO);
    assert_eq!(deck.top_item(), Some(&item(2, "B")));
    assert_eq!(log.lock().len(), 1);
}

#[test]
fn handing_back_original_sequence_mid_commit_does_not_skip_a_card() {
    let original = Sequence::new(items(&["A", "B", "C"]));
    let (mut deck, log) = recording_deck_over(original.clone());
    let mut now = Instant::now();

    deck.force_swipe(SwipeDirection::Right, now);
    now = run_frames(&mut deck, now);
    assert_eq!(deck.index(), 1);

    drag(&mut deck, 150.0, 0.0, now);
    deck.reset_for_new_sequence(vec![item(7, "X")]);
    deck.reset_for_new_sequence(original);
    assert_eq!(deck.index(), 0);
    assert_eq!(deck.state().top_offset(), Offset::ZERO);
    run_frames(&mut deck, now);

    assert_eq!(
        *log.lock(),
        vec![
            (SwipeDirection::Right, item(1, "A")),
            (SwipeDirection::Right, item(2, "B")),
        ]
    );
    assert_eq!(deck.index(), 0);
    assert_eq!(deck.top_item(), Some(&item(1, "A")));
}

#[test]
fn undamped_spring_still_returns_deck_to_idle() {
    let spring = SpringConfig {
        damping: 0.0,
        ..SpringConfig::default()
    };
    let mut deck = SwipeDeck::new(items(&["A", "B"]), metrics().with_spring(spring));
    let start = Instant::now();

    drag(&mut deck, -40.0, 0.0, start);
    assert!(deck.is_animating());
    assert!(!deck.on_frame(start + SPRING_SETTLE_LIMIT));

    assert_eq!(deck.offset(), Offset::ZERO);
    assert!(deck.drag_start());
}

#[test]
fn gesture_cycle_keeps_the_caller_sequence() {
    let sequence = Sequence::new(items(&["A", "B"]));
    let (mut deck, _log) = recording_deck_over(sequence.clone());
    let start = Instant::now();

    drag(&mut deck, -40.0, 0.0, start);
    let now = run_frames(&mut deck, start);
    drag(&mut deck, 150.0, 0.0, now);
    run_frames(&mut deck, now);

    assert!(deck.sequence().same_instance(&sequence));
    assert_eq!(deck.index(), 1);
}
