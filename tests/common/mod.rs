//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use swipedeck::ui::deck::{DeckItem, DeckMetrics, Sequence, SwipeDeck, SwipeDirection};
use tempfile::TempDir;

pub const SCREEN_WIDTH: f32 = 400.0;

/// Minimal deck item with a numeric id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestItem {
    pub id: u32,
    pub name: &'static str,
}

impl DeckItem for TestItem {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }
}

pub fn item(id: u32, name: &'static str) -> TestItem {
    TestItem { id, name }
}

/// A(1), B(2), ... for each name.
pub fn items(names: &[&'static str]) -> Vec<TestItem> {
    names
        .iter()
        .enumerate()
        .map(|(idx, name)| item(idx as u32 + 1, name))
        .collect()
}

pub fn metrics() -> DeckMetrics {
    DeckMetrics::new(SCREEN_WIDTH)
}

pub fn after(start: Instant, millis: u64) -> Instant {
    start + Duration::from_millis(millis)
}

/// Everything the deck reported through its callbacks.
pub type Dismissed = Arc<Mutex<Vec<(SwipeDirection, TestItem)>>>;

/// Deck over `names` whose callbacks record into the returned log.
pub fn recording_deck(names: &[&'static str]) -> (SwipeDeck<TestItem>, Dismissed) {
    recording_deck_over(Sequence::new(items(names)))
}

pub fn recording_deck_over(sequence: Sequence<TestItem>) -> (SwipeDeck<TestItem>, Dismissed) {
    let log: Dismissed = Arc::default();
    let right = Arc::clone(&log);
    let left = Arc::clone(&log);
    let deck = SwipeDeck::new(sequence, metrics())
        .on_swipe_right(move |item: &TestItem| right.lock().push((SwipeDirection::Right, item.clone())))
        .on_swipe_left(move |item: &TestItem| left.lock().push((SwipeDirection::Left, item.clone())));
    (deck, log)
}

/// Drag the top card by (dx, dy) and release it at `now`.
pub fn drag(deck: &mut SwipeDeck<TestItem>, dx: f32, dy: f32, now: Instant) {
    assert!(deck.drag_start(), "top card should accept the drag");
    deck.drag_move(dx / 2.0, dy / 2.0);
    deck.drag_move(dx, dy);
    deck.drag_end(dx, dy, now);
}

/// Step frames every 16ms from `start` until the animation ends.
pub fn run_frames(deck: &mut SwipeDeck<TestItem>, start: Instant) -> Instant {
    let mut now = start;
    for _ in 0..1_000 {
        now += Duration::from_millis(16);
        if !deck.on_frame(now) {
            return now;
        }
    }
    panic!("animation did not finish");
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
