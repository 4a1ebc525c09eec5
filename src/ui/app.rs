use crate::cards::{cards_from_specs, Card};
use crate::config::{ConfigStore, UiConfig};
use crate::ui::deck::{Offset, Spring, SwipeDeck, SwipeDirection};
use crate::ui::layout::{body_rect, card_rect};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use parking_lot::Mutex;
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use std::time::Instant;

/// One dismissed card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwipeRecord {
    pub direction: SwipeDirection,
    pub card_id: String,
    pub title: String,
}

/// Dismissals in the order they happened, shared with the deck callbacks.
#[derive(Clone, Default)]
pub struct SwipeLog {
    inner: Arc<Mutex<Vec<SwipeRecord>>>,
}

impl SwipeLog {
    pub fn record(&self, direction: SwipeDirection, card: &Card) {
        self.inner.lock().push(SwipeRecord {
            direction,
            card_id: card.id.clone(),
            title: card.title.clone(),
        });
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn count(&self, direction: SwipeDirection) -> usize {
        self.inner
            .lock()
            .iter()
            .filter(|record| record.direction == direction)
            .count()
    }

    pub fn last(&self) -> Option<SwipeRecord> {
        self.inner.lock().last().cloned()
    }

    pub fn records(&self) -> Vec<SwipeRecord> {
        self.inner.lock().clone()
    }
}

/// Terminal cell where the current drag began.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DragAnchor {
    column: u16,
    row: u16,
}

impl DragAnchor {
    fn delta(&self, column: u16, row: u16) -> (f32, f32) {
        (
            column as f32 - self.column as f32,
            row as f32 - self.row as f32,
        )
    }
}

pub struct App {
    should_quit: bool,
    config: ConfigStore,
    ui: UiConfig,
    deck: SwipeDeck<Card>,
    swipes: SwipeLog,
    drag: Option<DragAnchor>,
    /// Queued cards spring up by one cascade step after each advance.
    settle: Option<Spring>,
    settle_offset: f32,
    seen_index: usize,
    body: Rect,
    status: Option<String>,
}

impl App {
    /// Build the app for a terminal of `cols` x `rows`.
    ///
    /// The deck's swipe threshold and fly-out distance come from `cols` and
    /// stay fixed for the lifetime of the app.
    pub fn new(config: ConfigStore, cols: u16, rows: u16) -> Self {
        let current = config.get();
        let swipes = SwipeLog::default();
        let right_log = swipes.clone();
        let left_log = swipes.clone();

        let deck = SwipeDeck::new(
            cards_from_specs(&current.cards),
            current.deck.metrics(cols as f32),
        )
        .on_swipe_right(move |card: &Card| right_log.record(SwipeDirection::Right, card))
        .on_swipe_left(move |card: &Card| left_log.record(SwipeDirection::Left, card));

        tracing::info!(cards = deck.len(), width = cols, "deck ready");

        Self {
            should_quit: false,
            config,
            ui: current.ui,
            deck,
            swipes,
            drag: None,
            settle: None,
            settle_offset: 0.0,
            seen_index: 0,
            body: body_rect(Rect::new(0, 0, cols, rows)),
            status: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn deck(&self) -> &SwipeDeck<Card> {
        &self.deck
    }

    pub fn swipes(&self) -> &SwipeLog {
        &self.swipes
    }

    pub fn body(&self) -> Rect {
        self.body
    }

    /// Last reload problem, shown in the footer.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Extra downward shift of the queued cards while the stack settles.
    pub fn settle_offset(&self) -> f32 {
        self.settle_offset
    }

    pub fn is_animating(&self) -> bool {
        self.deck.is_animating() || self.settle.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Where the top card sits with no offset applied.
    pub fn card_rest_rect(&self) -> Rect {
        card_rect(self.body, self.ui.card_width, self.ui.card_height)
    }

    /// Screen area covered by the top card right now, if there is one.
    pub fn top_card_rect(&self) -> Option<Rect> {
        if self.deck.is_exhausted() {
            return None;
        }
        let rest = self.card_rest_rect();
        let offset = self.deck.state().top_offset();
        let x = (rest.x as f32 + offset.x.round()).max(0.0) as u16;
        let y = (rest.y as f32 + offset.y.round()).max(0.0) as u16;
        Some(Rect::new(x, y, rest.width, rest.height))
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.body = body_rect(Rect::new(0, 0, cols, rows));
    }

    pub fn on_mouse(&mut self, event: MouseEvent, now: Instant) {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // A release we never saw (pointer left the terminal) ends the old drag here.
                if let Some(anchor) = self.drag.take() {
                    let (dx, dy) = anchor.delta(event.column, event.row);
                    self.deck.drag_end(dx, dy, now);
                    return;
                }
                let hit = self
                    .top_card_rect()
                    .is_some_and(|rect| rect.contains(Position::new(event.column, event.row)));
                if hit && self.deck.drag_start() {
                    self.drag = Some(DragAnchor {
                        column: event.column,
                        row: event.row,
                    });
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(anchor) = self.drag {
                    let (dx, dy) = anchor.delta(event.column, event.row);
                    self.deck.drag_move(dx, dy);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(anchor) = self.drag.take() {
                    let (dx, dy) = anchor.delta(event.column, event.row);
                    self.deck.drag_end(dx, dy, now);
                }
            }
            _ => {}
        }
    }

    /// Swipe the top card away from the keyboard.
    pub fn swipe(&mut self, direction: SwipeDirection, now: Instant) {
        if self.deck.force_swipe(direction, now) {
            self.drag = None;
        }
    }

    /// Re-read the config file and deal its cards as a fresh deck.
    ///
    /// The deck restarts at its first card even when the cards are unchanged.
    /// If the file cannot be loaded the previous cards are dealt again.
    pub fn reload(&mut self) {
        match self.config.reload() {
            Ok(()) => self.status = None,
            Err(err) => {
                tracing::warn!(error = %err, "config reload failed");
                self.status = Some(err.to_string());
            }
        }
        let cards = cards_from_specs(&self.config.get().cards);
        self.deck.reset_for_new_sequence(cards);
        self.drag = None;
        self.settle = None;
        self.settle_offset = 0.0;
        self.seen_index = self.deck.index();
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.deck.on_frame(now);

        let index = self.deck.index();
        let step = self.deck.metrics().cascade_step;
        if index > self.seen_index && step > 0.0 {
            self.settle = Some(Spring::new(
                Offset::new(0.0, step),
                Offset::ZERO,
                self.deck.metrics().spring,
                now,
            ));
        }
        self.seen_index = index;

        if let Some(spring) = self.settle {
            let frame = spring.sample(now);
            self.settle_offset = frame.offset.y;
            if frame.finished {
                self.settle = None;
            }
        }
    }
}
