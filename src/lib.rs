//! A swipeable card deck.
//!
//! [`ui::deck::SwipeDeck`] is the widget: an event-driven state machine that
//! turns pointer drags on the top card into left/right dismissals. The rest of
//! [`ui`] hosts it in a terminal, driven by mouse drags.

pub mod cards;
pub mod config;
pub mod logging;
pub mod ui;

pub use ui::deck::{
    CardRenderer, DeckItem, DeckMetrics, Sequence, StackView, SwipeDeck, SwipeDirection,
    SwipeOutcome,
};
