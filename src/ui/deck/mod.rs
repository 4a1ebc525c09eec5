//! Swipeable card deck.
//!
//! Presents a caller-owned sequence one card at a time. A drag on the top card
//! moves it directly; on release the card either flies off-screen (the drag
//! travelled further than a quarter of the screen width) or springs back.
//! A completed fly-out reports the card through `on_swipe_left` /
//! `on_swipe_right` and reveals the next one.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - sequence, cursor, live offset and gesture phase
//! - `intent.rs` - gesture, frame and data events
//! - `reducer.rs` - state transitions
//! - `projection.rs` - state to paintable stack
//! - `controller.rs` - owns the state, runs callbacks
//!
//! `geometry.rs`, `animation.rs` and `metrics.rs` hold the math the reducer
//! and projection share.

mod animation;
mod controller;
mod geometry;
mod intent;
mod metrics;
mod projection;
mod reducer;
mod sequence;
mod state;

pub use animation::{
    AnimationFrame, Easing, Spring, SpringConfig, Tween, REST_DISPLACEMENT_THRESHOLD,
    REST_SPEED_THRESHOLD, SPRING_SETTLE_LIMIT, SWIPE_OUT_DURATION,
};
pub use controller::{SwipeCallback, SwipeDeck};
pub use geometry::{
    classify, interpolate, rotation_for, swipe_threshold, Offset, SwipeDirection, SwipeOutcome,
    MAX_ROTATION_DEG, ROTATION_DOMAIN_RATIO, SWIPE_THRESHOLD_RATIO,
};
pub use intent::DeckIntent;
pub use metrics::{DeckMetrics, DEFAULT_CASCADE_STEP};
pub use projection::{compose, project, CardDirective, CardRenderer, Layer, Projection, StackView};
pub use reducer::DeckReducer;
pub use sequence::{DeckItem, Sequence};
pub use state::{DeckPhase, DeckState, Dismissal};
