//! Messages driving the deck state machine.

use std::time::Instant;

use crate::ui::mvi::Intent;

use super::geometry::SwipeDirection;
use super::sequence::Sequence;

#[derive(Debug)]
pub enum DeckIntent<T> {
    /// Pointer pressed on the top card.
    DragStart,

    /// Pointer moved; `dx`/`dy` are measured from where the drag began.
    DragMove { dx: f32, dy: f32 },

    /// Pointer released; decides between commit and cancel.
    DragEnd { dx: f32, dy: f32, now: Instant },

    /// Swipe the top card out without a drag.
    ForceSwipe {
        direction: SwipeDirection,
        now: Instant,
    },

    /// Animation frame; finishes the running animation once it has elapsed.
    Frame { now: Instant },

    /// The host's animation engine reports the running animation finished.
    AnimationDone,

    /// Caller handed over a sequence; resets the cursor if it is a new instance.
    ReplaceSequence { sequence: Sequence<T> },
}

impl<T: Send + Sync + 'static> Intent for DeckIntent<T> {}
