//! State transitions for the deck gesture cycle.
//!
//! ```text
//! Idle ──DragStart──→ Dragging ──DragEnd──→ Committing ──done──→ Idle (index + 1)
//!   │                                   └─→ Cancelling ──done──→ Idle
//!   └──ForceSwipe──→ Committing
//! ```

use std::marker::PhantomData;
use std::time::Instant;

use crate::ui::mvi::Reducer;

use super::animation::{Spring, Tween};
use super::geometry::{classify, Offset, SwipeDirection, SwipeOutcome};
use super::intent::DeckIntent;
use super::state::{DeckPhase, DeckState, Dismissal};

/// Reducer for deck state transitions.
pub struct DeckReducer<T>(PhantomData<fn() -> T>);

impl<T: Send + Sync + 'static> Reducer for DeckReducer<T> {
    type State = DeckState<T>;
    type Intent = DeckIntent<T>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DeckIntent::DragStart => {
                if state.is_idle() && !state.is_exhausted() {
                    state.phase = DeckPhase::Dragging;
                }
                state
            }

            DeckIntent::DragMove { dx, dy } => {
                if state.is_dragging() {
                    state.offset = Offset::new(dx, dy);
                }
                state
            }

            DeckIntent::DragEnd { dx, dy, now } => {
                if !state.is_dragging() {
                    return state;
                }
                state.offset = Offset::new(dx, dy);
                match classify(dx, state.metrics.swipe_threshold()) {
                    SwipeOutcome::Commit(direction) => start_commit(state, direction, now),
                    SwipeOutcome::Cancel => start_cancel(state, now),
                }
            }

            DeckIntent::ForceSwipe { direction, now } => {
                let ready = matches!(state.phase, DeckPhase::Idle | DeckPhase::Dragging);
                if ready && !state.is_exhausted() {
                    start_commit(state, direction, now)
                } else {
                    state
                }
            }

            DeckIntent::Frame { now } => {
                let frame = match &state.phase {
                    DeckPhase::Committing { tween, .. } => tween.sample(now),
                    DeckPhase::Cancelling { spring } => spring.sample(now),
                    DeckPhase::Idle | DeckPhase::Dragging => return state,
                };
                state.offset = frame.offset;
                if frame.finished {
                    finish_animation(state)
                } else {
                    state
                }
            }

            DeckIntent::AnimationDone => finish_animation(state),

            DeckIntent::ReplaceSequence { sequence } => {
                if state.sequence.same_instance(&sequence) {
                    return state;
                }
                state.sequence = sequence;
                state.index = 0;
                if state.is_dragging() {
                    state.phase = DeckPhase::Idle;
                    state.offset = Offset::ZERO;
                }
                state
            }
        }
    }
}

fn start_commit<T>(mut state: DeckState<T>, direction: SwipeDirection, now: Instant) -> DeckState<T> {
    let target = Offset::new(direction.sign() * state.metrics.screen_width, 0.0);
    let tween = Tween::new(state.offset, target, state.metrics.swipe_out, now);
    let dismissed = Dismissal {
        sequence: state.sequence.clone(),
        position: state.index,
    };
    state.phase = DeckPhase::Committing {
        direction,
        tween,
        dismissed,
    };
    state
}

fn start_cancel<T>(mut state: DeckState<T>, now: Instant) -> DeckState<T> {
    let spring = Spring::new(state.offset, Offset::ZERO, state.metrics.spring, now);
    state.phase = DeckPhase::Cancelling { spring };
    state
}

/// Settle the running animation: offset back to rest and, for a commit whose
/// card is still on top, advance the cursor by one.
fn finish_animation<T>(mut state: DeckState<T>) -> DeckState<T> {
    match std::mem::replace(&mut state.phase, DeckPhase::Idle) {
        DeckPhase::Committing { dismissed, .. } => {
            state.offset = Offset::ZERO;
            if dismissed.is_top_of(&state.sequence, state.index) {
                state.index = (state.index + 1).min(state.sequence.len());
            }
        }
        DeckPhase::Cancelling { .. } => {
            state.offset = Offset::ZERO;
        }
        phase @ (DeckPhase::Idle | DeckPhase::Dragging) => {
            state.phase = phase;
        }
    }
    state
}
