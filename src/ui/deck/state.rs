//! Deck state: sequence, cursor, live offset and gesture phase.

use crate::ui::mvi::UiState;

use super::animation::{Spring, Tween};
use super::geometry::{Offset, SwipeDirection};
use super::metrics::DeckMetrics;
use super::sequence::Sequence;

/// The card being swiped out, captured when the commit animation starts.
///
/// Holds the sequence instance the card came from, so the dismissal can be
/// reported even after the caller swaps in a new sequence.
#[derive(Debug)]
pub struct Dismissal<T> {
    pub sequence: Sequence<T>,
    pub position: usize,
}

impl<T> Dismissal<T> {
    pub fn item(&self) -> Option<&T> {
        self.sequence.get(self.position)
    }

    /// True while the dismissed card is still the top card of `sequence`.
    pub fn is_top_of(&self, sequence: &Sequence<T>, index: usize) -> bool {
        self.sequence.same_instance(sequence) && self.position == index
    }
}

impl<T> Clone for Dismissal<T> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence.clone(),
            position: self.position,
        }
    }
}

impl<T> PartialEq for Dismissal<T> {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence && self.position == other.position
    }
}

/// Where the top card is in its gesture cycle.
#[derive(Debug)]
pub enum DeckPhase<T> {
    /// At rest, live offset is zero.
    Idle,

    /// A pointer owns the top card and moves it directly.
    Dragging,

    /// Card is flying off-screen; the deck advances when the tween ends.
    Committing {
        direction: SwipeDirection,
        tween: Tween,
        dismissed: Dismissal<T>,
    },

    /// Card is springing back to its rest position.
    Cancelling { spring: Spring },
}

impl<T> Clone for DeckPhase<T> {
    fn clone(&self) -> Self {
        match self {
            DeckPhase::Idle => DeckPhase::Idle,
            DeckPhase::Dragging => DeckPhase::Dragging,
            DeckPhase::Committing {
                direction,
                tween,
                dismissed,
            } => DeckPhase::Committing {
                direction: *direction,
                tween: *tween,
                dismissed: dismissed.clone(),
            },
            DeckPhase::Cancelling { spring } => DeckPhase::Cancelling { spring: *spring },
        }
    }
}

impl<T> PartialEq for DeckPhase<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DeckPhase::Idle, DeckPhase::Idle) => true,
            (DeckPhase::Dragging, DeckPhase::Dragging) => true,
            (
                DeckPhase::Committing {
                    direction: a_dir,
                    tween: a_tween,
                    dismissed: a_dismissed,
                },
                DeckPhase::Committing {
                    direction: b_dir,
                    tween: b_tween,
                    dismissed: b_dismissed,
                },
            ) => a_dir == b_dir && a_tween == b_tween && a_dismissed == b_dismissed,
            (DeckPhase::Cancelling { spring: a }, DeckPhase::Cancelling { spring: b }) => a == b,
            _ => false,
        }
    }
}

/// Complete state of one deck.
///
/// Invariant: `index <= sequence.len()`. The deck is exhausted when they are
/// equal.
#[derive(Debug)]
pub struct DeckState<T> {
    pub sequence: Sequence<T>,
    pub index: usize,
    pub offset: Offset,
    pub phase: DeckPhase<T>,
    pub metrics: DeckMetrics,
}

impl<T> DeckState<T> {
    pub fn new(sequence: Sequence<T>, metrics: DeckMetrics) -> Self {
        Self {
            sequence,
            index: 0,
            offset: Offset::ZERO,
            phase: DeckPhase::Idle,
            metrics,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.index >= self.sequence.len()
    }

    /// The undismissed item at the cursor, if any.
    pub fn top_item(&self) -> Option<&T> {
        self.sequence.get(self.index)
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, DeckPhase::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DeckPhase::Dragging)
    }

    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            DeckPhase::Committing { .. } | DeckPhase::Cancelling { .. }
        )
    }

    /// Offset to draw on the current top card.
    ///
    /// A commit whose card is no longer on top (the caller replaced the
    /// sequence meanwhile) keeps animating its own, hidden, card; the current
    /// top card stays at rest.
    pub fn top_offset(&self) -> Offset {
        match &self.phase {
            DeckPhase::Committing { dismissed, .. }
                if !dismissed.is_top_of(&self.sequence, self.index) =>
            {
                Offset::ZERO
            }
            _ => self.offset,
        }
    }
}

impl<T> Clone for DeckState<T> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence.clone(),
            index: self.index,
            offset: self.offset,
            phase: self.phase.clone(),
            metrics: self.metrics,
        }
    }
}

impl<T> PartialEq for DeckState<T> {
    fn eq(&self, other: &Self) -> bool {
        self.sequence == other.sequence
            && self.index == other.index
            && self.offset == other.offset
            && self.phase == other.phase
            && self.metrics == other.metrics
    }
}

impl<T> Default for DeckState<T> {
    fn default() -> Self {
        Self::new(Sequence::default(), DeckMetrics::default())
    }
}

impl<T: Send + Sync + 'static> UiState for DeckState<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[test]
    fn new_state_is_idle_at_zero() {
        let state = DeckState::new(Sequence::new(vec!["a", "b"]), DeckMetrics::new(400.0));
        assert_eq!(state.index, 0);
        assert_eq!(state.offset, Offset::ZERO);
        assert!(state.is_idle());
        assert_eq!(state.top_item(), Some(&"a"));
    }

    #[test]
    fn empty_sequence_is_exhausted() {
        let state: DeckState<&str> = DeckState::default();
        assert!(state.is_exhausted());
        assert_eq!(state.top_item(), None);
    }

    #[test]
    fn stale_commit_does_not_move_new_top_card() {
        let old = Sequence::new(vec!["a"]);
        let mut state = DeckState::new(Sequence::new(vec!["b"]), DeckMetrics::new(400.0));
        state.offset = Offset::new(200.0, 0.0);
        state.phase = DeckPhase::Committing {
            direction: SwipeDirection::Right,
            tween: Tween::new(
                Offset::ZERO,
                Offset::new(400.0, 0.0),
                Duration::from_millis(250),
                Instant::now(),
            ),
            dismissed: Dismissal {
                sequence: old,
                position: 0,
            },
        };
        assert_eq!(state.top_offset(), Offset::ZERO);
        assert!(state.is_animating());
    }

    #[test]
    fn dismissal_is_top_only_at_its_own_position() {
        let sequence = Sequence::new(vec!["a", "b"]);
        let dismissed = Dismissal {
            sequence: sequence.clone(),
            position: 1,
        };
        assert!(dismissed.is_top_of(&sequence, 1));
        assert!(!dismissed.is_top_of(&sequence, 0));
        assert!(!dismissed.is_top_of(&Sequence::new(vec!["a", "b"]), 1));
    }
}
