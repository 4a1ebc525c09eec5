use std::time::Instant;

use crate::ui::mvi::Reducer;

use super::geometry::{Offset, SwipeDirection, SwipeOutcome};
use super::intent::DeckIntent;
use super::metrics::DeckMetrics;
use super::projection::{compose, project, CardRenderer, Projection, StackView};
use super::reducer::DeckReducer;
use super::sequence::{DeckItem, Sequence};
use super::state::{DeckPhase, DeckState, Dismissal};

/// Dismissal callback, invoked with the card that was swiped out.
pub type SwipeCallback<T> = Box<dyn FnMut(&T) + Send>;

/// A swipeable stack of cards.
///
/// Owns the deck state and runs every event through [`DeckReducer`]. The only
/// side effects happen here: the directional callbacks after a completed
/// commit, and logging.
pub struct SwipeDeck<T> {
    state: DeckState<T>,
    on_swipe_right: SwipeCallback<T>,
    on_swipe_left: SwipeCallback<T>,
}

impl<T> SwipeDeck<T>
where
    T: DeckItem + Send + Sync + 'static,
{
    pub fn new(items: impl Into<Sequence<T>>, metrics: DeckMetrics) -> Self {
        Self {
            state: DeckState::new(items.into(), metrics),
            on_swipe_right: Box::new(|_| {}),
            on_swipe_left: Box::new(|_| {}),
        }
    }

    pub fn on_swipe_right(mut self, callback: impl FnMut(&T) + Send + 'static) -> Self {
        self.on_swipe_right = Box::new(callback);
        self
    }

    pub fn on_swipe_left(mut self, callback: impl FnMut(&T) + Send + 'static) -> Self {
        self.on_swipe_left = Box::new(callback);
        self
    }

    pub fn state(&self) -> &DeckState<T> {
        &self.state
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn offset(&self) -> Offset {
        self.state.offset
    }

    pub fn len(&self) -> usize {
        self.state.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.sequence.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.state.is_exhausted()
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn metrics(&self) -> &DeckMetrics {
        &self.state.metrics
    }

    pub fn sequence(&self) -> &Sequence<T> {
        &self.state.sequence
    }

    pub fn top_item(&self) -> Option<&T> {
        self.state.top_item()
    }

    /// Claim a drag for the top card. Returns false when there is no top
    /// card or the previous gesture is still animating.
    pub fn drag_start(&mut self) -> bool {
        self.dispatch(DeckIntent::DragStart);
        let claimed = self.state.is_dragging();
        if !claimed {
            tracing::trace!(index = self.state.index, "drag start ignored");
        }
        claimed
    }

    pub fn drag_move(&mut self, dx: f32, dy: f32) {
        self.dispatch(DeckIntent::DragMove { dx, dy });
    }

    /// Release the drag and start the commit or cancel animation.
    ///
    /// Returns `None` when no drag was in progress.
    pub fn drag_end(&mut self, dx: f32, dy: f32, now: Instant) -> Option<SwipeOutcome> {
        if !self.state.is_dragging() {
            tracing::trace!("drag end without an active drag");
            return None;
        }
        self.dispatch(DeckIntent::DragEnd { dx, dy, now });
        let outcome = match &self.state.phase {
            DeckPhase::Committing { direction, .. } => SwipeOutcome::Commit(*direction),
            _ => SwipeOutcome::Cancel,
        };
        tracing::debug!(
            dx,
            dy,
            threshold = self.state.metrics.swipe_threshold(),
            ?outcome,
            "drag released"
        );
        Some(outcome)
    }

    /// Swipe the top card out in `direction` without a drag.
    ///
    /// Returns false when the deck is exhausted or already animating.
    pub fn force_swipe(&mut self, direction: SwipeDirection, now: Instant) -> bool {
        let ready = matches!(self.state.phase, DeckPhase::Idle | DeckPhase::Dragging)
            && !self.state.is_exhausted();
        self.dispatch(DeckIntent::ForceSwipe { direction, now });
        if ready {
            tracing::debug!(direction = direction.label(), "forced swipe");
        }
        ready
    }

    /// Advance the running animation to `now`. Returns true while an
    /// animation is still in flight.
    pub fn on_frame(&mut self, now: Instant) -> bool {
        self.dispatch(DeckIntent::Frame { now });
        self.state.is_animating()
    }

    /// Complete the running animation immediately.
    pub fn animation_done(&mut self) {
        self.dispatch(DeckIntent::AnimationDone);
    }

    /// Hand the deck a new sequence. A different instance restarts the deck
    /// at its first card, even when its contents are identical.
    pub fn reset_for_new_sequence(&mut self, items: impl Into<Sequence<T>>) {
        let sequence = items.into();
        if !self.state.sequence.same_instance(&sequence) {
            tracing::info!(len = sequence.len(), "deck sequence replaced");
        }
        self.dispatch(DeckIntent::ReplaceSequence { sequence });
    }

    pub fn projection(&self) -> Projection<'_, T> {
        project(&self.state)
    }

    pub fn render<R: CardRenderer<T>>(&self, renderer: &R) -> StackView<T::Id, R::Visual> {
        compose(self.projection(), renderer)
    }

    fn dispatch(&mut self, intent: DeckIntent<T>) {
        let committing = match &self.state.phase {
            DeckPhase::Committing {
                direction,
                dismissed,
                ..
            } => Some((*direction, dismissed.clone())),
            _ => None,
        };

        // Placeholder shares the current sequence: a refcount bump, no allocation.
        let placeholder = DeckState::new(self.state.sequence.clone(), self.state.metrics);
        let state = std::mem::replace(&mut self.state, placeholder);
        self.state = DeckReducer::<T>::reduce(state, intent);

        if let Some((direction, dismissed)) = committing {
            if !matches!(self.state.phase, DeckPhase::Committing { .. }) {
                self.notify(direction, &dismissed);
            }
        }
    }

    fn notify(&mut self, direction: SwipeDirection, dismissed: &Dismissal<T>) {
        let Some(item) = dismissed.item() else {
            return;
        };
        tracing::info!(
            direction = direction.label(),
            id = ?item.id(),
            position = dismissed.position,
            "card dismissed"
        );
        match direction {
            SwipeDirection::Right => (self.on_swipe_right)(item),
            SwipeDirection::Left => (self.on_swipe_left)(item),
        }
    }
}
