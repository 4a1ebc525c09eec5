//! Pure projection of deck state onto a paintable stack.

use super::geometry::{rotation_for, Offset};
use super::sequence::DeckItem;
use super::state::DeckState;

/// How one visible card is placed.
#[derive(Debug, Clone, PartialEq)]
pub struct CardDirective<'a, T> {
    pub item: &'a T,
    /// Position in the sequence.
    pub position: usize,
    /// 0 for the top card, 1 for the card right behind it, and so on.
    pub depth: usize,
    pub translate: Offset,
    pub rotation_deg: f32,
    /// Only the top card receives pointer input.
    pub interactive: bool,
}

/// What the deck shows right now.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection<'a, T> {
    /// Every card has been dismissed.
    Exhausted,

    /// Visible cards in paint order, back of the stack first, top card last.
    Stack(Vec<CardDirective<'a, T>>),
}

impl<'a, T> Projection<'a, T> {
    pub fn top(&self) -> Option<&CardDirective<'a, T>> {
        match self {
            Projection::Exhausted => None,
            Projection::Stack(cards) => cards.last(),
        }
    }
}

/// Map state to render directives without touching it.
pub fn project<T>(state: &DeckState<T>) -> Projection<'_, T> {
    if state.is_exhausted() {
        return Projection::Exhausted;
    }

    let metrics = &state.metrics;
    let top_offset = state.top_offset();
    let cards = state
        .sequence
        .as_slice()
        .iter()
        .enumerate()
        .skip(state.index)
        .rev()
        .map(|(position, item)| {
            let depth = position - state.index;
            if depth == 0 {
                CardDirective {
                    item,
                    position,
                    depth,
                    translate: top_offset,
                    rotation_deg: rotation_for(top_offset.x, metrics.screen_width),
                    interactive: true,
                }
            } else {
                CardDirective {
                    item,
                    position,
                    depth,
                    translate: Offset::new(0.0, metrics.cascade_step * depth as f32),
                    rotation_deg: 0.0,
                    interactive: false,
                }
            }
        })
        .collect();

    Projection::Stack(cards)
}

/// Caller-supplied visuals for cards and for the exhausted deck.
pub trait CardRenderer<T> {
    type Visual;

    fn render_card(&self, item: &T) -> Self::Visual;

    fn render_empty(&self) -> Self::Visual;
}

/// A rendered card together with its placement.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer<K, V> {
    pub key: K,
    pub position: usize,
    pub depth: usize,
    pub translate: Offset,
    pub rotation_deg: f32,
    pub interactive: bool,
    pub visual: V,
}

/// Rendered deck, ready for the host to paint.
#[derive(Debug, Clone, PartialEq)]
pub enum StackView<K, V> {
    Empty(V),
    Cards(Vec<Layer<K, V>>),
}

/// Run `renderer` over a projection, keyed by item id.
pub fn compose<T, R>(projection: Projection<'_, T>, renderer: &R) -> StackView<T::Id, R::Visual>
where
    T: DeckItem,
    R: CardRenderer<T>,
{
    match projection {
        Projection::Exhausted => StackView::Empty(renderer.render_empty()),
        Projection::Stack(cards) => StackView::Cards(
            cards
                .into_iter()
                .map(|card| Layer {
                    key: card.item.id(),
                    position: card.position,
                    depth: card.depth,
                    translate: card.translate,
                    rotation_deg: card.rotation_deg,
                    interactive: card.interactive,
                    visual: renderer.render_card(card.item),
                })
                .collect(),
        ),
    }
}
