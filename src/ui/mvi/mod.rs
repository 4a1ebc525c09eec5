//! Model-View-Intent primitives shared by the deck widget.
//!
//! ```text
//! pointer / frame events ──→ Intent ──→ Reducer ──→ State ──→ projection
//!          ↑                                                     │
//!          └─────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: everything the projection needs, replaced wholesale
//! - **Intent**: a discrete gesture, frame or data event
//! - **Reducer**: `(State, Intent) -> State`, no side effects
//!
//! Side effects (dismissal callbacks, logging) belong to the controller that
//! owns the state, never to the reducer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
