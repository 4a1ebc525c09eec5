use super::intent::Intent;
use super::state::UiState;

/// The single place where state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume the current state and an intent, produce the next state.
    ///
    /// Must stay pure: callers rely on being able to compare the state before
    /// and after a call to decide which side effects to run.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
