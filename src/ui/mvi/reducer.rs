//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place where state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume the current state and an intent, returning the next state.
    ///
    /// Must not have side effects; observation belongs in middleware.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
