//! Reducer trait for the state core.

use super::action::Action;

/// Reducer transforms one state slice based on dispatched actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State.
pub trait Reducer {
    /// The state slice this reducer operates on.
    ///
    /// Slices are immutable snapshots: cloneable, comparable for change
    /// detection, and constructible at their fixed startup value.
    type State: Clone + PartialEq + Default + Send + 'static;

    /// Process an action and return the new slice state.
    ///
    /// Every reducer sees every dispatched action. Actions addressed to
    /// another slice must return `state` unchanged.
    fn reduce(state: Self::State, action: &Action) -> Self::State;
}
