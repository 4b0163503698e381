//! The Reducer trait - core abstraction for state transitions
//!
//! Reducers are pure functions: `(State, Action) → State`. They contain all
//! state-transition logic and are deterministic and testable in isolation.

/// A pure state transition for one slice of application state.
///
/// # Contract
///
/// - `initial` defines the slice's starting value; the store and the root
///   composer bootstrap every slice through it, so a freshly created store
///   never exposes a half-populated state tree.
/// - `reduce` computes the next state from the current state and an action.
///   It must be referentially pure: same inputs, structurally equal output.
///   The borrowed input is never mutated - the next state is a newly
///   constructed value.
/// - Actions the reducer does not recognize must pass through unchanged
///   (`state.clone()`). Every slice reducer sees every dispatched action,
///   and ignoring foreign actions without error is what makes composition
///   work.
/// - A reset-style action (for example `Logout`) returns `self.initial()`,
///   not a patched copy. A slice opts into reset by matching the variant.
///
/// # Example
///
/// ```
/// use uniflow_core::Reducer;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct CounterState {
///     count: i64,
/// }
///
/// #[derive(Clone, Debug)]
/// enum CounterAction {
///     Increase,
///     Decrease,
/// }
///
/// struct CounterReducer;
///
/// impl Reducer for CounterReducer {
///     type State = CounterState;
///     type Action = CounterAction;
///
///     fn initial(&self) -> CounterState {
///         CounterState { count: 0 }
///     }
///
///     fn reduce(&self, state: &CounterState, action: &CounterAction) -> CounterState {
///         match action {
///             CounterAction::Increase => CounterState { count: state.count + 1 },
///             CounterAction::Decrease => CounterState { count: state.count - 1 },
///         }
///     }
/// }
///
/// let reducer = CounterReducer;
/// let next = reducer.reduce(&reducer.initial(), &CounterAction::Increase);
/// assert_eq!(next, CounterState { count: 1 });
/// ```
pub trait Reducer {
    /// The state type this reducer owns.
    type State: Clone;

    /// The action type this reducer inspects.
    type Action;

    /// The slice's initial value.
    ///
    /// Must return a structurally equal value on every call.
    fn initial(&self) -> Self::State;

    /// Compute the next state from the current state and an action.
    ///
    /// Pure: no I/O, no mutation of `state`, no randomness, no reading of
    /// external time. Anything time- or identity-shaped arrives inside the
    /// action payload.
    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State;
}
