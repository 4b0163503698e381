//! Reducer composition utilities
//!
//! This module combines independent slice reducers into one reducer over a
//! composite state struct:
//! - **`scope`**: focus a slice reducer on one field of the composite state
//! - **`RootReducer`**: run every scoped slice, in registration order, for
//!   every dispatched action
//!
//! Because the composite state is a plain struct, the shape of the result is
//! deterministic: every configured slice is present in every output, in the
//! order the fields are declared - no key can be dropped or reordered by a
//! buggy composition.
//!
//! # Example
//!
//! ```
//! use uniflow_core::{scope, Reducer, RootReducer};
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct CounterState { count: i64 }
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct AuthState { current_user: Option<String> }
//!
//! #[derive(Clone, Debug, Default, PartialEq)]
//! struct AppState {
//!     counter: CounterState,
//!     auth: AuthState,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum AppAction {
//!     Increase,
//!     SetCurrentUser(String),
//!     Logout,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = AppAction;
//!
//!     fn initial(&self) -> CounterState {
//!         CounterState { count: 0 }
//!     }
//!
//!     fn reduce(&self, state: &CounterState, action: &AppAction) -> CounterState {
//!         match action {
//!             AppAction::Increase => CounterState { count: state.count + 1 },
//!             _ => state.clone(),
//!         }
//!     }
//! }
//!
//! struct AuthReducer;
//!
//! impl Reducer for AuthReducer {
//!     type State = AuthState;
//!     type Action = AppAction;
//!
//!     fn initial(&self) -> AuthState {
//!         AuthState { current_user: None }
//!     }
//!
//!     fn reduce(&self, state: &AuthState, action: &AppAction) -> AuthState {
//!         match action {
//!             AppAction::SetCurrentUser(name) => AuthState {
//!                 current_user: Some(name.clone()),
//!             },
//!             AppAction::Logout => self.initial(),
//!             _ => state.clone(),
//!         }
//!     }
//! }
//!
//! let root = RootReducer::new()
//!     .with(scope(CounterReducer, |s: &AppState| &s.counter, |s, v| s.counter = v))
//!     .with(scope(AuthReducer, |s: &AppState| &s.auth, |s, v| s.auth = v));
//!
//! let state = root.initial();
//! let state = root.reduce(&state, &AppAction::Increase);
//! let state = root.reduce(&state, &AppAction::SetCurrentUser("ada".into()));
//! assert_eq!(state.counter.count, 1);
//! assert_eq!(state.auth.current_user.as_deref(), Some("ada"));
//!
//! // Logout resets the auth slice; the counter slice ignores it.
//! let state = root.reduce(&state, &AppAction::Logout);
//! assert_eq!(state.counter.count, 1);
//! assert_eq!(state.auth.current_user, None);
//! ```

use crate::reducer::Reducer;

/// One member of a composite reducer: a reducer focused on a single field
/// of the composite state.
///
/// Implemented by [`Scoped`]; user code normally goes through [`scope`] and
/// never implements this directly.
pub trait Slice<S, A>: Send + Sync {
    /// Write this slice's initial value into the composite state.
    fn seed(&self, composite: &mut S);

    /// Reduce this slice in place on a freshly copied composite state.
    ///
    /// `composite` is the next-state value under construction, owned by the
    /// caller; the previously published state is never touched.
    fn apply(&self, composite: &mut S, action: &A);
}

/// Focus a slice reducer on one field of a composite state.
///
/// `get` and `set` are the two halves of a field accessor: `get` borrows the
/// slice out of the composite, `set` writes a new slice value back. Plain
/// `fn` pointers keep the composition free of captured state.
pub fn scope<S, R>(
    reducer: R,
    get: fn(&S) -> &R::State,
    set: fn(&mut S, R::State),
) -> Scoped<S, R>
where
    R: Reducer,
{
    Scoped { reducer, get, set }
}

/// A slice reducer focused on a field of a larger state.
///
/// Created by [`scope`].
pub struct Scoped<S, R>
where
    R: Reducer,
{
    reducer: R,
    get: fn(&S) -> &R::State,
    set: fn(&mut S, R::State),
}

impl<S, R> Slice<S, R::Action> for Scoped<S, R>
where
    R: Reducer + Send + Sync,
{
    fn seed(&self, composite: &mut S) {
        (self.set)(composite, self.reducer.initial());
    }

    fn apply(&self, composite: &mut S, action: &R::Action) {
        let next = self.reducer.reduce((self.get)(composite), action);
        (self.set)(composite, next);
    }
}

/// Combines scoped slice reducers into one reducer over the composite state.
///
/// Every dispatched action is routed to every slice, in the order the slices
/// were registered with [`RootReducer::with`]. Slices that do not recognize
/// an action leave their field unchanged.
///
/// [`Reducer::initial`] seeds each field from its slice reducer, so the
/// composite starts with a real value for every slice without the composer
/// knowing any slice's internals.
pub struct RootReducer<S, A> {
    slices: Vec<Box<dyn Slice<S, A>>>,
}

impl<S, A> RootReducer<S, A> {
    /// Create an empty composer.
    #[must_use]
    pub fn new() -> Self {
        Self { slices: Vec::new() }
    }

    /// Register a slice. Registration order is evaluation order.
    #[must_use]
    pub fn with(mut self, slice: impl Slice<S, A> + 'static) -> Self {
        self.slices.push(Box::new(slice));
        self
    }

    /// Number of registered slices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    /// Whether no slices are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

impl<S, A> Default for RootReducer<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Reducer for RootReducer<S, A>
where
    S: Clone + Default,
{
    type State = S;
    type Action = A;

    fn initial(&self) -> S {
        let mut composite = S::default();
        for slice in &self.slices {
            slice.seed(&mut composite);
        }
        composite
    }

    fn reduce(&self, state: &S, action: &A) -> S {
        let mut next = state.clone();
        for slice in &self.slices {
            slice.apply(&mut next, action);
        }
        next
    }
}
