//! # Uniflow Core
//!
//! Core traits for a small, predictable state container with unidirectional
//! data flow.
//!
//! ## Core Concepts
//!
//! - **Action**: a value describing an intent to change state - one closed
//!   `enum` per application, each variant carrying its typed payload
//! - **Reducer**: pure function `(State, Action) → State`
//! - **Composition**: [`scope`] + [`RootReducer`] combine independent slice
//!   reducers into one reducer over a composite state struct
//! - **Selector**: pure read projection `(State) → DerivedValue`
//!
//! The runtime that drives these - dispatch, subscriptions, the
//! one-dispatch-at-a-time discipline - lives in the `uniflow-store` crate.
//!
//! ## Architecture Principles
//!
//! - Unidirectional data flow: state changes only through dispatched actions
//! - Pure transitions: reducers never mutate their input, never do I/O
//! - Structural immutability: the next state is a newly constructed value
//! - Slices own their shape and initial value; the composer knows neither

/// The `Reducer` trait - pure state transitions.
pub mod reducer;

/// Slice composition - `scope` and `RootReducer`.
pub mod composition;

/// Pure read projections over state.
pub mod selector;

pub use composition::{scope, RootReducer, Scoped, Slice};
pub use reducer::Reducer;
pub use selector::Selector;
