//! # Counter Example
//!
//! The smallest complete slice: a counter driven through the store.
//!
//! This example showcases:
//! - A slice reducer with a closed action enum
//! - Action creators as plain constructor functions
//! - A selector for reading derived state
//!
//! ## Example
//!
//! ```
//! use counter_demo::{decrease, increase, select_count, CounterReducer};
//! use uniflow_store::Store;
//!
//! # fn main() -> Result<(), uniflow_store::StoreError> {
//! let store = Store::new(CounterReducer);
//! store.dispatch(increase())?;
//! store.dispatch(increase())?;
//! store.dispatch(decrease())?;
//! assert_eq!(store.select(select_count), 1);
//! # Ok(())
//! # }
//! ```

use uniflow_core::Reducer;

/// Counter state: just the count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    /// Current count value.
    pub count: i64,
}

/// Everything that can happen to the counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CounterAction {
    /// Increase the count by 1.
    Increase,
    /// Decrease the count by 1.
    Decrease,
}

/// Action creator for [`CounterAction::Increase`].
#[must_use]
pub const fn increase() -> CounterAction {
    CounterAction::Increase
}

/// Action creator for [`CounterAction::Decrease`].
#[must_use]
pub const fn decrease() -> CounterAction {
    CounterAction::Decrease
}

/// Selector for the current count.
#[must_use]
pub fn select_count(state: &CounterState) -> i64 {
    state.count
}

/// The counter's slice reducer.
#[derive(Clone, Copy, Debug, Default)]
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn initial(&self) -> CounterState {
        CounterState { count: 0 }
    }

    fn reduce(&self, state: &CounterState, action: &CounterAction) -> CounterState {
        match action {
            CounterAction::Increase => CounterState {
                count: state.count + 1,
            },
            CounterAction::Decrease => CounterState {
                count: state.count - 1,
            },
        }
    }
}
