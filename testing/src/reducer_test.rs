//! Ergonomic testing utilities for reducers
//!
//! This module provides a fluent API for testing reducers with readable
//! Given-When-Then syntax.

#![allow(clippy::module_name_repetitions)] // ReducerTest is the natural name

use uniflow_core::Reducer;

/// Type alias for state assertion functions
type StateAssertion<S> = Box<dyn FnOnce(&S)>;

/// Fluent API for testing reducers with Given-When-Then syntax
///
/// # Example
///
/// ```ignore
/// use uniflow_testing::ReducerTest;
///
/// ReducerTest::new(CounterReducer)
///     .given_initial()
///     .when_action(CounterAction::Increase)
///     .then_state(|state| {
///         assert_eq!(state.count, 1);
///     })
///     .run();
/// ```
pub struct ReducerTest<R>
where
    R: Reducer,
{
    reducer: R,
    initial_state: Option<R::State>,
    action: Option<R::Action>,
    assertions: Vec<StateAssertion<R::State>>,
    expect_unchanged: bool,
}

impl<R> ReducerTest<R>
where
    R: Reducer,
{
    /// Create a new reducer test with the given reducer
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            initial_state: None,
            action: None,
            assertions: Vec::new(),
            expect_unchanged: false,
        }
    }

    /// Start from the reducer's own initial state (Given)
    #[must_use]
    pub fn given_initial(mut self) -> Self {
        self.initial_state = Some(self.reducer.initial());
        self
    }

    /// Start from an explicit state (Given)
    #[must_use]
    pub fn given_state(mut self, state: R::State) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Set the action to dispatch through the reducer (When)
    #[must_use]
    pub fn when_action(mut self, action: R::Action) -> Self {
        self.action = Some(action);
        self
    }

    /// Add an assertion about the resulting state (Then)
    #[must_use]
    pub fn then_state<F>(mut self, assertion: F) -> Self
    where
        F: FnOnce(&R::State) + 'static,
    {
        self.assertions.push(Box::new(assertion));
        self
    }

    /// Assert that the action passes through without changing the state
    /// (Then) - the identity-passthrough contract for unrecognized actions.
    #[must_use]
    pub const fn then_unchanged(mut self) -> Self {
        self.expect_unchanged = true;
        self
    }

    /// Run the test and execute all assertions
    ///
    /// Also verifies the purity contract on every run: reducing twice from
    /// the same inputs must produce structurally equal results, and the
    /// given state must be left untouched.
    ///
    /// # Panics
    ///
    /// Panics if the initial state or action is not set, or if any
    /// assertion fails.
    #[allow(clippy::panic)] // Test code can panic
    #[allow(clippy::expect_used)] // Test code can use expect
    pub fn run(self)
    where
        R::State: PartialEq + std::fmt::Debug,
    {
        let state = self
            .initial_state
            .expect("Initial state must be set with given_state() or given_initial()");

        let action = self.action.expect("Action must be set with when_action()");

        let before = state.clone();
        let next = self.reducer.reduce(&state, &action);

        // Purity: the input is untouched and a second reduction agrees.
        assert_eq!(state, before, "reducer mutated its input state in place");
        assert_eq!(
            self.reducer.reduce(&state, &action),
            next,
            "reducer is not deterministic for this (state, action) pair"
        );

        if self.expect_unchanged {
            assert_eq!(
                next, before,
                "expected identity passthrough, but the state changed"
            );
        }

        for assertion in self.assertions {
            assertion(&next);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
        Unrelated,
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;

        fn initial(&self) -> TestState {
            TestState { count: 0 }
        }

        fn reduce(&self, state: &TestState, action: &TestAction) -> TestState {
            match action {
                TestAction::Increment => TestState {
                    count: state.count + 1,
                },
                TestAction::Decrement => TestState {
                    count: state.count - 1,
                },
                TestAction::Unrelated => state.clone(),
            }
        }
    }

    #[test]
    fn test_increment_from_initial() {
        ReducerTest::new(TestReducer)
            .given_initial()
            .when_action(TestAction::Increment)
            .then_state(|state| {
                assert_eq!(state.count, 1);
            })
            .run();
    }

    #[test]
    fn test_decrement_from_given_state() {
        ReducerTest::new(TestReducer)
            .given_state(TestState { count: 5 })
            .when_action(TestAction::Decrement)
            .then_state(|state| {
                assert_eq!(state.count, 4);
            })
            .run();
    }

    #[test]
    fn test_unrelated_action_is_passthrough() {
        ReducerTest::new(TestReducer)
            .given_state(TestState { count: 7 })
            .when_action(TestAction::Unrelated)
            .then_unchanged()
            .run();
    }
}
