//! # Uniflow Testing
//!
//! Testing utilities and helpers for the uniflow state container.
//!
//! This crate provides:
//! - [`ReducerTest`]: fluent Given/When/Then assertions for reducers
//! - [`NotificationLog`]: a listener spy that records notification order
//! - [`SequentialIds`]: a deterministic id source for payload-supplied ids
//!
//! ## Example
//!
//! ```ignore
//! use uniflow_testing::ReducerTest;
//!
//! ReducerTest::new(CounterReducer)
//!     .given_state(CounterState { count: 0 })
//!     .when_action(CounterAction::Increase)
//!     .then_state(|state| assert_eq!(state.count, 1))
//!     .run();
//! ```

/// Fluent Given/When/Then testing for reducers.
pub mod reducer_test;

/// Deterministic stand-ins for the store's external collaborators.
///
/// Reducers are pure, so everything identity- or notification-shaped in a
/// test has to come from outside: ids ride in on action payloads and
/// listener activity is observed through a spy.
pub mod mocks {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex, PoisonError};

    /// Listener spy: hands out labelled listeners and records the order in
    /// which they fire.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let log = NotificationLog::new();
    /// store.subscribe(log.listener("L1"));
    /// store.subscribe(log.listener("L2"));
    /// store.dispatch(action)?;
    /// assert_eq!(log.entries(), ["L1", "L2"]);
    /// ```
    #[derive(Clone, Debug, Default)]
    pub struct NotificationLog {
        entries: Arc<Mutex<Vec<String>>>,
    }

    impl NotificationLog {
        /// Create an empty log.
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Build a listener that appends `label` to the log each time the
        /// store notifies it.
        pub fn listener(&self, label: impl Into<String>) -> impl Fn() + Send + Sync + 'static {
            let entries = Arc::clone(&self.entries);
            let label = label.into();
            move || {
                entries
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(label.clone());
            }
        }

        /// Everything recorded so far, in notification order.
        #[must_use]
        pub fn entries(&self) -> Vec<String> {
            self.entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Number of notifications recorded.
        #[must_use]
        pub fn len(&self) -> usize {
            self.entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .len()
        }

        /// Whether nothing has been recorded.
        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        /// Forget everything recorded so far.
        pub fn clear(&self) {
            self.entries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clear();
        }
    }

    /// Deterministic id source for tests.
    ///
    /// Ids enter the system through action payloads (reducers never generate
    /// them), so tests need a predictable supply.
    #[derive(Clone, Debug)]
    pub struct SequentialIds {
        next: Arc<AtomicU64>,
    }

    impl Default for SequentialIds {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SequentialIds {
        /// Ids starting at 1.
        #[must_use]
        pub fn new() -> Self {
            Self::starting_at(1)
        }

        /// Ids starting at `first`.
        #[must_use]
        pub fn starting_at(first: u64) -> Self {
            Self {
                next: Arc::new(AtomicU64::new(first)),
            }
        }

        /// Hand out the next id.
        pub fn next(&self) -> u64 {
            self.next.fetch_add(1, Ordering::Relaxed)
        }
    }
}

pub use mocks::{NotificationLog, SequentialIds};
pub use reducer_test::ReducerTest;
