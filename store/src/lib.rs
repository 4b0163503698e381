//! # Uniflow Store
//!
//! The synchronous runtime for the uniflow state container.
//!
//! The [`Store`] owns the current composite state, routes dispatched actions
//! through its reducer, and notifies subscribed listeners after every
//! successful dispatch. There is no queue and no background worker: a
//! dispatch runs reducer computation and listener notification to completion
//! before returning, and dispatches from different threads serialize so that
//! no two reducer computations ever interleave.
//!
//! ## Example
//!
//! ```
//! use uniflow_core::Reducer;
//! use uniflow_store::Store;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct CounterState { count: i64 }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction { Increase, Decrease }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!
//!     fn initial(&self) -> CounterState {
//!         CounterState { count: 0 }
//!     }
//!
//!     fn reduce(&self, state: &CounterState, action: &CounterAction) -> CounterState {
//!         match action {
//!             CounterAction::Increase => CounterState { count: state.count + 1 },
//!             CounterAction::Decrease => CounterState { count: state.count - 1 },
//!         }
//!     }
//! }
//!
//! let store = Store::new(CounterReducer);
//! store.dispatch(CounterAction::Increase)?;
//! assert_eq!(store.state().count, 1);
//! # Ok::<(), uniflow_store::StoreError>(())
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, Weak};
use std::thread::{self, ThreadId};

use uniflow_core::{Reducer, Selector};

/// Error types for the store runtime.
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during store operations.
    ///
    /// The dispatch cycle is deliberately hard to break: unknown actions are
    /// not errors (reducers pass them through), and a listener that panics
    /// propagates as a panic rather than an error value. What remains is the
    /// one misuse the store must refuse.
    #[derive(Error, Debug)]
    #[non_exhaustive]
    pub enum StoreError {
        /// `dispatch` was called from inside a reducer or a listener that is
        /// running as part of an in-flight dispatch on this store.
        ///
        /// Allowing this would let listeners observe a half-settled state
        /// tree. Deliver follow-up actions after the current dispatch
        /// returns instead.
        #[error("dispatch called re-entrantly from a reducer or listener of an in-flight dispatch")]
        ReentrantDispatch,
    }
}

pub use error::StoreError;

/// A registered listener callback.
type Listener = Arc<dyn Fn() + Send + Sync>;

/// The listener registry, shared with [`Subscription`] handles.
type Registry = Mutex<Vec<(u64, Listener)>>;

// Lock helpers. A poisoned lock here only ever means a listener panicked
// mid-notification; the state commit preceding notification was already
// complete, so the protected data is consistent and the lock is recovered.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn read<T>(rwlock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    rwlock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(rwlock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    rwlock.write().unwrap_or_else(PoisonError::into_inner)
}

/// Clears the active-dispatcher marker when a dispatch cycle ends, whether
/// it returns normally or unwinds out of a panicking listener.
struct ActiveDispatchGuard<'a>(&'a Mutex<Option<ThreadId>>);

impl Drop for ActiveDispatchGuard<'_> {
    fn drop(&mut self) {
        *lock(self.0) = None;
    }
}

struct StoreInner<R: Reducer> {
    reducer: R,
    state: RwLock<R::State>,
    listeners: Arc<Registry>,
    next_listener_id: AtomicU64,
    /// Serializes whole dispatch cycles: reducer computation plus listener
    /// notification. Held for the full cycle.
    dispatch_gate: Mutex<()>,
    /// Thread currently inside a dispatch cycle, for the reentrancy guard.
    active_dispatcher: Mutex<Option<ThreadId>>,
}

/// The store - holds current state, routes dispatched actions to the
/// reducer, and notifies listeners.
///
/// One store per application composition. The handle is cheap to clone
/// (clones share the same state and listener registry), so collaborators
/// receive the store by value or reference instead of through a global.
///
/// # Type Parameters
///
/// - `R`: the (possibly composed) root reducer
///
/// # Dispatch cycle
///
/// 1. The reducer computes the next state from the current state and the
///    action.
/// 2. The next state is committed.
/// 3. Every listener registered when the commit happened is invoked, in
///    registration order, with no arguments. Listeners subscribed during the
///    cycle are deferred to the next dispatch.
///
/// Steps 1-3 run to completion before `dispatch` returns, and a second
/// dispatch from another thread waits for the whole cycle to finish.
pub struct Store<R: Reducer> {
    inner: Arc<StoreInner<R>>,
}

impl<R: Reducer> Store<R> {
    /// Create a store bootstrapped from the reducer's initial state.
    ///
    /// Every slice of a composed reducer is populated with a real value
    /// immediately after construction.
    #[must_use]
    pub fn new(reducer: R) -> Self {
        let initial = reducer.initial();
        Self::with_preloaded(reducer, initial)
    }

    /// Create a store from a previously captured state snapshot.
    ///
    /// This is the load half of the persistence boundary: a collaborator
    /// deserializes a snapshot it wrote earlier and hands it in here. The
    /// snapshot must be a complete composite state; no merging with the
    /// reducer's initial value takes place.
    #[must_use]
    pub fn with_preloaded(reducer: R, preloaded: R::State) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                reducer,
                state: RwLock::new(preloaded),
                listeners: Arc::new(Mutex::new(Vec::new())),
                next_listener_id: AtomicU64::new(0),
                dispatch_gate: Mutex::new(()),
                active_dispatcher: Mutex::new(None),
            }),
        }
    }

    /// Borrow the current state.
    ///
    /// O(1), no copying: the returned guard dereferences to the state the
    /// store currently holds. The state is read-only by construction -
    /// mutation happens only through [`dispatch`](Self::dispatch).
    ///
    /// Holding the guard blocks state commits, so drop it before
    /// dispatching from the same thread.
    #[must_use]
    pub fn state(&self) -> StateRef<'_, R::State> {
        StateRef {
            guard: read(&self.inner.state),
        }
    }

    /// Read a derived value through a [`Selector`].
    ///
    /// ```ignore
    /// let count = store.select(|s: &AppState| s.counter.count);
    /// ```
    pub fn select<Sel>(&self, selector: Sel) -> Sel::Output
    where
        Sel: Selector<R::State>,
    {
        selector.select(&self.state())
    }

    /// Dispatch an action: reduce, commit, notify.
    ///
    /// On success the dispatched action is handed back for convenience
    /// chaining.
    ///
    /// # Listener failures
    ///
    /// A panicking listener propagates out of `dispatch` and aborts the
    /// remaining notifications for this cycle. The state commit is not
    /// rolled back - listeners that already ran observed the same committed
    /// state a later reader will see. The store itself stays usable.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::ReentrantDispatch`] when called from a reducer
    /// or listener of an in-flight dispatch on this store.
    pub fn dispatch(&self, action: R::Action) -> Result<R::Action, StoreError> {
        let current = thread::current().id();
        if *lock(&self.inner.active_dispatcher) == Some(current) {
            metrics::counter!("store.dispatch.reentrant").increment(1);
            return Err(StoreError::ReentrantDispatch);
        }

        // One full cycle at a time; a concurrent dispatch from another
        // thread parks here until reducer and notification both finish.
        let _gate = lock(&self.inner.dispatch_gate);
        *lock(&self.inner.active_dispatcher) = Some(current);
        let _active = ActiveDispatchGuard(&self.inner.active_dispatcher);

        let next = {
            let state = read(&self.inner.state);
            self.inner.reducer.reduce(&state, &action)
        };
        *write(&self.inner.state) = next;
        metrics::counter!("store.dispatch.total").increment(1);

        // Snapshot taken after the commit: exactly the listeners registered
        // when this dispatch began its notification round. Subscriptions
        // made by a listener land in the registry and fire next dispatch.
        let snapshot: Vec<Listener> = lock(&self.inner.listeners)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        tracing::trace!(listeners = snapshot.len(), "state committed, notifying");
        for listener in snapshot {
            listener();
        }

        Ok(action)
    }

    /// Register a listener invoked after every successful dispatch.
    ///
    /// Listeners run in registration order and receive no arguments; they
    /// read whatever they need through [`state`](Self::state) or
    /// [`select`](Self::select). Registering the same closure twice
    /// registers it twice - there is no deduplication.
    ///
    /// The returned [`Subscription`] removes the listener again; dropping it
    /// without calling [`Subscription::unsubscribe`] leaves the listener
    /// registered for the lifetime of the store.
    pub fn subscribe(&self, listener: impl Fn() + Send + Sync + 'static) -> Subscription {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        let mut listeners = lock(&self.inner.listeners);
        listeners.push((id, Arc::new(listener)));
        metrics::gauge!("store.listeners").set(listeners.len() as f64);
        tracing::debug!(listener_id = id, "listener subscribed");

        Subscription {
            registry: Arc::downgrade(&self.inner.listeners),
            id,
        }
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        lock(&self.inner.listeners).len()
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> std::fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}

/// Read-only borrow of the store's current state.
///
/// Returned by [`Store::state`]; dereferences to the composite state.
pub struct StateRef<'a, S> {
    guard: RwLockReadGuard<'a, S>,
}

impl<S> std::ops::Deref for StateRef<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.guard
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for StateRef<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.guard.fmt(f)
    }
}

/// Handle for removing a registered listener.
///
/// Returned by [`Store::subscribe`]. [`unsubscribe`](Self::unsubscribe) is
/// idempotent, and becomes a no-op if every handle to the store has already
/// been dropped.
pub struct Subscription {
    registry: Weak<Registry>,
    id: u64,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

impl Subscription {
    /// Remove the listener this subscription registered.
    ///
    /// Safe to call any number of times; only the first call removes
    /// anything. A listener removed mid-notification still completes the
    /// round it was snapshotted into.
    pub fn unsubscribe(&self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut listeners = lock(&registry);
            listeners.retain(|(id, _)| *id != self.id);
            metrics::gauge!("store.listeners").set(listeners.len() as f64);
        }
    }
}
