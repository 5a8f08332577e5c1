//! Thread-safe store handle
//!
//! [`Store`] is single-owner: dispatch takes `&mut self`. When several
//! threads need to dispatch, wrap the store in a [`SharedStore`]. Its mutex
//! makes the reduce-then-notify sequence atomic with respect to other
//! dispatchers, so observers always see states in dispatch order.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::store::{Reducer, Store, SubscriptionId};
use crate::Action;

/// Cloneable handle to a store guarded by a mutex
///
/// Observers run while the lock is held. An observer must not dispatch
/// to the same `SharedStore`; that would deadlock.
pub struct SharedStore<S, A: Action> {
    inner: Arc<Mutex<Store<S, A>>>,
}

impl<S, A: Action> Clone for SharedStore<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: PartialEq, A: Action> SharedStore<S, A> {
    /// Create a shared store with initial state and reducer
    pub fn new(state: S, reducer: Reducer<S, A>) -> Self {
        Self::from_store(Store::new(state, reducer))
    }

    /// Wrap an existing store, keeping its observers
    pub fn from_store(store: Store<S, A>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Dispatch an action, blocking until any in-flight dispatch finishes
    pub fn dispatch(&self, action: A) -> bool {
        self.inner.lock().dispatch(action)
    }

    /// Snapshot of the current state
    pub fn snapshot(&self) -> Arc<S> {
        self.inner.lock().snapshot()
    }

    /// Read the current state under the lock
    pub fn with_state<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(self.inner.lock().state())
    }

    /// Register an observer called after every dispatch
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: FnMut(&S) + Send + 'static,
    {
        self.inner.lock().subscribe(observer)
    }

    /// Remove an observer
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.lock().unsubscribe(id)
    }

    /// Number of registered observers
    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscriber_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Tally {
        total: i64,
    }

    #[derive(Clone, Debug)]
    enum TallyAction {
        Add(i64),
    }

    impl Action for TallyAction {
        fn name(&self) -> &'static str {
            "add"
        }
    }

    fn reducer(state: &Tally, action: &TallyAction) -> Tally {
        match action {
            TallyAction::Add(n) => Tally {
                total: state.total + n,
            },
        }
    }

    #[test]
    fn test_concurrent_dispatch_is_serialized() {
        let store = SharedStore::new(Tally::default(), reducer);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                thread::spawn(move || {
                    for _ in 0..250 {
                        store.dispatch(TallyAction::Add(1));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.snapshot().total, 2000);
    }

    #[test]
    fn test_observers_see_every_state_in_order() {
        let store = SharedStore::new(Tally::default(), reducer);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |state: &Tally| sink.lock().push(state.total));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                thread::spawn(move || {
                    for _ in 0..50 {
                        store.dispatch(TallyAction::Add(1));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let seen = seen.lock();
        assert_eq!(seen.len(), 200);
        assert!(seen.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn test_from_store_keeps_observers() {
        let mut store = Store::new(Tally::default(), reducer);
        let id = store.subscribe(|_| {});
        let shared = SharedStore::from_store(store);

        assert_eq!(shared.subscriber_count(), 1);
        assert!(shared.unsubscribe(id));
        assert_eq!(shared.with_state(|s| s.total), 0);
    }
}
