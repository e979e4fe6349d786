//! Single-owner state container.
//!
//! A [`Store`] owns one state snapshot and applies intents through its
//! middleware chain and reducer. Observers registered with
//! [`Store::subscribe`] are called after every dispatch and read the new
//! state themselves.

pub mod logger;
pub mod middleware;
pub mod sink;

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::ui::mvi::Reducer;

pub use logger::ActionLogger;
pub use middleware::{Dispatched, Middleware, Next};
pub use sink::{JsonLinesSink, MemorySink, TransitionRecord, TransitionSink};

type Observer = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct ObserverList {
    next_id: u64,
    entries: Vec<(u64, Observer)>,
}

pub struct Store<R: Reducer> {
    state: R::State,
    middleware: Vec<Box<dyn Middleware<R>>>,
    observers: Arc<Mutex<ObserverList>>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self::with_middleware(initial, Vec::new())
    }

    /// Middleware run in order; the first entry sees each intent first.
    pub fn with_middleware(initial: R::State, middleware: Vec<Box<dyn Middleware<R>>>) -> Self {
        Self {
            state: initial,
            middleware,
            observers: Arc::new(Mutex::new(ObserverList::default())),
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> R::State {
        self.state.clone()
    }

    /// Apply one intent, then notify observers in registration order.
    pub fn dispatch(&mut self, intent: R::Intent) {
        Next::new(&self.middleware, &mut self.state).run(intent);
        self.notify();
    }

    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut list = self.observers.lock();
        list.next_id += 1;
        let id = list.next_id;
        list.entries.push((id, Arc::new(observer)));
        Subscription {
            id,
            observers: Arc::downgrade(&self.observers),
        }
    }

    pub fn observer_count(&self) -> usize {
        self.observers.lock().entries.len()
    }

    fn notify(&self) {
        // Observers run outside the lock so they may unsubscribe themselves.
        let observers: Vec<Observer> = self
            .observers
            .lock()
            .entries
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer();
        }
    }
}

/// Registration returned by [`Store::subscribe`].
///
/// Dropping the handle keeps the observer registered; call
/// [`Subscription::unsubscribe`] to remove it.
pub struct Subscription {
    id: u64,
    observers: Weak<Mutex<ObserverList>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        if let Some(observers) = self.observers.upgrade() {
            observers.lock().entries.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::enthusiasm::{AppState, EnthusiasmIntent, EnthusiasmReducer};
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn increment_from_default() {
        let mut store = Store::<EnthusiasmReducer>::new(AppState::default());
        store.dispatch(EnthusiasmIntent::Increment);
        assert_eq!(store.state().enthusiasm_level, 2);
        assert_eq!(store.state().language_name, "TypeScript");
    }

    #[test]
    fn decrement_is_not_clamped() {
        let mut store = Store::<EnthusiasmReducer>::new(AppState::default());
        store.dispatch(EnthusiasmIntent::Decrement);
        assert_eq!(store.state().enthusiasm_level, 0);
        store.dispatch(EnthusiasmIntent::Decrement);
        assert_eq!(store.state().enthusiasm_level, -1);
    }

    #[test]
    fn snapshot_is_stable_without_dispatch() {
        let store = Store::<EnthusiasmReducer>::new(AppState::new("Rust", 4));
        assert_eq!(store.snapshot(), store.snapshot());
    }

    #[test]
    fn observer_called_once_per_dispatch() {
        let mut store = Store::<EnthusiasmReducer>::new(AppState::default());
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let _subscription = store.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        store.dispatch(EnthusiasmIntent::Increment);
        store.dispatch(EnthusiasmIntent::Decrement);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn unsubscribed_observer_is_not_called() {
        let mut store = Store::<EnthusiasmReducer>::new(AppState::default());
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let subscription = store.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        store.dispatch(EnthusiasmIntent::Increment);
        subscription.unsubscribe();
        store.dispatch(EnthusiasmIntent::Increment);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(store.observer_count(), 0);
    }

    #[test]
    fn unsubscribe_after_store_dropped_is_noop() {
        let store = Store::<EnthusiasmReducer>::new(AppState::default());
        let subscription = store.subscribe(|| {});
        drop(store);
        subscription.unsubscribe();
    }
}
