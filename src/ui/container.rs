//! Binds the hello component to an enthusiasm store.

use crate::greeting::HelloProps;
use crate::store::{Store, Subscription};
use crate::ui::enthusiasm::{AppState, EnthusiasmIntent, EnthusiasmReducer};
use crate::ui::hello::{HelloActions, HelloSource};

pub type EnthusiasmStore = Store<EnthusiasmReducer>;

pub struct HelloContainer {
    store: EnthusiasmStore,
}

impl HelloContainer {
    pub fn new(store: EnthusiasmStore) -> Self {
        Self { store }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.store.subscribe(observer)
    }
}

impl HelloSource for HelloContainer {
    fn props(&self) -> HelloProps {
        self.store.state().to_props()
    }
}

impl HelloActions for HelloContainer {
    fn on_increment(&mut self) {
        self.store.dispatch(EnthusiasmIntent::Increment);
    }

    fn on_decrement(&mut self) {
        self.store.dispatch(EnthusiasmIntent::Decrement);
    }
}
