//! Shared test utilities.

#![allow(dead_code)]

use enthusiasm::store::{ActionLogger, MemorySink, Middleware, Store};
use enthusiasm::ui::app::App;
use enthusiasm::ui::container::{EnthusiasmStore, HelloContainer};
use enthusiasm::ui::enthusiasm::{AppState, EnthusiasmReducer};

/// Store with an action logger feeding a memory sink.
pub fn logged_store(initial: AppState) -> (EnthusiasmStore, MemorySink) {
    let sink = MemorySink::new(64);
    let middleware: Vec<Box<dyn Middleware<EnthusiasmReducer>>> =
        vec![Box::new(ActionLogger::new().with_sink(sink.clone()))];
    (Store::with_middleware(initial, middleware), sink)
}

/// App over a logged store, with the transitions panel available.
pub fn make_app(initial: AppState) -> (App, MemorySink) {
    let (store, sink) = logged_store(initial);
    let app = App::new(HelloContainer::new(store)).with_transitions(sink.clone());
    (app, sink)
}
