//! Dispatch pipeline.
//!
//! Each middleware receives the intent and a [`Next`] handle for the rest
//! of the chain. `Next::run` consumes the handle and is the only way to
//! obtain the [`Dispatched`] value a middleware must return, so every
//! stage forwards each intent exactly once.

use crate::ui::mvi::Reducer;

pub trait Middleware<R: Reducer>: Send {
    fn handle<'a>(&self, intent: R::Intent, next: Next<'a, R>) -> Dispatched<'a, R::State>;
}

/// Remaining stages of one dispatch.
pub struct Next<'a, R: Reducer> {
    chain: &'a [Box<dyn Middleware<R>>],
    state: &'a mut R::State,
}

impl<'a, R: Reducer> Next<'a, R> {
    pub(crate) fn new(chain: &'a [Box<dyn Middleware<R>>], state: &'a mut R::State) -> Self {
        Self { chain, state }
    }

    /// State before this dispatch is applied.
    pub fn state(&self) -> &R::State {
        self.state
    }

    /// Forward the intent to the next stage, ending at the reducer.
    pub fn run(self, intent: R::Intent) -> Dispatched<'a, R::State> {
        let Next { chain, state } = self;
        match chain.split_first() {
            Some((head, rest)) => head.handle(intent, Next { chain: rest, state }),
            None => {
                let current = std::mem::take(state);
                *state = R::reduce(current, intent);
                Dispatched { state: &*state }
            }
        }
    }
}

/// Proof that an intent reached the reducer, carrying the resulting state.
pub struct Dispatched<'a, S> {
    state: &'a S,
}

impl<'a, S> Dispatched<'a, S> {
    pub fn state(&self) -> &'a S {
        self.state
    }
}
