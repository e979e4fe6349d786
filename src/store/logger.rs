//! Middleware that records every dispatch.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::store::middleware::{Dispatched, Middleware, Next};
use crate::store::sink::{TransitionRecord, TransitionSink};
use crate::ui::mvi::{Intent, Reducer};

/// Logs each intent before it is forwarded and the state it produced.
///
/// Output goes to `tracing` inside a `dispatch` span, one per intent, and
/// to any attached [`TransitionSink`]s. Sink errors are reported as
/// warnings and never reach the dispatch path.
#[derive(Default)]
pub struct ActionLogger {
    sequence: AtomicU64,
    sinks: Vec<Box<dyn TransitionSink>>,
}

impl ActionLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sink(mut self, sink: impl TransitionSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    fn emit(&self, record: &TransitionRecord) {
        for sink in &self.sinks {
            if let Err(err) = sink.record(record) {
                tracing::warn!(
                    sink = sink.name(),
                    sequence = record.sequence,
                    error = %err,
                    "Failed to record transition"
                );
            }
        }
    }
}

impl<R: Reducer> Middleware<R> for ActionLogger {
    fn handle<'a>(&self, intent: R::Intent, next: Next<'a, R>) -> Dispatched<'a, R::State> {
        let action = intent.kind();
        let span = tracing::info_span!("dispatch", action);
        let _entered = span.enter();

        tracing::info!(?intent, "Dispatching");
        let dispatched = next.run(intent);
        let state = dispatched.state();
        tracing::info!(?state, "Next state");

        let record = TransitionRecord {
            sequence: self.sequence.fetch_add(1, Ordering::Relaxed) + 1,
            action: action.to_string(),
            state: format!("{state:?}"),
        };
        self.emit(&record);
        dispatched
    }
}
