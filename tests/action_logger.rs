mod common;

use common::logged_store;
use enthusiasm::store::{
    ActionLogger, Dispatched, JsonLinesSink, MemorySink, Middleware, Next, Store, TransitionRecord,
    TransitionSink,
};
use enthusiasm::ui::enthusiasm::{AppState, EnthusiasmIntent, EnthusiasmReducer};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

struct FailingSink;

impl TransitionSink for FailingSink {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn record(&self, _record: &TransitionRecord) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Other, "disk full"))
    }
}

/// Writer that rejects every write.
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Records the state each stage sees, to check chain order.
struct Probe {
    label: &'static str,
    trace: Arc<Mutex<Vec<String>>>,
}

impl Middleware<EnthusiasmReducer> for Probe {
    fn handle<'a>(
        &self,
        intent: EnthusiasmIntent,
        next: Next<'a, EnthusiasmReducer>,
    ) -> Dispatched<'a, AppState> {
        self.trace
            .lock()
            .push(format!("{} before {}", self.label, next.state().enthusiasm_level));
        let dispatched = next.run(intent);
        self.trace
            .lock()
            .push(format!("{} after {}", self.label, dispatched.state().enthusiasm_level));
        dispatched
    }
}

#[test]
fn records_one_transition_per_dispatch_in_order() {
    let (mut store, sink) = logged_store(AppState::default());
    let intents = [
        EnthusiasmIntent::Increment,
        EnthusiasmIntent::Increment,
        EnthusiasmIntent::Decrement,
    ];
    for intent in intents {
        store.dispatch(intent);
    }

    let records = sink.records();
    assert_eq!(records.len(), intents.len());
    let sequences: Vec<u64> = records.iter().map(|r| r.sequence).collect();
    assert_eq!(sequences, vec![1, 2, 3]);
    let actions: Vec<&str> = records.iter().map(|r| r.action.as_str()).collect();
    assert_eq!(
        actions,
        vec![
            "INCREMENT_ENTHUSIASM",
            "INCREMENT_ENTHUSIASM",
            "DECREMENT_ENTHUSIASM"
        ]
    );
}

#[test]
fn record_holds_resulting_state() {
    let (mut store, sink) = logged_store(AppState::new("Rust", 1));
    store.dispatch(EnthusiasmIntent::Increment);
    let record = &sink.records()[0];
    assert!(record.state.contains("enthusiasm_level: 2"));
    assert!(record.state.contains("Rust"));
}

#[test]
fn failing_sink_does_not_block_dispatch() {
    let memory = MemorySink::new(8);
    let logger = ActionLogger::new()
        .with_sink(FailingSink)
        .with_sink(JsonLinesSink::new(BrokenPipe))
        .with_sink(memory.clone());
    let middleware: Vec<Box<dyn Middleware<EnthusiasmReducer>>> = vec![Box::new(logger)];
    let mut store = Store::with_middleware(AppState::default(), middleware);

    store.dispatch(EnthusiasmIntent::Increment);
    store.dispatch(EnthusiasmIntent::Increment);

    assert_eq!(store.state().enthusiasm_level, 3);
    assert_eq!(memory.len(), 2);
}

#[test]
fn middleware_runs_in_registration_order() {
    let trace = Arc::new(Mutex::new(Vec::new()));
    let middleware: Vec<Box<dyn Middleware<EnthusiasmReducer>>> = vec![
        Box::new(Probe {
            label: "outer",
            trace: Arc::clone(&trace),
        }),
        Box::new(Probe {
            label: "inner",
            trace: Arc::clone(&trace),
        }),
    ];
    let mut store = Store::with_middleware(AppState::default(), middleware);
    store.dispatch(EnthusiasmIntent::Increment);

    assert_eq!(
        *trace.lock(),
        vec![
            "outer before 1".to_string(),
            "inner before 1".to_string(),
            "inner after 2".to_string(),
            "outer after 2".to_string(),
        ]
    );
}

#[test]
fn transitions_file_receives_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("transitions.jsonl");
    let file = std::fs::File::create(&path).unwrap();
    let middleware: Vec<Box<dyn Middleware<EnthusiasmReducer>>> =
        vec![Box::new(ActionLogger::new().with_sink(JsonLinesSink::new(file)))];
    let mut store = Store::with_middleware(AppState::default(), middleware);
    store.dispatch(EnthusiasmIntent::Decrement);

    let content = std::fs::read_to_string(&path).unwrap();
    let record: TransitionRecord = serde_json::from_str(content.trim()).unwrap();
    assert_eq!(record.sequence, 1);
    assert_eq!(record.action, "DECREMENT_ENTHUSIASM");
}
