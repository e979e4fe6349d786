//! Builds the store and its middleware from configuration.

use crate::config::Config;
use crate::logging::open_append;
use crate::store::{ActionLogger, JsonLinesSink, MemorySink, Middleware, Store};
use crate::ui::container::{EnthusiasmStore, HelloContainer};
use crate::ui::enthusiasm::{AppState, EnthusiasmReducer};

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub name: Option<String>,
    pub level: Option<i64>,
    pub disable_action_log: bool,
}

pub fn initial_state(config: &Config, overrides: &Overrides) -> AppState {
    let mut state = config.greeting.initial_state();
    if let Some(name) = &overrides.name {
        state.language_name = name.clone();
    }
    if let Some(level) = overrides.level {
        state.enthusiasm_level = level;
    }
    state
}

/// The wired store, plus the in-memory history when the action logger
/// is attached.
pub struct Wiring {
    pub container: HelloContainer,
    pub history: Option<MemorySink>,
}

pub fn build(config: &Config, overrides: &Overrides) -> Wiring {
    let initial = initial_state(config, overrides);
    if overrides.disable_action_log || !config.logging.action_log {
        tracing::debug!("Action logger disabled");
        return Wiring {
            container: HelloContainer::new(EnthusiasmStore::new(initial)),
            history: None,
        };
    }

    let history = MemorySink::new(config.logging.history_size);
    let mut logger = ActionLogger::new().with_sink(history.clone());
    if let Some(path) = &config.logging.transitions_file {
        match open_append(path) {
            Ok(file) => logger = logger.with_sink(JsonLinesSink::new(file)),
            Err(err) => tracing::warn!(
                path = %path.display(),
                error = %err,
                "Cannot open transitions file, continuing without it"
            ),
        }
    }

    let middleware: Vec<Box<dyn Middleware<EnthusiasmReducer>>> = vec![Box::new(logger)];
    Wiring {
        container: HelloContainer::new(Store::with_middleware(initial, middleware)),
        history: Some(history),
    }
}
