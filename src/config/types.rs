use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::greeting::DEFAULT_ENTHUSIASM_LEVEL;
use crate::ui::enthusiasm::{AppState, DEFAULT_LANGUAGE_NAME};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub greeting: GreetingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial state of the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GreetingConfig {
    /// Name shown after "Hello" (default: "TypeScript").
    #[serde(default = "default_language_name")]
    pub language_name: String,
    /// Starting enthusiasm level (default: 1). Only the upper bound is
    /// checked; zero or below fails when rendered.
    #[serde(default = "default_initial_level")]
    pub initial_level: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for interactive runs. Defaults to the user cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Attach the action logger to the store (default: true).
    #[serde(default = "default_action_log")]
    pub action_log: bool,
    /// Append every transition as a JSON line to this file.
    #[serde(default)]
    pub transitions_file: Option<PathBuf>,
    /// Transitions kept for the in-app panel (default: 32).
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

fn default_language_name() -> String {
    DEFAULT_LANGUAGE_NAME.to_string()
}

fn default_initial_level() -> i64 {
    DEFAULT_ENTHUSIASM_LEVEL
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_action_log() -> bool {
    true
}

fn default_history_size() -> usize {
    32
}

impl GreetingConfig {
    pub fn initial_state(&self) -> AppState {
        AppState::new(self.language_name.clone(), self.initial_level)
    }
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            language_name: default_language_name(),
            initial_level: default_initial_level(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
            action_log: default_action_log(),
            transitions_file: None,
            history_size: default_history_size(),
        }
    }
}
