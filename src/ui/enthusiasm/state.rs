//! Application state for the greeting counter.

use crate::greeting::{HelloProps, DEFAULT_ENTHUSIASM_LEVEL};
use crate::ui::mvi::UiState;

pub const DEFAULT_LANGUAGE_NAME: &str = "TypeScript";

/// Everything the greeting screen renders from.
///
/// The level is not validated here; it may drop to zero or below and
/// the greeting formatter rejects it at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub enthusiasm_level: i64,
    pub language_name: String,
}

impl AppState {
    pub fn new(language_name: impl Into<String>, enthusiasm_level: i64) -> Self {
        Self {
            enthusiasm_level,
            language_name: language_name.into(),
        }
    }

    /// Project the state onto the hello component's props.
    pub fn to_props(&self) -> HelloProps {
        HelloProps::new(self.language_name.clone()).with_level(self.enthusiasm_level)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE_NAME, DEFAULT_ENTHUSIASM_LEVEL)
    }
}

impl UiState for AppState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_typescript_level_one() {
        let state = AppState::default();
        assert_eq!(state.enthusiasm_level, 1);
        assert_eq!(state.language_name, "TypeScript");
    }

    #[test]
    fn props_carry_name_and_level() {
        let props = AppState::new("Rust", 3).to_props();
        assert_eq!(props.name, "Rust");
        assert_eq!(props.enthusiasm_level, Some(3));
    }
}
