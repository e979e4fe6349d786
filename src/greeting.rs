//! Greeting text for a language name and an enthusiasm level.

use thiserror::Error;

/// Level used when the props carry no explicit enthusiasm.
pub const DEFAULT_ENTHUSIASM_LEVEL: i64 = 1;

/// Largest level accepted from the command line or the config file.
pub const MAX_ENTHUSIASM_LEVEL: i64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreetingError {
    #[error("enthusiasm level must be positive (got {level})")]
    NotEnthusiastic { level: i64 },
}

/// Input of the hello component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelloProps {
    pub name: String,
    /// `None` falls back to [`DEFAULT_ENTHUSIASM_LEVEL`].
    pub enthusiasm_level: Option<i64>,
}

impl HelloProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enthusiasm_level: None,
        }
    }

    pub fn with_level(mut self, level: i64) -> Self {
        self.enthusiasm_level = Some(level);
        self
    }

    pub fn level(&self) -> i64 {
        self.enthusiasm_level.unwrap_or(DEFAULT_ENTHUSIASM_LEVEL)
    }
}

/// Builds `"Hello <name>"` followed by one `!` per enthusiasm level.
///
/// Fails for levels below one instead of producing a bare greeting.
pub fn render_greeting(name: &str, level: i64) -> Result<String, GreetingError> {
    if level <= 0 {
        return Err(GreetingError::NotEnthusiastic { level });
    }
    let marks = usize::try_from(level).unwrap_or(usize::MAX);
    Ok(format!("Hello {}{}", name, "!".repeat(marks)))
}
