use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::time::Duration;

pub enum AppEvent {
    Key(KeyEvent),
    Resize,
}

/// Polls the terminal on the UI thread.
///
/// Every event is handled to completion before the next poll, so
/// dispatches reach the store in the order keys were pressed.
pub struct EventHandler {
    poll_timeout: Duration,
}

impl EventHandler {
    pub fn new(poll_timeout: Duration) -> Self {
        Self { poll_timeout }
    }

    /// `Ok(None)` on timeout or for events the app ignores.
    pub fn next(&self) -> io::Result<Option<AppEvent>> {
        if !event::poll(self.poll_timeout)? {
            return Ok(None);
        }
        let event = match event::read()? {
            Event::Key(key) => Some(AppEvent::Key(key)),
            Event::Resize(_, _) => Some(AppEvent::Resize),
            _ => None,
        };
        Ok(event)
    }
}
