use crate::greeting::GreetingError;
use crate::store::{MemorySink, Subscription, TransitionRecord};
use crate::ui::container::HelloContainer;
use crate::ui::hello::{Hello, HelloActions, HelloView};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Transitions listed in the side panel.
pub const TRANSITIONS_SHOWN: usize = 8;

pub struct App {
    should_quit: bool,
    hello: HelloContainer,
    /// Set by the store subscription and by local UI changes; cleared
    /// when a frame is drawn.
    dirty: Arc<AtomicBool>,
    subscription: Option<Subscription>,
    /// Present when the action logger feeds an in-memory history.
    transitions: Option<MemorySink>,
    show_transitions: bool,
}

impl App {
    pub fn new(hello: HelloContainer) -> Self {
        let dirty = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&dirty);
        let subscription = hello.subscribe(move || flag.store(true, Ordering::Release));
        Self {
            should_quit: false,
            hello,
            dirty,
            subscription: Some(subscription),
            transitions: None,
            show_transitions: false,
        }
    }

    pub fn with_transitions(mut self, sink: MemorySink) -> Self {
        self.transitions = Some(sink);
        self
    }

    pub fn hello(&self) -> &HelloContainer {
        &self.hello
    }

    /// Current view; errors when the level is not positive.
    pub fn view(&self) -> Result<HelloView, GreetingError> {
        Hello::render_from(&self.hello)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }

    pub fn on_increment(&mut self) {
        self.hello.on_increment();
    }

    pub fn on_decrement(&mut self) {
        self.hello.on_decrement();
    }

    pub fn on_resize(&mut self) {
        self.mark_dirty();
    }

    /// Toggles the side panel. Does nothing when no history is attached.
    pub fn toggle_transitions(&mut self) {
        if self.transitions.is_some() {
            self.show_transitions = !self.show_transitions;
            self.mark_dirty();
        }
    }

    pub fn has_transitions(&self) -> bool {
        self.transitions.is_some()
    }

    pub fn show_transitions(&self) -> bool {
        self.show_transitions
    }

    /// Newest first, empty when the panel is hidden.
    pub fn recent_transitions(&self) -> Vec<TransitionRecord> {
        match (&self.transitions, self.show_transitions) {
            (Some(sink), true) => sink.latest(TRANSITIONS_SHOWN),
            _ => Vec::new(),
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Returns whether a redraw was pending and clears the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }
}
