pub mod app;
pub mod container;
pub mod enthusiasm;
pub mod events;
pub mod footer;
pub mod header;
pub mod hello;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod transitions;
