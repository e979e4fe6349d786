pub mod bootstrap;
pub mod config;
pub mod greeting;
pub mod logging;
pub mod store;
pub mod ui;
