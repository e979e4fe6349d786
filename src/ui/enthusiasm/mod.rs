mod intent;
mod reducer;
mod state;

pub use intent::EnthusiasmIntent;
pub use reducer::EnthusiasmReducer;
pub use state::{AppState, DEFAULT_LANGUAGE_NAME};
