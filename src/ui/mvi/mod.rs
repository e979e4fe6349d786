//! Model-View-Intent primitives shared by the store and the views.
//!
//! ```text
//! key press ──→ Intent ──→ Middleware* ──→ Reducer ──→ State ──→ View
//!     ↑                                                           │
//!     └───────────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: value snapshot owned by the store, replaced on every dispatch
//! - **Intent**: a user action, consumed exactly once
//! - **Reducer**: pure `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
