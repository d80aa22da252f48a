//! Model-View-Intent primitives for the dashboard.
//!
//! ```text
//! key / worker event ──→ Intent ──→ Reducer ──→ State ──→ draw()
//!         ↑                                                │
//!         └────────────────────────────────────────────────┘
//! ```
//!
//! Reducers are pure; network calls and timers live in the worker and feed
//! back in as intents.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
