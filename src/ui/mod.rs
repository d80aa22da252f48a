//! Terminal dashboard.
//!
//! The UI thread owns [`app::App`] and only ever talks to the network through
//! [`app::UiCommand`]s served by [`worker::Worker`]; answers come back as
//! [`events::AppEvent`]s.

pub mod app;
pub mod dashboard;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod location;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod worker;

pub use app::{App, InitialSelection, UiCommand};
pub use events::{AppEvent, EventHandler};
pub use worker::Worker;
