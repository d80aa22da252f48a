pub mod api;
pub mod availability;
pub mod cli;
pub mod config;
pub mod logging;
pub mod refresh;
pub mod shutdown;
pub mod ui;
