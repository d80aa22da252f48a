//! TOML configuration: upstream API, refresh cadence and eligibility rule.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, RefreshConfig};
