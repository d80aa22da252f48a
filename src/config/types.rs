use serde::{Deserialize, Serialize};

use crate::availability::EligibilityRule;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub eligibility: EligibilityRule,
}

/// Upstream API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL, without trailing slash (e.g., "https://api.cowin.gov.in/api/v2").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Sent as `User-Agent`; the public API rejects some default agents.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Refresh loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Seconds between availability fetches (default: 60).
    #[serde(default = "default_interval")]
    pub interval_seconds: u64,
    /// Days after today (IST) used as the fetch start date (default: 1).
    #[serde(default = "default_date_offset")]
    pub date_offset_days: u32,
}

fn default_base_url() -> String {
    "https://api.cowin.gov.in/api/v2".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_user_agent() -> String {
    format!("slotwatch/{}", env!("CARGO_PKG_VERSION"))
}

fn default_interval() -> u64 {
    60
}

fn default_date_offset() -> u32 {
    1
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_interval(),
            date_offset_days: default_date_offset(),
        }
    }
}
