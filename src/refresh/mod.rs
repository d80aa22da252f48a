//! Periodic re-fetch of availability for the selected district.
//!
//! ```text
//!            start(d)               stop() / drop
//!   Idle ─────────────→ Active(d) ─────────────→ Idle
//!                        │  ↑
//!                        └──┘ tick: fetch(d) → event
//! ```
//!
//! Ticks never wait for earlier fetches. Every fetch is tagged with a
//! [`FetchTicket`] so the consumer can discard results that arrive late.

mod runner;
mod ticket;

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};

use crate::api::Center;
use crate::config::RefreshConfig;

pub use runner::RefreshLoop;
pub use ticket::FetchTicket;

/// What the loop reports to its consumer.
#[derive(Debug, Clone)]
pub enum RefreshEvent {
    /// Loop started for a district; fetches of this epoch follow.
    Activated { district_id: u32, epoch: u64 },
    /// Loop for this epoch was cancelled.
    Deactivated { district_id: u32, epoch: u64 },
    Started {
        ticket: FetchTicket,
        district_id: u32,
    },
    Completed {
        ticket: FetchTicket,
        district_id: u32,
        centers: Vec<Center>,
        fetched_at: DateTime<FixedOffset>,
    },
    Failed {
        ticket: FetchTicket,
        district_id: u32,
        message: String,
    },
}

/// Callback receiving loop events. Called from runtime worker threads.
pub type RefreshSink = Arc<dyn Fn(RefreshEvent) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPhase {
    Idle,
    Active { district_id: u32, epoch: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshSettings {
    pub interval: Duration,
    /// Days added to today (IST) for the `date` query.
    pub date_offset_days: u32,
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self::from(&RefreshConfig::default())
    }
}

impl From<&RefreshConfig> for RefreshSettings {
    fn from(config: &RefreshConfig) -> Self {
        Self {
            interval: Duration::from_secs(config.interval_seconds),
            date_offset_days: config.date_offset_days,
        }
    }
}
