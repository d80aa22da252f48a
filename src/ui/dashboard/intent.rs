use chrono::{DateTime, FixedOffset};

use crate::api::Center;
use crate::refresh::{FetchTicket, RefreshEvent};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DashboardIntent {
    /// Refresh loop started for a district under a new epoch.
    Watch { district_id: u32, epoch: u64 },
    /// Refresh loop for `epoch` stopped.
    Unwatched { epoch: u64 },
    /// User cleared the district.
    Clear,
    FetchStarted { ticket: FetchTicket },
    FetchCompleted {
        ticket: FetchTicket,
        centers: Vec<Center>,
        fetched_at: DateTime<FixedOffset>,
    },
    FetchFailed { ticket: FetchTicket, message: String },
}

impl Intent for DashboardIntent {}

impl From<RefreshEvent> for DashboardIntent {
    fn from(event: RefreshEvent) -> Self {
        match event {
            RefreshEvent::Activated { district_id, epoch } => {
                DashboardIntent::Watch { district_id, epoch }
            }
            RefreshEvent::Deactivated { epoch, .. } => DashboardIntent::Unwatched { epoch },
            RefreshEvent::Started { ticket, .. } => DashboardIntent::FetchStarted { ticket },
            RefreshEvent::Completed {
                ticket,
                centers,
                fetched_at,
                ..
            } => DashboardIntent::FetchCompleted {
                ticket,
                centers,
                fetched_at,
            },
            RefreshEvent::Failed {
                ticket, message, ..
            } => DashboardIntent::FetchFailed { ticket, message },
        }
    }
}
