use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::api::Center;
use crate::availability::{project, EligibilityRule, Projection};
use crate::ui::mvi::UiState;

/// Availability view for the watched district.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    /// No district selected; refresh loop not running.
    #[default]
    Idle,
    Watching {
        district_id: u32,
        /// Epoch of the refresh loop feeding this view.
        epoch: u64,
        /// Highest fetch seq whose result has been applied.
        applied_seq: u64,
        /// Fetches started but not yet answered.
        pending: usize,
        centers: Vec<Center>,
        last_updated: Option<DateTime<FixedOffset>>,
        last_error: Option<String>,
    },
}

impl UiState for DashboardState {}

impl DashboardState {
    pub fn is_watching(&self) -> bool {
        matches!(self, Self::Watching { .. })
    }

    pub fn district_id(&self) -> Option<u32> {
        match self {
            Self::Watching { district_id, .. } => Some(*district_id),
            Self::Idle => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Watching { pending, .. } if *pending > 0)
    }

    pub fn has_loaded(&self) -> bool {
        matches!(self, Self::Watching { applied_seq, .. } if *applied_seq > 0)
    }

    pub fn centers(&self) -> &[Center] {
        match self {
            Self::Watching { centers, .. } => centers,
            Self::Idle => &[],
        }
    }

    pub fn last_updated(&self) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Watching { last_updated, .. } => *last_updated,
            Self::Idle => None,
        }
    }

    pub fn last_error(&self) -> Option<&str> {
        match self {
            Self::Watching { last_error, .. } => last_error.as_deref(),
            Self::Idle => None,
        }
    }

    /// Project the current centers; `None` while idle or before the first
    /// result arrives.
    pub fn projection(&self, rule: &EligibilityRule, today: NaiveDate) -> Option<Projection> {
        if !self.has_loaded() {
            return None;
        }
        Some(project(self.centers(), rule, today))
    }
}
