//! Command-line flags. Anything set here overrides the config file.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::availability::AgeBracket;
use crate::config::Config;
use crate::ui::InitialSelection;

/// Watch CoWIN vaccination slot availability for a district.
#[derive(Debug, Parser)]
#[command(name = "slotwatch")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("age").args(["age_below", "age_at_least", "any_age"])))]
pub struct Cli {
    /// Config file (default: ~/.config/slotwatch/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Pre-select a state by id
    #[arg(long, value_name = "ID")]
    pub state: Option<u32>,

    /// Start watching a district by id
    #[arg(long, value_name = "ID")]
    pub district: Option<u32>,

    /// Only sessions whose minimum age is below N (e.g. 45 for 18-44)
    #[arg(long, value_name = "N")]
    pub age_below: Option<u32>,

    /// Only sessions whose minimum age is at least N
    #[arg(long, value_name = "N")]
    pub age_at_least: Option<u32>,

    /// Sessions for any age
    #[arg(long)]
    pub any_age: bool,

    /// Only sessions offering this vaccine (case-insensitive)
    #[arg(long, value_name = "NAME")]
    pub vaccine: Option<String>,

    /// Only count sessions with free slots
    #[arg(long)]
    pub require_capacity: bool,

    /// Days after today (IST) to start the lookup from
    #[arg(long, value_name = "DAYS")]
    pub date_offset: Option<u32>,

    /// Seconds between refreshes
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,

    /// CoWIN API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Fetch once, print a table and exit
    #[arg(long, requires = "district")]
    pub once: bool,

    /// Log file for the interactive dashboard
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Overlay flags onto a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(interval) = self.interval {
            config.refresh.interval_seconds = interval;
        }
        if let Some(offset) = self.date_offset {
            config.refresh.date_offset_days = offset;
        }
        if let Some(age) = self.age_bracket() {
            config.eligibility.age = age;
        }
        if self.require_capacity {
            config.eligibility.require_capacity = true;
        }
        if let Some(vaccine) = &self.vaccine {
            config.eligibility.vaccine = Some(vaccine.clone());
        }
    }

    pub fn age_bracket(&self) -> Option<AgeBracket> {
        if self.any_age {
            return Some(AgeBracket::Any);
        }
        self.age_below
            .map(AgeBracket::Below)
            .or(self.age_at_least.map(AgeBracket::AtLeast))
    }

    pub fn initial_selection(&self) -> InitialSelection {
        InitialSelection {
            state_id: self.state,
            district_id: self.district,
        }
    }
}
