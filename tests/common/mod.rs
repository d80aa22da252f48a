//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::NaiveDate;
use slotwatch::api::{ApiError, AvailabilitySource, Center, Session};
use slotwatch::config::ApiConfig;
use slotwatch::refresh::{RefreshEvent, RefreshSink};
use tempfile::TempDir;

/// Write `content` to a fresh `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn api_config(base_url: &str) -> ApiConfig {
    ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        ..ApiConfig::default()
    }
}

// -- Fixtures -----------------------------------------------------------------

pub fn session(date: &str, min_age_limit: u32, available_capacity: u32) -> Session {
    Session {
        date: date.to_string(),
        min_age_limit,
        available_capacity,
        vaccine: "COVISHIELD".to_string(),
    }
}

pub fn center(center_id: u64, name: &str, sessions: Vec<Session>) -> Center {
    Center {
        center_id,
        name: name.to_string(),
        block_name: "Andheri".to_string(),
        pincode: 400059,
        address: None,
        fee_type: Some("Free".to_string()),
        sessions,
    }
}

// -- Refresh loop doubles -----------------------------------------------------

/// Availability source that records every call and answers from a script.
#[derive(Default)]
pub struct FakeSource {
    calls: Mutex<Vec<(u32, NaiveDate)>>,
    fail: bool,
    delay: Option<Duration>,
}

impl FakeSource {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Each fetch takes `delay` of (tokio) time to answer.
    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(u32, NaiveDate)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl AvailabilitySource for FakeSource {
    async fn fetch_centers(
        &self,
        district_id: u32,
        date: NaiveDate,
    ) -> Result<Vec<Center>, ApiError> {
        self.calls.lock().unwrap().push((district_id, date));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(ApiError::Status {
                url: format!("fake://district/{}", district_id),
                status: 503,
            });
        }
        Ok(vec![center(
            u64::from(district_id),
            "Fake Center",
            vec![session("05-05-2021", 18, 3)],
        )])
    }
}

/// Sink that stores every event it receives.
pub fn recording_sink() -> (RefreshSink, Arc<Mutex<Vec<RefreshEvent>>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink_events = Arc::clone(&events);
    let sink: RefreshSink = Arc::new(move |event| {
        sink_events.lock().unwrap().push(event);
    });
    (sink, events)
}

/// Let spawned tasks run without moving the paused clock.
pub async fn settle() {
    for _ in 0..20 {
        tokio::task::yield_now().await;
    }
}
