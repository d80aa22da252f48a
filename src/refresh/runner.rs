use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;

use crate::api::AvailabilitySource;
use crate::availability::dates;

use super::{FetchTicket, RefreshEvent, RefreshPhase, RefreshSettings, RefreshSink};

struct ActiveTimer {
    district_id: u32,
    epoch: u64,
    trigger: Arc<Notify>,
    cancelled: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

/// Owns at most one running timer.
///
/// Must be used from within a Tokio runtime: `start` spawns the timer task.
pub struct RefreshLoop<S: AvailabilitySource> {
    source: Arc<S>,
    settings: RefreshSettings,
    sink: RefreshSink,
    epoch: u64,
    seq: Arc<AtomicU64>,
    active: Option<ActiveTimer>,
}

impl<S: AvailabilitySource> RefreshLoop<S> {
    pub fn new(source: Arc<S>, settings: RefreshSettings, sink: RefreshSink) -> Self {
        Self {
            source,
            settings,
            sink,
            epoch: 0,
            seq: Arc::new(AtomicU64::new(0)),
            active: None,
        }
    }

    pub fn phase(&self) -> RefreshPhase {
        match &self.active {
            Some(active) => RefreshPhase::Active {
                district_id: active.district_id,
                epoch: active.epoch,
            },
            None => RefreshPhase::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Watch `district_id`: fetch now, then once per interval.
    ///
    /// Any timer already running is cancelled first, so at most one is ever
    /// active. Returns the new epoch.
    pub fn start(&mut self, district_id: u32) -> u64 {
        self.stop();
        self.epoch += 1;
        let epoch = self.epoch;

        (self.sink)(RefreshEvent::Activated { district_id, epoch });

        let trigger = Arc::new(Notify::new());
        let cancelled = Arc::new(AtomicBool::new(false));
        let timer = Timer {
            source: Arc::clone(&self.source),
            sink: Arc::clone(&self.sink),
            seq: Arc::clone(&self.seq),
            cancelled: Arc::clone(&cancelled),
            settings: self.settings,
            district_id,
            epoch,
        };
        let handle = tokio::spawn(timer.run(Arc::clone(&trigger)));

        tracing::info!(
            district_id,
            epoch,
            interval_secs = self.settings.interval.as_secs(),
            "Refresh loop started"
        );

        self.active = Some(ActiveTimer {
            district_id,
            epoch,
            trigger,
            cancelled,
            handle,
        });
        epoch
    }

    /// Fetch immediately without disturbing the interval. No-op when idle.
    pub fn refresh_now(&self) -> bool {
        match &self.active {
            Some(active) => {
                active.trigger.notify_one();
                true
            }
            None => false,
        }
    }

    /// Cancel the timer and every fetch it has in flight.
    ///
    /// `abort` only lands at the task's next await point, which on a
    /// multi-thread runtime can be after this returns. Once the cancel flag is
    /// set, no further fetch is launched and no result is reported.
    pub fn stop(&mut self) {
        if let Some(active) = self.active.take() {
            active.cancelled.store(true, Ordering::SeqCst);
            active.handle.abort();
            tracing::info!(
                district_id = active.district_id,
                epoch = active.epoch,
                "Refresh loop stopped"
            );
            (self.sink)(RefreshEvent::Deactivated {
                district_id: active.district_id,
                epoch: active.epoch,
            });
        }
    }
}

impl<S: AvailabilitySource> Drop for RefreshLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

struct Timer<S> {
    source: Arc<S>,
    sink: RefreshSink,
    seq: Arc<AtomicU64>,
    cancelled: Arc<AtomicBool>,
    settings: RefreshSettings,
    district_id: u32,
    epoch: u64,
}

impl<S: AvailabilitySource> Timer<S> {
    /// In-flight fetches live in a `JoinSet` owned by this task, so aborting
    /// the task drops (and aborts) them too.
    async fn run(self, trigger: Arc<Notify>) {
        let mut interval = tokio::time::interval(self.settings.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut in_flight = JoinSet::new();

        loop {
            tokio::select! {
                _ = interval.tick() => self.launch(&mut in_flight),
                _ = trigger.notified() => self.launch(&mut in_flight),
                Some(_) = in_flight.join_next(), if !in_flight.is_empty() => {}
            }
        }
    }

    fn launch(&self, in_flight: &mut JoinSet<()>) {
        if self.is_cancelled() {
            return;
        }
        let ticket = FetchTicket {
            epoch: self.epoch,
            seq: self.seq.fetch_add(1, Ordering::SeqCst) + 1,
        };
        let district_id = self.district_id;
        let date = dates::target_date(dates::today_ist(), self.settings.date_offset_days);
        let source = Arc::clone(&self.source);
        let sink = Arc::clone(&self.sink);
        let cancelled = Arc::clone(&self.cancelled);

        tracing::debug!(district_id, seq = ticket.seq, %date, "Fetching availability");
        sink(RefreshEvent::Started {
            ticket,
            district_id,
        });

        in_flight.spawn(async move {
            if cancelled.load(Ordering::SeqCst) {
                return;
            }
            let result = source.fetch_centers(district_id, date).await;
            if cancelled.load(Ordering::SeqCst) {
                tracing::debug!(district_id, seq = ticket.seq, "Dropping result of a cancelled loop");
                return;
            }
            match result {
                Ok(centers) => sink(RefreshEvent::Completed {
                    ticket,
                    district_id,
                    centers,
                    fetched_at: dates::now_ist(),
                }),
                Err(err) => {
                    tracing::warn!(district_id, seq = ticket.seq, error = %err, "Availability fetch failed");
                    sink(RefreshEvent::Failed {
                        ticket,
                        district_id,
                        message: err.to_string(),
                    });
                }
            }
        });
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
