//! Refresh loop timing, driven by a paused tokio clock.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{recording_sink, settle, FakeSource};
use slotwatch::availability::dates;
use slotwatch::refresh::{RefreshEvent, RefreshLoop, RefreshPhase, RefreshSettings};

const INTERVAL: Duration = Duration::from_secs(60);

fn settings() -> RefreshSettings {
    RefreshSettings {
        interval: INTERVAL,
        date_offset_days: 1,
    }
}

fn started(events: &[RefreshEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, RefreshEvent::Started { .. }))
        .count()
}

fn completed(events: &[RefreshEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, RefreshEvent::Completed { .. }))
        .count()
}

#[tokio::test(start_paused = true)]
async fn fetches_immediately_then_every_interval() {
    let source = Arc::new(FakeSource::default());
    let (sink, _events) = recording_sink();
    let mut refresh = RefreshLoop::new(Arc::clone(&source), settings(), sink);

    refresh.start(395);
    settle().await;
    assert_eq!(source.call_count(), 1);

    tokio::time::advance(INTERVAL).await;
    settle().await;
    assert_eq!(source.call_count(), 2);

    tokio::time::advance(INTERVAL).await;
    settle().await;
    assert_eq!(source.call_count(), 3);

    refresh.stop();
}

#[tokio::test(start_paused = true)]
async fn fetch_targets_tomorrow_in_ist() {
    let source = Arc::new(FakeSource::default());
    let (sink, _events) = recording_sink();
    let mut refresh = RefreshLoop::new(Arc::clone(&source), settings(), sink);

    refresh.start(395);
    settle().await;
    refresh.stop();

    let (district_id, date) = source.calls()[0];
    assert_eq!(district_id, 395);
    assert_eq!(date, dates::target_date(dates::today_ist(), 1));
}

#[tokio::test(start_paused = true)]
async fn events_arrive_in_order() {
    let source = Arc::new(FakeSource::default());
    let (sink, events) = recording_sink();
    let mut refresh = RefreshLoop::new(source, settings(), sink);

    let epoch = refresh.start(395);
    settle().await;
    refresh.stop();

    let events = events.lock().unwrap();
    assert!(matches!(
        events[0],
        RefreshEvent::Activated { district_id: 395, epoch: e } if e == epoch
    ));
    assert!(matches!(
        events[1],
        RefreshEvent::Started { ticket, .. } if ticket.epoch == epoch && ticket.seq == 1
    ));
    match &events[2] {
        RefreshEvent::Completed { ticket, centers, .. } => {
            assert_eq!(ticket.seq, 1);
            assert_eq!(centers.len(), 1);
        }
        other => panic!("expected Completed, got {other:?}"),
    }
    assert!(matches!(events[3], RefreshEvent::Deactivated { district_id: 395, .. }));
}

#[tokio::test(start_paused = true)]
async fn restarting_leaves_a_single_timer() {
    let source = Arc::new(FakeSource::default());
    let (sink, _events) = recording_sink();
    let mut refresh = RefreshLoop::new(Arc::clone(&source), settings(), sink);

    let first = refresh.start(1);
    settle().await;
    let second = refresh.start(2);
    settle().await;
    assert!(second > first);
    assert_eq!(
        refresh.phase(),
        RefreshPhase::Active {
            district_id: 2,
            epoch: second
        }
    );

    for _ in 0..3 {
        tokio::time::advance(INTERVAL).await;
        settle().await;
    }

    let calls = source.calls();
    let district_1 = calls.iter().filter(|(d, _)| *d == 1).count();
    let district_2 = calls.iter().filter(|(d, _)| *d == 2).count();
    assert_eq!(district_1, 1);
    assert_eq!(district_2, 4);

    refresh.stop();
}

#[tokio::test(start_paused = true)]
async fn starting_same_district_twice_keeps_one_timer() {
    let source = Arc::new(FakeSource::default());
    let (sink, events) = recording_sink();
    let mut refresh = RefreshLoop::new(Arc::clone(&source), settings(), sink);

    refresh.start(395);
    let second = refresh.start(395);
    settle().await;
    assert_eq!(source.call_count(), 1);

    for _ in 0..3 {
        tokio::time::advance(INTERVAL).await;
        settle().await;
    }
    assert_eq!(source.call_count(), 4);

    let events = events.lock().unwrap();
    let deactivated = events
        .iter()
        .filter(|e| matches!(e, RefreshEvent::Deactivated { .. }))
        .count();
    assert_eq!(deactivated, 1);
    assert!(events.iter().all(|e| match e {
        RefreshEvent::Started { ticket, .. } | RefreshEvent::Completed { ticket, .. } => {
            ticket.epoch == second
        }
        _ => true,
    }));
    drop(events);

    refresh.stop();
}

#[tokio::test(start_paused = true)]
async fn no_fetch_after_stop() {
    let source = Arc::new(FakeSource::default());
    let (sink, _events) = recording_sink();
    let mut refresh = RefreshLoop::new(Arc::clone(&source), settings(), sink);

    refresh.start(395);
    settle().await;
    refresh.stop();
    assert!(!refresh.is_active());
    assert_eq!(refresh.phase(), RefreshPhase::Idle);

    for _ in 0..5 {
        tokio::time::advance(INTERVAL).await;
        settle().await;
    }
    assert_eq!(source.call_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_loop_cancels_it() {
    let source = Arc::new(FakeSource::default());
    let (sink, events) = recording_sink();
    let mut refresh = RefreshLoop::new(Arc::clone(&source), settings(), sink);

    refresh.start(395);
    settle().await;
    drop(refresh);

    tokio::time::advance(INTERVAL * 5).await;
    settle().await;
    assert_eq!(source.call_count(), 1);
    assert!(events
        .lock()
        .unwrap()
        .iter()
        .any(|e| matches!(e, RefreshEvent::Deactivated { .. })));
}

#[tokio::test(start_paused = true)]
async fn slow_fetches_do_not_delay_ticks() {
    let source = Arc::new(FakeSource::slow(INTERVAL * 3));
    let (sink, events) = recording_sink();
    let mut refresh = RefreshLoop::new(Arc::clone(&source), settings(), sink);

    refresh.start(395);
    settle().await;
    tokio::time::advance(INTERVAL).await;
    settle().await;
    tokio::time::advance(INTERVAL).await;
    settle().await;

    {
        let events = events.lock().unwrap();
        assert_eq!(started(&events), 3);
        assert_eq!(completed(&events), 0);
    }
    refresh.stop();
}

#[tokio::test(start_paused = true)]
async fn stop_cancels_in_flight_fetches() {
    let source = Arc::new(FakeSource::slow(Duration::from_secs(10)));
    let (sink, events) = recording_sink();
    let mut refresh = RefreshLoop::new(Arc::clone(&source), settings(), sink);

    refresh.start(395);
    settle().await;
    refresh.stop();

    tokio::time::advance(Duration::from_secs(30)).await;
    settle().await;

    let events = events.lock().unwrap();
    assert_eq!(started(&events), 1);
    assert_eq!(completed(&events), 0);
}

#[tokio::test(start_paused = true)]
async fn refresh_now_fetches_between_ticks() {
    let source = Arc::new(FakeSource::default());
    let (sink, _events) = recording_sink();
    let mut refresh = RefreshLoop::new(Arc::clone(&source), settings(), sink);

    assert!(!refresh.refresh_now());

    refresh.start(395);
    settle().await;
    assert!(refresh.refresh_now());
    settle().await;
    assert_eq!(source.call_count(), 2);

    refresh.stop();
}

#[tokio::test(start_paused = true)]
async fn failures_are_reported() {
    let source = Arc::new(FakeSource::failing());
    let (sink, events) = recording_sink();
    let mut refresh = RefreshLoop::new(source, settings(), sink);

    refresh.start(395);
    settle().await;
    refresh.stop();

    let events = events.lock().unwrap();
    let failure = events.iter().find_map(|e| match e {
        RefreshEvent::Failed {
            ticket, message, ..
        } => Some((ticket.seq, message.clone())),
        _ => None,
    });
    let (seq, message) = failure.expect("no Failed event");
    assert_eq!(seq, 1);
    assert!(message.contains("503"));
}
