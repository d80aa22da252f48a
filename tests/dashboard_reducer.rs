mod common;

use chrono::NaiveDate;
use common::{center, session};
use slotwatch::availability::{dates, AgeBracket, EligibilityRule, Projection};
use slotwatch::refresh::FetchTicket;
use slotwatch::ui::dashboard::{DashboardIntent, DashboardReducer, DashboardState};
use slotwatch::ui::mvi::Reducer;

fn watching(epoch: u64) -> DashboardState {
    DashboardReducer::reduce(
        DashboardState::Idle,
        DashboardIntent::Watch {
            district_id: 395,
            epoch,
        },
    )
}

fn completed(state: DashboardState, epoch: u64, seq: u64, name: &str) -> DashboardState {
    DashboardReducer::reduce(
        state,
        DashboardIntent::FetchCompleted {
            ticket: FetchTicket { epoch, seq },
            centers: vec![center(seq, name, vec![session("05-05-2021", 18, 5)])],
            fetched_at: dates::now_ist(),
        },
    )
}

fn started(state: DashboardState, epoch: u64, seq: u64) -> DashboardState {
    DashboardReducer::reduce(
        state,
        DashboardIntent::FetchStarted {
            ticket: FetchTicket { epoch, seq },
        },
    )
}

fn first_name(state: &DashboardState) -> &str {
    state.centers()[0].name.as_str()
}

#[test]
fn watch_starts_empty_and_unloaded() {
    let state = watching(1);
    assert!(state.is_watching());
    assert_eq!(state.district_id(), Some(395));
    assert!(!state.has_loaded());
    assert!(state.centers().is_empty());
    assert!(state
        .projection(&EligibilityRule::default(), dates::today_ist())
        .is_none());
}

#[test]
fn newer_result_replaces_older() {
    let state = completed(watching(1), 1, 1, "first");
    let state = completed(state, 1, 2, "second");
    assert_eq!(first_name(&state), "second");
}

#[test]
fn late_older_result_is_ignored() {
    let state = started(started(watching(1), 1, 1), 1, 2);
    let state = completed(state, 1, 2, "newer");
    let state = completed(state, 1, 1, "older");
    assert_eq!(first_name(&state), "newer");
    assert!(!state.is_loading());
}

#[test]
fn result_from_previous_epoch_is_ignored() {
    let state = completed(watching(1), 1, 1, "district one");
    let state = DashboardReducer::reduce(
        state,
        DashboardIntent::Watch {
            district_id: 512,
            epoch: 2,
        },
    );
    let state = completed(state, 1, 2, "stale");
    assert!(state.centers().is_empty());
    assert_eq!(state.district_id(), Some(512));
}

#[test]
fn pending_count_drives_loading() {
    let state = started(watching(1), 1, 1);
    assert!(state.is_loading());
    let state = started(state, 1, 2);
    let state = completed(state, 1, 1, "a");
    assert!(state.is_loading());
    let state = completed(state, 1, 2, "b");
    assert!(!state.is_loading());
}

#[test]
fn failure_keeps_last_good_centers() {
    let state = completed(watching(1), 1, 1, "kept");
    let state = DashboardReducer::reduce(
        state,
        DashboardIntent::FetchFailed {
            ticket: FetchTicket { epoch: 1, seq: 2 },
            message: "Request timed out".to_string(),
        },
    );
    assert_eq!(first_name(&state), "kept");
    assert_eq!(state.last_error(), Some("Request timed out"));

    let state = completed(state, 1, 3, "recovered");
    assert_eq!(state.last_error(), None);
}

#[test]
fn stale_failure_does_not_mask_fresh_data() {
    let state = completed(watching(1), 1, 2, "fresh");
    let state = DashboardReducer::reduce(
        state,
        DashboardIntent::FetchFailed {
            ticket: FetchTicket { epoch: 1, seq: 1 },
            message: "late timeout".to_string(),
        },
    );
    assert_eq!(state.last_error(), None);
}

#[test]
fn unwatched_only_for_matching_epoch() {
    let state = watching(2);
    let state = DashboardReducer::reduce(state, DashboardIntent::Unwatched { epoch: 1 });
    assert!(state.is_watching());
    let state = DashboardReducer::reduce(state, DashboardIntent::Unwatched { epoch: 2 });
    assert_eq!(state, DashboardState::Idle);
}

#[test]
fn events_while_idle_are_ignored() {
    let state = completed(DashboardState::Idle, 1, 1, "ghost");
    assert_eq!(state, DashboardState::Idle);
}

#[test]
fn empty_result_projects_to_no_availability() {
    let state = DashboardReducer::reduce(
        watching(1),
        DashboardIntent::FetchCompleted {
            ticket: FetchTicket { epoch: 1, seq: 1 },
            centers: Vec::new(),
            fetched_at: dates::now_ist(),
        },
    );
    let today = NaiveDate::from_ymd_opt(2021, 5, 5).unwrap();
    let projection = state.projection(
        &EligibilityRule {
            age: AgeBracket::Any,
            ..EligibilityRule::default()
        },
        today,
    );
    assert_eq!(projection, Some(Projection::NoAvailability));
}
