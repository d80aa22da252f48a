use crate::ui::dashboard::intent::DashboardIntent;
use crate::ui::dashboard::state::DashboardState;
use crate::ui::mvi::Reducer;

/// Applies refresh loop results to the dashboard.
///
/// Results are accepted only for the current epoch and only when newer than
/// what is already shown, so a slow response cannot overwrite a fresher one.
pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Intent = DashboardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DashboardIntent::Watch { district_id, epoch } => DashboardState::Watching {
                district_id,
                epoch,
                applied_seq: 0,
                pending: 0,
                centers: Vec::new(),
                last_updated: None,
                last_error: None,
            },
            DashboardIntent::Unwatched { epoch: stopped } => match state {
                DashboardState::Watching { epoch, .. } if epoch == stopped => {
                    DashboardState::Idle
                }
                other => other,
            },
            DashboardIntent::Clear => DashboardState::Idle,
            DashboardIntent::FetchStarted { ticket } => match state {
                DashboardState::Watching {
                    district_id,
                    epoch,
                    applied_seq,
                    pending,
                    centers,
                    last_updated,
                    last_error,
                } if ticket.epoch == epoch => DashboardState::Watching {
                    district_id,
                    epoch,
                    applied_seq,
                    pending: pending + 1,
                    centers,
                    last_updated,
                    last_error,
                },
                other => other,
            },
            DashboardIntent::FetchCompleted {
                ticket,
                centers: fetched,
                fetched_at,
            } => match state {
                DashboardState::Watching {
                    district_id,
                    epoch,
                    applied_seq,
                    pending,
                    centers,
                    last_updated,
                    last_error,
                } if ticket.epoch == epoch => {
                    let pending = pending.saturating_sub(1);
                    if ticket.is_fresh(epoch, applied_seq) {
                        DashboardState::Watching {
                            district_id,
                            epoch,
                            applied_seq: ticket.seq,
                            pending,
                            centers: fetched,
                            last_updated: Some(fetched_at),
                            last_error: None,
                        }
                    } else {
                        // Out-of-order response: only settle the pending count
                        DashboardState::Watching {
                            district_id,
                            epoch,
                            applied_seq,
                            pending,
                            centers,
                            last_updated,
                            last_error,
                        }
                    }
                }
                other => other,
            },
            DashboardIntent::FetchFailed { ticket, message } => match state {
                DashboardState::Watching {
                    district_id,
                    epoch,
                    applied_seq,
                    pending,
                    centers,
                    last_updated,
                    last_error,
                } if ticket.epoch == epoch => DashboardState::Watching {
                    district_id,
                    epoch,
                    applied_seq,
                    pending: pending.saturating_sub(1),
                    centers,
                    last_updated,
                    last_error: if ticket.is_fresh(epoch, applied_seq) {
                        Some(message)
                    } else {
                        last_error
                    },
                },
                other => other,
            },
        }
    }
}
