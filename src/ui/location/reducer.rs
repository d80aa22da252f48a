use crate::ui::location::intent::LocationIntent;
use crate::ui::location::state::{LocationState, Pane};
use crate::ui::mvi::Reducer;

pub struct LocationReducer;

impl Reducer for LocationReducer {
    type State = LocationState;
    type Intent = LocationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LocationIntent::LoadStates => LocationState {
                states_loading: true,
                last_error: None,
                ..state
            },
            LocationIntent::StatesLoaded { states } => {
                let state_cursor = state
                    .selected_state
                    .and_then(|id| states.iter().position(|s| s.state_id == id))
                    .unwrap_or(0);
                LocationState {
                    states,
                    state_cursor,
                    states_loading: false,
                    ..state
                }
            }
            LocationIntent::DistrictsLoaded {
                state_id,
                districts,
            } => {
                if state.selected_state != Some(state_id) {
                    // Answer for a state the user has since moved away from
                    return state;
                }
                let district_cursor = state
                    .selected_district
                    .and_then(|id| districts.iter().position(|d| d.district_id == id))
                    .unwrap_or(0);
                LocationState {
                    districts,
                    district_cursor,
                    districts_loading: None,
                    ..state
                }
            }
            LocationIntent::LoadFailed {
                state_id: None,
                message,
            } => LocationState {
                states_loading: false,
                last_error: Some(message),
                ..state
            },
            LocationIntent::LoadFailed {
                state_id: Some(state_id),
                message,
            } => {
                if state.selected_state != Some(state_id) {
                    return state;
                }
                LocationState {
                    districts_loading: None,
                    last_error: Some(message),
                    ..state
                }
            }
            LocationIntent::SelectState { state_id } => {
                let state_cursor = state
                    .states
                    .iter()
                    .position(|s| s.state_id == state_id)
                    .unwrap_or(state.state_cursor);
                LocationState {
                    districts: Vec::new(),
                    focus: Pane::Districts,
                    state_cursor,
                    district_cursor: 0,
                    selected_state: Some(state_id),
                    selected_district: None,
                    districts_loading: Some(state_id),
                    last_error: None,
                    ..state
                }
            }
            LocationIntent::SelectDistrict { district_id } => {
                let district_cursor = state
                    .districts
                    .iter()
                    .position(|d| d.district_id == district_id)
                    .unwrap_or(state.district_cursor);
                LocationState {
                    district_cursor,
                    selected_district: Some(district_id),
                    ..state
                }
            }
            LocationIntent::ClearDistrict => LocationState {
                selected_district: None,
                ..state
            },
            LocationIntent::MoveUp => move_cursor(state, -1),
            LocationIntent::MoveDown => move_cursor(state, 1),
            LocationIntent::FocusNext => {
                let focus = match state.focus {
                    Pane::States => Pane::Districts,
                    Pane::Districts => Pane::States,
                };
                LocationState { focus, ..state }
            }
        }
    }
}

/// Move the focused list's cursor by one, wrapping at both ends.
fn move_cursor(mut state: LocationState, delta: i32) -> LocationState {
    let (len, cursor) = match state.focus {
        Pane::States => (state.states.len(), &mut state.state_cursor),
        Pane::Districts => (state.districts.len(), &mut state.district_cursor),
    };
    if len == 0 {
        return state;
    }
    *cursor = if delta < 0 {
        if *cursor == 0 {
            len - 1
        } else {
            *cursor - 1
        }
    } else if *cursor + 1 >= len {
        0
    } else {
        *cursor + 1
    };
    state
}
