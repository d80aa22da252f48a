use crate::api::{District, State};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum LocationIntent {
    /// States list requested from upstream.
    LoadStates,
    StatesLoaded { states: Vec<State> },
    /// Results for a state that is no longer selected are ignored.
    DistrictsLoaded {
        state_id: u32,
        districts: Vec<District>,
    },
    /// `state_id` is set for a districts request; failures for a state
    /// that is no longer selected are ignored.
    LoadFailed {
        state_id: Option<u32>,
        message: String,
    },
    /// Choosing a state clears the district and its list.
    SelectState { state_id: u32 },
    SelectDistrict { district_id: u32 },
    ClearDistrict,
    MoveUp,
    MoveDown,
    FocusNext,
}

impl Intent for LocationIntent {}
