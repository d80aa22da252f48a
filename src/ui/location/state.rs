use crate::api::{District, State};
use crate::ui::mvi::UiState;

/// Which list receives Up/Down/Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    States,
    Districts,
}

/// State and district pickers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationState {
    pub states: Vec<State>,
    pub districts: Vec<District>,
    pub focus: Pane,
    pub state_cursor: usize,
    pub district_cursor: usize,
    pub selected_state: Option<u32>,
    pub selected_district: Option<u32>,
    pub states_loading: bool,
    /// State whose districts request is outstanding.
    pub districts_loading: Option<u32>,
    pub last_error: Option<String>,
}

impl UiState for LocationState {}

impl LocationState {
    pub fn is_loading(&self) -> bool {
        self.states_loading || self.districts_loading.is_some()
    }

    pub fn focused_state(&self) -> Option<&State> {
        self.states.get(self.state_cursor)
    }

    pub fn focused_district(&self) -> Option<&District> {
        self.districts.get(self.district_cursor)
    }

    pub fn selected_state_name(&self) -> Option<&str> {
        let id = self.selected_state?;
        self.states
            .iter()
            .find(|state| state.state_id == id)
            .map(|state| state.state_name.as_str())
    }

    pub fn selected_district_name(&self) -> Option<&str> {
        let id = self.selected_district?;
        self.districts
            .iter()
            .find(|district| district.district_id == id)
            .map(|district| district.district_name.as_str())
    }
}
