use crate::availability::EligibilityRule;
use crate::ui::dashboard::{DashboardIntent, DashboardReducer, DashboardState};
use crate::ui::events::AppEvent;
use crate::ui::location::{LocationIntent, LocationReducer, LocationState, Pane};
use crate::ui::mvi::Reducer;
use tokio::sync::mpsc;

/// Requests from the UI thread to the worker on the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    LoadStates,
    LoadDistricts { state_id: u32 },
    Watch { district_id: u32 },
    Unwatch,
    RefreshNow,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Selection requested on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitialSelection {
    pub state_id: Option<u32>,
    pub district_id: Option<u32>,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// State and district pickers (MVI pattern).
    location: LocationState,
    /// Availability of the watched district (MVI pattern).
    dashboard: DashboardState,
    rule: EligibilityRule,
    commands: Option<UiCommandSender>,
    last_command_error: Option<String>,
}

impl App {
    pub fn new(rule: EligibilityRule) -> Self {
        Self {
            should_quit: false,
            location: LocationState::default(),
            dashboard: DashboardState::default(),
            rule,
            commands: None,
            last_command_error: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    /// Load states and apply any selection given on the command line.
    pub fn start(&mut self, initial: InitialSelection) {
        self.dispatch_location(LocationIntent::LoadStates);
        self.send_command(UiCommand::LoadStates);

        if let Some(state_id) = initial.state_id {
            self.select_state(state_id);
        }
        if let Some(district_id) = initial.district_id {
            self.select_district(district_id);
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn location(&self) -> &LocationState {
        &self.location
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn rule(&self) -> &EligibilityRule {
        &self.rule
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    /// Anything outstanding upstream.
    pub fn is_loading(&self) -> bool {
        self.location.is_loading() || self.dashboard.is_loading()
    }

    /// Apply a non-key event.
    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(_) | AppEvent::Tick | AppEvent::Resize(..) => {}
            AppEvent::StatesLoaded(states) => {
                self.dispatch_location(LocationIntent::StatesLoaded { states });
            }
            AppEvent::DistrictsLoaded {
                state_id,
                districts,
            } => {
                self.dispatch_location(LocationIntent::DistrictsLoaded {
                    state_id,
                    districts,
                });
            }
            AppEvent::LocationError { state_id, message } => {
                self.dispatch_location(LocationIntent::LoadFailed { state_id, message });
            }
            AppEvent::Refresh(event) => {
                self.dispatch_dashboard(DashboardIntent::from(event));
            }
            AppEvent::Shutdown => self.request_quit(),
        }
    }

    pub fn move_up(&mut self) {
        self.dispatch_location(LocationIntent::MoveUp);
    }

    pub fn move_down(&mut self) {
        self.dispatch_location(LocationIntent::MoveDown);
    }

    pub fn focus_next(&mut self) {
        self.dispatch_location(LocationIntent::FocusNext);
    }

    /// Select whatever the cursor is on in the focused list.
    pub fn activate_focused(&mut self) {
        match self.location.focus {
            Pane::States => {
                if let Some(state_id) = self.location.focused_state().map(|s| s.state_id) {
                    self.select_state(state_id);
                }
            }
            Pane::Districts => {
                if let Some(district_id) = self.location.focused_district().map(|d| d.district_id)
                {
                    self.select_district(district_id);
                }
            }
        }
    }

    /// Choosing a state drops the watched district and loads the new list.
    pub fn select_state(&mut self, state_id: u32) {
        if self.dashboard.is_watching() || self.location.selected_district.is_some() {
            self.dispatch_dashboard(DashboardIntent::Clear);
            self.send_command(UiCommand::Unwatch);
        }
        self.dispatch_location(LocationIntent::SelectState { state_id });
        self.send_command(UiCommand::LoadDistricts { state_id });
    }

    pub fn select_district(&mut self, district_id: u32) {
        self.dispatch_location(LocationIntent::SelectDistrict { district_id });
        self.send_command(UiCommand::Watch { district_id });
    }

    pub fn clear_district(&mut self) {
        if self.location.selected_district.is_none() && !self.dashboard.is_watching() {
            return;
        }
        self.dispatch_location(LocationIntent::ClearDistrict);
        self.dispatch_dashboard(DashboardIntent::Clear);
        self.send_command(UiCommand::Unwatch);
    }

    /// Fetch now instead of waiting for the next tick.
    pub fn request_refresh(&mut self) -> bool {
        if !self.dashboard.is_watching() {
            return false;
        }
        self.send_command(UiCommand::RefreshNow)
    }

    fn dispatch_location(&mut self, intent: LocationIntent) {
        dispatch_mvi!(self, location, LocationReducer, intent);
    }

    fn dispatch_dashboard(&mut self, intent: DashboardIntent) {
        dispatch_mvi!(self, dashboard, DashboardReducer, intent);
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.commands else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Worker command dropped");
                self.last_command_error = Some(format!("Worker unavailable: {}", err));
                false
            }
        }
    }
}
