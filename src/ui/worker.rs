use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::CowinClient;
use crate::refresh::{RefreshLoop, RefreshSettings, RefreshSink};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::UiCommand;
use crate::ui::events::AppEvent;

/// Serves [`UiCommand`]s on the runtime and answers with [`AppEvent`]s.
///
/// Owns the refresh loop; when the command channel closes or shutdown is
/// signalled the loop is dropped, which cancels its timer.
pub struct Worker {
    client: Arc<CowinClient>,
    refresh: RefreshLoop<CowinClient>,
    events: Sender<AppEvent>,
}

impl Worker {
    pub fn new(client: Arc<CowinClient>, settings: RefreshSettings, events: Sender<AppEvent>) -> Self {
        let sink_tx = events.clone();
        let sink: RefreshSink = Arc::new(move |event| {
            if sink_tx.send(AppEvent::Refresh(event)).is_err() {
                tracing::trace!("Refresh event dropped (UI gone)");
            }
        });
        let refresh = RefreshLoop::new(Arc::clone(&client), settings, sink);
        Self {
            client,
            refresh,
            events,
        }
    }

    pub async fn run(mut self, mut commands: mpsc::Receiver<UiCommand>, shutdown: ShutdownHandle) {
        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },
                _ = shutdown.wait() => break,
            }
        }
        self.refresh.stop();
        tracing::debug!("Worker stopped");
    }

    fn handle(&mut self, command: UiCommand) {
        match command {
            UiCommand::LoadStates => {
                let client = Arc::clone(&self.client);
                let events = self.events.clone();
                tokio::spawn(async move {
                    let event = match client.states().await {
                        Ok(states) => AppEvent::StatesLoaded(states),
                        Err(err) => {
                            tracing::warn!(error = %err, "Loading states failed");
                            AppEvent::LocationError {
                                state_id: None,
                                message: err.user_message().to_string(),
                            }
                        }
                    };
                    let _ = events.send(event);
                });
            }
            UiCommand::LoadDistricts { state_id } => {
                let client = Arc::clone(&self.client);
                let events = self.events.clone();
                tokio::spawn(async move {
                    let event = match client.districts(state_id).await {
                        Ok(districts) => AppEvent::DistrictsLoaded {
                            state_id,
                            districts,
                        },
                        Err(err) => {
                            tracing::warn!(state_id, error = %err, "Loading districts failed");
                            AppEvent::LocationError {
                                state_id: Some(state_id),
                                message: err.user_message().to_string(),
                            }
                        }
                    };
                    let _ = events.send(event);
                });
            }
            UiCommand::Watch { district_id } => {
                self.refresh.start(district_id);
            }
            UiCommand::Unwatch => self.refresh.stop(),
            UiCommand::RefreshNow => {
                if !self.refresh.refresh_now() {
                    tracing::debug!("Refresh requested with no district selected");
                }
            }
        }
    }
}
