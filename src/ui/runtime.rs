use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the dashboard on the current thread until the user quits or `events`
/// reports shutdown.
pub fn run(app: &mut App, events: &EventHandler) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;

    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            break;
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(event) => app.on_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        // Drain whatever else queued up so one frame covers a burst
        while let Ok(event) = events.next(Duration::ZERO) {
            match event {
                AppEvent::Key(key) => handle_key(app, key),
                event => app.on_event(event),
            }
            if app.should_quit() {
                break;
            }
        }
    }

    guard.restore();
    Ok(())
}
