use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use slotwatch::api::CowinClient;
use slotwatch::availability::{dates, project, render_text};
use slotwatch::cli::Cli;
use slotwatch::config::Config;
use slotwatch::logging::{default_log_path, init_tracing, LogTarget};
use slotwatch::refresh::RefreshSettings;
use slotwatch::shutdown::ShutdownHandle;
use slotwatch::ui::runtime::{run as run_tui, TICK_RATE};
use slotwatch::ui::{App, AppEvent, EventHandler, Worker};

const COMMAND_BUFFER: usize = 32;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply(&mut config);
    config.validate()?;

    if cli.once {
        run_once(&cli, &config)
    } else {
        run_dashboard(&cli, config)
    }
}

/// Fetch a single district once and print the grid to stdout.
fn run_once(cli: &Cli, config: &Config) -> Result<()> {
    init_tracing(&LogTarget::Stderr).context("Failed to initialise logging")?;
    let district_id = cli.district.context("--once needs --district")?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let client = CowinClient::new(&config.api)?;
    let today = dates::today_ist();
    let date = dates::target_date(today, config.refresh.date_offset_days);

    let centers = runtime.block_on(client.calendar_by_district(district_id, date))?;
    let projection = project(&centers, &config.eligibility, today);
    print!("{}", render_text(&projection, &config.eligibility));
    Ok(())
}

fn run_dashboard(cli: &Cli, config: Config) -> Result<()> {
    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_tracing(&LogTarget::File(log_path.clone()))
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;
    tracing::info!(base_url = %config.api.base_url, "Starting slotwatch");

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let shutdown = ShutdownHandle::new();
    let events = EventHandler::new(TICK_RATE, shutdown.clone());

    let client = Arc::new(CowinClient::new(&config.api)?);
    let worker = Worker::new(
        client,
        RefreshSettings::from(&config.refresh),
        events.sender(),
    );
    let (command_tx, command_rx) = tokio::sync::mpsc::channel(COMMAND_BUFFER);
    let worker_task = runtime.spawn(worker.run(command_rx, shutdown.clone()));

    let signal_tx = events.sender();
    runtime.spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = signal_tx.send(AppEvent::Shutdown);
        }
    });

    let mut app = App::new(config.eligibility.clone());
    app.set_command_sender(command_tx);
    app.start(cli.initial_selection());

    let result = run_tui(&mut app, &events);

    shutdown.signal();
    drop(app);
    if let Err(err) = runtime.block_on(worker_task) {
        tracing::warn!(error = %err, "Worker task ended abnormally");
    }
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!("Exited");

    result.context("Terminal error")
}
