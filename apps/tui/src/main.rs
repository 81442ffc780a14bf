use clap::Parser;
use color_eyre::Result;
use stationmap_tui::app::App;
use stationmap_tui::cli::CliArgs;
use stationmap_tui::config::AppConfig;
use stationmap_tui::event::{self, LoadTasks};
use stationmap_tui::terminal;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let (filter, metric) = args.initial_modes()?;

    let config = AppConfig::from_env();
    let mut app = App::new(config);
    if let Some(mode) = filter {
        app.set_filter(mode);
    }
    if let Some(mode) = metric {
        app.set_metric(mode);
    }

    // Check if we're running in a terminal
    if args.headless || !is_terminal() {
        return event::run_headless(&mut app, args.json).await;
    }

    // Kick off the one-shot data loads; the event loop picks them up.
    let tasks = LoadTasks::spawn(&app.config);

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app, tasks).await;
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
