use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use tokio::task::JoinHandle;

use crate::app::{handle_input, App};
use crate::config::AppConfig;
use crate::data::topology::load_topology;
use crate::data::{loader, DataError, StateOutline};
use crate::domain::{MetricMode, StationClass, StationRecord};
use crate::scale::metric_extent;
use crate::ui;

/// The two one-shot resource loads, spawned at startup and polled by the
/// event loop. No retry, no cancellation; a failure is logged and the
/// map stays in its pre-data state.
pub struct LoadTasks {
    stations: Option<JoinHandle<Result<Vec<StationRecord>, DataError>>>,
    topology: Option<JoinHandle<Result<Vec<StateOutline>, DataError>>>,
}

impl LoadTasks {
    pub fn spawn(config: &AppConfig) -> Self {
        let data_path = config.data_path.clone();
        let topology_path = config.topology_path.clone();
        Self {
            stations: Some(tokio::task::spawn_blocking(move || {
                loader::load_stations(&data_path)
            })),
            topology: Some(tokio::task::spawn_blocking(move || {
                load_topology(&topology_path)
            })),
        }
    }

    async fn poll(&mut self, app: &mut App) {
        if let Some(handle) = self.stations.take_if(|h| h.is_finished()) {
            match handle.await {
                Ok(Ok(records)) => app.ingest_stations(records),
                Ok(Err(e)) => {
                    eprintln!("[DEBUG] station load error: {e}");
                    app.station_load_failed(&e.to_string());
                }
                Err(e) => {
                    eprintln!("[DEBUG] station load task failed: {e}");
                    app.station_load_failed("load task failed");
                }
            }
        }
        if let Some(handle) = self.topology.take_if(|h| h.is_finished()) {
            match handle.await {
                Ok(Ok(outlines)) => app.ingest_topology(outlines),
                Ok(Err(e)) => {
                    eprintln!("[DEBUG] topology load error: {e}");
                    app.topology_load_failed(&e.to_string());
                }
                Err(e) => {
                    eprintln!("[DEBUG] topology load task failed: {e}");
                    app.topology_load_failed("load task failed");
                }
            }
        }
    }
}

/// Run the main application event loop.
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    mut tasks: LoadTasks,
) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        app.update();
        tasks.poll(app).await;

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events
                }
            }
        }
    }
    Ok(())
}

/// Run without a terminal: load the dataset, print stats, exit. Unlike
/// the interactive path, a load failure here is a hard error so scripts
/// can see it.
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    let data_path = app.config.data_path.clone();
    let records = tokio::task::spawn_blocking(move || loader::load_stations(&data_path))
        .await?
        .map_err(|e| eyre!("Failed to load station data: {e}"))?;
    app.ingest_stations(records);

    let topology_path = app.config.topology_path.clone();
    match tokio::task::spawn_blocking(move || load_topology(&topology_path)).await? {
        Ok(outlines) => app.ingest_topology(outlines),
        Err(e) => eprintln!("Warning: topology unavailable: {e}"),
    }

    let stats = build_headless_stats(app);
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        render_headless_stats(&stats);
    }
    Ok(())
}

fn render_headless_stats(stats: &HeadlessStats) {
    println!("\nStation Map Stats");
    println!("==================");
    println!("Total stations: {}", stats.total_stations);
    println!("Participating: {}", stats.participants);
    println!("Non-participating: {}", stats.non_participants);
    println!("Missing location: {}", stats.missing_location);
    println!("State outlines: {}", stats.states);
    println!(
        "CUME extent: {} - {}",
        stats.cume_extent.0, stats.cume_extent.1
    );
    println!("TSR extent: {} - {}", stats.tsr_extent.0, stats.tsr_extent.1);

    println!("\nLargest stations by CUME:");
    for station in &stats.largest_stations {
        println!(
            "- {} | {} | CUME {}",
            station.name, station.class, station.cume
        );
    }
}

fn build_headless_stats(app: &App) -> HeadlessStats {
    let participants = app
        .records
        .iter()
        .filter(|r| r.class() == StationClass::Participant)
        .count();
    let missing_location = app.records.iter().filter(|r| !r.has_location()).count();

    let mut by_cume: Vec<&StationRecord> = app.records.iter().collect();
    by_cume.sort_by(|a, b| b.cume.cmp(&a.cume));
    let largest_stations = by_cume
        .into_iter()
        .take(5)
        .map(|record| HeadlessStation {
            name: record.name.clone(),
            class: record.class().slug().to_string(),
            cume: record.cume,
        })
        .collect();

    HeadlessStats {
        total_stations: app.records.len(),
        participants,
        non_participants: app.records.len() - participants,
        missing_location,
        states: app.outlines.len(),
        cume_extent: metric_extent(&app.records, MetricMode::Cume),
        tsr_extent: metric_extent(&app.records, MetricMode::Tsr),
        largest_stations,
    }
}

#[derive(serde::Serialize)]
struct HeadlessStats {
    total_stations: usize,
    participants: usize,
    non_participants: usize,
    missing_location: usize,
    states: usize,
    cume_extent: (f64, f64),
    tsr_extent: (f64, f64),
    largest_stations: Vec<HeadlessStation>,
}

#[derive(serde::Serialize)]
struct HeadlessStation {
    name: String,
    class: String,
    cume: u64,
}
