use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

/// Projected plane dimensions the original dataset was tuned for.
pub const DEFAULT_CANVAS_WIDTH: f64 = 1200.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 900.0;

/// Base projection scale, enlarged by a fixed factor so the continental
/// US fills the canvas.
pub const BASE_PROJECTION_SCALE: f64 = 1000.0;
pub const MAP_SCALE_FACTOR: f64 = 1.5;

/// Fallback image path used when a record's logo field is empty.
pub const DEFAULT_LOGO: &str = "station_logos/a-default.gif";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub topology_path: PathBuf,
    /// Directory logo paths in the dataset are relative to.
    pub logo_dir: PathBuf,
    pub default_logo: String,
    pub width: f64,
    pub height: f64,
    pub projection_scale: f64,
    pub translate: (f64, f64),
}

impl AppConfig {
    /// Build the configuration from environment variables (and a `.env`
    /// file when present), falling back to the fixed relative paths the
    /// app ships with.
    pub fn from_env() -> Self {
        dotenv().ok();

        let data_path = env::var("STATION_DATA")
            .map_or_else(|_| PathBuf::from("data/stations.csv"), PathBuf::from);
        let topology_path = env::var("STATION_TOPOLOGY")
            .map_or_else(|_| PathBuf::from("data/us-states.json"), PathBuf::from);
        let logo_dir =
            env::var("STATION_LOGO_DIR").map_or_else(|_| PathBuf::from("data"), PathBuf::from);

        let scale = BASE_PROJECTION_SCALE * MAP_SCALE_FACTOR;
        Self {
            data_path,
            topology_path,
            logo_dir,
            default_logo: DEFAULT_LOGO.to_string(),
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            projection_scale: scale,
            translate: (400.0 * MAP_SCALE_FACTOR, 250.0 * MAP_SCALE_FACTOR),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
