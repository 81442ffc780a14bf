use crate::domain::{FilterMode, MetricMode};
use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "stationmap", version, about = "US station map TUI")]
pub struct CliArgs {
    /// Print dataset stats and exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless stats as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the station CSV path
    #[arg(long, value_name = "PATH")]
    pub data: Option<String>,

    /// Override the state topology GeoJSON path
    #[arg(long, value_name = "PATH")]
    pub topology: Option<String>,

    /// Override the logo asset directory
    #[arg(long = "logo-dir", value_name = "PATH")]
    pub logo_dir: Option<String>,

    /// Start with a filter mode (all, participating, nonparticipating, comparison)
    #[arg(long, value_name = "MODE")]
    pub filter: Option<String>,

    /// Start with a sizing metric (cume, tsr)
    #[arg(long, value_name = "METRIC")]
    pub metric: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(path) = &self.data {
            std::env::set_var("STATION_DATA", path);
        }
        if let Some(path) = &self.topology {
            std::env::set_var("STATION_TOPOLOGY", path);
        }
        if let Some(dir) = &self.logo_dir {
            std::env::set_var("STATION_LOGO_DIR", dir);
        }
        if self.debug {
            std::env::set_var("DEBUG", "1");
        }
    }

    /// Resolve the optional startup mode flags, rejecting unknown names.
    pub fn initial_modes(&self) -> Result<(Option<FilterMode>, Option<MetricMode>)> {
        let filter = self
            .filter
            .as_deref()
            .map(|raw| FilterMode::parse(raw).ok_or_else(|| eyre!("unknown filter mode: {raw}")))
            .transpose()?;
        let metric = self
            .metric
            .as_deref()
            .map(|raw| MetricMode::parse(raw).ok_or_else(|| eyre!("unknown metric: {raw}")))
            .transpose()?;
        Ok((filter, metric))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_flags_parse_into_typed_modes() {
        let args = CliArgs::parse_from([
            "stationmap",
            "--filter",
            "participating",
            "--metric",
            "TSR",
        ]);
        let (filter, metric) = args.initial_modes().unwrap();
        assert_eq!(filter, Some(FilterMode::Participating));
        assert_eq!(metric, Some(MetricMode::Tsr));
    }

    #[test]
    fn missing_mode_flags_stay_unset() {
        let args = CliArgs::parse_from(["stationmap"]);
        let (filter, metric) = args.initial_modes().unwrap();
        assert!(filter.is_none());
        assert!(metric.is_none());
    }

    #[test]
    fn unknown_mode_names_are_rejected() {
        let args = CliArgs::parse_from(["stationmap", "--filter", "everything"]);
        assert!(args.initial_modes().is_err());
        let args = CliArgs::parse_from(["stationmap", "--metric", "audience"]);
        assert!(args.initial_modes().is_err());
    }
}
