use crate::config::AppConfig;
use crate::data::StateOutline;
use crate::domain::{FilterMode, MetricMode, StationRecord};
use crate::projection::AlbersUsa;
use crate::render::animation::TOOLTIP_FADE_MS;
use crate::render::markers::{apply_named_filter, build_markers, retarget_markers};
use crate::render::{Marker, Viewport};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::time::Instant;
use throbber_widgets_tui::ThrobberState;

/// Intro text shown before any filter has been selected. The `All` mode
/// restores exactly this string.
pub const INTRO_HELP_TEXT: &str = "Each circle is a public radio station, sized by its \
    cumulative weekly audience (CUME). Pick a filter to compare participating and \
    non-participating stations, or press t to size circles by TSR instead.";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AppScreen {
    Map,
    Search,
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub config: AppConfig,
    pub screen: AppScreen,
    pub show_help: bool,

    pub records: Vec<StationRecord>,
    pub outlines: Vec<StateOutline>,
    pub markers: Vec<Marker>,
    pub projection: AlbersUsa,
    pub viewport: Viewport,

    pub metric_mode: MetricMode,
    pub filter_mode: FilterMode,
    pub original_help_text: String,
    pub help_text: String,

    /// Index into `records`/`markers` of the focused station, the
    /// keyboard equivalent of a hover.
    pub focused: Option<usize>,
    pub focus_started: Option<Instant>,
    /// Marker whose tooltip is still fading out after a focus clear.
    focus_fading: Option<(usize, Instant)>,

    pub loading_stations: bool,
    pub loading_topology: bool,
    pub status_message: String,

    /// Epoch the current radius transition is measured from.
    pub render_epoch: Instant,
    pub throbber: ThrobberState,

    pub search_input: String,
    pub search_results: Vec<usize>,
    pub search_selection: usize,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let projection = AlbersUsa::new(config.projection_scale, config.translate);
        let viewport = Viewport::new(config.width, config.height);
        Self {
            running: true,
            config,
            screen: AppScreen::Map,
            show_help: false,
            records: Vec::new(),
            outlines: Vec::new(),
            markers: Vec::new(),
            projection,
            viewport,
            metric_mode: MetricMode::default(),
            filter_mode: FilterMode::default(),
            original_help_text: INTRO_HELP_TEXT.to_string(),
            help_text: INTRO_HELP_TEXT.to_string(),
            focused: None,
            focus_started: None,
            focus_fading: None,
            loading_stations: true,
            loading_topology: true,
            status_message: String::new(),
            render_epoch: Instant::now(),
            throbber: ThrobberState::default(),
            search_input: String::new(),
            search_results: Vec::new(),
            search_selection: 0,
        }
    }

    /// Per-frame bookkeeping.
    pub fn update(&mut self) {
        if self.loading_stations || self.loading_topology {
            self.throbber.calc_next();
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.render_epoch.elapsed().as_secs_f64() * 1000.0
    }

    /// Dataset arrival: build the marker set and kick off the initial
    /// grow transition with the default metric.
    pub fn ingest_stations(&mut self, records: Vec<StationRecord>) {
        self.markers = build_markers(&records, &self.projection, self.metric_mode);
        self.records = records;
        self.loading_stations = false;
        self.render_epoch = Instant::now();
        self.status_message = format!("Loaded {} stations", self.records.len());
    }

    pub fn ingest_topology(&mut self, outlines: Vec<StateOutline>) {
        self.outlines = outlines;
        self.loading_topology = false;
    }

    /// A failed load is logged and leaves the map in its pre-data state.
    pub fn station_load_failed(&mut self, reason: &str) {
        self.loading_stations = false;
        self.status_message = format!("Station data unavailable: {reason}");
    }

    pub fn topology_load_failed(&mut self, reason: &str) {
        self.loading_topology = false;
        self.status_message = format!("Topology unavailable: {reason}");
    }

    pub fn set_metric(&mut self, mode: MetricMode) {
        if mode == self.metric_mode {
            return;
        }
        let elapsed = self.elapsed_ms();
        self.metric_mode = mode;
        retarget_markers(&mut self.markers, &self.records, mode, elapsed);
        self.render_epoch = Instant::now();
    }

    pub fn toggle_metric(&mut self) {
        self.set_metric(self.metric_mode.toggled());
    }

    /// Replay the staggered grow transition from radius zero.
    pub fn replay_animation(&mut self) {
        for marker in &mut self.markers {
            marker.radius_from = 0.0;
        }
        self.render_epoch = Instant::now();
    }

    /// Filter transition: one mode active, help text swapped, `All`
    /// restoring the text captured at startup.
    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter_mode = mode;
        self.help_text = mode
            .help_text()
            .map_or_else(|| self.original_help_text.clone(), ToString::to_string);
        if let Some(index) = self.focused {
            if !self.marker_is_visible(index) {
                // No lingering tooltip for a marker the filter just hid.
                self.clear_focus();
                self.focus_fading = None;
            }
        }
    }

    /// Secondary named-filter path (see `render::markers`).
    pub fn apply_named_filter(&mut self, name: &str) {
        apply_named_filter(&mut self.markers, name);
    }

    fn marker_is_visible(&self, index: usize) -> bool {
        self.markers
            .get(index)
            .is_some_and(|m| !m.hidden && self.filter_mode.shows(m.class))
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        (0..self.markers.len())
            .filter(|&i| self.marker_is_visible(i))
            .collect()
    }

    pub fn focus(&mut self, index: usize) {
        if self.marker_is_visible(index) {
            self.focused = Some(index);
            self.focus_started = Some(Instant::now());
            self.focus_fading = None;
        }
    }

    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(-1);
    }

    fn step_focus(&mut self, direction: isize) {
        let visible = self.visible_indices();
        if visible.is_empty() {
            return;
        }
        let next = match self.focused.and_then(|f| visible.iter().position(|&i| i == f)) {
            Some(position) => {
                let len = visible.len() as isize;
                let stepped = (position as isize + direction).rem_euclid(len);
                visible[usize::try_from(stepped).unwrap_or(0)]
            }
            None => visible[0],
        };
        self.focus(next);
    }

    /// Drop the focus; the tooltip keeps fading out for a short while.
    pub fn clear_focus(&mut self) {
        if let Some(index) = self.focused.take() {
            self.focus_fading = Some((index, Instant::now()));
        }
        self.focus_started = None;
    }

    pub fn focused_station(&self) -> Option<(&StationRecord, &Marker)> {
        let index = self.focused?;
        Some((self.records.get(index)?, self.markers.get(index)?))
    }

    /// Station whose tooltip is still fading out, with the milliseconds
    /// since its focus was cleared. `None` once the fade has run out.
    pub fn fading_station(&self) -> Option<(&StationRecord, &Marker, f64)> {
        let (index, cleared) = self.focus_fading?;
        let elapsed = cleared.elapsed().as_secs_f64() * 1000.0;
        if elapsed >= TOOLTIP_FADE_MS {
            return None;
        }
        Some((self.records.get(index)?, self.markers.get(index)?, elapsed))
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn pan_view(&mut self, dx: f64, dy: f64) {
        self.viewport.pan(dx, dy);
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }

    pub fn open_search(&mut self) {
        self.screen = AppScreen::Search;
        self.search_input.clear();
        self.search_results = self.visible_indices();
        self.search_selection = 0;
    }

    pub fn close_search(&mut self) {
        self.screen = AppScreen::Map;
    }

    /// Fuzzy-match station names against the search input, best first.
    pub fn run_search(&mut self) {
        if self.search_input.is_empty() {
            self.search_results = self.visible_indices();
            self.search_selection = 0;
            return;
        }
        let matcher = SkimMatcherV2::default();
        let mut scored: Vec<(i64, usize)> = self
            .visible_indices()
            .into_iter()
            .filter_map(|i| {
                matcher
                    .fuzzy_match(&self.records[i].name, &self.search_input)
                    .map(|score| (score, i))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));
        self.search_results = scored.into_iter().map(|(_, i)| i).collect();
        self.search_selection = 0;
    }

    /// Jump to the selected search hit, back on the map screen.
    pub fn confirm_search(&mut self) {
        if let Some(&index) = self.search_results.get(self.search_selection) {
            self.focus(index);
        }
        self.close_search();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, newscasts: u64) -> StationRecord {
        StationRecord {
            name: name.to_string(),
            logo: String::new(),
            longitude: -100.0,
            latitude: 40.0,
            cume: 1000,
            tsr: 10.0,
            newscasts,
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new(AppConfig::from_env());
        app.ingest_stations(vec![
            record("KQED", 5),
            record("WNYC", 0),
            record("KCRW", 2),
        ]);
        app
    }

    #[test]
    fn filter_transitions_swap_help_text_and_all_restores_it() {
        let mut app = loaded_app();
        let original = app.help_text.clone();
        assert_eq!(original, INTRO_HELP_TEXT);

        app.set_filter(FilterMode::Participating);
        assert_eq!(app.filter_mode, FilterMode::Participating);
        assert_ne!(app.help_text, original);

        app.set_filter(FilterMode::Comparison);
        assert_ne!(app.help_text, original);

        app.set_filter(FilterMode::All);
        assert_eq!(app.help_text, original);
    }

    #[test]
    fn filtering_hides_the_other_class() {
        let mut app = loaded_app();
        app.set_filter(FilterMode::Participating);
        assert_eq!(app.visible_indices(), vec![0, 2]);
        app.set_filter(FilterMode::NonParticipating);
        assert_eq!(app.visible_indices(), vec![1]);
        app.set_filter(FilterMode::Comparison);
        assert_eq!(app.visible_indices(), vec![0, 1, 2]);
    }

    #[test]
    fn focus_is_cleared_when_its_marker_is_filtered_out() {
        let mut app = loaded_app();
        app.focus(1);
        assert_eq!(app.focused, Some(1));
        app.set_filter(FilterMode::Participating);
        assert_eq!(app.focused, None);
        // The tooltip does not linger over a marker the filter hid.
        assert!(app.fading_station().is_none());
    }

    #[test]
    fn cleared_focus_leaves_a_fading_tooltip() {
        let mut app = loaded_app();
        app.focus(1);
        app.clear_focus();
        assert_eq!(app.focused, None);
        let (record, _, elapsed) = app.fading_station().expect("fade just started");
        assert_eq!(record.name, "WNYC");
        assert!(elapsed < TOOLTIP_FADE_MS);
    }

    #[test]
    fn refocusing_cancels_the_fade_out() {
        let mut app = loaded_app();
        app.focus(1);
        app.clear_focus();
        app.focus(0);
        assert!(app.fading_station().is_none());
        assert_eq!(app.focused, Some(0));
    }

    #[test]
    fn focus_cycles_through_visible_markers_only() {
        let mut app = loaded_app();
        app.set_filter(FilterMode::Participating);
        app.focus_next();
        assert_eq!(app.focused, Some(0));
        app.focus_next();
        assert_eq!(app.focused, Some(2));
        app.focus_next();
        assert_eq!(app.focused, Some(0));
        app.focus_prev();
        assert_eq!(app.focused, Some(2));
    }

    #[test]
    fn metric_switch_keeps_marker_identity() {
        let mut app = loaded_app();
        let positions: Vec<(f64, f64)> = app.markers.iter().map(|m| (m.x, m.y)).collect();
        app.toggle_metric();
        assert_eq!(app.metric_mode, MetricMode::Tsr);
        let after: Vec<(f64, f64)> = app.markers.iter().map(|m| (m.x, m.y)).collect();
        assert_eq!(positions, after);
        assert_eq!(app.markers.len(), app.records.len());
    }

    #[test]
    fn named_filter_gap_hides_everything_except_all() {
        let mut app = loaded_app();
        app.apply_named_filter("participating");
        assert!(app.visible_indices().is_empty());
        app.apply_named_filter("all");
        assert_eq!(app.visible_indices().len(), 3);
    }

    #[test]
    fn search_narrows_and_confirm_focuses() {
        let mut app = loaded_app();
        app.open_search();
        assert_eq!(app.screen, AppScreen::Search);
        app.search_input.push_str("wnyc");
        app.run_search();
        assert_eq!(app.search_results, vec![1]);
        app.confirm_search();
        assert_eq!(app.screen, AppScreen::Map);
        assert_eq!(app.focused, Some(1));
    }

    #[test]
    fn view_controls_drive_the_viewport() {
        let mut app = loaded_app();
        assert!((app.viewport.zoom() - 1.0).abs() < f64::EPSILON);
        app.zoom_in();
        assert!(app.viewport.zoom() > 1.0);
        app.pan_view(1.0, 0.0);
        assert!(app.viewport.x_bounds()[0] > 0.0);
        app.reset_view();
        assert_eq!(app.viewport.x_bounds(), [0.0, app.config.width]);
    }

    #[test]
    fn load_failure_leaves_the_map_empty_but_reported() {
        let mut app = App::new(AppConfig::from_env());
        app.station_load_failed("boom");
        assert!(app.markers.is_empty());
        assert!(!app.loading_stations);
        assert!(app.status_message.contains("boom"));
    }
}
