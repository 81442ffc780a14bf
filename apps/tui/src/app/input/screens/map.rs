use crate::app::state::App;
use crate::domain::FilterMode;
use crossterm::event::KeyCode;

pub fn handle_map_input(app: &mut App, key: KeyCode) {
    if app.show_help {
        // Any key dismisses the help popup.
        app.show_help = false;
        return;
    }

    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('a' | '1') => app.set_filter(FilterMode::All),
        KeyCode::Char('p' | '2') => app.set_filter(FilterMode::Participating),
        KeyCode::Char('n' | '3') => app.set_filter(FilterMode::NonParticipating),
        KeyCode::Char('c' | '4') => app.set_filter(FilterMode::Comparison),
        KeyCode::Char('t') => app.toggle_metric(),
        KeyCode::Char('r') => app.replay_animation(),
        KeyCode::Char('+' | '=') => app.zoom_in(),
        KeyCode::Char('-') => app.zoom_out(),
        KeyCode::Char('h') => app.pan_view(-1.0, 0.0),
        KeyCode::Char('l') => app.pan_view(1.0, 0.0),
        KeyCode::Char('k') => app.pan_view(0.0, 1.0),
        KeyCode::Char('j') => app.pan_view(0.0, -1.0),
        KeyCode::Char('0') => app.reset_view(),
        KeyCode::Char('/') => app.open_search(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Tab | KeyCode::Right | KeyCode::Down => app.focus_next(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Up => app.focus_prev(),
        KeyCode::Esc => app.clear_focus(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::AppScreen;
    use crate::config::AppConfig;
    use crate::domain::{MetricMode, StationRecord};

    fn app_with_one_station() -> App {
        let mut app = App::new(AppConfig::from_env());
        app.ingest_stations(vec![StationRecord {
            name: "KUOW".to_string(),
            logo: String::new(),
            longitude: -122.3,
            latitude: 47.6,
            cume: 500_000,
            tsr: 12.0,
            newscasts: 4,
        }]);
        app
    }

    #[test]
    fn filter_keys_select_exactly_one_mode() {
        let mut app = app_with_one_station();
        handle_map_input(&mut app, KeyCode::Char('p'));
        assert_eq!(app.filter_mode, FilterMode::Participating);
        handle_map_input(&mut app, KeyCode::Char('n'));
        assert_eq!(app.filter_mode, FilterMode::NonParticipating);
        handle_map_input(&mut app, KeyCode::Char('a'));
        assert_eq!(app.filter_mode, FilterMode::All);
        handle_map_input(&mut app, KeyCode::Char('c'));
        assert_eq!(app.filter_mode, FilterMode::Comparison);
    }

    #[test]
    fn metric_key_toggles_between_cume_and_tsr() {
        let mut app = app_with_one_station();
        assert_eq!(app.metric_mode, MetricMode::Cume);
        handle_map_input(&mut app, KeyCode::Char('t'));
        assert_eq!(app.metric_mode, MetricMode::Tsr);
        handle_map_input(&mut app, KeyCode::Char('t'));
        assert_eq!(app.metric_mode, MetricMode::Cume);
    }

    #[test]
    fn tab_focuses_and_escape_clears() {
        let mut app = app_with_one_station();
        handle_map_input(&mut app, KeyCode::Tab);
        assert_eq!(app.focused, Some(0));
        handle_map_input(&mut app, KeyCode::Esc);
        assert_eq!(app.focused, None);
    }

    #[test]
    fn slash_opens_search_and_q_quits() {
        let mut app = app_with_one_station();
        handle_map_input(&mut app, KeyCode::Char('/'));
        assert_eq!(app.screen, AppScreen::Search);
        app.close_search();
        handle_map_input(&mut app, KeyCode::Char('q'));
        assert!(!app.running);
    }

    #[test]
    fn zoom_keys_adjust_the_viewport_and_zero_resets() {
        let mut app = app_with_one_station();
        handle_map_input(&mut app, KeyCode::Char('+'));
        handle_map_input(&mut app, KeyCode::Char('+'));
        assert!(app.viewport.zoom() > 1.0);
        handle_map_input(&mut app, KeyCode::Char('l'));
        assert!(app.viewport.x_bounds()[0] > 0.0);
        handle_map_input(&mut app, KeyCode::Char('-'));
        handle_map_input(&mut app, KeyCode::Char('0'));
        assert!((app.viewport.zoom() - 1.0).abs() < f64::EPSILON);
        assert_eq!(app.viewport.x_bounds(), [0.0, app.config.width]);
    }

    #[test]
    fn any_key_dismisses_the_help_popup() {
        let mut app = app_with_one_station();
        handle_map_input(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        handle_map_input(&mut app, KeyCode::Char('t'));
        assert!(!app.show_help);
        // The keypress was consumed by the popup, not the metric toggle.
        assert_eq!(app.metric_mode, MetricMode::Cume);
    }
}
