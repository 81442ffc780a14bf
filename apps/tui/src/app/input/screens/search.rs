use crate::app::state::App;
use crossterm::event::KeyCode;

pub fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.close_search(),
        KeyCode::Enter => app.confirm_search(),
        KeyCode::Up => {
            if app.search_selection > 0 {
                app.search_selection -= 1;
            }
        }
        KeyCode::Down => {
            if app.search_selection + 1 < app.search_results.len() {
                app.search_selection += 1;
            }
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.run_search();
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.run_search();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::AppScreen;
    use crate::config::AppConfig;
    use crate::domain::StationRecord;

    fn record(name: &str) -> StationRecord {
        StationRecord {
            name: name.to_string(),
            logo: String::new(),
            longitude: -100.0,
            latitude: 40.0,
            cume: 100,
            tsr: 1.0,
            newscasts: 1,
        }
    }

    #[test]
    fn typing_filters_and_enter_jumps_to_the_station() {
        let mut app = App::new(AppConfig::from_env());
        app.ingest_stations(vec![record("KQED"), record("WNYC"), record("KCRW")]);
        app.open_search();

        for c in "kcrw".chars() {
            handle_search_input(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.search_results, vec![2]);

        handle_search_input(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, AppScreen::Map);
        assert_eq!(app.focused, Some(2));
    }

    #[test]
    fn escape_returns_to_the_map_without_focusing() {
        let mut app = App::new(AppConfig::from_env());
        app.ingest_stations(vec![record("KQED")]);
        app.open_search();
        handle_search_input(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, AppScreen::Map);
        assert_eq!(app.focused, None);
    }
}
