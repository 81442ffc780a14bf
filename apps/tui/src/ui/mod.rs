// UI module: screen router and widgets.

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &mut App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Map => screens::map::render_map_screen(app, f),
        AppScreen::Search => screens::search::render_search_screen(app, f),
    }
}
