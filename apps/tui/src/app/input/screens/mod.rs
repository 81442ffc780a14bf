pub mod map;
pub mod search;

use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    match app.screen {
        AppScreen::Map => map::handle_map_input(app, key),
        AppScreen::Search => search::handle_search_input(app, key),
    }
}
