// App module: state and key handling for the map and search screens.

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, AppScreen};
