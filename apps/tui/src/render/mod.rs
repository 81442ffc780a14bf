// Headless rendering model: markers and their grow animation, decoupled
// from the canvas widget that draws them.

pub mod animation;
pub mod markers;
pub mod viewport;

pub use markers::Marker;
pub use viewport::Viewport;
