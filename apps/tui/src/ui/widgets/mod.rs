pub mod map_canvas;
pub mod popup;
pub mod sidebar;
pub mod tooltip;
