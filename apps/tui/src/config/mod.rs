mod config;

pub use config::{
    AppConfig, BASE_PROJECTION_SCALE, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_LOGO,
    MAP_SCALE_FACTOR,
};
