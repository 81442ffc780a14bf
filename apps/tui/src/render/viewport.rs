//! Map viewport: pan and zoom over the projected plane.
//!
//! The viewport owns the canvas bounds the map widget draws. Zoom is
//! bounded to a 1-10x extent and the visible window never leaves the
//! projected plane, so panning at full extent is a no-op.

pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 10.0;
const ZOOM_STEP: f64 = 1.25;
/// Fraction of the visible span covered by one pan step.
const PAN_FRACTION: f64 = 0.125;

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    width: f64,
    height: f64,
    zoom: f64,
    center: (f64, f64),
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            zoom: MIN_ZOOM,
            center: (width / 2.0, height / 2.0),
        }
    }

    pub const fn zoom(&self) -> f64 {
        self.zoom
    }

    pub const fn width(&self) -> f64 {
        self.width
    }

    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Visible horizontal window in canvas units.
    pub fn x_bounds(&self) -> [f64; 2] {
        let half = self.width / self.zoom / 2.0;
        [self.center.0 - half, self.center.0 + half]
    }

    /// Visible vertical window in canvas units, y growing upward.
    pub fn y_bounds(&self) -> [f64; 2] {
        let half = self.height / self.zoom / 2.0;
        [self.center.1 - half, self.center.1 + half]
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        self.clamp_center();
    }

    /// Pan one step; `dx`/`dy` give the direction in canvas orientation
    /// (positive y is up).
    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.center.0 += dx * self.width / self.zoom * PAN_FRACTION;
        self.center.1 += dy * self.height / self.zoom * PAN_FRACTION;
        self.clamp_center();
    }

    pub fn reset(&mut self) {
        self.zoom = MIN_ZOOM;
        self.center = (self.width / 2.0, self.height / 2.0);
    }

    fn clamp_center(&mut self) {
        let half_x = self.width / self.zoom / 2.0;
        let half_y = self.height / self.zoom / 2.0;
        self.center.0 = self.center.0.clamp(half_x, self.width - half_x);
        self.center.1 = self.center.1.clamp(half_y, self.height - half_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}");
    }

    fn viewport() -> Viewport {
        Viewport::new(1200.0, 900.0)
    }

    #[test]
    fn full_extent_by_default() {
        let v = viewport();
        assert_eq!(v.x_bounds(), [0.0, 1200.0]);
        assert_eq!(v.y_bounds(), [0.0, 900.0]);
    }

    #[test]
    fn zoom_is_clamped_to_its_extent() {
        let mut v = viewport();
        v.zoom_out();
        assert_close(v.zoom(), MIN_ZOOM);
        for _ in 0..40 {
            v.zoom_in();
        }
        assert_close(v.zoom(), MAX_ZOOM);
    }

    #[test]
    fn zooming_shrinks_the_visible_span() {
        let mut v = viewport();
        v.zoom_in();
        let [x0, x1] = v.x_bounds();
        assert_close(x1 - x0, 1200.0 / v.zoom());
        // Zooming about the center keeps the window centered.
        assert_close((x0 + x1) / 2.0, 600.0);
    }

    #[test]
    fn panning_at_full_extent_does_nothing() {
        let mut v = viewport();
        v.pan(1.0, -1.0);
        assert_eq!(v.x_bounds(), [0.0, 1200.0]);
        assert_eq!(v.y_bounds(), [0.0, 900.0]);
    }

    #[test]
    fn panning_stops_at_the_plane_edges() {
        let mut v = viewport();
        v.zoom_in();
        for _ in 0..100 {
            v.pan(1.0, 1.0);
        }
        assert_close(v.x_bounds()[1], 1200.0);
        assert_close(v.y_bounds()[1], 900.0);
        for _ in 0..100 {
            v.pan(-1.0, -1.0);
        }
        assert_close(v.x_bounds()[0], 0.0);
        assert_close(v.y_bounds()[0], 0.0);
    }

    #[test]
    fn reset_restores_the_full_extent() {
        let mut v = viewport();
        v.zoom_in();
        v.zoom_in();
        v.pan(1.0, 0.0);
        v.reset();
        assert_close(v.zoom(), MIN_ZOOM);
        assert_eq!(v.x_bounds(), [0.0, 1200.0]);
    }
}
