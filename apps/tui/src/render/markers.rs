//! Marker view-models: one circle per station record.
//!
//! Markers are created once when the dataset lands and keep their
//! identity and position for the session. A metric switch only retargets
//! radius; the canvas widget reads the animated radius each frame.

use crate::domain::{MetricMode, StationClass, StationRecord};
use crate::projection::AlbersUsa;
use crate::render::animation::{
    bounce_out, stagger_progress, MARKER_DELAY_STEP_MS, MARKER_GROW_MS,
};
use crate::scale::{scale_for, LinearScale};

/// Stations with a sentinel coordinate are pinned here instead of being
/// plotted at a bogus location.
pub const FALLBACK_LON: f64 = -95.0;
pub const FALLBACK_LAT: f64 = 40.0;

#[derive(Debug, Clone)]
pub struct Marker {
    /// Index of the backing record in the dataset.
    pub station: usize,
    pub x: f64,
    pub y: f64,
    pub class: StationClass,
    /// Radius the current transition started from.
    pub radius_from: f64,
    /// Radius the current transition is heading to.
    pub radius_target: f64,
    pub delay_ms: f64,
    /// Set by the named-filter path, independent of the display mode.
    pub hidden: bool,
}

impl Marker {
    /// Animated radius at `elapsed_ms` since the transition epoch.
    pub fn radius_at(&self, elapsed_ms: f64) -> f64 {
        let t = stagger_progress(elapsed_ms, self.delay_ms, MARKER_GROW_MS);
        bounce_out(t).mul_add(self.radius_target - self.radius_from, self.radius_from)
    }
}

/// Build the full marker set for a fresh dataset. Marker count always
/// equals record count.
#[allow(clippy::cast_precision_loss)]
pub fn build_markers(
    records: &[StationRecord],
    projection: &AlbersUsa,
    mode: MetricMode,
) -> Vec<Marker> {
    let scale = scale_for(records, mode);
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let (x, y) = if record.has_location() {
                projection.project(record.longitude, record.latitude)
            } else {
                projection.project(FALLBACK_LON, FALLBACK_LAT)
            };
            Marker {
                station: index,
                x,
                y,
                class: record.class(),
                radius_from: 0.0,
                radius_target: radius_target(record, &scale, mode),
                delay_ms: MARKER_DELAY_STEP_MS * index as f64,
                hidden: false,
            }
        })
        .collect()
}

/// Retarget radii for a metric switch. Each transition restarts from the
/// radius currently on screen; identity and position are untouched.
pub fn retarget_markers(
    markers: &mut [Marker],
    records: &[StationRecord],
    mode: MetricMode,
    elapsed_ms: f64,
) {
    let scale = scale_for(records, mode);
    for marker in markers.iter_mut() {
        let Some(record) = records.get(marker.station) else {
            continue;
        };
        marker.radius_from = marker.radius_at(elapsed_ms);
        marker.radius_target = radius_target(record, &scale, mode);
        marker.class = record.class();
    }
}

/// Hide rather than mislocate: a zero metric or sentinel location means
/// radius zero, even though the marker still exists.
fn radius_target(record: &StationRecord, scale: &LinearScale, mode: MetricMode) -> f64 {
    let value = record.metric(mode);
    if value == 0.0 || !record.has_location() {
        0.0
    } else {
        scale.map(value)
    }
}

/// The secondary named-filter path: clear every hidden flag, then
/// re-apply hiding by filter name. Only the "all" branch has defined
/// behavior (it hides nothing); every other name falls through to hiding
/// the whole set.
pub fn apply_named_filter(markers: &mut [Marker], name: &str) {
    for marker in markers.iter_mut() {
        marker.hidden = false;
    }
    if name == "all" {
        return;
    }
    for marker in markers.iter_mut() {
        marker.hidden = true;
    }
}
