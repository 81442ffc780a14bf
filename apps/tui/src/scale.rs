//! Linear metric-to-radius scaling.

use crate::domain::{MetricMode, StationRecord};

/// A d3-style linear scale. A degenerate domain maps everything to the
/// start of the range rather than dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        let t = (value - self.domain.0) / span;
        t.mul_add(self.range.1 - self.range.0, self.range.0)
    }
}

/// Min/max of the chosen metric across all records. An empty dataset
/// collapses to `(0, 0)`.
pub fn metric_extent(records: &[StationRecord], mode: MetricMode) -> (f64, f64) {
    if records.is_empty() {
        return (0.0, 0.0);
    }
    records.iter().map(|r| r.metric(mode)).fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), v| (min.min(v), max.max(v)),
    )
}

/// Build the radius scale for a metric mode: extent as the domain (with
/// the mode's zero-minimum clamp applied) and the mode's radius range.
pub fn scale_for(records: &[StationRecord], mode: MetricMode) -> LinearScale {
    let (mut min, max) = metric_extent(records, mode);
    if let Some(floor) = mode.domain_floor() {
        if min == 0.0 {
            min = floor;
        }
    }
    LinearScale::new((min, max), mode.radius_range())
}
