//! Timing curves for the marker grow transition and the tooltip fade.

/// Per-marker animation delay step, linear in dataset index.
pub const MARKER_DELAY_STEP_MS: f64 = 4.0;
/// Duration of one marker's radius transition.
pub const MARKER_GROW_MS: f64 = 500.0;
/// Tooltip fade-in/fade-out duration.
pub const TOOLTIP_FADE_MS: f64 = 200.0;

/// Normalized progress of a staggered transition: 0 before the delay has
/// elapsed, 1 once the duration has run out.
pub fn stagger_progress(elapsed_ms: f64, delay_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    ((elapsed_ms - delay_ms) / duration_ms).clamp(0.0, 1.0)
}

/// Bounce ease-out, the standard four-segment piecewise curve.
pub fn bounce_out(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;

    let t = t.clamp(0.0, 1.0);
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1.mul_add(t * t, 0.75)
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1.mul_add(t * t, 0.9375)
    } else {
        let t = t - 2.625 / D1;
        N1.mul_add(t * t, 0.984_375)
    }
}

/// Tooltip opacity ramp since hover start.
pub fn fade_progress(elapsed_ms: f64) -> f64 {
    (elapsed_ms / TOOLTIP_FADE_MS).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn bounce_is_anchored_at_both_ends() {
        assert_close(bounce_out(0.0), 0.0);
        assert_close(bounce_out(1.0), 1.0);
    }

    #[test]
    fn bounce_overshoots_then_settles() {
        // The first bounce peak sits at t = 1/2.75.
        assert_close(bounce_out(1.0 / 2.75), 1.0);
        let dip = bounce_out(1.75 / 2.75);
        assert!(dip < 1.0 && dip > 0.7, "dip = {dip}");
    }

    #[test]
    fn bounce_clamps_out_of_range_input() {
        assert_close(bounce_out(-0.5), 0.0);
        assert_close(bounce_out(2.0), 1.0);
    }

    #[test]
    fn stagger_waits_for_the_delay() {
        assert_close(stagger_progress(0.0, 40.0, 500.0), 0.0);
        assert_close(stagger_progress(40.0, 40.0, 500.0), 0.0);
        assert_close(stagger_progress(290.0, 40.0, 500.0), 0.5);
        assert_close(stagger_progress(540.0, 40.0, 500.0), 1.0);
        assert_close(stagger_progress(9999.0, 40.0, 500.0), 1.0);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        assert_close(stagger_progress(0.0, 0.0, 0.0), 1.0);
    }

    #[test]
    fn fade_runs_over_its_fixed_duration() {
        assert_close(fade_progress(0.0), 0.0);
        assert_close(fade_progress(100.0), 0.5);
        assert_close(fade_progress(200.0), 1.0);
        assert_close(fade_progress(500.0), 1.0);
    }
}
