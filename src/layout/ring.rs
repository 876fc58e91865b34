use crate::foundation::core::{Canvas, Point};

/// Reference span used for goal progress when no start date is known.
pub const DEFAULT_REFERENCE_SPAN_DAYS: i64 = 365;

/// Ring radius as a share of width.
pub const RING_RADIUS_FRAC: f64 = 0.25;
/// Ring stroke width as a share of width.
pub const RING_STROKE_FRAC: f64 = 0.035;

/// Placement of the goal countdown ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingGeometry {
    /// Ring center.
    pub center: Point,
    /// Radius of the stroke's center line.
    pub radius: f64,
    /// Stroke width.
    pub stroke_width: f64,
}

/// Center the ring horizontally, 40% down the space below the clock.
pub fn compute_ring(canvas: Canvas, clock_fraction: f64) -> RingGeometry {
    let w = canvas.w();
    let clock_space = canvas.clock_space(clock_fraction);
    RingGeometry {
        center: Point::new(w / 2.0, clock_space + (canvas.h() - clock_space) * 0.4),
        radius: w * RING_RADIUS_FRAC,
        stroke_width: w * RING_STROKE_FRAC,
    }
}

/// `1 - remaining / span`, clamped to `[0, 1]`. Negative remaining counts as zero.
pub fn goal_progress(days_remaining: i64, reference_span_days: i64) -> f64 {
    let remaining = days_remaining.max(0) as f64;
    let span = reference_span_days.max(1) as f64;
    (1.0 - remaining / span).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/ring.rs"]
mod tests;
