use super::*;

#[test]
fn ring_sits_below_clock_space() {
    let canvas = Canvas::new(1179, 2556);
    let ring = compute_ring(canvas, 0.18);
    let clock = 2556.0 * 0.23;
    assert!((ring.center.x - 589.5).abs() < 1e-9);
    assert!((ring.center.y - (clock + (2556.0 - clock) * 0.4)).abs() < 1e-9);
    assert!((ring.radius - 1179.0 * 0.25).abs() < 1e-9);
    assert!(ring.center.y - ring.radius > clock);
}

#[test]
fn progress_is_bounded() {
    assert_eq!(goal_progress(0, 365), 1.0);
    assert_eq!(goal_progress(-20, 365), 1.0);
    assert_eq!(goal_progress(365, 365), 0.0);
    assert_eq!(goal_progress(900, 365), 0.0);
    let p = goal_progress(10, DEFAULT_REFERENCE_SPAN_DAYS);
    assert!(p > 0.0 && p < 1.0);
    assert!((p - 355.0 / 365.0).abs() < 1e-12);
}

#[test]
fn degenerate_span_does_not_divide_by_zero() {
    assert_eq!(goal_progress(3, 0), 0.0);
    assert_eq!(goal_progress(0, 0), 1.0);
}
