use super::*;

const PHONE: Canvas = Canvas::new(1179, 2556);

fn assert_inside(canvas: Canvas, clock: f64, g: &GridGeometry) {
    let h = canvas.h();
    assert!(g.origin.x >= 0.0);
    assert!(g.origin.x + g.grid_width() <= canvas.w() + 1e-9);
    let avail_h = h - canvas.clock_space(clock) - h * STATS_HEIGHT_FRAC - h * BOTTOM_MARGIN_FRAC;
    assert!(g.grid_height() <= avail_h + 1e-9);
    assert!(g.cell_size > 0.0);
}

#[test]
fn year_grid_on_phone_is_width_bound_and_centered() {
    for days in [365, 366] {
        let g = compute_grid(PHONE, 0.18, &GridPolicy::YEAR, days);
        assert_eq!(g.columns, 15);
        assert_eq!(g.cell_count, days);
        assert_eq!(g.rows, days.div_ceil(15));
        assert_inside(PHONE, 0.18, &g);

        let gap = (1179.0 * 0.008f64).max(2.0);
        assert!((g.gap - gap).abs() < 1e-9);
        let avail_w = 1179.0 * 0.6;
        let expected_cell = (avail_w - gap * 14.0) / 15.0;
        assert!((g.cell_size - expected_cell).abs() < 1e-9);

        let left = g.origin.x;
        let right = 1179.0 - (g.origin.x + g.grid_width());
        assert!((left - right).abs() < 1e-9);
    }
}

#[test]
fn life_grid_fits_for_every_lifespan() {
    for years in [1u32, 40, 80, 120] {
        let g = compute_grid(PHONE, 0.18, &GridPolicy::LIFE, years * 52);
        assert_eq!(g.columns, 52);
        assert_eq!(g.rows, years);
        assert_eq!(g.cell_count, years * 52);
        assert_inside(PHONE, 0.18, &g);
    }
}

#[test]
fn long_life_grid_becomes_height_bound() {
    let short = compute_grid(PHONE, 0.18, &GridPolicy::LIFE, 40 * 52);
    let long = compute_grid(PHONE, 0.18, &GridPolicy::LIFE, 120 * 52);
    assert!(long.cell_size < short.cell_size);
    let h = PHONE.h();
    let avail_h = h - PHONE.clock_space(0.18) - h * 0.1;
    assert!((long.grid_height() - avail_h).abs() < 1e-6);
}

#[test]
fn tall_clock_space_shrinks_year_grid() {
    let g = compute_grid(PHONE, 0.5, &GridPolicy::YEAR, 366);
    assert_inside(PHONE, 0.5, &g);
    let relaxed = compute_grid(PHONE, 0.18, &GridPolicy::YEAR, 366);
    assert!(g.cell_size < relaxed.cell_size);
}

#[test]
fn tiny_canvas_still_produces_positive_cells() {
    let canvas = Canvas::new(300, 300);
    let g = compute_grid(canvas, 0.5, &GridPolicy::LIFE, 120 * 52);
    assert_inside(canvas, 0.5, &g);
}

#[test]
fn cell_count_is_capped() {
    let g = compute_grid(PHONE, 0.18, &GridPolicy::LIFE, u32::MAX);
    assert_eq!(g.cell_count, MAX_CELLS);
}

#[test]
fn cell_centers_are_row_major() {
    let g = compute_grid(PHONE, 0.18, &GridPolicy::YEAR, 365);
    let pitch = g.cell_size + g.gap;
    let c0 = g.cell_center(0);
    assert!((c0.x - (g.origin.x + g.cell_size / 2.0)).abs() < 1e-9);
    assert!((c0.y - (g.origin.y + g.cell_size / 2.0)).abs() < 1e-9);
    let c16 = g.cell_center(16);
    assert!((c16.x - (c0.x + pitch)).abs() < 1e-9);
    assert!((c16.y - (c0.y + pitch)).abs() < 1e-9);
    assert!((g.origin.y - (PHONE.clock_space(0.18) + 2556.0 * 0.02)).abs() < 1e-9);
}

#[test]
fn classification_uses_strict_less_and_equality() {
    assert_eq!(CellState::classify(0, 0), CellState::Current);
    assert_eq!(CellState::classify(4, 5), CellState::Past);
    assert_eq!(CellState::classify(5, 5), CellState::Current);
    assert_eq!(CellState::classify(6, 5), CellState::Future);
}

#[test]
fn dot_radius_rules() {
    let year = compute_grid(PHONE, 0.18, &GridPolicy::YEAR, 365);
    let past = dot_radius(&GridPolicy::YEAR, &year, CellState::Past);
    assert!((past - year.cell_size / 2.0 * 0.85).abs() < 1e-9);
    let now = dot_radius(&GridPolicy::YEAR, &year, CellState::Current);
    assert!((now - past * 1.12).abs() < 1e-9);

    let life = compute_grid(PHONE, 0.18, &GridPolicy::LIFE, 80 * 52);
    let future = dot_radius(&GridPolicy::LIFE, &life, CellState::Future);
    assert!((future - (life.cell_size / 2.0 - 0.5)).abs() < 1e-9);
}

#[test]
fn current_week_stays_visible_on_tiny_cells() {
    let tiny = GridGeometry {
        columns: 52,
        rows: 120,
        cell_count: 52 * 120,
        cell_size: 0.6,
        gap: 0.6,
        origin: Point::new(0.0, 0.0),
    };
    let future = dot_radius(&GridPolicy::LIFE, &tiny, CellState::Future);
    let now = dot_radius(&GridPolicy::LIFE, &tiny, CellState::Current);
    assert!((future - 0.15).abs() < 1e-12);
    assert!(now > future);
}
