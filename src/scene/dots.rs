use crate::{
    color::{
        contrast::contrasting_overlay,
        rgb::{Paint, Rgb},
    },
    layout::grid::{CellState, GridGeometry, GridPolicy, dot_radius},
    scene::document::{DocumentBuilder, Primitive},
};

/// Alpha applied to the accent for elapsed cells.
pub const PAST_ALPHA: f64 = 0.75;

/// Fill for a cell in `state`.
pub fn dot_paint(state: CellState, policy: &GridPolicy, background: Rgb, accent: Rgb) -> Paint {
    match state {
        CellState::Past => Paint::with_alpha(accent, PAST_ALPHA),
        CellState::Current => Paint::opaque(accent),
        CellState::Future => contrasting_overlay(background, policy.future_alpha),
    }
}

/// Emit one circle per cell, row-major, classified against `elapsed`.
pub(crate) fn push_dot_grid(
    doc: &mut DocumentBuilder,
    policy: &GridPolicy,
    geometry: &GridGeometry,
    elapsed: u32,
    background: Rgb,
    accent: Rgb,
) {
    doc.reserve(geometry.cell_count as usize);
    for index in 0..geometry.cell_count {
        let state = CellState::classify(index, elapsed);
        doc.push(Primitive::Circle {
            center: geometry.cell_center(index),
            radius: dot_radius(policy, geometry, state),
            fill: dot_paint(state, policy, background, accent),
        });
    }
}
