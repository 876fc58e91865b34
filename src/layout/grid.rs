//! Uniform dot-grid fitting shared by the year and life wallpapers.
//!
//! Every grid reserves the clock space at the top, symmetric horizontal padding, and a caption
//! band plus bottom margin below. `cell_count` square cells are then fitted row-major into what
//! remains and the block is centered horizontally. The cell edge is the smaller of the width fit
//! and the height fit; on portrait canvases the year grid is always width-bound.

use crate::foundation::core::{Canvas, Point};

/// Caption band reserved below the grid, as a share of height.
pub const STATS_HEIGHT_FRAC: f64 = 0.05;
/// Bottom margin, as a share of height.
pub const BOTTOM_MARGIN_FRAC: f64 = 0.05;
/// Gap between the clock space and the first row, as a share of height.
pub const GRID_TOP_OFFSET_FRAC: f64 = 0.02;
/// Hard cap on fitted cells (120 years of weeks).
pub const MAX_CELLS: u32 = 120 * 52;

/// How a cell's dot radius derives from the cell size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DotRadius {
    /// `half_cell * factor`.
    Scaled(f64),
    /// `half_cell - inset`, floored at `half_cell / 2`.
    Inset(f64),
}

/// Fitting and styling knobs for one grid visualization.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPolicy {
    /// Fixed column count.
    pub columns: u32,
    /// Padding on each side, as a share of width.
    pub padding_frac: f64,
    /// Minimum gap in pixels.
    pub min_gap: f64,
    /// Gap as a share of width, used when larger than `min_gap`.
    pub gap_frac: f64,
    /// Dot radius rule.
    pub dot: DotRadius,
    /// Radius multiplier for the "now" cell.
    pub current_scale: f64,
    /// Overlay alpha for future cells.
    pub future_alpha: f64,
}

impl GridPolicy {
    /// Day-of-year grid.
    pub const YEAR: Self = Self {
        columns: 15,
        padding_frac: 0.20,
        min_gap: 2.0,
        gap_frac: 0.008,
        dot: DotRadius::Scaled(0.85),
        current_scale: 1.12,
        future_alpha: 0.12,
    };

    /// Week-of-life grid.
    pub const LIFE: Self = Self {
        columns: 52,
        padding_frac: 0.04,
        min_gap: 1.5,
        gap_frac: 0.003,
        dot: DotRadius::Inset(0.5),
        current_scale: 1.15,
        future_alpha: 0.06,
    };
}

/// Resolved grid placement in document space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    /// Column count.
    pub columns: u32,
    /// Row count (`ceil(cells / columns)`).
    pub rows: u32,
    /// Number of cells laid out.
    pub cell_count: u32,
    /// Square cell edge.
    pub cell_size: f64,
    /// Gap between neighbouring cells.
    pub gap: f64,
    /// Top-left corner of the grid block.
    pub origin: Point,
}

impl GridGeometry {
    /// Total block width.
    pub fn grid_width(&self) -> f64 {
        span(self.columns, self.cell_size, self.gap)
    }

    /// Total block height.
    pub fn grid_height(&self) -> f64 {
        span(self.rows, self.cell_size, self.gap)
    }

    /// Y of the block's bottom edge.
    pub fn bottom(&self) -> f64 {
        self.origin.y + self.grid_height()
    }

    /// Center of cell `index` (row-major).
    pub fn cell_center(&self, index: u32) -> Point {
        let col = index % self.columns;
        let row = index / self.columns;
        let pitch = self.cell_size + self.gap;
        Point::new(
            self.origin.x + f64::from(col) * pitch + self.cell_size / 2.0,
            self.origin.y + f64::from(row) * pitch + self.cell_size / 2.0,
        )
    }
}

/// Visual state of one cell relative to the elapsed count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    /// `index < elapsed`.
    Past,
    /// `index == elapsed`: today or the current week.
    Current,
    /// `index > elapsed`.
    Future,
}

impl CellState {
    /// Classify `index` against `elapsed`.
    pub fn classify(index: u32, elapsed: u32) -> Self {
        if index < elapsed {
            Self::Past
        } else if index == elapsed {
            Self::Current
        } else {
            Self::Future
        }
    }
}

fn span(count: u32, cell: f64, gap: f64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    f64::from(count) * cell + f64::from(count - 1) * gap
}

fn fit_cell(avail: f64, count: u32, gap: f64) -> f64 {
    let n = f64::from(count.max(1));
    (avail - gap * (n - 1.0)) / n
}

/// Fit `cell_count` cells for `policy` onto `canvas`.
pub fn compute_grid(
    canvas: Canvas,
    clock_fraction: f64,
    policy: &GridPolicy,
    cell_count: u32,
) -> GridGeometry {
    let w = canvas.w();
    let h = canvas.h();
    let cell_count = cell_count.min(MAX_CELLS);
    let columns = policy.columns.max(1);
    let rows = cell_count.div_ceil(columns);

    let clock_space = canvas.clock_space(clock_fraction);
    let padding = w * policy.padding_frac;
    let avail_w = (w - padding * 2.0).max(0.0);
    let avail_h = (h - clock_space - h * STATS_HEIGHT_FRAC - h * BOTTOM_MARGIN_FRAC).max(0.0);

    let mut gap = policy.min_gap.max(w * policy.gap_frac);
    let mut cell = fit_cell(avail_w, columns, gap).min(fit_cell(avail_h, rows, gap));
    if cell <= 0.0 {
        // Gaps alone overflow the space: share it evenly between cells and gaps.
        let by_w = avail_w / f64::from(columns * 2 - 1);
        let by_h = avail_h / f64::from((rows * 2).max(2) - 1);
        gap = by_w.min(by_h);
        cell = gap;
    }

    let grid_width = span(columns, cell, gap);
    GridGeometry {
        columns,
        rows,
        cell_count,
        cell_size: cell,
        gap,
        origin: Point::new((w - grid_width) / 2.0, clock_space + h * GRID_TOP_OFFSET_FRAC),
    }
}

/// Dot radius for `state` under `policy`.
pub fn dot_radius(policy: &GridPolicy, geometry: &GridGeometry, state: CellState) -> f64 {
    let half = geometry.cell_size / 2.0;
    let base = match policy.dot {
        DotRadius::Scaled(f) => half * f,
        // Floored at half the half-cell so tiny cells keep a visible dot.
        DotRadius::Inset(inset) => (half - inset).max(half * 0.5),
    };
    match state {
        CellState::Current => base * policy.current_scale,
        CellState::Past | CellState::Future => base,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
