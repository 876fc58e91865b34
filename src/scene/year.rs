use chrono::{Datelike, NaiveDate};

use crate::{
    calendar::civil::{day_of_year, days_in_year},
    color::contrast::resolve_safe_accent,
    foundation::math::percent,
    layout::grid::{GridPolicy, compute_grid},
    request::model::WallpaperRequest,
    scene::{
        caption::stats_caption,
        document::{DocumentBuilder, Primitive, VisualizationDocument},
        dots::push_dot_grid,
    },
};

/// Caption font size as a share of width.
pub const YEAR_CAPTION_FONT_FRAC: f64 = 0.032;

/// Where `today` sits in its calendar year.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct YearProgress {
    /// 1-based ordinal of today.
    pub day_of_year: u32,
    /// 365 or 366.
    pub total_days: u32,
    /// Days fully behind us; also the index of today's cell.
    pub elapsed: u32,
    /// Days after today.
    pub days_remaining: u32,
    /// `round(day_of_year / total_days * 100)`.
    pub percent: u32,
}

impl YearProgress {
    /// Progress for `today`.
    pub fn for_date(today: NaiveDate) -> Self {
        let day = day_of_year(today);
        let total = days_in_year(today.year());
        Self {
            day_of_year: day,
            total_days: total,
            elapsed: day - 1,
            days_remaining: total - day,
            percent: percent(f64::from(day), f64::from(total)),
        }
    }
}

pub(crate) fn build_year(req: &WallpaperRequest, today: NaiveDate) -> VisualizationDocument {
    let progress = YearProgress::for_date(today);
    let accent = resolve_safe_accent(req.background, req.accent);
    let policy = GridPolicy::YEAR;
    let geometry = compute_grid(req.canvas, req.clock_fraction, &policy, progress.total_days);

    let mut doc = DocumentBuilder::new(req.canvas, req.background);
    push_dot_grid(
        &mut doc,
        &policy,
        &geometry,
        progress.elapsed,
        req.background,
        accent,
    );
    doc.push(Primitive::Text(stats_caption(
        req.canvas,
        &geometry,
        YEAR_CAPTION_FONT_FRAC,
        req.background,
        accent,
        req.language.days_left(i64::from(progress.days_remaining)),
        req.language.complete(progress.percent),
    )));
    doc.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/year.rs"]
mod tests;
