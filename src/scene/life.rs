use chrono::NaiveDate;

use crate::{
    calendar::civil::{default_date_of_birth, weeks_between},
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

/// Weeks per row and per year of lifespan.
pub const WEEKS_PER_YEAR: u32 = 52;
/// Caption font size as a share of width.
pub const LIFE_CAPTION_FONT_FRAC: f64 = 0.022;

/// Weeks lived against an expected lifespan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifeProgress {
    /// Birth date actually used (explicit or defaulted).
    pub date_of_birth: NaiveDate,
    /// `lifespan_years * 52`.
    pub total_weeks: u32,
    /// Completed weeks, clamped to `0..=total_weeks`; also the current week's index.
    pub weeks_lived: u32,
    /// `total_weeks - weeks_lived`.
    pub weeks_remaining: u32,
    /// Rounded share of weeks lived.
    pub percent: u32,
}

impl LifeProgress {
    /// Progress for `date_of_birth` (or the default, 25 years back) as of `today`.
    pub fn compute(
        date_of_birth: Option<NaiveDate>,
        lifespan_years: u32,
        today: NaiveDate,
    ) -> Self {
        let dob = date_of_birth.unwrap_or_else(|| default_date_of_birth(today));
        let total = lifespan_years * WEEKS_PER_YEAR;
        let lived = weeks_between(dob, today).clamp(0, i64::from(total)) as u32;
        Self {
            date_of_birth: dob,
            total_weeks: total,
            weeks_lived: lived,
            weeks_remaining: total - lived,
            percent: percent(f64::from(lived), f64::from(total)),
        }
    }
}

pub(crate) fn build_life(req: &WallpaperRequest, today: NaiveDate) -> VisualizationDocument {
    let progress = LifeProgress::compute(req.date_of_birth, req.lifespan_years, today);
    let accent = resolve_safe_accent(req.background, req.accent);
    let policy = GridPolicy::LIFE;
    let geometry = compute_grid(req.canvas, req.clock_fraction, &policy, progress.total_weeks);

    let mut doc = DocumentBuilder::new(req.canvas, req.background);
    push_dot_grid(
        &mut doc,
        &policy,
        &geometry,
        progress.weeks_lived,
        req.background,
        accent,
    );
    doc.push(Primitive::Text(stats_caption(
        req.canvas,
        &geometry,
        LIFE_CAPTION_FONT_FRAC,
        req.background,
        accent,
        req.language.weeks_left(i64::from(progress.weeks_remaining)),
        req.language.lived(progress.percent),
    )));
    doc.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/life.rs"]
mod tests;
