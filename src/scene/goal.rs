use chrono::NaiveDate;

use crate::{
    calendar::civil::{days_between, default_goal_date},
    color::{
        contrast::{contrasting_overlay, resolve_safe_accent},
        rgb::Paint,
    },
    foundation::core::Point,
    layout::ring::{DEFAULT_REFERENCE_SPAN_DAYS, compute_ring, goal_progress},
    request::model::WallpaperRequest,
    scene::document::{DocumentBuilder, Primitive, TextBlock, VisualizationDocument},
};

/// Alpha of the unfilled background ring.
pub const TRACK_ALPHA: f64 = 0.1;

/// Countdown toward a goal date.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GoalProgress {
    /// Goal date actually used (explicit or today + 30).
    pub target: NaiveDate,
    /// Days until `target`, never negative.
    pub days_remaining: i64,
    /// Days that make up a full ring.
    pub reference_span: i64,
    /// Filled share of the ring, `0..=1`.
    pub progress: f64,
}

impl GoalProgress {
    /// Progress toward `goal` (default today + 30). A `start` before the goal sets the
    /// reference span; otherwise it is one year.
    pub fn compute(goal: Option<NaiveDate>, start: Option<NaiveDate>, today: NaiveDate) -> Self {
        let target = goal.unwrap_or_else(|| default_goal_date(today));
        let days_remaining = days_between(today, target).max(0);
        let reference_span = match start {
            Some(s) if s < target => days_between(s, target),
            _ => DEFAULT_REFERENCE_SPAN_DAYS,
        };
        Self {
            target,
            days_remaining,
            reference_span,
            progress: goal_progress(days_remaining, reference_span),
        }
    }

    /// Clockwise sweep of the progress arc in degrees.
    pub fn sweep_degrees(&self) -> f64 {
        self.progress * 360.0
    }
}

pub(crate) fn build_goal(req: &WallpaperRequest, today: NaiveDate) -> VisualizationDocument {
    let progress = GoalProgress::compute(req.goal_date, req.goal_start, today);
    let accent = resolve_safe_accent(req.background, req.accent);
    let canvas = req.canvas;
    let (w, h) = (canvas.w(), canvas.h());
    let ring = compute_ring(canvas, req.clock_fraction);
    let overlay = |alpha| contrasting_overlay(req.background, alpha);

    let mut doc = DocumentBuilder::new(canvas, req.background);
    doc.push(Primitive::Ring {
        center: ring.center,
        radius: ring.radius,
        stroke: overlay(TRACK_ALPHA),
        stroke_width: ring.stroke_width,
    });
    if progress.progress > 0.0 {
        doc.push(Primitive::Arc {
            center: ring.center,
            radius: ring.radius,
            start_deg: 0.0,
            sweep_deg: progress.sweep_degrees(),
            stroke: Paint::opaque(accent),
            stroke_width: ring.stroke_width,
        });
    }

    let cx = ring.center.x;
    let cy = ring.center.y;
    doc.push(Primitive::Text(TextBlock::centered(
        Point::new(cx, cy - h * 0.015),
        progress.days_remaining.to_string(),
        w * 0.2,
        700,
        Paint::opaque(accent),
    )));
    doc.push(Primitive::Text(TextBlock::centered(
        Point::new(cx, cy + h * 0.08),
        req.language.days_left(progress.days_remaining),
        w * 0.04,
        400,
        overlay(0.5),
    )));
    doc.push(Primitive::Text(TextBlock::centered(
        Point::new(cx, h * 0.75),
        req.goal_name.clone(),
        w * 0.05,
        600,
        overlay(0.9),
    )));
    doc.push(Primitive::Text(TextBlock::centered(
        Point::new(cx, h * 0.77),
        req.language.long_date(progress.target),
        w * 0.028,
        400,
        overlay(0.4),
    )));
    doc.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/goal.rs"]
mod tests;
