use crate::{
    color::{
        contrast::contrasting_overlay,
        rgb::{Paint, Rgb},
    },
    foundation::core::{Canvas, Point},
    layout::grid::GridGeometry,
    scene::document::{
        Baseline, MONO_FAMILY, SANS_FAMILY, TextAnchor, TextBlock, TextSpan,
    },
};

/// Gap between the grid's last row and the caption, as a share of height.
pub const CAPTION_OFFSET_FRAC: f64 = 0.025;
/// Alpha of the trailing run.
pub const CAPTION_TRAIL_ALPHA: f64 = 0.5;
/// Separator between the two runs.
pub const CAPTION_SEPARATOR: &str = " · ";

/// Two-tone stats line under a dot grid: `lead` in the accent, ` · trail` muted.
pub(crate) fn stats_caption(
    canvas: Canvas,
    geometry: &GridGeometry,
    font_frac: f64,
    background: Rgb,
    accent: Rgb,
    lead: String,
    trail: String,
) -> TextBlock {
    let muted = contrasting_overlay(background, CAPTION_TRAIL_ALPHA);
    TextBlock {
        position: Point::new(
            canvas.w() / 2.0,
            geometry.bottom() + canvas.h() * CAPTION_OFFSET_FRAC,
        ),
        font_size: canvas.w() * font_frac,
        font_family: SANS_FAMILY.to_owned(),
        font_weight: 400,
        anchor: TextAnchor::Middle,
        baseline: Baseline::Middle,
        fill: muted,
        spans: vec![
            TextSpan {
                text: lead,
                fill: Some(Paint::opaque(accent)),
                font_family: None,
                font_weight: Some(500),
            },
            TextSpan {
                text: format!("{CAPTION_SEPARATOR}{trail}"),
                fill: None,
                font_family: Some(MONO_FAMILY.to_owned()),
                font_weight: None,
            },
        ],
    }
}


#[cfg(test)]
#[path = "../../tests/unit/scene/caption.rs"]
mod tests;
