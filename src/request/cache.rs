use chrono::NaiveDate;

use super::model::{VisualizationType, WallpaperRequest};
use crate::foundation::math::fmt_num;

/// Shared-cache key for a render, or `None` for personal types.
///
/// Only the year wallpaper is a pure function of (country, colors, size, day), so only it may be
/// shared across users. The day is the civil date in the request's zone. Language and clock share
/// change the drawn image too, so they are part of the key.
pub fn cache_key(req: &WallpaperRequest, today: NaiveDate) -> Option<String> {
    if req.visualization.is_personal() {
        tracing::debug!(kind = req.visualization.code(), "personal wallpaper, not cacheable");
        return None;
    }
    Some(format!(
        "{}-{}-{}-{}-{}x{}-c{}-{}-{}",
        req.country,
        req.visualization.code(),
        req.background.hex_digits(),
        req.accent.hex_digits(),
        req.canvas.width,
        req.canvas.height,
        fmt_num(req.clock_fraction),
        req.language.code(),
        today.format("%Y-%m-%d"),
    ))
}

/// `Cache-Control` value for a wallpaper kind.
pub fn cache_control(kind: VisualizationType) -> &'static str {
    if kind.is_personal() {
        "private, no-store"
    } else {
        "public, max-age=86400"
    }
}

#[cfg(test)]
#[path = "../../tests/unit/request/cache.rs"]
mod tests;
