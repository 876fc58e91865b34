//! WCAG luminance/contrast math and the accent safety rule.

use super::rgb::{Paint, Rgb};

/// Below this ratio an accent counts as indistinguishable from the background.
pub const MIN_ACCENT_CONTRAST: f64 = 2.0;

fn channel_to_linear(c: u8) -> f64 {
    let c = f64::from(c) / 255.0;
    if c <= 0.039_28 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in `[0, 1]`.
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * channel_to_linear(color.r)
        + 0.7152 * channel_to_linear(color.g)
        + 0.0722 * channel_to_linear(color.b)
}

/// WCAG contrast ratio, always `>= 1`.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Luminance below 0.1 or above 0.9.
pub fn is_near_black_or_white(color: Rgb) -> bool {
    let l = relative_luminance(color);
    l < 0.1 || l > 0.9
}

/// White on dark backgrounds (luminance `<= 0.5`), black otherwise.
pub fn contrast_base(background: Rgb) -> Rgb {
    if relative_luminance(background) > 0.5 {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    }
}

/// Keep the requested accent unless it is near black/white *and* under 2:1 against the
/// background; then swap in whichever of black/white contrasts more.
pub fn resolve_safe_accent(background: Rgb, requested: Rgb) -> Rgb {
    if is_near_black_or_white(requested) && contrast_ratio(background, requested) < MIN_ACCENT_CONTRAST
    {
        let safe = contrast_base(background);
        tracing::debug!(
            background = %background,
            requested = %requested,
            resolved = %safe,
            "accent overridden for contrast"
        );
        return safe;
    }
    requested
}

/// Black or white at `alpha`, chosen against the background. Used for secondary text and
/// neutral cells so they stay legible whatever the accent is.
pub fn contrasting_overlay(background: Rgb, alpha: f64) -> Paint {
    Paint::with_alpha(contrast_base(background), alpha)
}

#[cfg(test)]
#[path = "../../tests/unit/color/contrast.rs"]
mod tests;
