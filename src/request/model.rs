use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::{color::rgb::Rgb, foundation::core::Canvas, i18n::Language};

/// Which wallpaper to draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VisualizationType {
    /// Day-of-year dot grid.
    #[default]
    Year,
    /// Week-of-life dot grid.
    Life,
    /// Goal countdown ring.
    Goal,
}

impl VisualizationType {
    /// Parse a query code (`year`, `life`, `goal`), case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "year" => Some(Self::Year),
            "life" => Some(Self::Life),
            "goal" => Some(Self::Goal),
            _ => None,
        }
    }

    /// Canonical query code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Life => "life",
            Self::Goal => "goal",
        }
    }

    /// Personal types embed dates or names and must never be shared across users.
    pub fn is_personal(self) -> bool {
        matches!(self, Self::Life | Self::Goal)
    }
}

/// Wire format of the response body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// Rasterized PNG.
    #[default]
    Png,
    /// Serialized SVG markup.
    Svg,
}

impl OutputFormat {
    /// Parse `png` or `svg`, case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "svg" => Some(Self::Svg),
            _ => None,
        }
    }

    /// Response content type.
    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml",
        }
    }
}

/// Validated, clamped input to one render. Build it with [`crate::validate_params`].
#[derive(Clone, Debug, PartialEq)]
pub struct WallpaperRequest {
    /// Wallpaper kind.
    pub visualization: VisualizationType,
    /// Output size.
    pub canvas: Canvas,
    /// Background color.
    pub background: Rgb,
    /// Requested accent, before the contrast safety rule.
    pub accent: Rgb,
    /// Lower-case two-letter country code.
    pub country: String,
    /// Zone resolved from `country`.
    pub timezone: Tz,
    /// Share of the height the host clock occupies, in `[0, 0.5]`.
    pub clock_fraction: f64,
    /// Language of drawn text.
    pub language: Language,
    /// Date of birth (life).
    pub date_of_birth: Option<NaiveDate>,
    /// Expected lifespan in years, in `[1, 120]` (life).
    pub lifespan_years: u32,
    /// Target date (goal).
    pub goal_date: Option<NaiveDate>,
    /// Start of the goal's reference span (goal).
    pub goal_start: Option<NaiveDate>,
    /// Goal label (goal).
    pub goal_name: String,
    /// Response format.
    pub format: OutputFormat,
}
