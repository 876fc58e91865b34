//! LifeGrid renders time-visualization wallpapers: the current year as a grid of days, a life
//! as a grid of weeks, and a countdown ring toward a goal date.
//!
//! Everything is driven by URL-style query parameters:
//!
//! - Validate parameters into a [`WallpaperRequest`] with [`validate_params`]
//! - Build a [`VisualizationDocument`] with [`generate`] and serialize it with [`to_svg`]
//! - Or run the whole pipeline with [`render_wallpaper`], which also rasterizes PNG output
//!
//! Generation is pure: the same request and the same civil date always give the same bytes.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod calendar;
mod color;
mod configurator;
mod foundation;
mod i18n;
mod layout;
mod render;
mod request;
mod scene;

pub use crate::foundation::core::{Canvas, Point, Rect};
pub use crate::foundation::error::{
    LifeGridError, LifeGridResult, ValidationErrors, ValidationIssue,
};

pub use crate::color::contrast::{
    MIN_ACCENT_CONTRAST, contrast_base, contrast_ratio, contrasting_overlay,
    is_near_black_or_white, relative_luminance, resolve_safe_accent,
};
pub use crate::color::rgb::{Paint, Rgb};

pub use crate::calendar::civil::{
    civil_date_in_zone, day_of_year, days_between, days_in_year, default_date_of_birth,
    default_goal_date, is_leap_year, weeks_between,
};
pub use crate::calendar::zones::{DEFAULT_COUNTRY, supported_countries, timezone_for_country};

pub use crate::i18n::Language;

pub use crate::layout::grid::{
    CellState, DotRadius, GridGeometry, GridPolicy, compute_grid, dot_radius,
};
pub use crate::layout::ring::{RingGeometry, compute_ring, goal_progress};

pub use crate::scene::document::{
    Baseline, Primitive, TextAnchor, TextBlock, TextSpan, VisualizationDocument,
};
pub use crate::scene::dots::dot_paint;
pub use crate::scene::generate;
pub use crate::scene::goal::GoalProgress;
pub use crate::scene::life::LifeProgress;
pub use crate::scene::year::YearProgress;

pub use crate::render::pipeline::{RenderedImage, render_request, render_wallpaper};
pub use crate::render::raster::{RasterOptions, Rasterizer};
pub use crate::render::svg::{to_svg, write_svg};

pub use crate::request::cache::{cache_control, cache_key};
pub use crate::request::model::{OutputFormat, VisualizationType, WallpaperRequest};
pub use crate::request::validate::{parse_query, validate_params};

pub use crate::configurator::devices::{
    DeviceCategory, DevicePreset, default_device, devices, devices_in, find_device,
};
pub use crate::configurator::state::{ConfiguratorAction, ConfiguratorState};
