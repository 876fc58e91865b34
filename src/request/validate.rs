//! Boundary parameter parsing.
//!
//! Pattern-checked fields (country, colors, dates, goal name) are rejected when malformed and
//! every problem is reported together. Numeric fields are clamped into range instead, and
//! unknown enum values (type, language, format) fall back to their defaults, so a well-formed
//! request always renders something.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use chrono::NaiveDate;
use percent_encoding::percent_decode_str;

use super::model::{OutputFormat, VisualizationType, WallpaperRequest};
use crate::{
    calendar::zones::{DEFAULT_COUNTRY, timezone_for_country},
    color::rgb::Rgb,
    foundation::core::Canvas,
    foundation::error::ValidationErrors,
    i18n::Language,
};

/// Default output width (iPhone 13/14).
pub const DEFAULT_WIDTH: u32 = 1170;
/// Default output height (iPhone 13/14).
pub const DEFAULT_HEIGHT: u32 = 2532;
/// Supported width/height range in pixels.
pub const DIMENSION_RANGE: RangeInclusive<u32> = 300..=8000;
/// Default clock share of the height.
pub const DEFAULT_CLOCK_FRACTION: f64 = 0.18;
/// Supported clock share range.
pub const CLOCK_FRACTION_RANGE: RangeInclusive<f64> = 0.0..=0.5;
/// Default lifespan in years.
pub const DEFAULT_LIFESPAN_YEARS: u32 = 80;
/// Supported lifespan range in years.
pub const LIFESPAN_RANGE: RangeInclusive<u32> = 1..=120;
/// Goal label used when none is given.
pub const DEFAULT_GOAL_NAME: &str = "Goal";
/// Longest accepted goal label, in characters.
pub const MAX_GOAL_NAME_CHARS: usize = 100;

const DEFAULT_BACKGROUND: Rgb = Rgb::BLACK;
const DEFAULT_ACCENT: Rgb = Rgb::WHITE;

/// Split a URL query (`a=1&b=2`, optional leading `?`) into decoded pairs.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Validate a decoded key/value set into a [`WallpaperRequest`].
///
/// Later duplicates win, empty values count as missing and unknown keys are ignored.
pub fn validate_params<I, K, V>(params: I) -> Result<WallpaperRequest, ValidationErrors>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut raw = BTreeMap::<String, String>::new();
    for (k, v) in params {
        raw.insert(k.as_ref().to_owned(), v.as_ref().trim().to_owned());
    }
    let get = |key: &str| raw.get(key).map(String::as_str).filter(|v| !v.is_empty());

    let mut errors = ValidationErrors::default();

    let country = match get("country") {
        None => DEFAULT_COUNTRY.to_owned(),
        Some(v) if v.len() == 2 && v.bytes().all(|b| b.is_ascii_alphabetic()) => {
            v.to_ascii_lowercase()
        }
        Some(_) => {
            errors.push("country", "must be a two-letter country code");
            DEFAULT_COUNTRY.to_owned()
        }
    };

    let visualization = enum_or_default("type", get("type"), VisualizationType::from_code);
    let background = color_field(&mut errors, "bg", get("bg"), DEFAULT_BACKGROUND);
    let accent = color_field(&mut errors, "accent", get("accent"), DEFAULT_ACCENT);

    let width = clamped_u32(&mut errors, "width", get("width"), DEFAULT_WIDTH, DIMENSION_RANGE);
    let height = clamped_u32(
        &mut errors,
        "height",
        get("height"),
        DEFAULT_HEIGHT,
        DIMENSION_RANGE,
    );
    // Thousandths: the cache key carries the same precision as the layout.
    let clock_fraction = (clamped_f64(
        &mut errors,
        "clockHeight",
        get("clockHeight"),
        DEFAULT_CLOCK_FRACTION,
        CLOCK_FRACTION_RANGE,
    ) * 1000.0)
        .round()
        / 1000.0;

    let language = enum_or_default("lang", get("lang"), Language::from_code);

    let date_of_birth = date_field(&mut errors, "dob", get("dob"));
    let lifespan_years = clamped_u32(
        &mut errors,
        "lifespan",
        get("lifespan"),
        DEFAULT_LIFESPAN_YEARS,
        LIFESPAN_RANGE,
    );

    let goal_date = date_field(&mut errors, "goal", get("goal"));
    let goal_start = date_field(&mut errors, "goalStart", get("goalStart"));
    let goal_name = match get("goalName") {
        None => DEFAULT_GOAL_NAME.to_owned(),
        Some(v) => {
            let name = decode_goal_name(v);
            if name.chars().count() > MAX_GOAL_NAME_CHARS {
                errors.push(
                    "goalName",
                    format!("must be at most {MAX_GOAL_NAME_CHARS} characters"),
                );
            }
            if name.chars().any(is_markup_illegal) {
                errors.push("goalName", "must not contain control characters");
            }
            name
        }
    };

    let format = enum_or_default("format", get("format"), OutputFormat::from_code);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(WallpaperRequest {
        visualization,
        canvas: Canvas::new(width, height),
        background,
        accent,
        timezone: timezone_for_country(&country),
        country,
        clock_fraction,
        language,
        date_of_birth,
        lifespan_years,
        goal_date,
        goal_start,
        goal_name,
        format,
    })
}

fn enum_or_default<T: Default>(field: &str, raw: Option<&str>, parse: fn(&str) -> Option<T>) -> T {
    let Some(raw) = raw else {
        return T::default();
    };
    parse(raw).unwrap_or_else(|| {
        tracing::debug!(field, value = raw, "unknown value, using default");
        T::default()
    })
}

fn color_field(errors: &mut ValidationErrors, field: &str, raw: Option<&str>, default: Rgb) -> Rgb {
    let Some(raw) = raw else {
        return default;
    };
    Rgb::from_hex(raw).unwrap_or_else(|| {
        errors.push(field, "must be 6 hex digits (RRGGBB)");
        default
    })
}

fn date_field(errors: &mut ValidationErrors, field: &str, raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?;
    let parsed = is_iso_date_shape(raw)
        .then(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .flatten();
    if parsed.is_none() {
        errors.push(field, "must be a calendar date in YYYY-MM-DD format");
    }
    parsed
}

fn is_iso_date_shape(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        })
}

fn number(errors: &mut ValidationErrors, field: &str, raw: &str) -> Option<f64> {
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            errors.push(field, "must be a number");
            None
        }
    }
}

fn clamped_f64(
    errors: &mut ValidationErrors,
    field: &str,
    raw: Option<&str>,
    default: f64,
    range: RangeInclusive<f64>,
) -> f64 {
    let Some(raw) = raw else {
        return default;
    };
    let Some(v) = number(errors, field, raw) else {
        return default;
    };
    let clamped = v.clamp(*range.start(), *range.end());
    if clamped != v {
        tracing::debug!(field, value = v, clamped, "numeric parameter clamped");
    }
    clamped
}

fn clamped_u32(
    errors: &mut ValidationErrors,
    field: &str,
    raw: Option<&str>,
    default: u32,
    range: RangeInclusive<u32>,
) -> u32 {
    let lo = f64::from(*range.start());
    let hi = f64::from(*range.end());
    clamped_f64(errors, field, raw, f64::from(default), lo..=hi).round() as u32
}

/// The configurator percent-encodes goal names before they enter the query, so they arrive
/// encoded twice. Undo the inner layer; keep the text as-is when it is not valid UTF-8.
fn decode_goal_name(raw: &str) -> String {
    if !raw.contains('%') {
        return raw.to_owned();
    }
    percent_decode_str(raw)
        .decode_utf8()
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_owned())
}

/// Characters XML 1.0 cannot carry, even escaped.
fn is_markup_illegal(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}'
    )
}

#[cfg(test)]
#[path = "../../tests/unit/request/validate.rs"]
mod tests;
