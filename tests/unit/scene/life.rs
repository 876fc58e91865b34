use super::*;
use crate::{
    color::rgb::{Paint, Rgb},
    request::validate::{parse_query, validate_params},
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn request(query: &str) -> WallpaperRequest {
    validate_params(parse_query(query)).unwrap()
}

#[test]
fn weeks_lived_from_birth_date() {
    let p = LifeProgress::compute(Some(day(1990, 5, 17)), 80, day(2026, 10, 16));
    assert_eq!(p.total_weeks, 4160);
    assert_eq!(p.weeks_lived, 1900);
    assert_eq!(p.weeks_remaining, 2260);
    assert_eq!(p.percent, 46);
}

#[test]
fn missing_birth_date_defaults_to_25_years() {
    let today = day(2026, 10, 16);
    let p = LifeProgress::compute(None, 80, today);
    assert_eq!(p.date_of_birth, day(2001, 10, 16));
    assert_eq!(p.weeks_lived, 1304);
}

#[test]
fn lived_weeks_are_clamped() {
    let today = day(2026, 10, 16);
    let unborn = LifeProgress::compute(Some(day(2030, 1, 1)), 80, today);
    assert_eq!((unborn.weeks_lived, unborn.percent), (0, 0));

    let outlived = LifeProgress::compute(Some(day(1990, 1, 1)), 1, today);
    assert_eq!(outlived.weeks_lived, 52);
    assert_eq!((outlived.weeks_remaining, outlived.percent), (0, 100));
}

#[test]
fn one_dot_per_week_of_lifespan() {
    let req = request("type=life&dob=1990-05-17&lifespan=90&accent=FFD700&bg=111114");
    let doc = build_life(&req, day(2026, 10, 16));
    let fills: Vec<Paint> = doc
        .primitives()
        .iter()
        .filter_map(|p| match p {
            Primitive::Circle { fill, .. } => Some(*fill),
            _ => None,
        })
        .collect();
    assert_eq!(fills.len(), 90 * 52);
    let accent = Rgb::new(0xFF, 0xD7, 0x00);
    assert_eq!(fills[1900], Paint::opaque(accent));
    assert_eq!(fills[1899], Paint::with_alpha(accent, 0.75));
    assert_eq!(fills[1901], Paint::with_alpha(Rgb::WHITE, 0.06));
}

#[test]
fn caption_groups_thousands() {
    let req = request("type=life&dob=1990-05-17");
    let doc = build_life(&req, day(2026, 10, 16));
    assert_eq!(doc.texts().next().unwrap().text(), "2,260 weeks left · 46% lived");
}

#[test]
fn dots_stay_on_canvas_for_longest_lifespan() {
    let req = request("type=life&lifespan=120&width=750&height=1334&clockHeight=0.5");
    let doc = build_life(&req, day(2026, 10, 16));
    for p in doc.primitives() {
        if let Primitive::Circle { center, radius, .. } = p {
            assert!(*radius > 0.0);
            assert!(center.x >= 0.0 && center.x <= 750.0);
            assert!(center.y >= 0.0 && center.y <= 1334.0);
        }
    }
}
