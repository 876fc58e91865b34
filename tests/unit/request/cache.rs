use super::*;
use crate::request::validate::{parse_query, validate_params};

fn request(query: &str) -> WallpaperRequest {
    validate_params(parse_query(query)).unwrap()
}

#[test]
fn year_key_is_deterministic_and_normalized() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let a = request("country=US&bg=111114&accent=ffd700&width=1179&height=2556");
    let b = request("height=2556&width=1179&accent=FFD700&bg=111114&country=us&lang=en");
    let key = cache_key(&a, today).unwrap();
    assert_eq!(key, "us-year-111114-FFD700-1179x2556-c0.18-en-2026-10-16");
    assert_eq!(cache_key(&b, today).as_deref(), Some(key.as_str()));

    let ja = request("bg=111114&accent=ffd700&width=1179&height=2556&lang=ja");
    assert_ne!(cache_key(&ja, today).as_deref(), Some(key.as_str()));
}

#[test]
fn key_changes_with_the_day() {
    let req = request("");
    let d1 = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let d2 = d1.succ_opt().unwrap();
    assert_ne!(cache_key(&req, d1), cache_key(&req, d2));
}

#[test]
fn personal_types_are_never_shared() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    assert!(cache_key(&request("type=life&dob=1990-01-01"), today).is_none());
    assert!(cache_key(&request("type=goal&goalName=Marathon"), today).is_none());
    assert_eq!(cache_control(VisualizationType::Life), "private, no-store");
    assert_eq!(cache_control(VisualizationType::Year), "public, max-age=86400");
}

#[test]
fn key_precision_matches_rendered_clock_space() {
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let a = request("clockHeight=0.1801");
    let b = request("clockHeight=0.1804");
    assert_eq!(a.clock_fraction, b.clock_fraction);
    assert_eq!(cache_key(&a, today), cache_key(&b, today));

    let c = request("clockHeight=0.1806");
    assert_ne!(a.clock_fraction, c.clock_fraction);
    assert_ne!(cache_key(&a, today), cache_key(&c, today));
}
