use chrono::NaiveDate;

use super::*;
use crate::{
    color::rgb::Rgb,
    foundation::core::Canvas,
    request::validate::{parse_query, validate_params},
    scene::{document::DocumentBuilder, generate},
};

fn render(query: &str) -> String {
    let req = validate_params(parse_query(query)).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    to_svg(&generate(&req, today)).unwrap()
}

fn arc_doc(sweep_deg: f64) -> String {
    let mut b = DocumentBuilder::new(Canvas::new(200, 200), Rgb::BLACK);
    b.push(Primitive::Arc {
        center: Point::new(100.0, 100.0),
        radius: 50.0,
        start_deg: 0.0,
        sweep_deg,
        stroke: Paint::opaque(Rgb::WHITE),
        stroke_width: 10.0,
    });
    to_svg(&b.finish()).unwrap()
}

#[test]
fn header_matches_canvas() {
    let svg = render("width=1179&height=2556&bg=111114");
    assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(svg.contains(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="1179" height="2556" viewBox="0 0 1179 2556">"#
    ));
    assert!(svg.contains(r##"<rect x="0" y="0" width="1179" height="2556" fill="#111114"/>"##));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn year_emits_one_circle_per_day() {
    let svg = render("");
    assert_eq!(svg.matches("<circle").count(), 365);
    assert!(svg.contains(r#"fill-opacity="0.75""#));
    assert!(svg.contains(r#"fill-opacity="0.12""#));
}

#[test]
fn caption_runs_become_tspans() {
    let svg = render("accent=FFD700");
    assert!(svg.contains(r##"<tspan font-weight="500" fill="#FFD700">76 days left</tspan>"##));
    assert!(svg.contains(
        "<tspan font-family=\"&apos;SF Mono&apos;, Menlo, &apos;Courier New&apos;, monospace\">"
    ));
    assert!(svg.contains(r#"dominant-baseline="middle""#));
}

#[test]
fn goal_name_is_escaped() {
    let svg = render("type=goal&goalName=%3Cb%3ETom%20%26%20Jerry's%22");
    assert!(svg.contains("&lt;b&gt;Tom &amp; Jerry&apos;s&quot;"));
    assert!(!svg.contains("<b>"));
}

#[test]
fn half_arc_is_a_clockwise_path() {
    let svg = arc_doc(180.0);
    assert!(svg.contains(r#"<path d="M 100 50 A 50 50 0 0 1 100 150" fill="none""#));
    assert!(svg.contains(r#"stroke-linecap="round""#));

    let svg = arc_doc(270.0);
    assert!(svg.contains(r#"A 50 50 0 1 1 50 100""#));
}

#[test]
fn full_and_empty_arcs() {
    let full = arc_doc(360.0);
    assert!(!full.contains("<path"));
    assert!(full.contains(r##"<circle cx="100" cy="100" r="50" fill="none" stroke="#FFFFFF""##));

    let empty = arc_doc(0.0);
    assert!(!empty.contains("<path") && !empty.contains("<circle"));
}

#[test]
fn serialization_is_deterministic() {
    let q = "type=life&dob=1990-05-17&bg=F5F5F7&accent=0A84FF";
    assert_eq!(render(q), render(q));
}

#[test]
fn escape_covers_xml_specials() {
    assert_eq!(escape(r#"a&b<c>d"e'f"#), "a&amp;b&lt;c&gt;d&quot;e&apos;f");
    assert_eq!(escape("日本語"), "日本語");
}
