use chrono::NaiveDate;

use super::*;
use crate::{
    foundation::error::LifeGridError,
    render::svg::to_svg,
    request::validate::{parse_query, validate_params},
    scene::generate,
};

fn no_fonts() -> Rasterizer {
    Rasterizer::new(&RasterOptions {
        load_system_fonts: false,
        ..RasterOptions::default()
    })
}

#[test]
fn options_default_and_partial_json() {
    let parsed: RasterOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed, RasterOptions::default());
    assert_eq!(parsed.default_font_family, "Inter");

    let parsed: RasterOptions =
        serde_json::from_str(r#"{"load_system_fonts": false, "font_dirs": ["fonts"]}"#).unwrap();
    assert!(!parsed.load_system_fonts);
    assert_eq!(parsed.font_dirs, vec![PathBuf::from("fonts")]);

    assert!(serde_json::from_str::<RasterOptions>(r#"{"dpi": 96}"#).is_err());
}

#[test]
fn missing_config_file_is_internal_error() {
    let err = RasterOptions::from_json_file(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, LifeGridError::Other(_)));
    assert!(format!("{err:#}").contains("read raster config"));
}

#[test]
fn rasterizes_wallpaper_to_png_of_canvas_size() {
    let req = validate_params(parse_query("width=300&height=600&bg=112233&accent=FFD700")).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
    let doc = generate(&req, today);
    let svg = to_svg(&doc).unwrap();

    let png = no_fonts().rasterize_png(&svg, doc.canvas()).unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let img = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (300, 600));
    assert_eq!(img.get_pixel(0, 0).0, [0x11, 0x22, 0x33, 0xFF]);
    assert_eq!(img.get_pixel(299, 599).0, [0x11, 0x22, 0x33, 0xFF]);
}

#[test]
fn malformed_markup_is_render_error() {
    let err = no_fonts()
        .rasterize_png("<svg", Canvas::new(300, 300))
        .unwrap_err();
    assert!(matches!(err, LifeGridError::Render(_)));
    assert_eq!(err.status_code(), 500);
}

#[test]
fn unreadable_font_dir_is_skipped() {
    let r = Rasterizer::new(&RasterOptions {
        load_system_fonts: false,
        font_dirs: vec![PathBuf::from("/definitely/not/here")],
        ..RasterOptions::default()
    });
    assert_eq!(r.face_count(), 0);
}
