use super::*;

fn sample_colors() -> Vec<Rgb> {
    let mut out = Vec::new();
    for r in [0u8, 17, 64, 128, 200, 240, 255] {
        for g in [0u8, 90, 180, 255] {
            for b in [0u8, 20, 128, 255] {
                out.push(Rgb::new(r, g, b));
            }
        }
    }
    out
}

#[test]
fn luminance_endpoints() {
    assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
    assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-12);
    let gray = relative_luminance(Rgb::new(128, 128, 128));
    assert!((gray - 0.2158).abs() < 1e-3);
}

#[test]
fn contrast_ratio_is_symmetric_and_at_least_one() {
    assert!((contrast_ratio(Rgb::BLACK, Rgb::WHITE) - 21.0).abs() < 1e-9);
    for a in sample_colors().into_iter().step_by(7) {
        for b in sample_colors().into_iter().step_by(11) {
            let ab = contrast_ratio(a, b);
            assert!(ab >= 1.0);
            assert!((ab - contrast_ratio(b, a)).abs() < 1e-12);
        }
    }
}

#[test]
fn near_black_or_white_thresholds() {
    assert!(is_near_black_or_white(Rgb::BLACK));
    assert!(is_near_black_or_white(Rgb::WHITE));
    assert!(is_near_black_or_white(Rgb::new(0x11, 0x11, 0x14)));
    assert!(!is_near_black_or_white(Rgb::new(0xFF, 0xD7, 0x00)));
    assert!(!is_near_black_or_white(Rgb::new(128, 128, 128)));
}

#[test]
fn black_accent_on_black_background_becomes_white() {
    assert_eq!(resolve_safe_accent(Rgb::BLACK, Rgb::BLACK), Rgb::WHITE);
    assert_eq!(
        resolve_safe_accent(Rgb::new(0x11, 0x11, 0x14), Rgb::new(0x05, 0x05, 0x05)),
        Rgb::WHITE
    );
}

#[test]
fn white_accent_on_white_background_becomes_black() {
    assert_eq!(resolve_safe_accent(Rgb::WHITE, Rgb::WHITE), Rgb::BLACK);
    assert_eq!(
        resolve_safe_accent(Rgb::new(0xF5, 0xF5, 0xF7), Rgb::new(0xFA, 0xFA, 0xFA)),
        Rgb::BLACK
    );
}

#[test]
fn colorful_accents_are_never_overridden() {
    let red = Rgb::new(0xE5, 0x39, 0x35);
    assert_eq!(resolve_safe_accent(Rgb::new(0xE0, 0x30, 0x30), red), red);
    let teal = Rgb::new(0x00, 0x96, 0x88);
    assert_eq!(resolve_safe_accent(Rgb::WHITE, teal), teal);
}

#[test]
fn safe_accent_is_idempotent() {
    for bg in sample_colors() {
        for accent in sample_colors().into_iter().step_by(5) {
            let once = resolve_safe_accent(bg, accent);
            assert_eq!(resolve_safe_accent(bg, once), once, "bg={bg} accent={accent}");
        }
    }
}

#[test]
fn accents_with_enough_contrast_are_kept() {
    for bg in sample_colors() {
        let accent = if relative_luminance(bg) > 0.5 {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        };
        if contrast_ratio(bg, accent) >= MIN_ACCENT_CONTRAST {
            let resolved = resolve_safe_accent(bg, accent);
            assert_eq!(resolved, accent);
            assert_eq!(contrast_ratio(bg, resolved), contrast_ratio(bg, accent));
        }
    }
}

#[test]
fn overlay_follows_background_luminance() {
    let dark = contrasting_overlay(Rgb::new(0x11, 0x11, 0x14), 0.5);
    assert_eq!(dark.rgb, Rgb::WHITE);
    assert_eq!(dark.alpha, 0.5);

    let light = contrasting_overlay(Rgb::new(0xF0, 0xF0, 0xF0), 0.12);
    assert_eq!(light.rgb, Rgb::BLACK);

    assert_eq!(contrasting_overlay(Rgb::BLACK, 2.0).alpha, 1.0);
}
