use super::*;

#[test]
fn lookup_is_case_insensitive() {
    let d = find_device("  iphone 17 PRO max ").unwrap();
    assert_eq!((d.width, d.height), (1320, 2868));
    assert_eq!(d.clock_fraction, 0.18);
    assert!(find_device("Nokia 3310").is_none());
}

#[test]
fn default_matches_request_defaults_of_the_configurator() {
    let d = default_device();
    assert_eq!(d.name, "iPhone 17");
    assert_eq!((d.width, d.height, d.clock_fraction), (1179, 2556, 0.18));
}

#[test]
fn catalog_is_grouped_and_valid() {
    assert_eq!(devices().len(), 18);
    assert_eq!(devices_in(DeviceCategory::IPhone).count(), 9);
    assert_eq!(devices_in(DeviceCategory::Android).count(), 6);
    assert_eq!(devices_in(DeviceCategory::IPad).count(), 3);
    for d in devices() {
        assert!((300..=8000).contains(&d.width) && (300..=8000).contains(&d.height));
        assert!((0.0..=0.5).contains(&d.clock_fraction));
        assert_eq!(find_device(d.name).map(|f| f.name), Some(d.name));
    }
}

#[test]
fn ipads_reserve_the_least_clock_space() {
    assert!(devices_in(DeviceCategory::IPad).all(|d| d.clock_fraction == 0.05));
    assert_eq!(DeviceCategory::IPad.label(), "iPad");
}
