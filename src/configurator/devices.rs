/// Device family, used to group presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeviceCategory {
    /// Apple phones.
    IPhone,
    /// Android phones.
    Android,
    /// Apple tablets.
    IPad,
}

impl DeviceCategory {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::IPhone => "iPhone",
            Self::Android => "Android",
            Self::IPad => "iPad",
        }
    }
}

/// Screen preset for one device (or several sharing a resolution).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DevicePreset {
    /// Marketing name.
    pub name: &'static str,
    /// Family.
    pub category: DeviceCategory,
    /// Native width in pixels.
    pub width: u32,
    /// Native height in pixels.
    pub height: u32,
    /// Share of height taken by the lock-screen clock.
    pub clock_fraction: f64,
}

const fn preset(
    name: &'static str,
    category: DeviceCategory,
    width: u32,
    height: u32,
    clock_fraction: f64,
) -> DevicePreset {
    DevicePreset {
        name,
        category,
        width,
        height,
        clock_fraction,
    }
}

use DeviceCategory::{Android, IPad, IPhone};

static DEVICES: &[DevicePreset] = &[
    preset("iPhone 17 Pro Max", IPhone, 1320, 2868, 0.18),
    preset("iPhone 17 Pro", IPhone, 1206, 2622, 0.18),
    preset("iPhone 17", IPhone, 1179, 2556, 0.18),
    preset("iPhone 14 Pro Max / 15 Plus / 15 Pro Max / 16 Plus", IPhone, 1290, 2796, 0.18),
    preset("iPhone 14 Pro / 15 / 15 Pro / 16", IPhone, 1179, 2556, 0.18),
    preset("iPhone 13 Pro Max / 14 Plus", IPhone, 1284, 2778, 0.25),
    preset("iPhone 13 / 13 Pro / 14", IPhone, 1170, 2532, 0.25),
    preset("iPhone 13 mini", IPhone, 1080, 2340, 0.25),
    preset("iPhone SE (3rd gen)", IPhone, 750, 1334, 0.12),
    preset("Samsung Galaxy S24 Ultra", Android, 1440, 3120, 0.10),
    preset("Samsung Galaxy S24+", Android, 1440, 3120, 0.10),
    preset("Samsung Galaxy S24", Android, 1080, 2340, 0.10),
    preset("Google Pixel 9 Pro XL", Android, 1344, 2992, 0.10),
    preset("Google Pixel 9 Pro", Android, 1280, 2856, 0.10),
    preset("Google Pixel 9", Android, 1080, 2424, 0.10),
    preset("iPad Pro 13\"", IPad, 2064, 2752, 0.05),
    preset("iPad Pro 11\"", IPad, 1668, 2388, 0.05),
    preset("iPad Air", IPad, 1640, 2360, 0.05),
];

/// Every preset, newest iPhones first.
pub fn devices() -> &'static [DevicePreset] {
    DEVICES
}

/// Presets in `category`, in catalog order.
pub fn devices_in(category: DeviceCategory) -> impl Iterator<Item = &'static DevicePreset> {
    DEVICES.iter().filter(move |d| d.category == category)
}

/// Look a preset up by name, ignoring ASCII case and surrounding whitespace.
pub fn find_device(name: &str) -> Option<&'static DevicePreset> {
    let name = name.trim();
    DEVICES.iter().find(|d| d.name.eq_ignore_ascii_case(name))
}

/// Preset used before the user picks one.
pub fn default_device() -> &'static DevicePreset {
    &DEVICES[2]
}

#[cfg(test)]
#[path = "../../tests/unit/configurator/devices.rs"]
mod tests;
