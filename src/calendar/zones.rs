use chrono_tz::Tz;

/// Country code used when the request names none.
pub const DEFAULT_COUNTRY: &str = "us";

/// Lower-case ISO country code to the IANA zone used for "today".
static COUNTRY_ZONES: &[(&str, &str)] = &[
    ("ae", "Asia/Dubai"),
    ("af", "Asia/Kabul"),
    ("al", "Europe/Tirane"),
    ("ar", "America/Argentina/Buenos_Aires"),
    ("at", "Europe/Vienna"),
    ("au", "Australia/Sydney"),
    ("bd", "Asia/Dhaka"),
    ("be", "Europe/Brussels"),
    ("br", "America/Sao_Paulo"),
    ("ca", "America/Toronto"),
    ("ch", "Europe/Zurich"),
    ("cl", "America/Santiago"),
    ("cn", "Asia/Shanghai"),
    ("co", "America/Bogota"),
    ("cz", "Europe/Prague"),
    ("de", "Europe/Berlin"),
    ("dk", "Europe/Copenhagen"),
    ("dz", "Africa/Algiers"),
    ("eg", "Africa/Cairo"),
    ("es", "Europe/Madrid"),
    ("fi", "Europe/Helsinki"),
    ("fr", "Europe/Paris"),
    ("gb", "Europe/London"),
    ("gr", "Europe/Athens"),
    ("hk", "Asia/Hong_Kong"),
    ("hr", "Europe/Zagreb"),
    ("hu", "Europe/Budapest"),
    ("id", "Asia/Jakarta"),
    ("ie", "Europe/Dublin"),
    ("il", "Asia/Jerusalem"),
    ("in", "Asia/Kolkata"),
    ("iq", "Asia/Baghdad"),
    ("ir", "Asia/Tehran"),
    ("is", "Atlantic/Reykjavik"),
    ("it", "Europe/Rome"),
    ("jp", "Asia/Tokyo"),
    ("ke", "Africa/Nairobi"),
    ("kr", "Asia/Seoul"),
    ("kw", "Asia/Kuwait"),
    ("ma", "Africa/Casablanca"),
    ("mx", "America/Mexico_City"),
    ("my", "Asia/Kuala_Lumpur"),
    ("ng", "Africa/Lagos"),
    ("nl", "Europe/Amsterdam"),
    ("no", "Europe/Oslo"),
    ("nz", "Pacific/Auckland"),
    ("pe", "America/Lima"),
    ("ph", "Asia/Manila"),
    ("pk", "Asia/Karachi"),
    ("pl", "Europe/Warsaw"),
    ("pt", "Europe/Lisbon"),
    ("qa", "Asia/Qatar"),
    ("ro", "Europe/Bucharest"),
    ("ru", "Europe/Moscow"),
    ("sa", "Asia/Riyadh"),
    ("se", "Europe/Stockholm"),
    ("sg", "Asia/Singapore"),
    ("th", "Asia/Bangkok"),
    ("tr", "Europe/Istanbul"),
    ("tw", "Asia/Taipei"),
    ("ua", "Europe/Kyiv"),
    ("us", "America/New_York"),
    ("vn", "Asia/Ho_Chi_Minh"),
    ("za", "Africa/Johannesburg"),
];

/// Zone for a two-letter country code (case-insensitive). Unknown codes resolve to UTC.
pub fn timezone_for_country(code: &str) -> Tz {
    let code = code.to_ascii_lowercase();
    let Some((_, name)) = COUNTRY_ZONES.iter().find(|(c, _)| *c == code) else {
        return Tz::UTC;
    };
    name.parse::<Tz>().unwrap_or_else(|_| {
        tracing::warn!(country = %code, zone = name, "zone missing from tz database, using UTC");
        Tz::UTC
    })
}

/// Every supported country code, sorted.
pub fn supported_countries() -> impl Iterator<Item = &'static str> {
    COUNTRY_ZONES.iter().map(|(c, _)| *c)
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/zones.rs"]
mod tests;
