//! Localized strings drawn into wallpapers.

use chrono::{Datelike, NaiveDate};

/// Wallpaper language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// English (default).
    #[default]
    En,
    /// Simplified Chinese.
    ZhCn,
    /// Traditional Chinese.
    ZhTw,
    /// Japanese.
    Ja,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Self; 4] = [Self::En, Self::ZhCn, Self::ZhTw, Self::Ja];

    /// Parse a query code (`en`, `zh-CN`, `zh-TW`, `ja`), case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|l| l.code().eq_ignore_ascii_case(code))
    }

    /// Canonical query code.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhCn => "zh-CN",
            Self::ZhTw => "zh-TW",
            Self::Ja => "ja",
        }
    }

    /// "N day(s) left".
    pub fn days_left(self, n: i64) -> String {
        match self {
            Self::En if n == 1 => format!("{n} day left"),
            Self::En => format!("{n} days left"),
            Self::ZhCn => format!("剩余 {n} 天"),
            Self::ZhTw => format!("剩餘 {n} 天"),
            Self::Ja => format!("残り {n} 日"),
        }
    }

    /// "N week(s) left", thousands grouped.
    pub fn weeks_left(self, n: i64) -> String {
        let g = group_thousands(n);
        match self {
            Self::En if n == 1 => format!("{g} week left"),
            Self::En => format!("{g} weeks left"),
            Self::ZhCn => format!("剩余 {g} 周"),
            Self::ZhTw => format!("剩餘 {g} 週"),
            Self::Ja => format!("残り {g} 週"),
        }
    }

    /// "P% complete".
    pub fn complete(self, percent: u32) -> String {
        match self {
            Self::En => format!("{percent}% complete"),
            Self::ZhCn => format!("进度 {percent}%"),
            Self::ZhTw => format!("進度 {percent}%"),
            Self::Ja => format!("{percent}% 完了"),
        }
    }

    /// "P% lived".
    pub fn lived(self, percent: u32) -> String {
        match self {
            Self::En => format!("{percent}% lived"),
            Self::ZhCn => format!("已度过 {percent}%"),
            Self::ZhTw => format!("已度過 {percent}%"),
            Self::Ja => format!("{percent}% 生きた"),
        }
    }

    /// Long-form date, e.g. `October 16, 2026` or `2026年10月16日`.
    pub fn long_date(self, date: NaiveDate) -> String {
        match self {
            Self::En => format!(
                "{} {}, {}",
                MONTHS_EN[date.month0() as usize],
                date.day(),
                date.year()
            ),
            Self::ZhCn | Self::ZhTw | Self::Ja => {
                format!("{}年{}月{}日", date.year(), date.month(), date.day())
            }
        }
    }
}

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[path = "../tests/unit/i18n/strings.rs"]
mod tests;
