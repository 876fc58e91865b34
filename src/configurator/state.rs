use chrono::NaiveDate;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{
    color::{contrast::resolve_safe_accent, rgb::Rgb},
    configurator::devices::{DevicePreset, default_device},
    foundation::math::fmt_num,
    i18n::Language,
    request::{
        model::VisualizationType,
        validate::{DEFAULT_GOAL_NAME, DEFAULT_LIFESPAN_YEARS},
    },
};

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Snapshot of the configurator form. Never mutated; [`reduce`](Self::reduce) returns a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfiguratorState {
    /// Chosen visualization, if any.
    pub visualization: Option<VisualizationType>,
    /// Two-letter country code, if chosen.
    pub country: Option<String>,
    /// Background color.
    pub background: Rgb,
    /// Accent actually shown, after contrast correction.
    pub accent: Rgb,
    /// Accent the user picked.
    pub original_accent: Rgb,
    /// Canvas width.
    pub width: u32,
    /// Canvas height.
    pub height: u32,
    /// Share of height reserved for the clock.
    pub clock_fraction: f64,
    /// Wallpaper language.
    pub language: Language,
    /// Birth date for the life calendar.
    pub date_of_birth: Option<NaiveDate>,
    /// Expected lifespan in years.
    pub lifespan_years: u32,
    /// Target date for the goal countdown.
    pub goal_date: Option<NaiveDate>,
    /// Goal label.
    pub goal_name: String,
    /// Name of the selected device preset.
    pub device: Option<&'static str>,
}

impl Default for ConfiguratorState {
    fn default() -> Self {
        let device = default_device();
        Self {
            visualization: None,
            country: None,
            background: Rgb::BLACK,
            accent: Rgb::WHITE,
            original_accent: Rgb::WHITE,
            width: device.width,
            height: device.height,
            clock_fraction: device.clock_fraction,
            language: Language::default(),
            date_of_birth: None,
            lifespan_years: DEFAULT_LIFESPAN_YEARS,
            goal_date: None,
            goal_name: DEFAULT_GOAL_NAME.to_owned(),
            device: None,
        }
    }
}

/// One user interaction.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfiguratorAction {
    /// Pick a visualization card.
    SelectType(VisualizationType),
    /// Pick a country.
    SelectCountry(String),
    /// Change the background color.
    SetBackground(Rgb),
    /// Change the accent color.
    SetAccent(Rgb),
    /// Apply a background/accent preset pair.
    ApplyPreset {
        /// Preset background.
        background: Rgb,
        /// Preset accent.
        accent: Rgb,
    },
    /// Adopt a device's resolution and clock space.
    SelectDevice(DevicePreset),
    /// Change the wallpaper language.
    SetLanguage(Language),
    /// Set or clear the birth date.
    SetDateOfBirth(Option<NaiveDate>),
    /// Set the lifespan; `0` restores the default.
    SetLifespan(u32),
    /// Set or clear the goal date.
    SetGoalDate(Option<NaiveDate>),
    /// Set the goal label; blank restores the default.
    SetGoalName(String),
}

impl ConfiguratorState {
    /// Apply `action`, then re-derive the shown accent from the background and the user's pick.
    pub fn reduce(&self, action: ConfiguratorAction) -> Self {
        let mut next = self.clone();
        match action {
            ConfiguratorAction::SelectType(kind) => next.visualization = Some(kind),
            ConfiguratorAction::SelectCountry(code) => {
                next.country = Some(code.trim().to_ascii_lowercase());
            }
            ConfiguratorAction::SetBackground(bg) => next.background = bg,
            ConfiguratorAction::SetAccent(accent) => next.original_accent = accent,
            ConfiguratorAction::ApplyPreset { background, accent } => {
                next.background = background;
                next.original_accent = accent;
            }
            ConfiguratorAction::SelectDevice(device) => {
                next.width = device.width;
                next.height = device.height;
                next.clock_fraction = device.clock_fraction;
                next.device = Some(device.name);
            }
            ConfiguratorAction::SetLanguage(lang) => next.language = lang,
            ConfiguratorAction::SetDateOfBirth(dob) => next.date_of_birth = dob,
            ConfiguratorAction::SetLifespan(0) => next.lifespan_years = DEFAULT_LIFESPAN_YEARS,
            ConfiguratorAction::SetLifespan(years) => next.lifespan_years = years,
            ConfiguratorAction::SetGoalDate(date) => next.goal_date = date,
            ConfiguratorAction::SetGoalName(name) => {
                next.goal_name = if name.trim().is_empty() {
                    DEFAULT_GOAL_NAME.to_owned()
                } else {
                    name
                };
            }
        }
        next.accent = resolve_safe_accent(next.background, next.original_accent);
        next
    }

    /// Query string for the wallpaper endpoint, without a leading `?`.
    ///
    /// `None` until both a visualization and a country are chosen.
    pub fn to_query(&self) -> Option<String> {
        let kind = self.visualization?;
        let country = self.country.as_deref()?;

        let mut q = form_urlencoded::Serializer::new(String::new());
        q.append_pair("country", &country.to_ascii_lowercase())
            .append_pair("type", kind.code())
            .append_pair("bg", &self.background.hex_digits())
            .append_pair("accent", &self.accent.hex_digits())
            .append_pair("width", &self.width.to_string())
            .append_pair("height", &self.height.to_string())
            .append_pair("clockHeight", &fmt_num(self.clock_fraction))
            .append_pair("lang", self.language.code());

        match kind {
            VisualizationType::Year => {}
            VisualizationType::Life => {
                if let Some(dob) = self.date_of_birth {
                    q.append_pair("dob", &dob.format("%Y-%m-%d").to_string());
                }
                q.append_pair("lifespan", &self.lifespan_years.to_string());
            }
            VisualizationType::Goal => {
                if let Some(goal) = self.goal_date {
                    q.append_pair("goal", &goal.format("%Y-%m-%d").to_string());
                }
                if !self.goal_name.is_empty() {
                    let encoded = utf8_percent_encode(&self.goal_name, URI_COMPONENT).to_string();
                    q.append_pair("goalName", &encoded);
                }
            }
        }
        Some(q.finish())
    }

    /// Full wallpaper URL under `base` (trailing slashes ignored).
    pub fn to_url(&self, base: &str) -> Option<String> {
        let query = self.to_query()?;
        Some(format!("{}/generate?{query}", base.trim_end_matches('/')))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/configurator/state.rs"]
mod tests;
