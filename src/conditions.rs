use serde::{Deserialize, Serialize};

/// Display condition shown on the dashboard. The provider's range-coded
/// weather ids collapse into this closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    Clear,
    PartlyCloudy,
    Cloudy,
    Rain,
    Snow,
    Windy,
    Stormy,
}

impl Condition {
    /// Map an OpenWeather condition code to a display condition.
    ///
    /// Total over all integers: codes outside the documented ranges
    /// (including the 400 gap and 900+) fall back to `PartlyCloudy`.
    pub fn classify(code: i64) -> Self {
        match code {
            200..=299 => Condition::Stormy,
            // Drizzle and rain share an icon
            300..=399 | 500..=599 => Condition::Rain,
            600..=699 => Condition::Snow,
            // Atmosphere group (mist, haze, dust, ...)
            700..=799 => Condition::Windy,
            800 => Condition::Clear,
            801 => Condition::PartlyCloudy,
            802..=804 => Condition::Cloudy,
            _ => Condition::PartlyCloudy,
        }
    }

    /// Font Awesome glyph name the page uses for this condition.
    pub fn icon(self) -> &'static str {
        match self {
            Condition::Clear => "sun",
            Condition::PartlyCloudy => "cloud-sun",
            Condition::Cloudy => "cloud",
            Condition::Rain => "cloud-rain",
            Condition::Snow => "snowflake",
            Condition::Windy => "wind",
            Condition::Stormy => "bolt",
        }
    }
}
