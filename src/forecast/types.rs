use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::conditions::Condition;

/// Current-conditions document from `/data/2.5/weather`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub name: String,
    pub dt: i64,
    /// Shift from UTC in seconds at the resolved location.
    pub timezone: i32,
    pub coord: Coord,
    pub main: CurrentMain,
    #[serde(default)]
    pub weather: Vec<WeatherCode>,
    pub wind: Wind,
    pub sys: CurrentSys,
}

impl CurrentConditions {
    /// Location-local offset, falling back to UTC on an out-of-range shift.
    pub fn local_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.timezone).unwrap_or_else(|| FixedOffset::east_opt(0).unwrap())
    }

    pub fn condition(&self) -> Condition {
        self.weather
            .first()
            .map(|w| Condition::classify(w.id))
            .unwrap_or(Condition::PartlyCloudy)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CurrentMain {
    pub temp: f64,
    pub feels_like: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeatherCode {
    pub id: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentSys {
    pub country: Option<String>,
    pub sunrise: i64,
    pub sunset: i64,
}

/// Forecast document from `/data/2.5/forecast`: 3-hour samples for ~5 days.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSeries {
    #[serde(default)]
    pub list: Vec<RawSample>,
}

/// One 3-hour forecast sample as delivered by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSample {
    pub dt: i64,
    pub main: SampleMain,
    #[serde(default)]
    pub weather: Vec<WeatherCode>,
    /// Precipitation probability in [0, 1]; absent means 0.
    #[serde(default)]
    pub pop: f64,
}

impl RawSample {
    pub fn local_time(&self, offset: FixedOffset) -> DateTime<FixedOffset> {
        Utc.timestamp_opt(self.dt, 0)
            .single()
            .unwrap_or_else(Utc::now)
            .with_timezone(&offset)
    }

    pub fn condition(&self) -> Condition {
        self.weather
            .first()
            .map(|w| Condition::classify(w.id))
            .unwrap_or(Condition::PartlyCloudy)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SampleMain {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_list_defaults_to_empty() {
        let series: ForecastSeries = serde_json::from_str("{}").unwrap();
        assert!(series.list.is_empty());
    }

    #[test]
    fn sample_pop_defaults_to_zero() {
        let sample: RawSample = serde_json::from_str(
            r#"{"dt": 1700000000, "main": {"temp": 10.0, "temp_min": 8.0, "temp_max": 12.0}}"#,
        )
        .unwrap();
        assert_eq!(sample.pop, 0.0);
        assert_eq!(sample.condition(), Condition::PartlyCloudy);
    }

    #[test]
    fn current_falls_back_to_utc_on_bad_offset() {
        let current: CurrentConditions = serde_json::from_str(
            r#"{
                "name": "Nowhere",
                "dt": 1700000000,
                "timezone": 999999999,
                "coord": {"lat": 0.0, "lon": 0.0},
                "main": {"temp": 1.0, "feels_like": 1.0, "temp_min": 0.0, "temp_max": 2.0},
                "weather": [{"id": 800}],
                "wind": {"speed": 1.0},
                "sys": {"country": null, "sunrise": 0, "sunset": 0}
            }"#,
        )
        .unwrap();
        assert_eq!(current.local_offset().local_minus_utc(), 0);
        assert_eq!(current.condition(), Condition::Clear);
    }
}
