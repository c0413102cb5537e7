//! Deterministic provider payload builders shared by unit and API tests.

use crate::forecast::types::{
    Coord, CurrentConditions, CurrentMain, CurrentSys, ForecastSeries, RawSample, SampleMain, Wind,
    WeatherCode,
};

/// Forecast sample with symmetric min/max around `temp`.
pub fn sample(dt: i64, temp: f64, code: i64, pop: f64) -> RawSample {
    sample_with_extremes(dt, temp, temp - 2.0, temp + 2.0, code, pop)
}

pub fn sample_with_extremes(
    dt: i64,
    temp: f64,
    temp_min: f64,
    temp_max: f64,
    code: i64,
    pop: f64,
) -> RawSample {
    RawSample {
        dt,
        main: SampleMain {
            temp,
            temp_min,
            temp_max,
        },
        weather: vec![WeatherCode { id: code }],
        pop,
    }
}

pub fn forecast_series(samples: Vec<RawSample>) -> ForecastSeries {
    ForecastSeries { list: samples }
}

/// Current conditions at a UTC location, anchored at `dt`, with sunrise at
/// 06:00 and sunset at 21:00 relative to the same day.
pub fn current_conditions(city: &str, dt: i64, temp: f64, code: i64) -> CurrentConditions {
    let midnight = dt - dt.rem_euclid(86_400);
    CurrentConditions {
        name: city.to_string(),
        dt,
        timezone: 0,
        coord: Coord {
            lat: 48.8566,
            lon: 2.3522,
        },
        main: CurrentMain {
            temp,
            feels_like: temp - 1.0,
            temp_min: temp - 3.0,
            temp_max: temp + 3.0,
        },
        weather: vec![WeatherCode { id: code }],
        wind: Wind { speed: 5.0 },
        sys: CurrentSys {
            country: Some("FR".to_string()),
            sunrise: midnight + 6 * 3600,
            sunset: midnight + 21 * 3600,
        },
    }
}
