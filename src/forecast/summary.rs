//! Merges the current-conditions reading with the forecast series into the
//! single summary block at the top of the dashboard, and composes the full
//! report consumed by the page.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::Serialize;

use crate::conditions::Condition;
use crate::forecast::aggregate::{daily_summaries, hourly_entries, DailySummary, HourlyEntry};
use crate::forecast::types::{CurrentConditions, ForecastSeries};
use crate::utils::{clothing_for, format_clock, ms_to_mph};

/// The page has seven day slots.
pub const DAILY_SLOTS: usize = 7;

/// Display-ready current conditions, replaced wholesale on every search.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherSummary {
    /// "City" or "City, CC".
    pub location: String,
    pub current_temp: i64,
    pub feels_like: i64,
    /// Daily maximum precipitation probability, 0 when no same-day samples.
    pub rain_chance_percent: u8,
    pub wind_speed_mph: i64,
    pub highest: i64,
    pub lowest: i64,
    pub sunrise: String,
    pub sunset: String,
    pub condition: Condition,
    pub icon: &'static str,
    pub clothing: &'static str,
}

/// Everything one search renders: summary, day slots, hourly strip.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    pub summary: WeatherSummary,
    pub daily: Vec<DailySummary>,
    pub hourly: Vec<HourlyEntry>,
    pub generated_at: DateTime<Utc>,
}

pub fn build_report(
    current: &CurrentConditions,
    forecast: &ForecastSeries,
    now: DateTime<Utc>,
) -> WeatherReport {
    let offset = current.local_offset();
    let mut daily = daily_summaries(&forecast.list, now, offset);
    daily.truncate(DAILY_SLOTS);

    WeatherReport {
        summary: build_summary(current, forecast, now),
        daily,
        hourly: hourly_entries(&forecast.list, now, offset),
        generated_at: now,
    }
}

/// Seed the daily extrema from the current reading, then widen them with
/// every same-day forecast sample. Widening is monotonic: forecast samples
/// can only push `highest` up and `lowest` down, never back toward the
/// current reading.
pub fn build_summary(
    current: &CurrentConditions,
    forecast: &ForecastSeries,
    now: DateTime<Utc>,
) -> WeatherSummary {
    let offset = current.local_offset();
    let today = now.with_timezone(&offset).date_naive();

    let mut highest = current.main.temp_max;
    let mut lowest = current.main.temp_min;
    let mut rain_prob: f64 = 0.0;

    for sample in &forecast.list {
        if sample.local_time(offset).date_naive() != today {
            continue;
        }
        highest = highest.max(sample.main.temp_max);
        lowest = lowest.min(sample.main.temp_min);
        rain_prob = rain_prob.max(sample.pop);
    }

    let location = match current.sys.country.as_deref() {
        Some(country) => format!("{}, {}", current.name, country),
        None => current.name.clone(),
    };

    let condition = current.condition();

    WeatherSummary {
        location,
        current_temp: current.main.temp.round() as i64,
        feels_like: current.main.feels_like.round() as i64,
        rain_chance_percent: (rain_prob * 100.0).round() as u8,
        wind_speed_mph: ms_to_mph(current.wind.speed),
        highest: highest.round() as i64,
        lowest: lowest.round() as i64,
        sunrise: format_clock(local_time(current.sys.sunrise, offset)),
        sunset: format_clock(local_time(current.sys.sunset, offset)),
        condition,
        icon: condition.icon(),
        clothing: clothing_for(current.main.temp),
    }
}

fn local_time(ts: i64, offset: FixedOffset) -> DateTime<FixedOffset> {
    Utc.timestamp_opt(ts, 0)
        .single()
        .unwrap_or_else(Utc::now)
        .with_timezone(&offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::mock;
    use chrono::TimeZone;

    const HOUR: i64 = 3600;

    /// 2025-06-15 10:00:00 UTC.
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 10, 0, 0).unwrap()
    }

    #[test]
    fn extrema_widen_monotonically() {
        let mut current = mock::current_conditions("Paris", now().timestamp(), 15.0, 800);
        current.main.temp_max = 20.0;
        current.main.temp_min = 10.0;

        let forecast = mock::forecast_series(vec![
            mock::sample_with_extremes(now().timestamp() + HOUR, 20.0, 5.0, 25.0, 800, 0.0),
            mock::sample_with_extremes(now().timestamp() + 4 * HOUR, 15.0, 8.0, 18.0, 800, 0.0),
        ]);

        let summary = build_summary(&current, &forecast, now());

        assert_eq!(summary.highest, 25);
        assert_eq!(summary.lowest, 5);
    }

    #[test]
    fn other_day_samples_do_not_affect_extrema() {
        let current = mock::current_conditions("Paris", now().timestamp(), 15.0, 800);
        let forecast = mock::forecast_series(vec![mock::sample_with_extremes(
            now().timestamp() + 24 * HOUR,
            40.0,
            -10.0,
            40.0,
            800,
            1.0,
        )]);

        let summary = build_summary(&current, &forecast, now());

        assert_eq!(summary.highest, 18); // temp + 3 from the current reading
        assert_eq!(summary.lowest, 12);
        assert_eq!(summary.rain_chance_percent, 0);
    }

    #[test]
    fn rain_chance_is_daily_maximum() {
        let current = mock::current_conditions("Paris", now().timestamp(), 15.0, 800);
        let forecast = mock::forecast_series(vec![
            mock::sample(now().timestamp() + HOUR, 15.0, 500, 0.2),
            mock::sample(now().timestamp() + 4 * HOUR, 15.0, 500, 0.65),
            mock::sample(now().timestamp() + 7 * HOUR, 15.0, 500, 0.3),
        ]);

        let summary = build_summary(&current, &forecast, now());

        assert_eq!(summary.rain_chance_percent, 65);
    }

    #[test]
    fn summary_derives_display_fields() {
        let current = mock::current_conditions("Paris", now().timestamp(), 20.4, 800);
        let forecast = mock::forecast_series(vec![]);

        let summary = build_summary(&current, &forecast, now());

        assert_eq!(summary.location, "Paris, FR");
        assert_eq!(summary.current_temp, 20);
        assert_eq!(summary.feels_like, 19);
        assert_eq!(summary.wind_speed_mph, 11); // 5 m/s
        assert_eq!(summary.condition, Condition::Clear);
        assert_eq!(summary.icon, "sun");
        assert_eq!(summary.clothing, "Sweater");
        assert_eq!(summary.sunrise, "6:00 AM");
        assert_eq!(summary.sunset, "9:00 PM");
    }

    #[test]
    fn location_omits_missing_country() {
        let mut current = mock::current_conditions("Atlantis", now().timestamp(), 20.0, 800);
        current.sys.country = None;

        let summary = build_summary(&current, &mock::forecast_series(vec![]), now());

        assert_eq!(summary.location, "Atlantis");
    }

    #[test]
    fn report_truncates_daily_to_seven_slots() {
        let current = mock::current_conditions("Paris", now().timestamp(), 20.0, 800);
        let samples: Vec<_> = (0..10)
            .map(|day| mock::sample(now().timestamp() + day * 24 * HOUR, 20.0, 800, 0.0))
            .collect();

        let report = build_report(&current, &mock::forecast_series(samples), now());

        assert_eq!(report.daily.len(), DAILY_SLOTS);
        assert_eq!(report.hourly.len(), 9); // ten samples, index 0 is not strictly future
    }
}
