//! Collapses the provider's 3-hour forecast samples into the dashboard's
//! two views: one representative sample per calendar day, and a rolling
//! strip of the next twelve future samples.

use chrono::{DateTime, FixedOffset, NaiveDate, Timelike, Utc};
use serde::Serialize;

use crate::conditions::Condition;
use crate::forecast::types::RawSample;
use crate::utils::format_hour_label;

/// Cap on the hourly strip length.
pub const HOURLY_WINDOW: usize = 12;

/// Representative forecast for one location-local calendar day.
#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    /// Short weekday name for the day slot, e.g. "Tue".
    pub day_label: String,
    pub timestamp: i64,
    pub temp: f64,
    pub condition: Condition,
    pub icon: &'static str,
    /// Selection metric: whole hours between the sample and local noon.
    #[serde(skip)]
    noon_distance: u32,
}

/// One slot in the hourly strip.
#[derive(Debug, Clone, Serialize)]
pub struct HourlyEntry {
    pub time: DateTime<FixedOffset>,
    pub time_label: String,
    pub temp: i64,
    pub condition: Condition,
    pub icon: &'static str,
    pub rain_chance_percent: u8,
    /// True only for the sample at raw index 0. The provider's first sample
    /// can lie in the past, in which case no emitted entry carries the flag.
    pub is_current: bool,
}

/// Reduce the sample sequence to at most one summary per calendar day,
/// keeping the sample closest to local noon and skipping days already past.
///
/// Output order follows the first occurrence of each date in the input.
/// An empty input yields an empty vec and a diagnostic log, never an error.
pub fn daily_summaries(
    samples: &[RawSample],
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> Vec<DailySummary> {
    if samples.is_empty() {
        tracing::warn!("daily aggregation received no forecast samples");
        return Vec::new();
    }

    let today = now.with_timezone(&offset).date_naive();
    let mut days: Vec<DailySummary> = Vec::new();

    for sample in samples {
        let local = sample.local_time(offset);
        let date = local.date_naive();
        if date < today {
            continue;
        }

        let noon_distance = local.hour().abs_diff(12);
        let condition = sample.condition();
        let candidate = DailySummary {
            date,
            day_label: local.format("%a").to_string(),
            timestamp: sample.dt,
            temp: sample.main.temp,
            condition,
            icon: condition.icon(),
            noon_distance,
        };

        match days.iter_mut().find(|d| d.date == date) {
            Some(existing) => {
                if noon_distance < existing.noon_distance {
                    *existing = candidate;
                }
            }
            None => days.push(candidate),
        }
    }

    days
}

/// Keep the next `HOURLY_WINDOW` strictly-future samples in input order.
pub fn hourly_entries(
    samples: &[RawSample],
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> Vec<HourlyEntry> {
    if samples.is_empty() {
        tracing::warn!("hourly aggregation received no forecast samples");
        return Vec::new();
    }

    let mut entries = Vec::new();

    for (index, sample) in samples.iter().enumerate() {
        if entries.len() >= HOURLY_WINDOW {
            break;
        }
        if sample.dt <= now.timestamp() {
            continue;
        }

        let local = sample.local_time(offset);
        let condition = sample.condition();
        entries.push(HourlyEntry {
            time: local,
            time_label: format_hour_label(local),
            temp: sample.main.temp.round() as i64,
            condition,
            icon: condition.icon(),
            rain_chance_percent: (sample.pop * 100.0).round() as u8,
            is_current: index == 0,
        });
    }

    entries
}
