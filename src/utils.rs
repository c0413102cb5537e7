use chrono::{DateTime, FixedOffset};

/// Convert wind speed from the provider's m/s to whole mph for display.
pub fn ms_to_mph(ms: f64) -> i64 {
    (ms * 2.237).round() as i64
}

/// Locale-style clock time, e.g. "6:45 AM". Used for sunrise/sunset.
pub fn format_clock(time: DateTime<FixedOffset>) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Hour-only label for the hourly strip, e.g. "5 PM".
pub fn format_hour_label(time: DateTime<FixedOffset>) -> String {
    time.format("%-I %p").to_string()
}

/// Clothing hint shown under the current conditions.
pub fn clothing_for(temp_c: f64) -> &'static str {
    if temp_c < 0.0 {
        "Heavy coat"
    } else if temp_c < 10.0 {
        "Warm coat"
    } else if temp_c < 15.0 {
        "Jacket"
    } else if temp_c < 20.0 {
        "Light jacket"
    } else if temp_c < 25.0 {
        "Sweater"
    } else {
        "T-shirt"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_wind_conversion() {
        assert_eq!(ms_to_mph(10.0), 22); // 22.37 rounds down
        assert_eq!(ms_to_mph(0.0), 0);
        assert_eq!(ms_to_mph(5.0), 11); // 11.185
    }

    #[test]
    fn test_format_clock() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let morning = offset.with_ymd_and_hms(2025, 6, 1, 6, 5, 0).unwrap();
        assert_eq!(format_clock(morning), "6:05 AM");
        let evening = offset.with_ymd_and_hms(2025, 6, 1, 21, 30, 0).unwrap();
        assert_eq!(format_clock(evening), "9:30 PM");
    }

    #[test]
    fn test_format_hour_label() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let afternoon = offset.with_ymd_and_hms(2025, 6, 1, 17, 0, 0).unwrap();
        assert_eq!(format_hour_label(afternoon), "5 PM");
        let midnight = offset.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(format_hour_label(midnight), "12 AM");
    }

    #[test]
    fn test_clothing_bands() {
        assert_eq!(clothing_for(-5.0), "Heavy coat");
        assert_eq!(clothing_for(5.0), "Warm coat");
        assert_eq!(clothing_for(12.0), "Jacket");
        assert_eq!(clothing_for(17.0), "Light jacket");
        assert_eq!(clothing_for(22.0), "Sweater");
        assert_eq!(clothing_for(30.0), "T-shirt");
    }
}
