use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "12hr")]
    H12,
    #[serde(rename = "24hr")]
    H24,
}

impl TimeFormat {
    pub const ALL: [Self; 2] = [Self::H12, Self::H24];

    pub fn label(self) -> &'static str {
        match self {
            Self::H12 => "12hr",
            Self::H24 => "24hr",
        }
    }
}

/// US-style date and time: `MM/DD/YYYY, h:MM:SS AM` or `MM/DD/YYYY, HH:MM:SS`.
///
/// Formats in the time zone `timestamp` carries; the UI converts to local time first.
pub fn format_date<Tz>(timestamp: &DateTime<Tz>, format: TimeFormat) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let pattern = match format {
        TimeFormat::H12 => "%m/%d/%Y, %-I:%M:%S %p",
        TimeFormat::H24 => "%m/%d/%Y, %H:%M:%S",
    };
    timestamp.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn twelve_hour_format() {
        let ts = Utc.with_ymd_and_hms(2023, 3, 7, 15, 4, 5).unwrap();
        assert_eq!(format_date(&ts, TimeFormat::H12), "03/07/2023, 3:04:05 PM");
    }

    #[test]
    fn twenty_four_hour_format() {
        let ts = Utc.with_ymd_and_hms(2023, 3, 7, 15, 4, 5).unwrap();
        assert_eq!(format_date(&ts, TimeFormat::H24), "03/07/2023, 15:04:05");
    }

    #[test]
    fn midnight_and_noon() {
        let midnight = Utc.with_ymd_and_hms(2023, 12, 31, 0, 0, 9).unwrap();
        let noon = Utc.with_ymd_and_hms(2023, 12, 31, 12, 30, 0).unwrap();

        assert_eq!(format_date(&midnight, TimeFormat::H12), "12/31/2023, 12:00:09 AM");
        assert_eq!(format_date(&midnight, TimeFormat::H24), "12/31/2023, 00:00:09");
        assert_eq!(format_date(&noon, TimeFormat::H12), "12/31/2023, 12:30:00 PM");
    }

    #[test]
    fn designator_only_in_twelve_hour_mode() {
        for hour in 0..24 {
            let ts = Utc.with_ymd_and_hms(2024, 2, 29, hour, 15, 0).unwrap();
            let h12 = format_date(&ts, TimeFormat::H12);
            let h24 = format_date(&ts, TimeFormat::H24);

            assert!(h12.ends_with("AM") || h12.ends_with("PM"), "{h12}");
            assert!(!h24.contains("AM") && !h24.contains("PM"), "{h24}");
        }
    }

    #[test]
    fn uses_the_timestamp_time_zone() {
        let ts = Utc.with_ymd_and_hms(2023, 1, 1, 2, 0, 0).unwrap();
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(
            format_date(&ts.with_timezone(&offset), TimeFormat::H24),
            "12/31/2022, 21:00:00"
        );
    }

    #[test]
    fn labels_round_trip_through_serde() {
        let json = serde_json::to_string(&TimeFormat::H24).unwrap();
        assert_eq!(json, "\"24hr\"");
        assert_eq!(TimeFormat::H12.label(), "12hr");
    }
}
