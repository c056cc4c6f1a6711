//! Calendar dates requested from the feed.

use std::fmt::{Display, Formatter};
use std::iter;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Number of consecutive days covered by one window load.
pub const WINDOW_DAYS: usize = 7;

const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Calendar date rendered as `YYYY-MM-DD` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeedDate(Date);

impl FeedDate {
    /// Today's date in UTC.
    pub fn today() -> Self {
        Self(OffsetDateTime::now_utc().date())
    }

    pub const fn new(date: Date) -> Self {
        Self(date)
    }

    pub fn parse(input: &str) -> Result<Self, time::error::Parse> {
        Date::parse(input, ISO_DATE).map(Self)
    }

    pub fn next_day(self) -> Option<Self> {
        self.0.next_day().map(Self)
    }

    pub fn format_iso(self) -> String {
        // Four-digit years always format; only years past 9999 could fail.
        self.0
            .format(ISO_DATE)
            .unwrap_or_else(|_| format!("{:?}", self.0))
    }
}

impl Display for FeedDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_iso())
    }
}

impl Serialize for FeedDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_iso())
    }
}

impl<'de> Deserialize<'de> for FeedDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

/// The seven consecutive dates starting at `start`, ascending.
pub fn window_from(start: FeedDate) -> Vec<FeedDate> {
    iter::successors(Some(start), |date| date.next_day())
        .take(WINDOW_DAYS)
        .collect()
}

/// The seven-day window starting today (UTC).
pub fn current_window() -> Vec<FeedDate> {
    window_from(FeedDate::today())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn date(year: i32, month: Month, day: u8) -> FeedDate {
        FeedDate::new(Date::from_calendar_date(year, month, day).expect("valid date"))
    }

    #[test]
    fn window_crosses_year_boundary() {
        let window = window_from(date(2024, Month::December, 29));
        let rendered: Vec<String> = window.iter().map(|d| d.to_string()).collect();

        assert_eq!(
            rendered,
            vec![
                "2024-12-29",
                "2024-12-30",
                "2024-12-31",
                "2025-01-01",
                "2025-01-02",
                "2025-01-03",
                "2025-01-04",
            ]
        );
    }

    #[test]
    fn window_crosses_leap_day() {
        let window = window_from(date(2024, Month::February, 27));

        assert_eq!(window[2].to_string(), "2024-02-29");
        assert_eq!(window[3].to_string(), "2024-03-01");
    }

    #[test]
    fn window_is_seven_strictly_consecutive_days() {
        let window = window_from(date(2023, Month::April, 28));

        assert_eq!(window.len(), WINDOW_DAYS);
        for pair in window.windows(2) {
            assert_eq!(pair[0].next_day(), Some(pair[1]));
        }
    }

    #[test]
    fn current_window_has_seven_days() {
        assert_eq!(current_window().len(), WINDOW_DAYS);
    }

    #[test]
    fn parse_round_trips_iso_dates() {
        let parsed = FeedDate::parse("2025-01-04").expect("must parse");

        assert_eq!(parsed, date(2025, Month::January, 4));
        assert!(FeedDate::parse("2025-13-01").is_err());
    }
}
