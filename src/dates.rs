//! Date normalization and month-window helpers.
//!
//! The data layer stores transaction dates in three shapes: ISO-8601 strings,
//! Firestore-style timestamp objects, and plain calendar dates. [RawDate]
//! models that union and normalizes it to a single [Date] at the boundary so
//! the analytics functions only ever see one representation.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use time::{
    Date, Month, OffsetDateTime, PrimitiveDateTime, format_description::well_known::Iso8601,
};

use crate::Error;

/// A transaction date as produced by the external data layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    /// A Firestore-style timestamp: whole seconds since the Unix epoch plus
    /// a nanosecond remainder. The remainder never moves a calendar day, so
    /// normalization ignores it.
    Timestamp {
        /// Whole seconds since the Unix epoch.
        seconds: i64,
        /// Nanoseconds past the whole second.
        #[serde(default, alias = "nanoseconds")]
        nanos: i32,
    },

    /// An ISO-8601 date or date-time string, e.g. "2024-07-25" or
    /// "2024-07-25T13:45:00Z".
    Iso(String),

    /// An already-normalized calendar date.
    Date(Date),
}

impl RawDate {
    /// Normalizes the raw value to a calendar date.
    ///
    /// # Errors
    /// Returns [Error::UnparseableDate] when the string does not parse as an
    /// ISO-8601 date or date-time, or the timestamp is outside the range of
    /// representable dates. Callers filtering by period should treat this as
    /// "exclude from the period" rather than propagating it.
    pub fn normalize(&self) -> Result<Date, Error> {
        match self {
            RawDate::Date(date) => Ok(*date),
            RawDate::Timestamp { seconds, .. } => OffsetDateTime::from_unix_timestamp(*seconds)
                .map(|datetime| datetime.date())
                .map_err(|error| {
                    tracing::debug!("timestamp {seconds}s is out of range: {error}");
                    Error::UnparseableDate(format!("{seconds}s"))
                }),
            RawDate::Iso(text) => parse_iso_date(text),
        }
    }
}

/// Parses an ISO-8601 string that may carry a UTC offset, a bare time of day,
/// or no time at all.
fn parse_iso_date(text: &str) -> Result<Date, Error> {
    if let Ok(datetime) = OffsetDateTime::parse(text, &Iso8601::DEFAULT) {
        return Ok(datetime.date());
    }

    if let Ok(datetime) = PrimitiveDateTime::parse(text, &Iso8601::DEFAULT) {
        return Ok(datetime.date());
    }

    Date::parse(text, &Iso8601::DEFAULT).map_err(|error| {
        tracing::debug!("could not parse date {text:?}: {error}");
        Error::UnparseableDate(text.to_owned())
    })
}

/// The closed interval from the first to the last calendar day of the month
/// containing `reference`.
pub(crate) fn month_window(reference: Date) -> RangeInclusive<Date> {
    let start = reference.replace_day(1).unwrap();

    let next_month_start = match start.month() {
        Month::December => Date::from_calendar_date(start.year() + 1, Month::January, 1),
        month => Date::from_calendar_date(start.year(), month.next(), 1),
    }
    .unwrap();
    let end = next_month_start.previous_day().unwrap();

    start..=end
}

/// The first day of the month `months` calendar months before `reference`.
///
/// `months == 0` gives the first day of `reference`'s own month.
pub(crate) fn months_back(reference: Date, months: u32) -> Date {
    let mut year = reference.year();
    let mut month = reference.month();

    for _ in 0..months {
        month = month.previous();
        if month == Month::December {
            year -= 1;
        }
    }

    Date::from_calendar_date(year, month, 1).unwrap()
}

/// Formats the month of `date` as an abbreviated pt-BR month name with the
/// first letter capitalized, e.g. "Jan", "Fev", "Dez".
pub(crate) fn month_label(date: Date) -> String {
    match date.month() {
        Month::January => "Jan",
        Month::February => "Fev",
        Month::March => "Mar",
        Month::April => "Abr",
        Month::May => "Mai",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Ago",
        Month::September => "Set",
        Month::October => "Out",
        Month::November => "Nov",
        Month::December => "Dez",
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{RawDate, month_label, month_window, months_back};
    use crate::Error;

    #[test]
    fn normalizes_iso_date_string() {
        let raw = RawDate::Iso("2024-07-25".to_owned());
        assert_eq!(raw.normalize(), Ok(date!(2024 - 07 - 25)));
    }

    #[test]
    fn normalizes_iso_datetime_string() {
        let raw = RawDate::Iso("2024-07-25T13:45:00Z".to_owned());
        assert_eq!(raw.normalize(), Ok(date!(2024 - 07 - 25)));
    }

    #[test]
    fn normalizes_iso_datetime_string_without_offset() {
        let raw = RawDate::Iso("2024-07-25T13:45:00".to_owned());
        assert_eq!(raw.normalize(), Ok(date!(2024 - 07 - 25)));
    }

    #[test]
    fn normalizes_firestore_timestamp() {
        // 2024-07-25T00:00:00Z
        let raw = RawDate::Timestamp {
            seconds: 1721865600,
            nanos: 0,
        };
        assert_eq!(raw.normalize(), Ok(date!(2024 - 07 - 25)));
    }

    #[test]
    fn normalizes_plain_date() {
        let raw = RawDate::Date(date!(2024 - 02 - 29));
        assert_eq!(raw.normalize(), Ok(date!(2024 - 02 - 29)));
    }

    #[test]
    fn rejects_empty_string() {
        let raw = RawDate::Iso(String::new());
        assert_eq!(raw.normalize(), Err(Error::UnparseableDate(String::new())));
    }

    #[test]
    fn rejects_garbage_string() {
        let raw = RawDate::Iso("not a date".to_owned());
        assert!(raw.normalize().is_err());
    }

    #[test]
    fn rejects_out_of_range_timestamp() {
        let raw = RawDate::Timestamp {
            seconds: i64::MAX,
            nanos: 0,
        };
        assert!(raw.normalize().is_err());
    }

    #[test]
    fn deserializes_iso_string_shape() {
        let raw: RawDate = serde_json::from_str(r#""2024-07-25""#).unwrap();
        assert_eq!(raw, RawDate::Iso("2024-07-25".to_owned()));
    }

    #[test]
    fn deserializes_timestamp_shape() {
        let raw: RawDate =
            serde_json::from_str(r#"{ "seconds": 1721865600, "nanos": 0 }"#).unwrap();
        assert_eq!(
            raw,
            RawDate::Timestamp {
                seconds: 1721865600,
                nanos: 0,
            }
        );
    }

    #[test]
    fn deserializes_timestamp_shape_with_long_field_name() {
        let raw: RawDate =
            serde_json::from_str(r#"{ "seconds": 1721865600, "nanoseconds": 500 }"#).unwrap();
        assert_eq!(
            raw,
            RawDate::Timestamp {
                seconds: 1721865600,
                nanos: 500,
            }
        );
    }

    #[test]
    fn month_window_spans_full_month() {
        let window = month_window(date!(2024 - 07 - 15));
        assert_eq!(*window.start(), date!(2024 - 07 - 01));
        assert_eq!(*window.end(), date!(2024 - 07 - 31));
    }

    #[test]
    fn month_window_handles_leap_february() {
        let window = month_window(date!(2024 - 02 - 10));
        assert_eq!(*window.end(), date!(2024 - 02 - 29));
    }

    #[test]
    fn month_window_handles_december() {
        let window = month_window(date!(2023 - 12 - 31));
        assert_eq!(*window.start(), date!(2023 - 12 - 01));
        assert_eq!(*window.end(), date!(2023 - 12 - 31));
    }

    #[test]
    fn months_back_stays_within_year() {
        assert_eq!(months_back(date!(2024 - 07 - 15), 2), date!(2024 - 05 - 01));
    }

    #[test]
    fn months_back_crosses_year_boundary() {
        assert_eq!(months_back(date!(2024 - 03 - 15), 5), date!(2023 - 10 - 01));
    }

    #[test]
    fn months_back_zero_is_start_of_month() {
        assert_eq!(months_back(date!(2024 - 07 - 15), 0), date!(2024 - 07 - 01));
    }

    #[test]
    fn month_labels_are_abbreviated_and_capitalized() {
        assert_eq!(month_label(date!(2024 - 01 - 01)), "Jan");
        assert_eq!(month_label(date!(2024 - 02 - 01)), "Fev");
        assert_eq!(month_label(date!(2024 - 09 - 01)), "Set");
        assert_eq!(month_label(date!(2024 - 12 - 01)), "Dez");
    }
}
