use std::fmt;

use thiserror::Error;
use time::{
    format_description::{well_known::Rfc3339, FormatItem},
    macros::format_description,
    Duration, OffsetDateTime, UtcOffset,
};

pub use time::Date;

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A point in time (UTC) with millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

#[derive(Debug, Error)]
#[error("Invalid timestamp: {0}")]
pub struct TimestampParseError(String);

#[derive(Debug, Error)]
#[error("Invalid date: {0}")]
pub struct DateParseError(String);

impl Timestamp {
    pub fn now() -> Self {
        Self::from(OffsetDateTime::now_utc())
    }

    pub fn try_from_millis(millis: i64) -> Option<Self> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
            .ok()
            .map(Self)
    }

    pub fn as_millis(self) -> i64 {
        (self.0.unix_timestamp_nanos() / 1_000_000) as i64
    }

    pub fn as_secs(self) -> i64 {
        self.0.unix_timestamp()
    }

    /// The first millisecond of the given day.
    pub fn start_of_day(date: Date) -> Self {
        Self(date.midnight().assume_utc())
    }

    /// The last millisecond of the given day.
    pub fn end_of_day(date: Date) -> Self {
        let start = date.midnight().assume_utc();
        Self(start + Duration::days(1) - Duration::milliseconds(1))
    }

    pub fn date(self) -> Date {
        self.0.date()
    }

    pub fn checked_add(self, duration: Duration) -> Option<Self> {
        self.0.checked_add(duration).map(Self::from)
    }

    pub fn parse_rfc3339(s: &str) -> Result<Self, TimestampParseError> {
        OffsetDateTime::parse(s.trim(), &Rfc3339)
            .map(Self::from)
            .map_err(|_| TimestampParseError(s.to_owned()))
    }

    pub fn to_rfc3339(self) -> String {
        // Formatting only fails for years beyond 9999
        self.0
            .format(&Rfc3339)
            .unwrap_or_else(|_| self.as_millis().to_string())
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        let utc = from.to_offset(UtcOffset::UTC);
        Self(utc.replace_millisecond(utc.millisecond()).unwrap_or(utc))
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}

pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

pub fn parse_date(s: &str) -> Result<Date, DateParseError> {
    Date::parse(s.trim(), DATE_FORMAT).map_err(|_| DateParseError(s.to_owned()))
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_julian_day().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn millis_round_trip() {
        let t1 = Timestamp::now();
        let t2 = Timestamp::try_from_millis(t1.as_millis()).unwrap();
        assert_eq!(t1, t2);
    }

    #[test]
    fn parse_rfc3339_normalizes_to_utc() {
        let t = Timestamp::parse_rfc3339("2025-12-31T12:00:00+02:00").unwrap();
        assert_eq!("2025-12-31T10:00:00Z", t.to_rfc3339());
        assert!(Timestamp::parse_rfc3339("31.12.2025").is_err());
    }

    #[test]
    fn day_boundaries() {
        let day = date!(2025 - 01 - 31);
        let start = Timestamp::start_of_day(day);
        let end = Timestamp::end_of_day(day);
        assert_eq!(start.date(), day);
        assert_eq!(end.date(), day);
        assert_eq!(end.as_millis() - start.as_millis(), 24 * 60 * 60 * 1000 - 1);
    }

    #[test]
    fn parse_and_format_dates() {
        let day = parse_date("2025-01-01").unwrap();
        assert_eq!(date!(2025 - 01 - 01), day);
        assert_eq!("2025-01-01", format_date(day));
        assert!(parse_date("01/01/2025").is_err());
    }
}
