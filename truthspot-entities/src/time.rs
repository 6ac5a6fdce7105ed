use std::{fmt, time::Duration};

use thiserror::Error;
use time::{
    format_description::{well_known::Rfc3339, FormatItem},
    macros::format_description,
    OffsetDateTime, PrimitiveDateTime,
};

/// Datetime format of the backend, e.g. `2024-03-01 18:04:12.345Z`.
const BACKEND_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]Z");

const BACKEND_FORMAT_WITHOUT_MILLIS: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]Z");

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid timestamp: {0}")]
pub struct TimestampParseError(String);

/// A point in time with millisecond precision (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(OffsetDateTime);

impl Timestamp {
    pub fn now() -> Self {
        Self::from(OffsetDateTime::now_utc())
    }

    pub fn from_millis(millis: i64) -> Option<Self> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000)
            .ok()
            .map(Self)
    }

    pub fn as_millis(self) -> i64 {
        (self.0.unix_timestamp_nanos() / 1_000_000) as i64
    }

    /// Parses the backend representation, falling back to RFC 3339.
    pub fn parse(s: &str) -> Result<Self, TimestampParseError> {
        let s = s.trim();
        PrimitiveDateTime::parse(s, BACKEND_FORMAT)
            .or_else(|_| PrimitiveDateTime::parse(s, BACKEND_FORMAT_WITHOUT_MILLIS))
            .map(PrimitiveDateTime::assume_utc)
            .or_else(|_| OffsetDateTime::parse(s, &Rfc3339))
            .map(Self::from)
            .map_err(|_| TimestampParseError(s.to_string()))
    }

    /// Formats in the backend representation.
    pub fn format(self) -> String {
        self.0
            .format(BACKEND_FORMAT)
            .unwrap_or_else(|_| self.as_millis().to_string())
    }

    /// Elapsed time since this timestamp, zero if it lies in the future.
    pub fn elapsed_since(self, now: Timestamp) -> Duration {
        let delta = now.0 - self.0;
        Duration::try_from(delta).unwrap_or_default()
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        let truncated = from
            .to_offset(time::UtcOffset::UTC)
            .replace_millisecond(from.millisecond())
            .unwrap_or(from);
        Self(truncated)
    }
}

impl From<Timestamp> for OffsetDateTime {
    fn from(from: Timestamp) -> Self {
        from.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.format())
    }
}
