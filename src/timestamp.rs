use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};
use std::fmt;

/// A capture timestamp as rendered by the metadata decoder.
///
/// Exif timestamps come in several shapes: a naive local time
/// (`2017:08:01 16:20:43`), a time with a UTC offset, subsecond variants of
/// both, or a bare date. Decoders that normalize add RFC 3339 renderings to
/// the mix. Values that fit none of the known shapes are preserved verbatim
/// as [`Timestamp::Raw`] rather than dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum Timestamp {
    Zoned(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
    Date(NaiveDate),
    Raw(String),
}

impl Timestamp {
    /// Guesses the shape of a timestamp rendering. Never fails; unparseable
    /// input comes back as [`Timestamp::Raw`].
    pub fn parse(s: &str) -> Self {
        let s = s.trim();

        if let Ok(zoned) = DateTime::parse_from_rfc3339(s) {
            return Self::Zoned(zoned);
        }
        // Full subseconds and offset like +03:00
        if let Ok(zoned) = DateTime::parse_from_str(s, "%Y:%m:%d %H:%M:%S%.f%:z") {
            return Self::Zoned(zoned);
        }
        // Offset without subseconds
        if let Ok(zoned) = DateTime::parse_from_str(s, "%Y:%m:%d %H:%M:%S%:z") {
            return Self::Zoned(zoned);
        }
        // Windows-style offset (e.g. +0300)
        if let Ok(zoned) = DateTime::parse_from_str(s, "%Y:%m:%d %H:%M:%S%.f%#z") {
            return Self::Zoned(zoned);
        }
        if let Ok(zoned) = DateTime::parse_from_str(s, "%Y:%m:%d %H:%M:%S%#z") {
            return Self::Zoned(zoned);
        }
        // Naive, with and without subseconds
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y:%m:%d %H:%M:%S%.f") {
            return Self::Naive(naive);
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y:%m:%d %H:%M:%S") {
            return Self::Naive(naive);
        }
        // ISO renderings some decoders emit for datetime tags
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Self::Naive(naive);
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
            return Self::Naive(naive);
        }
        // Bare dates
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y:%m:%d") {
            return Self::Date(date);
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Self::Date(date);
        }

        Self::Raw(s.to_string())
    }

    /// The calendar date, when one was recognized.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Zoned(dt) => Some(dt.date_naive()),
            Self::Naive(dt) => Some(dt.date()),
            Self::Date(date) => Some(*date),
            Self::Raw(_) => None,
        }
    }

    /// The time of day, when one was recognized. Bare dates have none.
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            Self::Zoned(dt) => Some(dt.time()),
            Self::Naive(dt) => Some(dt.time()),
            Self::Date(_) | Self::Raw(_) => None,
        }
    }
}

/// Canonical Exif rendering: colon-separated date, space, time, offset when
/// one is known. Raw values print unchanged.
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zoned(dt) => write!(f, "{}", dt.format("%Y:%m:%d %H:%M:%S%:z")),
            Self::Naive(dt) => write!(f, "{}", dt.format("%Y:%m:%d %H:%M:%S")),
            Self::Date(date) => write!(f, "{}", date.format("%Y:%m:%d")),
            Self::Raw(s) => f.write_str(s),
        }
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
