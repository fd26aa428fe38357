//! Time-of-day parsing and conversion.
//!
//! Reminder start times travel as `HH:mm` strings at the serialization
//! boundary and are validated into [`TimeOfDay`] before any layout math
//! runs. Out-of-range components are rejected at construction, so the
//! layout engine never sees a malformed time.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TimeParseError;

/// A validated wall-clock time of day (no date component).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Create a time of day.
    ///
    /// # Errors
    /// Returns an error if `hour` is not 0-23 or `minute` is not 0-59.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeParseError> {
        if hour > 23 {
            return Err(TimeParseError::InvalidHour(hour));
        }
        if minute > 59 {
            return Err(TimeParseError::InvalidMinute(minute));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Minutes since midnight.
    pub fn minutes_from_midnight(&self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }

    /// Convert to a chrono [`NaiveTime`] at second zero.
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
            .unwrap_or_else(|| NaiveTime::from_hms_opt(0, 0, 0).unwrap())
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        // NaiveTime components are always in range.
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeParseError;

    /// Parse an `HH:mm` string (a single-digit hour is accepted).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour_str, minute_str) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| TimeParseError::ParseFailed(s.to_string()))?;
        let hour: u32 = hour_str
            .parse()
            .map_err(|_| TimeParseError::ParseFailed(s.to_string()))?;
        let minute: u32 = minute_str
            .parse()
            .map_err(|_| TimeParseError::ParseFailed(s.to_string()))?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_to_minutes() {
        assert_eq!("00:00".parse::<TimeOfDay>().unwrap().minutes_from_midnight(), 0);
        assert_eq!("08:00".parse::<TimeOfDay>().unwrap().minutes_from_midnight(), 480);
        assert_eq!("12:30".parse::<TimeOfDay>().unwrap().minutes_from_midnight(), 750);
        assert_eq!("23:59".parse::<TimeOfDay>().unwrap().minutes_from_midnight(), 1439);
    }

    #[test]
    fn parse_accepts_single_digit_hour() {
        let t = "9:05".parse::<TimeOfDay>().unwrap();
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 5);
        assert_eq!(t.to_string(), "09:05");
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert_eq!(
            "24:00".parse::<TimeOfDay>(),
            Err(TimeParseError::InvalidHour(24))
        );
        assert_eq!(
            "12:60".parse::<TimeOfDay>(),
            Err(TimeParseError::InvalidMinute(60))
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("noon".parse::<TimeOfDay>().is_err());
        assert!("12".parse::<TimeOfDay>().is_err());
        assert!("ab:cd".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn serde_roundtrip_as_string() {
        let t = TimeOfDay::new(9, 30).unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"09:30\"");
        let back: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn naive_time_conversion() {
        let t = TimeOfDay::new(14, 45).unwrap();
        let naive = t.to_naive_time();
        assert_eq!(TimeOfDay::from(naive), t);
    }
}
