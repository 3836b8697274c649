//! Route service schedule: headway and daily operating window

use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

const TIME_FORMAT: &str = "%H:%M";

/// Daily window in which a route runs, as wall-clock times
///
/// A window whose end is before its start wraps past midnight
/// (e.g. `22:00`–`02:00`). Serialized as `{"start": "HH:MM", "end": "HH:MM"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawOperatingHours", into = "RawOperatingHours")]
pub struct OperatingHours {
    start: NaiveTime,
    end: NaiveTime,
}

#[derive(Serialize, Deserialize)]
struct RawOperatingHours {
    start: String,
    end: String,
}

impl TryFrom<RawOperatingHours> for OperatingHours {
    type Error = DomainError;

    fn try_from(raw: RawOperatingHours) -> Result<Self, Self::Error> {
        Self::parse(&raw.start, &raw.end)
    }
}

impl From<OperatingHours> for RawOperatingHours {
    fn from(hours: OperatingHours) -> Self {
        Self {
            start: hours.start.format(TIME_FORMAT).to_string(),
            end: hours.end.format(TIME_FORMAT).to_string(),
        }
    }
}

impl OperatingHours {
    /// Create a window from two times
    ///
    /// # Errors
    ///
    /// Returns `InvalidOperatingHours` when start and end are equal.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, DomainError> {
        if start == end {
            return Err(DomainError::InvalidOperatingHours(format!(
                "window {} - {} is empty",
                start.format(TIME_FORMAT),
                end.format(TIME_FORMAT)
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse a window from two `HH:MM` strings
    pub fn parse(start: &str, end: &str) -> Result<Self, DomainError> {
        let parse = |s: &str| {
            NaiveTime::parse_from_str(s.trim(), TIME_FORMAT)
                .map_err(|_| DomainError::InvalidOperatingHours(format!("'{s}' is not HH:MM")))
        };
        Self::new(parse(start)?, parse(end)?)
    }

    /// First departure time
    #[must_use]
    pub const fn start(&self) -> NaiveTime {
        self.start
    }

    /// Time after which the route stops running
    #[must_use]
    pub const fn end(&self) -> NaiveTime {
        self.end
    }

    /// Whether the route runs at the given time (start inclusive, end exclusive)
    #[must_use]
    pub fn contains(&self, time: NaiveTime) -> bool {
        if self.start < self.end {
            self.start <= time && time < self.end
        } else {
            time >= self.start || time < self.end
        }
    }
}

impl fmt::Display for OperatingHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format(TIME_FORMAT),
            self.end.format(TIME_FORMAT)
        )
    }
}

/// How often a route runs and when
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSchedule")]
pub struct Schedule {
    frequency_minutes: u32,
    operating_hours: OperatingHours,
}

#[derive(Deserialize)]
struct RawSchedule {
    frequency_minutes: u32,
    operating_hours: OperatingHours,
}

impl TryFrom<RawSchedule> for Schedule {
    type Error = DomainError;

    fn try_from(raw: RawSchedule) -> Result<Self, Self::Error> {
        Self::new(raw.frequency_minutes, raw.operating_hours)
    }
}

impl Schedule {
    /// Create a schedule
    ///
    /// # Errors
    ///
    /// Returns `InvalidSchedule` for a zero frequency.
    pub fn new(frequency_minutes: u32, operating_hours: OperatingHours) -> Result<Self, DomainError> {
        if frequency_minutes == 0 {
            return Err(DomainError::InvalidSchedule(
                "frequency must be at least one minute".to_string(),
            ));
        }
        Ok(Self {
            frequency_minutes,
            operating_hours,
        })
    }

    /// Minutes between consecutive buses
    #[must_use]
    pub const fn frequency_minutes(&self) -> u32 {
        self.frequency_minutes
    }

    /// Daily operating window
    #[must_use]
    pub const fn operating_hours(&self) -> OperatingHours {
        self.operating_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parse_and_display() {
        let hours = OperatingHours::parse("06:00", "22:00").unwrap();
        assert_eq!(hours.to_string(), "06:00 - 22:00");
        assert_eq!(hours.start(), time(6, 0));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(OperatingHours::parse("6am", "22:00").is_err());
        assert!(OperatingHours::parse("25:00", "22:00").is_err());
    }

    #[test]
    fn empty_window_is_rejected() {
        assert!(OperatingHours::parse("06:00", "06:00").is_err());
    }

    #[test]
    fn contains_daytime_window() {
        let hours = OperatingHours::parse("06:30", "21:30").unwrap();
        assert!(!hours.contains(time(6, 29)));
        assert!(hours.contains(time(6, 30)));
        assert!(hours.contains(time(21, 29)));
        assert!(!hours.contains(time(21, 30)));
    }

    #[test]
    fn contains_overnight_window() {
        let hours = OperatingHours::parse("22:00", "02:00").unwrap();
        assert!(hours.contains(time(23, 15)));
        assert!(hours.contains(time(1, 59)));
        assert!(!hours.contains(time(2, 0)));
        assert!(!hours.contains(time(12, 0)));
    }

    #[test]
    fn serde_uses_hh_mm() {
        let hours = OperatingHours::parse("07:00", "20:00").unwrap();
        let json = serde_json::to_string(&hours).unwrap();
        assert_eq!(json, r#"{"start":"07:00","end":"20:00"}"#);
        let back: OperatingHours = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hours);
    }

    #[test]
    fn schedule_rejects_zero_frequency() {
        let hours = OperatingHours::parse("06:00", "22:00").unwrap();
        assert!(Schedule::new(0, hours).is_err());
        assert_eq!(Schedule::new(15, hours).unwrap().frequency_minutes(), 15);
    }

    #[test]
    fn schedule_deserialization_validates() {
        let json = r#"{"frequency_minutes": 0, "operating_hours": {"start": "06:00", "end": "22:00"}}"#;
        assert!(serde_json::from_str::<Schedule>(json).is_err());
    }
}
