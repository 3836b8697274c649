//! Schedule deviation of a live bus

use serde::{Deserialize, Serialize};
use std::fmt;

/// Deviation from the timetable, derived from a signed minute count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "minutes")]
pub enum DelayStatus {
    /// Exactly on schedule
    OnTime,
    /// Behind schedule by the given minutes
    Late(u32),
    /// Ahead of schedule by the given minutes
    Early(u32),
}

/// Traffic-light grading of a delay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelaySeverity {
    /// On time or early
    OnTime,
    /// Up to five minutes late
    Minor,
    /// More than five minutes late
    Severe,
}

impl DelayStatus {
    /// Classify a delay in minutes (negative means early)
    #[must_use]
    pub const fn from_minutes(delay_minutes: i32) -> Self {
        match delay_minutes {
            0 => Self::OnTime,
            m if m > 0 => Self::Late(m.unsigned_abs()),
            m => Self::Early(m.unsigned_abs()),
        }
    }

    /// Grade the delay
    #[must_use]
    pub const fn severity(&self) -> DelaySeverity {
        match self {
            Self::OnTime | Self::Early(_) => DelaySeverity::OnTime,
            Self::Late(m) if *m <= 5 => DelaySeverity::Minor,
            Self::Late(_) => DelaySeverity::Severe,
        }
    }

    /// Compact signed form ("+5 min", "-2 min"), empty when on time
    #[must_use]
    pub fn signed_label(&self) -> String {
        match self {
            Self::OnTime => String::new(),
            Self::Late(m) => format!("+{m} min"),
            Self::Early(m) => format!("-{m} min"),
        }
    }
}

impl DelaySeverity {
    /// Indicator colour (green / amber / red)
    #[must_use]
    pub const fn color_hex(&self) -> &'static str {
        match self {
            Self::OnTime => "#10B981",
            Self::Minor => "#F59E0B",
            Self::Severe => "#EF4444",
        }
    }
}

impl fmt::Display for DelayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnTime => write!(f, "On time"),
            Self::Late(m) => write!(f, "{m} min late"),
            Self::Early(m) => write!(f, "{m} min early"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert_eq!(DelayStatus::from_minutes(0), DelayStatus::OnTime);
        assert_eq!(DelayStatus::from_minutes(5), DelayStatus::Late(5));
        assert_eq!(DelayStatus::from_minutes(-2), DelayStatus::Early(2));
    }

    #[test]
    fn labels() {
        assert_eq!(DelayStatus::OnTime.to_string(), "On time");
        assert_eq!(DelayStatus::Late(5).to_string(), "5 min late");
        assert_eq!(DelayStatus::Early(2).to_string(), "2 min early");
        assert_eq!(DelayStatus::Late(3).signed_label(), "+3 min");
        assert_eq!(DelayStatus::Early(2).signed_label(), "-2 min");
        assert!(DelayStatus::OnTime.signed_label().is_empty());
    }

    #[test]
    fn severity_thresholds() {
        assert_eq!(DelayStatus::Early(4).severity(), DelaySeverity::OnTime);
        assert_eq!(DelayStatus::Late(5).severity(), DelaySeverity::Minor);
        assert_eq!(DelayStatus::Late(6).severity(), DelaySeverity::Severe);
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        assert_eq!(
            DelayStatus::from_minutes(i32::MIN),
            DelayStatus::Early(i32::MIN.unsigned_abs())
        );
    }
}
