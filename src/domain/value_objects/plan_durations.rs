use std::{fmt::Display, str::FromStr, sync::LazyLock};

use chrono::{DateTime, TimeDelta, Utc};
use regex::Regex;
use thiserror::Error;

pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Months are a flat 30 days; no calendar arithmetic.
pub const DAYS_PER_MONTH: i64 = 30;

static DAY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*(день|дня|дней)").expect("day pattern must compile")
});

static MONTH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]+)\s*(месяц|месяца|месяцев)").expect("month pattern must compile")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanDurationError {
    #[error("unrecognized duration descriptor: {0:?}")]
    Unrecognized(String),
    #[error("duration is out of range: {0:?}")]
    OutOfRange(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Day,
    Month,
}

impl DurationUnit {
    pub fn days(&self) -> i64 {
        match self {
            DurationUnit::Day => 1,
            DurationUnit::Month => DAYS_PER_MONTH,
        }
    }
}

impl Display for DurationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = match self {
            DurationUnit::Day => "day",
            DurationUnit::Month => "month",
        };
        write!(f, "{}", unit)
    }
}

/// Structured plan length. Stored plans still carry free text such as `"30 дней"`;
/// `FromStr` is the compatibility parser for those values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanDuration {
    pub count: i64,
    pub unit: DurationUnit,
}

impl PlanDuration {
    pub fn new(count: i64, unit: DurationUnit) -> Self {
        Self { count, unit }
    }

    pub fn as_millis(&self) -> Option<i64> {
        self.count
            .checked_mul(self.unit.days())?
            .checked_mul(MILLIS_PER_DAY)
    }

    pub fn expire_at(&self, created_at: DateTime<Utc>) -> Result<DateTime<Utc>, PlanDurationError> {
        self.as_millis()
            .and_then(TimeDelta::try_milliseconds)
            .and_then(|offset| created_at.checked_add_signed(offset))
            .ok_or_else(|| PlanDurationError::OutOfRange(self.to_string()))
    }
}

impl Display for PlanDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}(s)", self.count, self.unit)
    }
}

impl FromStr for PlanDuration {
    type Err = PlanDurationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        // Day tokens win when both would match.
        let (captures, unit) = if let Some(captures) = DAY_PATTERN.captures(input) {
            (captures, DurationUnit::Day)
        } else if let Some(captures) = MONTH_PATTERN.captures(input) {
            (captures, DurationUnit::Month)
        } else {
            return Err(PlanDurationError::Unrecognized(input.to_string()));
        };

        let count = captures[1]
            .parse::<i64>()
            .map_err(|_| PlanDurationError::OutOfRange(input.to_string()))?;

        Ok(Self::new(count, unit))
    }
}
