//! User inputs to the bedtime calculation.
//!
//! Each input type enforces its declared domain at construction, so the
//! calculator only ever receives values inside their closed ranges.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Time of day the user wants to wake up. Minute precision, no date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WakeTime(NaiveTime);

impl WakeTime {
    pub fn new(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::OutOfRange {
                field: "hour",
                min: "0".into(),
                max: "23".into(),
                value: hour.to_string(),
            });
        }
        if minute > 59 {
            return Err(ValidationError::OutOfRange {
                field: "minute",
                min: "0".into(),
                max: "59".into(),
                value: minute.to_string(),
            });
        }
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "wake_time",
                message: format!("{hour:02}:{minute:02} is not a time of day"),
            })
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// `hour * 3600 + minute * 60`, the model's wake covariate.
    pub fn seconds_since_midnight(&self) -> u32 {
        self.hour() * 3600 + self.minute() * 60
    }

    pub fn as_time(&self) -> NaiveTime {
        self.0
    }
}

impl Default for WakeTime {
    fn default() -> Self {
        Self(NaiveTime::from_hms_opt(7, 0, 0).unwrap_or(NaiveTime::MIN))
    }
}

impl fmt::Display for WakeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

impl FromStr for WakeTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|e| {
            ValidationError::InvalidValue {
                field: "wake_time",
                message: format!("expected HH:MM, got '{s}' ({e})"),
            }
        })?;
        Ok(Self(time))
    }
}

impl TryFrom<String> for WakeTime {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WakeTime> for String {
    fn from(value: WakeTime) -> Self {
        value.to_string()
    }
}

/// Desired hours of sleep, 4.0..=12.0 in quarter-hour steps.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SleepAmount(f64);

impl SleepAmount {
    pub const MIN: f64 = 4.0;
    pub const MAX: f64 = 12.0;
    pub const STEP: f64 = 0.25;

    pub fn new(hours: f64) -> Result<Self, ValidationError> {
        if !hours.is_finite() || !(Self::MIN..=Self::MAX).contains(&hours) {
            return Err(ValidationError::OutOfRange {
                field: "sleep_amount",
                min: Self::MIN.to_string(),
                max: Self::MAX.to_string(),
                value: hours.to_string(),
            });
        }
        if (hours / Self::STEP).fract() != 0.0 {
            return Err(ValidationError::InvalidValue {
                field: "sleep_amount",
                message: format!("{hours} is not a multiple of {}", Self::STEP),
            });
        }
        Ok(Self(hours))
    }

    pub fn hours(&self) -> f64 {
        self.0
    }

    /// One stepper increment up, saturating at the maximum.
    pub fn step_up(self) -> Self {
        Self((self.0 + Self::STEP).min(Self::MAX))
    }

    /// One stepper increment down, saturating at the minimum.
    pub fn step_down(self) -> Self {
        Self((self.0 - Self::STEP).max(Self::MIN))
    }

    /// Every valid amount in ascending order.
    pub fn all() -> impl Iterator<Item = SleepAmount> {
        let steps = ((Self::MAX - Self::MIN) / Self::STEP) as u32;
        (0..=steps).map(|i| Self(Self::MIN + f64::from(i) * Self::STEP))
    }
}

impl Default for SleepAmount {
    fn default() -> Self {
        Self(8.0)
    }
}

impl fmt::Display for SleepAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hours", self.0)
    }
}

impl FromStr for SleepAmount {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hours = s.trim().parse::<f64>().map_err(|e| ValidationError::InvalidValue {
            field: "sleep_amount",
            message: format!("'{s}' is not a number ({e})"),
        })?;
        Self::new(hours)
    }
}

impl TryFrom<f64> for SleepAmount {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SleepAmount> for f64 {
    fn from(value: SleepAmount) -> Self {
        value.0
    }
}

/// Daily cups of coffee, 1..=20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CoffeeIntake(u8);

impl CoffeeIntake {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;

    pub fn new(cups: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&cups) {
            return Err(ValidationError::OutOfRange {
                field: "coffee",
                min: Self::MIN.to_string(),
                max: Self::MAX.to_string(),
                value: cups.to_string(),
            });
        }
        Ok(Self(cups))
    }

    pub fn cups(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> String {
        if self.0 == 1 {
            "1 cup".to_string()
        } else {
            format!("{} cups", self.0)
        }
    }
}

impl Default for CoffeeIntake {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for CoffeeIntake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for CoffeeIntake {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cups = s.trim().parse::<u8>().map_err(|e| ValidationError::InvalidValue {
            field: "coffee",
            message: format!("'{s}' is not a cup count ({e})"),
        })?;
        Self::new(cups)
    }
}

impl TryFrom<u8> for CoffeeIntake {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CoffeeIntake> for u8 {
    fn from(value: CoffeeIntake) -> Self {
        value.0
    }
}

/// The three values collected from the user for one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BedtimeInputs {
    pub wake_time: WakeTime,
    pub sleep_amount: SleepAmount,
    pub coffee_intake: CoffeeIntake,
}

impl BedtimeInputs {
    pub fn new(
        wake_time: WakeTime,
        sleep_amount: SleepAmount,
        coffee_intake: CoffeeIntake,
    ) -> Self {
        Self {
            wake_time,
            sleep_amount,
            coffee_intake,
        }
    }
}
