//! Interactive bedtime session.
//!
//! Owns the three inputs and the last estimate on behalf of a front end.
//! Every input change reruns the full calculation; nothing is memoized.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Computed -> Computed -> ...
//! ```

use std::str::FromStr;

use crate::calculator::{BedtimeCalculator, BedtimeEstimate};
use crate::error::ValidationError;
use crate::inputs::{BedtimeInputs, CoffeeIntake, SleepAmount, WakeTime};

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    Computed(BedtimeEstimate),
}

/// A single input change, as typed by a user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionCommand {
    Wake(WakeTime),
    Sleep(SleepAmount),
    Coffee(CoffeeIntake),
    MoreSleep,
    LessSleep,
}

impl FromStr for SessionCommand {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let verb = parts.next().unwrap_or_default().to_lowercase();
        let arg = parts.next();
        if let Some(extra) = parts.next() {
            return Err(ValidationError::InvalidValue {
                field: "command",
                message: format!("unexpected argument '{extra}'"),
            });
        }
        let value = |field: &'static str| {
            arg.ok_or_else(|| ValidationError::InvalidValue {
                field,
                message: "missing value".to_string(),
            })
        };
        let no_value = |command: SessionCommand| match arg {
            Some(extra) => Err(ValidationError::InvalidValue {
                field: "command",
                message: format!("'{verb}' takes no argument, got '{extra}'"),
            }),
            None => Ok(command),
        };
        match verb.as_str() {
            "wake" => Ok(SessionCommand::Wake(value("wake_time")?.parse()?)),
            "sleep" => Ok(SessionCommand::Sleep(value("sleep_amount")?.parse()?)),
            "coffee" => Ok(SessionCommand::Coffee(value("coffee")?.parse()?)),
            "more-sleep" | "+" => no_value(SessionCommand::MoreSleep),
            "less-sleep" | "-" => no_value(SessionCommand::LessSleep),
            other => Err(ValidationError::InvalidValue {
                field: "command",
                message: format!("unknown command '{other}'"),
            }),
        }
    }
}

pub struct BedtimeSession<'a> {
    calculator: &'a BedtimeCalculator,
    inputs: BedtimeInputs,
    last: Option<BedtimeEstimate>,
}

impl<'a> BedtimeSession<'a> {
    /// Starts in `Idle`; call [`refresh`](Self::refresh) or change an input to compute.
    pub fn new(calculator: &'a BedtimeCalculator, inputs: BedtimeInputs) -> Self {
        Self {
            calculator,
            inputs,
            last: None,
        }
    }

    pub fn inputs(&self) -> &BedtimeInputs {
        &self.inputs
    }

    pub fn state(&self) -> SessionState {
        match &self.last {
            None => SessionState::Idle,
            Some(estimate) => SessionState::Computed(estimate.clone()),
        }
    }

    pub fn estimate(&self) -> Option<&BedtimeEstimate> {
        self.last.as_ref()
    }

    /// Recompute from the current inputs.
    pub fn refresh(&mut self) -> &BedtimeEstimate {
        let estimate = self.calculator.estimate(&self.inputs);
        self.last.insert(estimate)
    }

    pub fn set_wake_time(&mut self, wake_time: WakeTime) -> &BedtimeEstimate {
        self.inputs.wake_time = wake_time;
        self.refresh()
    }

    pub fn set_sleep_amount(&mut self, sleep_amount: SleepAmount) -> &BedtimeEstimate {
        self.inputs.sleep_amount = sleep_amount;
        self.refresh()
    }

    pub fn set_coffee_intake(&mut self, coffee_intake: CoffeeIntake) -> &BedtimeEstimate {
        self.inputs.coffee_intake = coffee_intake;
        self.refresh()
    }

    pub fn apply(&mut self, command: SessionCommand) -> &BedtimeEstimate {
        match command {
            SessionCommand::Wake(w) => self.set_wake_time(w),
            SessionCommand::Sleep(s) => self.set_sleep_amount(s),
            SessionCommand::Coffee(c) => self.set_coffee_intake(c),
            SessionCommand::MoreSleep => {
                let next = self.inputs.sleep_amount.step_up();
                self.set_sleep_amount(next)
            }
            SessionCommand::LessSleep => {
                let next = self.inputs.sleep_amount.step_down();
                self.set_sleep_amount(next)
            }
        }
    }
}
