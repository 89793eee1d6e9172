//! Bedtime calculator.
//!
//! Turns the three user inputs into a recommended bedtime:
//!
//! ```text
//! wake time ─► seconds after midnight ─► model ─► required sleep
//! bedtime = wake time - required sleep   (wraps past midnight)
//! ```
//!
//! Model failures of any kind are collapsed into a single generic
//! [`BedtimeEstimate::Failure`]; the cause is only logged.

use std::sync::Arc;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ModelError;
use crate::inputs::{BedtimeInputs, CoffeeIntake, SleepAmount, WakeTime};
use crate::model::{ModelInput, SleepModel, UnavailableModel};

pub const SUCCESS_TITLE: &str = "Your ideal bedtime is…";
pub const ERROR_TITLE: &str = "Error";
pub const ERROR_MESSAGE: &str = "Sorry, there was a problem calculating your bedtime.";

/// How the bedtime is rendered. Neither format shows a date or seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockFormat {
    /// e.g. "10:15 PM"
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// e.g. "22:15"
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl ClockFormat {
    pub fn format(&self, time: NaiveTime) -> String {
        match self {
            ClockFormat::TwelveHour => time.format("%-I:%M %p").to_string(),
            ClockFormat::TwentyFourHour => time.format("%H:%M").to_string(),
        }
    }
}

/// Outcome of one calculation, ready to display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BedtimeEstimate {
    Success {
        title: String,
        message: String,
        bedtime: NaiveTime,
    },
    Failure {
        title: String,
        message: String,
    },
}

impl BedtimeEstimate {
    fn success(bedtime: NaiveTime, clock: ClockFormat) -> Self {
        BedtimeEstimate::Success {
            title: SUCCESS_TITLE.to_string(),
            message: clock.format(bedtime),
            bedtime,
        }
    }

    fn failure() -> Self {
        BedtimeEstimate::Failure {
            title: ERROR_TITLE.to_string(),
            message: ERROR_MESSAGE.to_string(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            BedtimeEstimate::Success { title, .. } | BedtimeEstimate::Failure { title, .. } => {
                title
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            BedtimeEstimate::Success { message, .. } | BedtimeEstimate::Failure { message, .. } => {
                message
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, BedtimeEstimate::Success { .. })
    }

    pub fn bedtime(&self) -> Option<NaiveTime> {
        match self {
            BedtimeEstimate::Success { bedtime, .. } => Some(*bedtime),
            BedtimeEstimate::Failure { .. } => None,
        }
    }
}

/// Stateless between calls; holds only the injected model and display format.
#[derive(Debug, Clone)]
pub struct BedtimeCalculator {
    model: Arc<dyn SleepModel>,
    clock: ClockFormat,
}

impl BedtimeCalculator {
    pub fn new(model: Arc<dyn SleepModel>) -> Self {
        Self {
            model,
            clock: ClockFormat::default(),
        }
    }

    /// Build from the result of loading a model. A load error does not fail
    /// here; every later estimate reports the generic failure instead.
    pub fn from_load<M: SleepModel + 'static>(loaded: Result<Arc<M>, ModelError>) -> Self {
        match loaded {
            Ok(model) => Self::new(model),
            Err(e) => {
                warn!(error = %e, "sleep model unavailable");
                Self::new(Arc::new(UnavailableModel::new(e)))
            }
        }
    }

    pub fn with_clock(mut self, clock: ClockFormat) -> Self {
        self.clock = clock;
        self
    }

    /// Bedtime as a time of day, keeping the underlying error.
    ///
    /// # Errors
    /// Returns the model's error, or [`ModelError::Inference`] if the
    /// prediction cannot be expressed as a duration.
    pub fn try_bedtime(&self, inputs: &BedtimeInputs) -> Result<NaiveTime, ModelError> {
        let required = self.model.predict(&ModelInput::from(inputs))?;
        let sleep = required.to_duration()?;
        let (bedtime, _wrapped_secs) = inputs.wake_time.as_time().overflowing_sub_signed(sleep);
        Ok(bedtime)
    }

    /// Run the full calculation for one set of inputs.
    pub fn estimate(&self, inputs: &BedtimeInputs) -> BedtimeEstimate {
        match self.try_bedtime(inputs) {
            Ok(bedtime) => BedtimeEstimate::success(bedtime, self.clock),
            Err(e) => {
                warn!(
                    error = %e,
                    wake_time = %inputs.wake_time,
                    sleep_amount = inputs.sleep_amount.hours(),
                    coffee = inputs.coffee_intake.cups(),
                    "bedtime calculation failed"
                );
                BedtimeEstimate::failure()
            }
        }
    }

    /// Estimates for every sleep amount step at a fixed wake time and coffee count.
    pub fn sweep(
        &self,
        wake_time: WakeTime,
        coffee: CoffeeIntake,
    ) -> Vec<(SleepAmount, BedtimeEstimate)> {
        SleepAmount::all()
            .map(|amount| {
                let inputs = BedtimeInputs::new(wake_time, amount, coffee);
                (amount, self.estimate(&inputs))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RequiredSleep;

    /// Always predicts the same number of hours.
    #[derive(Debug)]
    struct FixedHours(f64);

    impl SleepModel for FixedHours {
        fn predict(&self, _input: &ModelInput) -> Result<RequiredSleep, ModelError> {
            Ok(RequiredSleep::from_hours(self.0))
        }
    }

    /// Rejects every input.
    #[derive(Debug)]
    struct Rejecting;

    impl SleepModel for Rejecting {
        fn predict(&self, _input: &ModelInput) -> Result<RequiredSleep, ModelError> {
            Err(ModelError::Inference("bad shape".into()))
        }
    }

    fn inputs(hour: u32, minute: u32) -> BedtimeInputs {
        BedtimeInputs::new(
            WakeTime::new(hour, minute).unwrap(),
            SleepAmount::default(),
            CoffeeIntake::default(),
        )
    }

    fn t(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn wraps_past_midnight() {
        let calc = BedtimeCalculator::new(Arc::new(FixedHours(9.0)));
        let estimate = calc.estimate(&inputs(6, 0));
        assert_eq!(estimate.bedtime(), Some(t(21, 0)));
        assert_eq!(estimate.message(), "9:00 PM");
        assert_eq!(estimate.title(), SUCCESS_TITLE);
    }

    #[test]
    fn same_day_result_when_no_wrap() {
        let calc = BedtimeCalculator::new(Arc::new(FixedHours(2.5)));
        assert_eq!(calc.estimate(&inputs(13, 15)).bedtime(), Some(t(10, 45)));
    }

    #[test]
    fn negative_prediction_moves_bedtime_later() {
        let calc = BedtimeCalculator::new(Arc::new(FixedHours(-1.0)));
        assert_eq!(calc.estimate(&inputs(23, 30)).bedtime(), Some(t(0, 30)));
    }

    #[test]
    fn twenty_four_hour_clock() {
        let calc = BedtimeCalculator::new(Arc::new(FixedHours(9.0)))
            .with_clock(ClockFormat::TwentyFourHour);
        assert_eq!(calc.estimate(&inputs(6, 0)).message(), "21:00");
    }

    #[test]
    fn short_format_drops_seconds() {
        // 8h 0m 30s before 07:00 is 22:59:30
        let calc = BedtimeCalculator::new(Arc::new(FixedHours(8.0 + 30.0 / 3600.0)));
        let estimate = calc.estimate(&inputs(7, 0));
        assert_eq!(estimate.message(), "10:59 PM");
    }

    #[test]
    fn inference_error_collapses_to_generic_failure() {
        let calc = BedtimeCalculator::new(Arc::new(Rejecting));
        let estimate = calc.estimate(&inputs(7, 0));
        assert_eq!(
            estimate,
            BedtimeEstimate::Failure {
                title: ERROR_TITLE.into(),
                message: ERROR_MESSAGE.into(),
            }
        );
        assert!(calc.try_bedtime(&inputs(7, 0)).is_err());
    }

    #[test]
    fn non_finite_prediction_is_a_failure() {
        let calc = BedtimeCalculator::new(Arc::new(FixedHours(f64::NAN)));
        assert!(!calc.estimate(&inputs(7, 0)).is_success());
    }

    #[test]
    fn failed_load_reports_failure_per_estimate() {
        let loaded: Result<Arc<UnavailableModel>, ModelError> =
            Err(ModelError::unavailable("test", "missing artifact"));
        let calc = BedtimeCalculator::from_load(loaded);
        let estimate = calc.estimate(&inputs(7, 0));
        assert_eq!(estimate.title(), ERROR_TITLE);
        assert_eq!(estimate.message(), ERROR_MESSAGE);
    }

    #[test]
    fn sweep_covers_every_step() {
        let calc = BedtimeCalculator::new(Arc::new(FixedHours(8.0)));
        let rows = calc.sweep(WakeTime::default(), CoffeeIntake::default());
        assert_eq!(rows.len(), 33);
        assert!(rows.iter().all(|(_, e)| e.is_success()));
    }

    #[test]
    fn estimate_serializes_with_status_tag() {
        let calc = BedtimeCalculator::new(Arc::new(FixedHours(9.0)));
        let json = serde_json::to_value(calc.estimate(&inputs(6, 0))).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "9:00 PM");
    }
}
