//! Sleep estimation model.
//!
//! The model is a fixed, pre-trained artifact: it maps the wake time (seconds
//! after midnight), the desired sleep amount and the coffee count to a
//! predicted required sleep duration. The calculator only sees the
//! [`SleepModel`] trait, so tests can substitute deterministic stubs.

mod artifact;
mod linear;
pub mod shared;

pub use artifact::{ModelArtifact, ModelCoefficients, ModelSource, OutputUnit};
pub use linear::LinearSleepModel;

use chrono::Duration;

use crate::error::ModelError;
use crate::inputs::BedtimeInputs;

/// Covariates passed to the model, all as reals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelInput {
    /// Wake time in seconds after midnight.
    pub wake: f64,
    /// Desired sleep in hours.
    pub estimated_sleep: f64,
    /// Cups of coffee per day.
    pub coffee: f64,
}

impl From<&BedtimeInputs> for ModelInput {
    fn from(inputs: &BedtimeInputs) -> Self {
        Self {
            wake: f64::from(inputs.wake_time.seconds_since_midnight()),
            estimated_sleep: inputs.sleep_amount.hours(),
            coffee: f64::from(inputs.coffee_intake.cups()),
        }
    }
}

/// Predicted required sleep. Stored in seconds; not clamped or rounded.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RequiredSleep {
    seconds: f64,
}

impl RequiredSleep {
    pub fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    pub fn from_hours(hours: f64) -> Self {
        Self {
            seconds: hours * 3600.0,
        }
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn hours(&self) -> f64 {
        self.seconds / 3600.0
    }

    /// Converts to a chrono duration at millisecond precision.
    ///
    /// # Errors
    /// Returns [`ModelError::Inference`] when the prediction is not finite or
    /// does not fit in a duration.
    pub fn to_duration(&self) -> Result<Duration, ModelError> {
        if !self.seconds.is_finite() {
            return Err(ModelError::Inference(format!(
                "prediction is not a finite number: {}",
                self.seconds
            )));
        }
        let millis = (self.seconds * 1000.0).round();
        if millis.abs() >= i64::MAX as f64 {
            return Err(ModelError::Inference(format!(
                "prediction of {} seconds is out of range",
                self.seconds
            )));
        }
        Duration::try_milliseconds(millis as i64).ok_or_else(|| {
            ModelError::Inference(format!(
                "prediction of {} seconds is out of range",
                self.seconds
            ))
        })
    }
}

/// A fitted function from sleep covariates to required sleep.
///
/// Implementations must be deterministic and free of side effects per call.
pub trait SleepModel: Send + Sync + std::fmt::Debug {
    /// # Errors
    /// Returns [`ModelError::Inference`] when the input cannot be processed,
    /// or [`ModelError::Unavailable`] when the model never initialized.
    fn predict(&self, input: &ModelInput) -> Result<RequiredSleep, ModelError>;
}

/// Stand-in for a model whose initialization failed.
///
/// Every prediction returns the captured load error, so the failure reaches
/// the caller as an ordinary result on each calculation.
#[derive(Debug, Clone)]
pub struct UnavailableModel {
    error: ModelError,
}

impl UnavailableModel {
    pub fn new(error: ModelError) -> Self {
        Self { error }
    }
}

impl SleepModel for UnavailableModel {
    fn predict(&self, _input: &ModelInput) -> Result<RequiredSleep, ModelError> {
        Err(self.error.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::{CoffeeIntake, SleepAmount, WakeTime};

    #[test]
    fn model_input_uses_seconds_after_midnight() {
        let inputs = BedtimeInputs::new(
            WakeTime::new(6, 30).unwrap(),
            SleepAmount::new(7.5).unwrap(),
            CoffeeIntake::new(3).unwrap(),
        );
        let input = ModelInput::from(&inputs);
        assert_eq!(input.wake, 23_400.0);
        assert_eq!(input.estimated_sleep, 7.5);
        assert_eq!(input.coffee, 3.0);
    }

    #[test]
    fn required_sleep_unit_conversions() {
        let r = RequiredSleep::from_hours(8.75);
        assert_eq!(r.seconds(), 31_500.0);
        assert_eq!(r.to_duration().unwrap(), Duration::minutes(525));
        assert_eq!(RequiredSleep::from_seconds(5400.0).hours(), 1.5);
    }

    #[test]
    fn negative_prediction_is_still_a_duration() {
        let r = RequiredSleep::from_hours(-1.0);
        assert_eq!(r.to_duration().unwrap(), Duration::hours(-1));
    }

    #[test]
    fn non_finite_prediction_is_an_inference_failure() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e300] {
            let err = RequiredSleep::from_seconds(bad).to_duration().unwrap_err();
            assert!(matches!(err, ModelError::Inference(_)));
        }
    }

    #[test]
    fn unavailable_model_always_fails() {
        let model = UnavailableModel::new(ModelError::unavailable("test", "missing"));
        let input = ModelInput {
            wake: 0.0,
            estimated_sleep: 8.0,
            coffee: 1.0,
        };
        assert!(matches!(
            model.predict(&input),
            Err(ModelError::Unavailable { .. })
        ));
    }
}
