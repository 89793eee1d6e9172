//! Linear regression over the three sleep covariates.
//!
//! Formula: `required = intercept + wake * w_wake + estimated_sleep * w_sleep + coffee * w_coffee`

use tracing::{debug, info};

use super::{ModelArtifact, ModelInput, ModelSource, OutputUnit, RequiredSleep, SleepModel};
use crate::error::ModelError;

const SECONDS_PER_DAY: f64 = 86_400.0;
const ESTIMATED_SLEEP_RANGE: (f64, f64) = (4.0, 12.0);
const COFFEE_RANGE: (f64, f64) = (1.0, 20.0);

/// Loaded linear sleep model. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSleepModel {
    artifact: ModelArtifact,
}

impl LinearSleepModel {
    pub fn new(artifact: ModelArtifact) -> Self {
        Self { artifact }
    }

    /// Load and validate the artifact behind `source`.
    ///
    /// # Errors
    /// Returns [`ModelError::Unavailable`] if the artifact is absent or malformed.
    pub fn load(source: &ModelSource) -> Result<Self, ModelError> {
        let artifact = source.load_artifact()?;
        info!(
            source = %source,
            name = %artifact.name,
            version = %artifact.version,
            "loaded sleep model"
        );
        Ok(Self::new(artifact))
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    fn check_domain(input: &ModelInput) -> Result<(), ModelError> {
        if !(input.wake.is_finite() && (0.0..SECONDS_PER_DAY).contains(&input.wake)) {
            return Err(ModelError::Inference(format!(
                "wake must be seconds within a day, got {}",
                input.wake
            )));
        }
        let (lo, hi) = ESTIMATED_SLEEP_RANGE;
        if !(input.estimated_sleep.is_finite() && (lo..=hi).contains(&input.estimated_sleep)) {
            return Err(ModelError::Inference(format!(
                "estimated_sleep must be within {lo}..={hi}, got {}",
                input.estimated_sleep
            )));
        }
        let (lo, hi) = COFFEE_RANGE;
        if !(input.coffee.is_finite() && (lo..=hi).contains(&input.coffee)) {
            return Err(ModelError::Inference(format!(
                "coffee must be within {lo}..={hi}, got {}",
                input.coffee
            )));
        }
        Ok(())
    }
}

impl SleepModel for LinearSleepModel {
    fn predict(&self, input: &ModelInput) -> Result<RequiredSleep, ModelError> {
        Self::check_domain(input)?;

        let w = &self.artifact.coefficients;
        let raw = self.artifact.intercept
            + w.wake * input.wake
            + w.estimated_sleep * input.estimated_sleep
            + w.coffee * input.coffee;

        let required = match self.artifact.output_unit {
            OutputUnit::Hours => RequiredSleep::from_hours(raw),
            OutputUnit::Seconds => RequiredSleep::from_seconds(raw),
        };
        debug!(
            wake = input.wake,
            estimated_sleep = input.estimated_sleep,
            coffee = input.coffee,
            required_hours = required.hours(),
            "sleep prediction"
        );
        Ok(required)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelCoefficients;

    fn model(
        intercept: f64,
        wake: f64,
        sleep: f64,
        coffee: f64,
        unit: OutputUnit,
    ) -> LinearSleepModel {
        LinearSleepModel::new(ModelArtifact {
            name: "fixture".into(),
            version: "test".into(),
            output_unit: unit,
            intercept,
            coefficients: ModelCoefficients {
                wake,
                estimated_sleep: sleep,
                coffee,
            },
        })
    }

    fn input(wake: f64, sleep: f64, coffee: f64) -> ModelInput {
        ModelInput {
            wake,
            estimated_sleep: sleep,
            coffee,
        }
    }

    #[test]
    fn prediction_uses_intercept_and_weights() {
        let m = model(0.5, 0.0, 1.0, 0.25, OutputUnit::Hours);
        let r = m.predict(&input(25_200.0, 8.0, 1.0)).unwrap();
        // 0.5 + 8.0 + 0.25
        assert_eq!(r.hours(), 8.75);
    }

    #[test]
    fn seconds_output_is_not_rescaled() {
        let m = model(0.0, 0.0, 3600.0, 0.0, OutputUnit::Seconds);
        let r = m.predict(&input(0.0, 7.0, 1.0)).unwrap();
        assert_eq!(r.seconds(), 25_200.0);
    }

    #[test]
    fn no_clamping_of_implausible_values() {
        let m = model(-100.0, 0.0, 1.0, 0.0, OutputUnit::Hours);
        let r = m.predict(&input(0.0, 8.0, 1.0)).unwrap();
        assert_eq!(r.hours(), -92.0);
    }

    #[test]
    fn out_of_domain_inputs_fail_inference() {
        let m = model(0.0, 0.0, 1.0, 0.0, OutputUnit::Hours);
        for bad in [
            input(86_400.0, 8.0, 1.0),
            input(-1.0, 8.0, 1.0),
            input(0.0, 3.0, 1.0),
            input(0.0, 8.0, 0.0),
            input(0.0, 8.0, 21.0),
            input(f64::NAN, 8.0, 1.0),
        ] {
            assert!(matches!(m.predict(&bad), Err(ModelError::Inference(_))));
        }
    }

    #[test]
    fn bundled_model_loads() {
        let m = LinearSleepModel::load(&ModelSource::Bundled).unwrap();
        let r = m.predict(&input(25_200.0, 8.0, 1.0)).unwrap();
        // 0.4 - 0.126 + 7.84 + 0.21
        assert!((r.hours() - 8.324).abs() < 1e-9);
    }
}
