//! Serialized model coefficients.
//!
//! The artifact is a small JSON document. A copy ships inside the binary;
//! a different one can be pointed to from the configuration.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

const BUNDLED_ARTIFACT: &str = include_str!("../../assets/sleep-calculator.json");

/// Unit of the value produced by the fitted function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputUnit {
    #[default]
    Hours,
    Seconds,
}

/// Linear weights for each covariate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelCoefficients {
    /// Per second after midnight.
    pub wake: f64,
    /// Per desired hour of sleep.
    pub estimated_sleep: f64,
    /// Per cup of coffee.
    pub coffee: f64,
}

/// A versioned set of fitted coefficients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub output_unit: OutputUnit,
    pub intercept: f64,
    pub coefficients: ModelCoefficients,
}

impl ModelArtifact {
    /// Parse and validate an artifact from JSON text.
    ///
    /// # Errors
    /// Returns [`ModelError::Unavailable`] if the document is malformed.
    pub fn from_json(origin: &str, json: &str) -> Result<Self, ModelError> {
        let artifact: ModelArtifact = serde_json::from_str(json)
            .map_err(|e| ModelError::unavailable(origin, format!("malformed artifact: {e}")))?;
        artifact.validate(origin)?;
        Ok(artifact)
    }

    /// Read an artifact from disk.
    ///
    /// # Errors
    /// Returns [`ModelError::Unavailable`] if the file is missing, unreadable
    /// or malformed.
    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let origin = path.display().to_string();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ModelError::unavailable(origin.as_str(), e.to_string()))?;
        Self::from_json(&origin, &json)
    }

    /// The artifact compiled into the library.
    ///
    /// # Errors
    /// Returns [`ModelError::Unavailable`] if the embedded document is malformed.
    pub fn bundled() -> Result<Self, ModelError> {
        Self::from_json(&ModelSource::Bundled.to_string(), BUNDLED_ARTIFACT)
    }

    fn validate(&self, origin: &str) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::unavailable(origin, "artifact name is empty"));
        }
        if self.version.trim().is_empty() {
            return Err(ModelError::unavailable(origin, "artifact version is empty"));
        }
        let weights = [
            ("intercept", self.intercept),
            ("coefficients.wake", self.coefficients.wake),
            ("coefficients.estimated_sleep", self.coefficients.estimated_sleep),
            ("coefficients.coffee", self.coefficients.coffee),
        ];
        for (name, value) in weights {
            if !value.is_finite() {
                return Err(ModelError::unavailable(
                    origin,
                    format!("{name} is not finite: {value}"),
                ));
            }
        }
        Ok(())
    }
}

/// Where to load the model from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModelSource {
    #[default]
    Bundled,
    File(PathBuf),
}

impl ModelSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map(ModelSource::File).unwrap_or_default()
    }

    /// # Errors
    /// Returns [`ModelError::Unavailable`] if the artifact cannot be loaded.
    pub fn load_artifact(&self) -> Result<ModelArtifact, ModelError> {
        match self {
            ModelSource::Bundled => ModelArtifact::bundled(),
            ModelSource::File(path) => ModelArtifact::from_file(path),
        }
    }
}

impl fmt::Display for ModelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelSource::Bundled => f.write_str("<bundled>"),
            ModelSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn bundled_artifact_is_valid() {
        let artifact = ModelArtifact::bundled().unwrap();
        assert_eq!(artifact.name, "SleepCalculator");
        assert_eq!(artifact.output_unit, OutputUnit::Hours);
    }

    #[test]
    fn output_unit_defaults_to_hours() {
        let artifact = ModelArtifact::from_json(
            "test",
            r#"{"name":"m","version":"1","intercept":0.0,
                "coefficients":{"wake":0.0,"estimated_sleep":1.0,"coffee":0.0}}"#,
        )
        .unwrap();
        assert_eq!(artifact.output_unit, OutputUnit::Hours);
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = ModelArtifact::from_file(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, ModelError::Unavailable { .. }));
    }

    #[test]
    fn malformed_file_is_unavailable() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = ModelArtifact::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ModelError::Unavailable { .. }));
    }

    #[test]
    fn empty_version_is_rejected() {
        let err = ModelArtifact::from_json(
            "test",
            r#"{"name":"m","version":" ","intercept":0.0,
                "coefficients":{"wake":0.0,"estimated_sleep":1.0,"coffee":0.0}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("version"));
    }

    #[test]
    fn source_from_path() {
        assert_eq!(ModelSource::from_path(None), ModelSource::Bundled);
        assert_eq!(
            ModelSource::from_path(Some(PathBuf::from("m.json"))),
            ModelSource::File(PathBuf::from("m.json"))
        );
    }
}
