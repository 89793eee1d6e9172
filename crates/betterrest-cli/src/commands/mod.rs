pub mod config;
pub mod estimate;
pub mod interactive;
pub mod model;
pub mod sweep;

use std::path::{Path, PathBuf};

use betterrest_core::model::shared;
use betterrest_core::{BedtimeCalculator, Config, ConfigError, ModelSource};
use tracing::debug;

/// Load the config from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(p) => Config::load_from(p),
        None => Config::load(),
    }
}

/// Persist the config to `path`, or to the default location.
pub fn save_config(config: &Config, path: Option<&Path>) -> Result<(), ConfigError> {
    match path {
        Some(p) => config.save_to(p),
        None => config.save(),
    }
}

/// The model named on the command line wins over the configured one.
pub fn model_source(config: &Config, model: Option<PathBuf>) -> ModelSource {
    model.map(ModelSource::File).unwrap_or_else(|| config.model_source())
}

/// Calculator backed by the process-wide model. A failed load still yields a
/// calculator; its estimates report the generic failure.
pub fn calculator(config: &Config, model: Option<PathBuf>) -> BedtimeCalculator {
    let source = model_source(config, model);
    debug!(source = %source, clock = ?config.display.clock, "building calculator");
    BedtimeCalculator::from_load(shared::get_or_load(&source)).with_clock(config.display.clock)
}
