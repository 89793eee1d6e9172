//! Process-wide model instance.
//!
//! The model is loaded at most once per process and never mutated afterwards.
//! A failed load is not cached, so a later call can retry with a different
//! source. Callers hand the returned [`Arc`] to the calculator; nothing in the
//! calculator reads this module directly.

use std::sync::{Arc, OnceLock};

use super::{LinearSleepModel, ModelSource};
use crate::error::ModelError;

static SHARED_MODEL: OnceLock<Arc<LinearSleepModel>> = OnceLock::new();

/// Returns the shared model, loading it from `source` on first use.
///
/// Once a load has succeeded, `source` is ignored.
///
/// # Errors
/// Returns [`ModelError::Unavailable`] if nothing is loaded yet and the
/// artifact cannot be loaded.
pub fn get_or_load(source: &ModelSource) -> Result<Arc<LinearSleepModel>, ModelError> {
    if let Some(model) = SHARED_MODEL.get() {
        return Ok(Arc::clone(model));
    }
    let loaded = Arc::new(LinearSleepModel::load(source)?);
    Ok(Arc::clone(SHARED_MODEL.get_or_init(|| loaded)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_successful_load_wins() {
        let first = get_or_load(&ModelSource::Bundled).unwrap();
        let again = get_or_load(&ModelSource::File("/nonexistent/model.json".into())).unwrap();
        assert!(Arc::ptr_eq(&first, &again));
    }
}
