use crate::schema::ModelId;
use crate::shape::{ComputedModel, Mode};
use crate::Result;

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Computed projections, keyed by model and mode.
#[derive(Debug, Default)]
pub(super) struct Cache {
    entries: RwLock<HashMap<(ModelId, Mode), Arc<ComputedModel>>>,
}

impl Cache {
    /// Returns the cached projection, computing and storing it on a miss.
    ///
    /// Two threads missing at once may both compute; the first to store wins
    /// and both get the stored entry. Failed computations are not stored.
    pub(super) fn get_or_try_insert_with(
        &self,
        model: ModelId,
        mode: Mode,
        compute: impl FnOnce() -> Result<ComputedModel>,
    ) -> Result<Arc<ComputedModel>> {
        let key = (model, mode);

        if let Some(hit) = self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            log::trace!("shape cache hit; model={model:?} mode={mode}");
            return Ok(hit.clone());
        }

        log::trace!("shape cache miss; model={model:?} mode={mode}");
        let computed = Arc::new(compute()?);

        let mut entries = self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(entries.entry(key).or_insert(computed).clone())
    }
}
