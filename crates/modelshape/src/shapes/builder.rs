use super::{Cache, Shapes};
use crate::Schema;

use std::sync::Arc;

#[derive(Debug)]
pub struct Builder {
    cache: bool,
}

impl Builder {
    /// Whether computed projections are kept for reuse. Enabled by default.
    pub fn cache(&mut self, enabled: bool) -> &mut Self {
        self.cache = enabled;
        self
    }

    pub fn build(&self, schema: impl Into<Arc<Schema>>) -> Shapes {
        Shapes {
            schema: schema.into(),
            cache: self.cache.then(Cache::default),
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self { cache: true }
    }
}
