use super::{Model, ModelId, Schema};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embedded {
    /// The embedded model being referenced. Its fields are owned by that
    /// model; the embedding field never copies them.
    pub target: ModelId,
}

impl Embedded {
    pub fn new(target: impl Into<ModelId>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn target<'a>(&self, schema: &'a Schema) -> &'a Model {
        schema.model(self.target)
    }
}

impl From<Embedded> for super::FieldTy {
    fn from(value: Embedded) -> Self {
        Self::Embedded(value)
    }
}
