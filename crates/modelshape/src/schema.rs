//! Entity schema graph

mod auto;
pub use auto::{AutoStrategy, UuidVersion};

mod builder;
pub use builder::Builder;

mod embedded;
pub use embedded::Embedded;

mod field;
pub use field::{Field, FieldId, FieldPrimitive, FieldTy};

mod model;
pub use model::{Model, ModelId, ModelKind};

mod name;
pub use name::Name;

mod relation;
pub use relation::{Cardinality, Relation};

mod verify;

use indexmap::IndexMap;

/// A verified, immutable set of models.
///
/// Schemas are only constructed through [`Builder`], which rejects dangling
/// references, name collisions and embed cycles. Everything downstream
/// relies on those checks having passed.
#[derive(Debug)]
pub struct Schema {
    models: IndexMap<ModelId, Model>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn models(&self) -> impl ExactSizeIterator<Item = &Model> {
        self.models.values()
    }

    /// Get a model by ID
    #[track_caller]
    pub fn model(&self, id: impl Into<ModelId>) -> &Model {
        self.models.get(&id.into()).expect("invalid model ID")
    }

    /// Get a model by ID, returning `None` if it was never registered.
    pub fn get_model(&self, id: impl Into<ModelId>) -> Option<&Model> {
        self.models.get(&id.into())
    }

    /// Find a model by its (case-insensitive) name.
    pub fn model_by_name(&self, name: &str) -> Option<&Model> {
        let name = Name::new(name);
        self.models.values().find(|model| model.name == name)
    }

    /// Get a field by ID
    #[track_caller]
    pub fn field(&self, id: FieldId) -> &Field {
        self.model(id.model).field(id)
    }
}
