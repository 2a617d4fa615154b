use super::{Field, FieldId, Name};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Model {
    /// Uniquely identifies the model within the schema
    pub id: ModelId,

    /// Name of the model
    pub name: Name,

    /// Distinguishes root models (relation targets) from embedded models
    pub kind: ModelKind,

    /// Fields contained by the model
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// An entity in its own right; relations may target it.
    Root,

    /// A sub-schema that only exists inside the models embedding it.
    Embedded,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub usize);

impl Model {
    pub fn root(id: impl Into<ModelId>, name: &str) -> Self {
        Self::new(id.into(), name, ModelKind::Root)
    }

    pub fn embedded(id: impl Into<ModelId>, name: &str) -> Self {
        Self::new(id.into(), name, ModelKind::Embedded)
    }

    fn new(id: ModelId, name: &str, kind: ModelKind) -> Self {
        Self {
            id,
            name: Name::new(name),
            kind,
            fields: vec![],
        }
    }

    /// Appends a field, assigning its id from its position.
    #[must_use]
    pub fn with_field(mut self, mut field: Field) -> Self {
        field.id = self.id.field(self.fields.len());
        self.fields.push(field);
        self
    }

    /// Returns true if this is a root model
    pub fn is_root(&self) -> bool {
        matches!(self.kind, ModelKind::Root)
    }

    /// Returns true if this is an embedded model
    pub fn is_embedded(&self) -> bool {
        matches!(self.kind, ModelKind::Embedded)
    }

    #[track_caller]
    pub fn field(&self, field: impl Into<FieldId>) -> &Field {
        let field_id = field.into();
        assert_eq!(self.id, field_id.model);
        &self.fields[field_id.index]
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Iterate over the fields used for the model's primary key.
    pub fn primary_key_fields(&self) -> impl Iterator<Item = &'_ Field> {
        self.fields.iter().filter(|field| field.primary_key)
    }
}

impl ModelId {
    /// Create a `FieldId` representing the current model's field at index
    /// `index`.
    pub const fn field(self, index: usize) -> FieldId {
        FieldId { model: self, index }
    }

    pub(crate) const fn placeholder() -> Self {
        Self(usize::MAX)
    }
}

impl From<&Self> for ModelId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl From<&Model> for ModelId {
    fn from(value: &Model) -> Self {
        value.id
    }
}

impl From<usize> for ModelId {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl fmt::Debug for ModelId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "ModelId({})", self.0)
    }
}
