mod primitive;
pub use primitive::FieldPrimitive;

use super::{AutoStrategy, Embedded, Model, ModelId, Relation, Schema};
use crate::value::{Type, Value};
use std::fmt;

#[derive(Debug, Clone)]
pub struct Field {
    /// Uniquely identifies the field within the containing model.
    pub id: FieldId,

    /// The field name. Unique within the containing model, across columns,
    /// embeds and relations alike.
    pub name: String,

    /// Column, embed or relation
    pub ty: FieldTy,

    /// True if the field can be null.
    pub nullable: bool,

    /// True if the field is part of the primary key
    pub primary_key: bool,

    /// Specified if and how the store populates this field for new records
    pub auto: Option<AutoStrategy>,

    /// Value the store writes when the caller omits the field
    pub default: Option<Value>,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct FieldId {
    pub model: ModelId,
    pub index: usize,
}

#[derive(Clone, PartialEq, Eq)]
pub enum FieldTy {
    Primitive(FieldPrimitive),
    Embedded(Embedded),
    Relation(Relation),
}

impl Field {
    /// A column of the given scalar type.
    ///
    /// The field id is assigned when the field is added to a model with
    /// [`Model::with_field`].
    pub fn primitive(name: impl Into<String>, ty: Type) -> Self {
        Self::new(name, FieldPrimitive { ty })
    }

    /// A field embedding the fields of `target`.
    pub fn embedded(name: impl Into<String>, target: impl Into<ModelId>) -> Self {
        Self::new(name, Embedded::new(target))
    }

    /// A field referencing records of another model.
    pub fn relation(name: impl Into<String>, relation: Relation) -> Self {
        Self::new(name, relation)
    }

    fn new(name: impl Into<String>, ty: impl Into<FieldTy>) -> Self {
        Self {
            id: FieldId::placeholder(),
            name: name.into(),
            ty: ty.into(),
            nullable: false,
            primary_key: false,
            auto: None,
            default: None,
        }
    }

    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    #[must_use]
    pub fn auto(mut self, strategy: AutoStrategy) -> Self {
        self.auto = Some(strategy);
        self
    }

    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// True if the store supplies a value when the caller omits one.
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// True if the store generates the value.
    pub fn is_generated(&self) -> bool {
        self.auto.is_some()
    }

    pub fn is_relation(&self) -> bool {
        self.ty.is_relation()
    }

    /// Returns a fully qualified name for the field.
    pub fn full_name(&self, schema: &Schema) -> String {
        let model = schema.model(self.id.model);
        format!("{}::{}", model.name.upper_camel_case(), self.name)
    }

    /// If the field is a relation, return the relation's target ModelId.
    pub fn relation_target_id(&self) -> Option<ModelId> {
        self.ty.as_relation().map(|relation| relation.target)
    }

    /// If the field is a relation, return the target of the relation.
    pub fn relation_target<'a>(&self, schema: &'a Schema) -> Option<&'a Model> {
        self.relation_target_id().map(|id| schema.model(id))
    }
}

impl FieldTy {
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(..))
    }

    #[track_caller]
    pub fn expect_primitive(&self) -> &FieldPrimitive {
        match self {
            Self::Primitive(primitive) => primitive,
            _ => panic!("expected primitive field, but was {self:?}"),
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, Self::Embedded(..))
    }

    #[track_caller]
    pub fn expect_embedded(&self) -> &Embedded {
        match self {
            Self::Embedded(embedded) => embedded,
            _ => panic!("expected embedded field, but was {self:?}"),
        }
    }

    pub fn is_relation(&self) -> bool {
        matches!(self, Self::Relation(..))
    }

    pub fn as_relation(&self) -> Option<&Relation> {
        match self {
            Self::Relation(relation) => Some(relation),
            _ => None,
        }
    }

    #[track_caller]
    pub fn expect_relation(&self) -> &Relation {
        match self {
            Self::Relation(relation) => relation,
            _ => panic!("expected field to be `Relation`, but was {self:?}"),
        }
    }

    pub(crate) fn as_relation_mut(&mut self) -> Option<&mut Relation> {
        match self {
            Self::Relation(relation) => Some(relation),
            _ => None,
        }
    }
}

impl fmt::Debug for FieldTy {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(ty) => ty.fmt(fmt),
            Self::Embedded(ty) => ty.fmt(fmt),
            Self::Relation(ty) => ty.fmt(fmt),
        }
    }
}

impl FieldId {
    pub(crate) fn placeholder() -> Self {
        Self {
            model: ModelId::placeholder(),
            index: usize::MAX,
        }
    }
}

impl From<&Self> for FieldId {
    fn from(val: &Self) -> Self {
        *val
    }
}

impl From<&Field> for FieldId {
    fn from(val: &Field) -> Self {
        val.id
    }
}

impl fmt::Debug for FieldId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "FieldId({}/{})", self.model.0, self.index)
    }
}
