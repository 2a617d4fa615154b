use super::{ComputedModel, Presence};
use crate::value::Type;

/// The contract for one field: whether it must be present and what it holds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldShape {
    pub presence: Presence,

    /// True if `null` is an accepted value.
    pub nullable: bool,

    pub ty: ShapeTy,
}

/// What a field holds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ShapeTy {
    /// A column value.
    Scalar(Type),

    /// The fields of an embedded model, projected with the parent's mode.
    Embedded(ComputedModel),

    /// The referenced columns identifying a record of a relation's target.
    Reference(ComputedModel),

    /// A loaded record of a relation's target.
    Related(ComputedModel),

    /// An anonymous object inferred from a concrete value. Unifies with any
    /// of the other object shapes.
    Object(ComputedModel),

    /// Any number of items of the inner shape.
    List(Box<ShapeTy>),
}

impl FieldShape {
    pub fn required(ty: impl Into<ShapeTy>) -> Self {
        Self {
            presence: Presence::Required,
            nullable: false,
            ty: ty.into(),
        }
    }

    pub fn optional(ty: impl Into<ShapeTy>) -> Self {
        Self {
            presence: Presence::Optional,
            nullable: false,
            ty: ty.into(),
        }
    }

    /// Marks the shape as accepting `null`.
    #[must_use]
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn is_required(&self) -> bool {
        self.presence.is_required()
    }

    pub fn is_optional(&self) -> bool {
        self.presence.is_optional()
    }

    /// Makes this field, and everything nested in it, optional.
    #[must_use]
    pub fn into_partial(self) -> Self {
        Self {
            presence: Presence::Optional,
            nullable: self.nullable,
            ty: self.ty.into_partial(),
        }
    }
}

impl ShapeTy {
    pub fn list(item: impl Into<ShapeTy>) -> Self {
        Self::List(Box::new(item.into()))
    }

    /// The nested model of an object shape.
    pub fn as_model(&self) -> Option<&ComputedModel> {
        match self {
            Self::Embedded(model)
            | Self::Reference(model)
            | Self::Related(model)
            | Self::Object(model) => Some(model),
            Self::Scalar(_) | Self::List(_) => None,
        }
    }

    /// A short human-readable description, used in conflict messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Scalar(ty) => ty.to_string(),
            Self::Embedded(_) => "embedded model".to_string(),
            Self::Reference(_) => "relation reference".to_string(),
            Self::Related(_) => "related model".to_string(),
            Self::Object(_) => "object".to_string(),
            Self::List(item) => format!("List<{}>", item.describe()),
        }
    }

    fn into_partial(self) -> Self {
        match self {
            Self::Scalar(ty) => Self::Scalar(ty),
            Self::Embedded(model) => Self::Embedded(model.into_partial()),
            Self::Reference(model) => Self::Reference(model.into_partial()),
            Self::Related(model) => Self::Related(model.into_partial()),
            Self::Object(model) => Self::Object(model.into_partial()),
            Self::List(item) => Self::List(Box::new(item.into_partial())),
        }
    }
}

impl From<Type> for ShapeTy {
    fn from(value: Type) -> Self {
        Self::Scalar(value)
    }
}
