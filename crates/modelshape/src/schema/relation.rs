use super::{FieldTy, Model, ModelId, Schema};

/// A reference from one model to another.
///
/// A relation never contains its target. Writing it only requires the
/// target's `references` columns, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    /// Model being referenced
    pub target: ModelId,

    /// Names of the target columns that identify a referenced record.
    ///
    /// When left empty, the schema builder fills it in with the target's
    /// primary key columns.
    pub references: Vec<String>,

    /// Whether the field holds one reference or many.
    pub cardinality: Cardinality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    One,
    Many,
}

impl Relation {
    /// A relation to a single record of `target`.
    pub fn one(target: impl Into<ModelId>) -> Self {
        Self {
            target: target.into(),
            references: vec![],
            cardinality: Cardinality::One,
        }
    }

    /// A relation to any number of records of `target`.
    pub fn many(target: impl Into<ModelId>) -> Self {
        Self {
            target: target.into(),
            references: vec![],
            cardinality: Cardinality::Many,
        }
    }

    pub fn references<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.references = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_many(&self) -> bool {
        matches!(self.cardinality, Cardinality::Many)
    }

    pub fn target<'a>(&self, schema: &'a Schema) -> &'a Model {
        schema.model(self.target)
    }
}

impl From<Relation> for FieldTy {
    fn from(value: Relation) -> Self {
        Self::Relation(value)
    }
}
