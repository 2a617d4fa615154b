use super::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPrimitive {
    /// The column's scalar type
    pub ty: Type,
}

impl From<FieldPrimitive> for FieldTy {
    fn from(value: FieldPrimitive) -> Self {
        Self::Primitive(value)
    }
}
