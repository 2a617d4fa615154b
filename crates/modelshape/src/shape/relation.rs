//! Shapes for relation fields.
//!
//! Writing a relation takes a *reference*: the target's referenced columns,
//! never the target's full field set. Supplying one is always the caller's
//! choice, so relation fields are optional on write no matter how strict the
//! target's own columns are.

use super::{ComputedModel, FieldShape, Include, Mode, Presence, Projector, ShapeTy};
use crate::schema::{Field, Relation, Schema};
use crate::Result;

/// The value accepted for one record of `relation`'s target: each referenced
/// column, required, typed as on the target.
pub fn reference(schema: &Schema, relation: &Relation) -> ComputedModel {
    let target = relation.target(schema);

    relation
        .references
        .iter()
        .filter_map(|column| target.field_by_name(column))
        .map(|column| {
            let shape = FieldShape {
                presence: Presence::Required,
                nullable: column.nullable,
                ty: ShapeTy::Scalar(column.ty.expect_primitive().ty.clone()),
            };
            (column.name.clone(), shape)
        })
        .collect()
}

/// The shape of a relation field in a `mode` projection.
///
/// `Create` and `Insert` accept an optional reference, or a list of them for
/// a `Many` relation. `All` and `Virtuals` leave relations out; see
/// [`Include`] for loading them into a read model.
///
/// # Panics
///
/// Panics if `field` is not a relation.
#[track_caller]
pub fn resolve(schema: &Schema, field: &Field, mode: Mode) -> Option<FieldShape> {
    let relation = field.ty.expect_relation();

    match mode {
        Mode::Create | Mode::Insert => {
            let ty = wrap(relation, ShapeTy::Reference(reference(schema, relation)));
            let mut shape = FieldShape::optional(ty);
            shape.nullable = field.nullable;
            Some(shape)
        }
        Mode::All | Mode::Virtuals => None,
    }
}

/// The shape of an included relation in an `All` projection: the target's
/// own read model, projected with the nested `include`.
pub(crate) fn materialize(
    projector: &Projector<'_>,
    field: &Field,
    include: &Include,
) -> Result<FieldShape> {
    let relation = field.ty.expect_relation();
    let target = relation.target(projector.schema());
    let related = projector.project_model(target, Mode::All, Some(include))?;

    let mut shape = FieldShape::required(wrap(relation, ShapeTy::Related(related)));
    shape.nullable = field.nullable && !relation.is_many();
    Ok(shape)
}

fn wrap(relation: &Relation, ty: ShapeTy) -> ShapeTy {
    if relation.is_many() {
        ShapeTy::list(ty)
    } else {
        ty
    }
}
