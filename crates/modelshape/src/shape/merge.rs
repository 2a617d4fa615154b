use super::computed::join_path;
use super::{ComputedModel, FieldShape, ShapeTy};
use crate::value::Type;
use crate::{Error, Result};

use std::mem;

/// Combines several shapes into the one a record satisfying all of them has.
///
/// The result holds every field of every operand, in first-seen order. For a
/// field present in more than one operand:
///
/// * it is required if any operand requires it;
/// * it accepts `null` only if every operand does;
/// * value types must unify, otherwise the merge fails with a
///   [merge conflict](Error::is_merge_conflict) naming the field's path.
///
/// Merging nothing yields an empty model.
pub fn merge<'a>(models: impl IntoIterator<Item = &'a ComputedModel>) -> Result<ComputedModel> {
    let mut merged = ComputedModel::new();

    for model in models {
        merge_into(&mut merged, model, "")?;
    }

    Ok(merged)
}

impl ComputedModel {
    /// Merges `self` with `other`. See [`merge`].
    pub fn merge(&self, other: &ComputedModel) -> Result<ComputedModel> {
        let mut merged = self.clone();
        merge_into(&mut merged, other, "")?;
        Ok(merged)
    }
}

pub(super) fn merge_into(
    target: &mut ComputedModel,
    other: &ComputedModel,
    prefix: &str,
) -> Result<()> {
    for (name, shape) in other {
        let path = join_path(prefix, name);

        match target.get_mut(name) {
            Some(existing) => *existing = unify_field(existing, shape, &path)?,
            None => {
                target.insert(name.clone(), shape.clone());
            }
        }
    }

    Ok(())
}

fn unify_field(lhs: &FieldShape, rhs: &FieldShape, path: &str) -> Result<FieldShape> {
    let ty = match (&lhs.ty, &rhs.ty) {
        // A null value satisfies any nullable shape and stays null, so a
        // later non-nullable operand conflicts with it in any order.
        (ShapeTy::Scalar(Type::Null), _) if rhs.nullable => ShapeTy::Scalar(Type::Null),
        (_, ShapeTy::Scalar(Type::Null)) if lhs.nullable => ShapeTy::Scalar(Type::Null),
        (lhs_ty, rhs_ty) => unify_ty(lhs_ty, rhs_ty, path)?,
    };

    Ok(FieldShape {
        presence: lhs.presence.stricter(rhs.presence),
        nullable: lhs.nullable && rhs.nullable,
        ty,
    })
}

fn unify_ty(lhs: &ShapeTy, rhs: &ShapeTy, path: &str) -> Result<ShapeTy> {
    match (lhs, rhs) {
        (ShapeTy::Scalar(a), ShapeTy::Scalar(b)) => {
            if let Some(ty) = a.unify(b) {
                return Ok(ShapeTy::Scalar(ty));
            }
        }
        // An empty list value carries no item type.
        (ShapeTy::Scalar(Type::List(item)), ShapeTy::List(_)) if item.is_unknown() => {
            return Ok(rhs.clone());
        }
        (ShapeTy::List(_), ShapeTy::Scalar(Type::List(item))) if item.is_unknown() => {
            return Ok(lhs.clone());
        }
        (ShapeTy::List(a), ShapeTy::List(b)) => {
            return Ok(ShapeTy::list(unify_ty(a, b, path)?));
        }
        (_, _) => {
            if let (Some(a), Some(b)) = (lhs.as_model(), rhs.as_model()) {
                // An anonymous object takes the kind of the other side.
                let kind = match (lhs, rhs) {
                    (ShapeTy::Object(_), kind) | (kind, ShapeTy::Object(_)) => kind,
                    _ if mem::discriminant(lhs) == mem::discriminant(rhs) => lhs,
                    _ => return Err(conflict(lhs, rhs, path)),
                };

                let mut merged = a.clone();
                merge_into(&mut merged, b, path)?;
                return Ok(with_model(kind, merged));
            }
        }
    }

    Err(conflict(lhs, rhs, path))
}

fn with_model(kind: &ShapeTy, model: ComputedModel) -> ShapeTy {
    match kind {
        ShapeTy::Embedded(_) => ShapeTy::Embedded(model),
        ShapeTy::Reference(_) => ShapeTy::Reference(model),
        ShapeTy::Related(_) => ShapeTy::Related(model),
        _ => ShapeTy::Object(model),
    }
}

fn conflict(lhs: &ShapeTy, rhs: &ShapeTy, path: &str) -> Error {
    log::trace!(
        "merge conflict; path={path} lhs={} rhs={}",
        lhs.describe(),
        rhs.describe()
    );
    Error::merge_conflict(path, lhs.describe(), rhs.describe())
}
