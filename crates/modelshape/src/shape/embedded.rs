//! Shapes for embed fields.
//!
//! An embed is projected by running the whole projection over its target
//! model with the parent's mode. Nested presences are kept as they are; only
//! the embed field's own presence is decided here.

use super::{FieldShape, Include, Mode, Presence, Projector, ShapeTy};
use crate::schema::Field;
use crate::Result;

/// The shape of an embed field in a `mode` projection.
///
/// The embed field follows the column rule with only its nullable flag: it is
/// required in `All`, and optional on write if nullable. In `Virtuals` it is
/// always present and optional, even when the nested projection is empty.
///
/// # Panics
///
/// Panics if `field` is not an embed.
pub fn resolve(
    projector: &Projector<'_>,
    field: &Field,
    mode: Mode,
    include: Option<&Include>,
) -> Result<FieldShape> {
    let embedded = field.ty.expect_embedded();
    let target = embedded.target(projector.schema());
    let nested = projector.project_model(target, mode, include)?;

    let presence = match mode {
        Mode::All => Presence::Required,
        Mode::Create | Mode::Insert if field.nullable => Presence::Optional,
        Mode::Create | Mode::Insert => Presence::Required,
        Mode::Virtuals => Presence::Optional,
    };

    Ok(FieldShape {
        presence,
        nullable: field.nullable,
        ty: ShapeTy::Embedded(nested),
    })
}
