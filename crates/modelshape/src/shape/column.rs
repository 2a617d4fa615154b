//! Presence rules for columns.

use super::{FieldShape, Mode, Presence, ShapeTy};
use crate::schema::Field;

/// Decides whether a column appears in a `mode` projection and, if so,
/// whether it is required.
///
/// | mode       | result                                              |
/// |------------|-----------------------------------------------------|
/// | `All`      | `Required`                                          |
/// | `Create`   | `Optional` if defaulted, generated or nullable      |
/// | `Insert`   | same as `Create`                                    |
/// | `Virtuals` | `Optional` if generated, otherwise excluded         |
///
/// In `All`, nullability shows up on the field's type, not its presence.
pub fn presence(field: &Field, mode: Mode) -> Option<Presence> {
    match mode {
        Mode::All => Some(Presence::Required),
        Mode::Create | Mode::Insert => {
            if field.has_default() || field.is_generated() || field.nullable {
                Some(Presence::Optional)
            } else {
                Some(Presence::Required)
            }
        }
        Mode::Virtuals => field.is_generated().then_some(Presence::Optional),
    }
}

/// The shape of a column in a `mode` projection.
///
/// # Panics
///
/// Panics if `field` is not a column.
#[track_caller]
pub fn resolve(field: &Field, mode: Mode) -> Option<FieldShape> {
    let primitive = field.ty.expect_primitive();

    presence(field, mode).map(|presence| FieldShape {
        presence,
        nullable: field.nullable,
        ty: ShapeTy::Scalar(primitive.ty.clone()),
    })
}
