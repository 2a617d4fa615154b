//! Field-presence contracts computed from a schema.
//!
//! A [`ComputedModel`] answers, for one model and one [`Mode`], which fields a
//! record carries and whether each is [`Presence::Required`] or
//! [`Presence::Optional`]. The rules live in three resolvers, one per kind of
//! field ([`column`], [`embedded`], [`relation`]); [`Projector`] dispatches to
//! them and [`merge`] combines the results.

pub mod column;
pub mod embedded;
pub mod relation;

mod computed;
pub use computed::ComputedModel;

mod field_shape;
pub use field_shape::{FieldShape, ShapeTy};

mod include;
pub use include::Include;

mod merge;
pub use merge::merge;

mod mode;
pub use mode::Mode;

mod presence;
pub use presence::Presence;

mod project;
pub use project::{project, Projector};
