mod error;
pub use error::{Error, IntoError};

pub mod schema;
pub use schema::Schema;

pub mod shape;
pub use shape::{ComputedModel, FieldShape, Include, Mode, Presence, ShapeTy};

pub mod shapes;
pub use shapes::Shapes;

pub mod value;

/// A Result type alias that uses modelshape's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
