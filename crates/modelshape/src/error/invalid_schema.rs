use super::Error;

/// Error when a schema definition is invalid.
///
/// This occurs when:
/// - A model has two fields with the same name
/// - An embed or relation targets a missing model, or a model of the wrong kind
/// - A relation references columns that do not exist on its target
/// - Embedded models embed themselves, directly or transitively
/// - A column's `auto` strategy or default value does not fit its type
///
/// These errors are raised once, while the schema is built. Projections
/// assume a schema that passed these checks.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::InvalidSchema(_))
    }
}
