use super::Error;

/// Error when a relation include cannot be applied to a projection.
///
/// Raised when an include names a field that is neither a relation nor an
/// embed, names a field that does not exist, or is passed to a projection
/// mode other than [`Mode::All`](crate::shape::Mode::All).
#[derive(Debug)]
pub(super) struct InvalidInclude {
    message: Box<str>,
}

impl std::error::Error for InvalidInclude {}

impl core::fmt::Display for InvalidInclude {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid include: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid include error.
    pub fn invalid_include(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidInclude(InvalidInclude {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid include error.
    pub fn is_invalid_include(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::InvalidInclude(_))
    }
}
