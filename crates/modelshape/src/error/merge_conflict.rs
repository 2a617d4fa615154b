use super::Error;

/// Error when two merged shapes assign incompatible value types to the same
/// field path.
#[derive(Debug)]
pub(super) struct MergeConflict {
    path: Box<str>,
    lhs: Box<str>,
    rhs: Box<str>,
}

impl std::error::Error for MergeConflict {}

impl core::fmt::Display for MergeConflict {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "merge conflict at `{}`: {} is incompatible with {}",
            self.path, self.lhs, self.rhs
        )
    }
}

impl Error {
    /// Creates a merge conflict error for the dot-joined field `path`.
    ///
    /// `lhs` and `rhs` describe the two conflicting value types.
    pub fn merge_conflict(
        path: impl Into<String>,
        lhs: impl Into<String>,
        rhs: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::MergeConflict(MergeConflict {
            path: path.into().into(),
            lhs: lhs.into().into(),
            rhs: rhs.into().into(),
        }))
    }

    /// Returns `true` if this error, or the error it adds context to, is a merge
    /// conflict error.
    pub fn is_merge_conflict(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::MergeConflict(_))
    }
}
