/// Whether a field must be supplied.
///
/// Ordered `Optional < Required`; merging keeps the stricter of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Presence {
    Optional,
    Required,
}

impl Presence {
    pub fn is_required(self) -> bool {
        matches!(self, Self::Required)
    }

    pub fn is_optional(self) -> bool {
        matches!(self, Self::Optional)
    }

    /// The stricter of the two obligations.
    #[must_use]
    pub fn stricter(self, other: Self) -> Self {
        self.max(other)
    }
}
