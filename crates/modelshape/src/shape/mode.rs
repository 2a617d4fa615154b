use std::fmt;

/// The data-access operation a shape is computed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Mode {
    /// A fully read record.
    All,

    /// Input accepted by a create call.
    Create,

    /// Input accepted by a low-level insert call.
    Insert,

    /// Fields the store computes and returns on write.
    Virtuals,
}

impl Mode {
    pub const VARIANTS: [Mode; 4] = [Mode::All, Mode::Create, Mode::Insert, Mode::Virtuals];
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "all",
            Self::Create => "create",
            Self::Insert => "insert",
            Self::Virtuals => "virtuals",
        })
    }
}
