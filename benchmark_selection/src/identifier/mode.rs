//!
//! The identifier validation mode.
//!

///
/// The identifier validation mode.
///
/// The two flags are orthogonal: `loose` disables the structural checks
/// altogether, while `allow_numeric` only relaxes the rules for the first
/// character.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Mode {
    /// Only the non-emptiness is checked.
    pub loose: bool,
    /// The name may start with a digit, e.g. `2to3`.
    pub allow_numeric: bool,
}

impl Mode {
    /// The mode used for tags and group names.
    pub const STRICT: Self = Self {
        loose: false,
        allow_numeric: false,
    };

    /// The mode used for benchmark names.
    pub const NUMERIC: Self = Self {
        loose: false,
        allow_numeric: true,
    };

    /// The mode used for fragments validated elsewhere.
    pub const LOOSE: Self = Self {
        loose: true,
        allow_numeric: false,
    };
}
