//! Indentation unit for generated code.

/// What one indentation level is written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    FourSpaces,
    TwoSpaces,
    Tab,
}

impl Indent {
    /// rustfmt's default.
    pub const RUST: Self = Self::FourSpaces;

    /// Native header and implementation.
    pub const CPP: Self = Self::FourSpaces;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FourSpaces => "    ",
            Self::TwoSpaces => "  ",
            Self::Tab => "\t",
        }
    }
}
