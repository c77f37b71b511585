//! Style properties touched by compensation

use std::fmt;

/// Longhand properties the compensator overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    OverflowY,
    PaddingRight,
    MarginRight,
}

impl StyleProperty {
    pub const ALL: [StyleProperty; 3] = [Self::OverflowY, Self::PaddingRight, Self::MarginRight];

    /// CSS longhand name (`padding-right`)
    pub fn css_name(self) -> &'static str {
        match self {
            Self::OverflowY => "overflow-y",
            Self::PaddingRight => "padding-right",
            Self::MarginRight => "margin-right",
        }
    }

    /// camelCase dataset key (`paddingRight`)
    pub fn key(self) -> &'static str {
        match self {
            Self::OverflowY => "overflowY",
            Self::PaddingRight => "paddingRight",
            Self::MarginRight => "marginRight",
        }
    }
}

impl fmt::Display for StyleProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}
