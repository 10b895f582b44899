use serde::{Deserialize, Serialize};
use std::fmt;

/// Color tokens accepted by GitHub Projects single-select options.
/// Declared in rainbow (ROYGBIV) order; chronological fields assign
/// them in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorToken {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Indigo,
    Purple,
    Pink,
    Gray,
    DarkGray,
}

impl ColorToken {
    /// Wire name the field API expects (`RED` .. `DARK_GRAY`)
    pub fn as_str(self) -> &'static str {
        match self {
            ColorToken::Red => "RED",
            ColorToken::Orange => "ORANGE",
            ColorToken::Yellow => "YELLOW",
            ColorToken::Green => "GREEN",
            ColorToken::Blue => "BLUE",
            ColorToken::Indigo => "INDIGO",
            ColorToken::Purple => "PURPLE",
            ColorToken::Pink => "PINK",
            ColorToken::Gray => "GRAY",
            ColorToken::DarkGray => "DARK_GRAY",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
