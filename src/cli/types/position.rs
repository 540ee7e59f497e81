//! Draft-board position types.

use serde::Serialize;
use std::fmt;

/// Positions that have their own valuation file and ranked sheet.
///
/// The declaration order is the concatenation order of the loader and the
/// sheet order of the exported workbook.
///
/// # Examples
///
/// ```rust
/// use ffl_draft_values::Position;
///
/// assert_eq!(Position::QB.to_string(), "QB");
/// assert_eq!(Position::ALL[3], Position::TE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
}

impl Position {
    /// Every position, in load and sheet order.
    pub const ALL: [Position; 4] = [Position::QB, Position::RB, Position::WR, Position::TE];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_order() {
        assert_eq!(
            Position::ALL,
            [Position::QB, Position::RB, Position::WR, Position::TE]
        );
        assert!(Position::QB < Position::TE);
    }

    #[test]
    fn test_position_string_conversion() {
        assert_eq!(Position::QB.to_string(), "QB");
        assert_eq!(Position::RB.to_string(), "RB");
        assert_eq!(Position::WR.to_string(), "WR");
        assert_eq!(Position::TE.to_string(), "TE");
    }
}
