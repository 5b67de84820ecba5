//! Table positions for 9-handed play.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrainerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "UTG")]
    Utg,
    #[serde(rename = "UTG+1")]
    Utg1,
    #[serde(rename = "UTG+2")]
    Utg2,
    #[serde(rename = "LJ")]
    Lj,
    #[serde(rename = "HJ")]
    Hj,
    #[serde(rename = "CO")]
    Co,
    #[serde(rename = "BTN")]
    Btn,
    #[serde(rename = "SB")]
    Sb,
    #[serde(rename = "BB")]
    Bb,
}

/// Positions that can open-raise first in (everything before the blinds),
/// in table order. The order matters: the 3-bet logic walks "one row up"
/// through this list.
pub const OPEN_POSITIONS: [Position; 7] = [
    Position::Utg,
    Position::Utg1,
    Position::Utg2,
    Position::Lj,
    Position::Hj,
    Position::Co,
    Position::Btn,
];

impl Position {
    pub fn label(self) -> &'static str {
        match self {
            Position::Utg => "UTG",
            Position::Utg1 => "UTG+1",
            Position::Utg2 => "UTG+2",
            Position::Lj => "LJ",
            Position::Hj => "HJ",
            Position::Co => "CO",
            Position::Btn => "BTN",
            Position::Sb => "SB",
            Position::Bb => "BB",
        }
    }

    pub fn is_blind(self) -> bool {
        matches!(self, Position::Sb | Position::Bb)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Position {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "UTG" => Ok(Position::Utg),
            "UTG1" | "UTG+1" => Ok(Position::Utg1),
            "UTG2" | "UTG+2" => Ok(Position::Utg2),
            "LJ" => Ok(Position::Lj),
            "HJ" => Ok(Position::Hj),
            "CO" => Ok(Position::Co),
            "BTN" => Ok(Position::Btn),
            "SB" => Ok(Position::Sb),
            "BB" => Ok(Position::Bb),
            _ => Err(TrainerError::UnknownPosition(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_utg_spellings() {
        assert_eq!("UTG+1".parse::<Position>().unwrap(), Position::Utg1);
        assert_eq!("utg1".parse::<Position>().unwrap(), Position::Utg1);
        assert_eq!("btn".parse::<Position>().unwrap(), Position::Btn);
        assert!("MP".parse::<Position>().is_err());
    }

    #[test]
    fn open_positions_are_in_table_order() {
        assert_eq!(OPEN_POSITIONS[0], Position::Utg);
        assert_eq!(OPEN_POSITIONS[6], Position::Btn);
    }
}
