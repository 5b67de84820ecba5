//! Blind play: BB defence vs an open, and SB first-in.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::HandType;
use crate::open_ranges::btn_open;
use crate::positions::Position;

/// Whether the BB defends (calls) against a single open from `villain`.
///
/// Four literal tables keyed by the opener's seat bucket; every threshold
/// widens as the opener gets later. SB and BB opens never reach this spot.
pub fn bb_defends_vs_open(villain: Position, hand: HandType) -> bool {
    match villain {
        Position::Utg => {
            if hand.is_pocket() {
                return hand.hi >= 6;
            }
            if !hand.suited {
                return hand.hi == 14 && hand.lo >= 12;
            }
            // ATs+, both >= J, connectors lo >= 7 with gap <= 1
            if hand.hi == 14 && hand.lo >= 10 {
                return true;
            }
            if hand.hi >= 11 && hand.lo >= 11 {
                return true;
            }
            hand.lo >= 7 && hand.hi - hand.lo <= 1
        }
        Position::Utg1 | Position::Utg2 => {
            if hand.is_pocket() {
                return hand.hi >= 5;
            }
            if !hand.suited {
                if hand.hi == 14 && hand.lo >= 11 {
                    return true;
                }
                return hand.hi >= 12 && hand.lo >= 12;
            }
            if hand.hi == 14 {
                return true;
            }
            if hand.hi >= 10 && hand.lo >= 10 {
                return true;
            }
            hand.lo >= 6 && hand.hi - hand.lo <= 1
        }
        Position::Lj | Position::Hj => {
            if hand.is_pocket() {
                return true;
            }
            if !hand.suited {
                if hand.hi == 14 && hand.lo >= 10 {
                    return true;
                }
                return hand.hi >= 11 && hand.lo >= 11;
            }
            if hand.hi == 14 {
                return true;
            }
            if hand.hi >= 8 && hand.lo >= 8 {
                return true;
            }
            hand.lo >= 4 && hand.hi - hand.lo <= 2
        }
        Position::Co | Position::Btn => {
            if hand.is_pocket() {
                return true;
            }
            if !hand.suited {
                if hand.hi == 14 && hand.lo >= 8 {
                    return true;
                }
                return hand.hi >= 10 && hand.lo >= 10;
            }
            if hand.hi == 14 {
                return true;
            }
            if hand.hi >= 7 && hand.lo >= 7 {
                return true;
            }
            hand.lo >= 4 && hand.hi - hand.lo <= 2
        }
        Position::Sb | Position::Bb => false,
    }
}

// ---------------------------------------------------------------------------
// SB first-in
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SbAction {
    #[serde(rename = "raise")]
    Raise,
    #[serde(rename = "limp")]
    Limp,
    #[serde(rename = "fold")]
    Fold,
}

impl SbAction {
    pub fn label(self) -> &'static str {
        match self {
            SbAction::Raise => "raise",
            SbAction::Limp => "limp",
            SbAction::Fold => "fold",
        }
    }
}

impl fmt::Display for SbAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// SB action when everyone has folded: raise with the BTN open range,
/// fold everything offsuit outside it, fold suited hands with lo <= 3,
/// limp the remaining suited hands.
pub fn sb_first_in(hand: HandType) -> SbAction {
    if btn_open(hand) {
        return SbAction::Raise;
    }
    if !hand.suited {
        return SbAction::Fold;
    }
    if hand.lo <= 3 {
        return SbAction::Fold;
    }
    SbAction::Limp
}
