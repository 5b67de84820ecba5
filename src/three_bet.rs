//! Facing-an-open (3-bet) spots and 3-bet defence.
//!
//! `three_bet_actions` returns the full set of actions the ruleset allows
//! for a hand, not a single pick — several hands are deliberately mixed
//! ({3bet, call} or {3bet, fold}).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::HandType;
use crate::open_ranges::{in_open_range, utg12_open};
use crate::positions::{Position, OPEN_POSITIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThreeBetAction {
    #[serde(rename = "3bet")]
    ThreeBet,
    #[serde(rename = "call")]
    Call,
    #[serde(rename = "fold")]
    Fold,
}

impl ThreeBetAction {
    pub fn label(self) -> &'static str {
        match self {
            ThreeBetAction::ThreeBet => "3bet",
            ThreeBetAction::Call => "call",
            ThreeBetAction::Fold => "fold",
        }
    }
}

impl fmt::Display for ThreeBetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn pocket_at_least(hand: HandType, rank: u8) -> bool {
    hand.is_pocket() && hand.hi >= rank
}

fn suited_exact(hand: HandType, hi: u8, lo: u8) -> bool {
    hand.suited && hand.hi == hi && hand.lo == lo
}

fn offsuit_exact(hand: HandType, hi: u8, lo: u8) -> bool {
    !hand.suited && !hand.is_pocket() && hand.hi == hi && hand.lo == lo
}

/// Premium hands that always 3-bet from any non-blind seat: QQ+, AKo, AKs.
fn always_three_bet(hand: HandType) -> bool {
    pocket_at_least(hand, 12) || offsuit_exact(hand, 14, 13) || suited_exact(hand, 14, 13)
}

/// Allowed actions for hero facing a single open-raise.
///
/// Precedence: premiums always 3-bet; vs an early (UTG-UTG+2) open a
/// literal table applies; vs anything later the hand 3-bets/calls iff it
/// is inside the open range of the position one row ahead of the opener.
pub fn three_bet_actions(
    hero: Position,
    villain: Position,
    hand: HandType,
) -> Vec<ThreeBetAction> {
    use ThreeBetAction::*;

    if !hero.is_blind() && always_three_bet(hand) {
        return vec![ThreeBet];
    }

    if matches!(villain, Position::Utg | Position::Utg1 | Position::Utg2) {
        // Mandatory 3bet: QQ+, AKo, AQs+ (AKs is covered by AQs+).
        if pocket_at_least(hand, 12)
            || offsuit_exact(hand, 14, 13)
            || (hand.suited && hand.hi == 14 && hand.lo >= 12)
        {
            return vec![ThreeBet];
        }
        // Mandatory cold call: AJs, 88, 99.
        if suited_exact(hand, 14, 11) || (hand.is_pocket() && (hand.hi == 8 || hand.hi == 9)) {
            return vec![Call];
        }
        // Mixed 3bet-or-call: TT, JJ, KQs.
        if (hand.is_pocket() && (hand.hi == 10 || hand.hi == 11)) || suited_exact(hand, 13, 12) {
            return vec![ThreeBet, Call];
        }
        // Mixed 3bet-or-fold: A5s.
        if suited_exact(hand, 14, 5) {
            return vec![ThreeBet, Fold];
        }
        return vec![Fold];
    }

    // Later opens: compare against the open range one row up from the
    // villain. UTG has no row above itself.
    let v_idx = OPEN_POSITIONS
        .iter()
        .position(|&p| p == villain)
        .unwrap_or(0);
    let upper = if v_idx > 0 {
        OPEN_POSITIONS[v_idx - 1]
    } else {
        Position::Utg
    };

    if in_open_range(upper, hand) {
        vec![ThreeBet, Call]
    } else {
        vec![Fold]
    }
}

// ---------------------------------------------------------------------------
// 3-bet defence (hero opened, villain 3-bets)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefenceAction {
    #[serde(rename = "defend")]
    Defend,
    #[serde(rename = "fold")]
    Fold,
}

impl DefenceAction {
    pub fn label(self) -> &'static str {
        match self {
            DefenceAction::Defend => "defend",
            DefenceAction::Fold => "fold",
        }
    }
}

impl fmt::Display for DefenceAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The widest plausible defence core: the UTG+1/2 open range.
pub fn defence_core(hand: HandType) -> bool {
    utg12_open(hand)
}

/// Extra tightening when hero is out of position against the 3-bettor:
/// pockets 77+, suited AJs+/A5s, offsuit AQo+.
pub fn defend_vs_ip_three_bet(hand: HandType) -> bool {
    if hand.is_pocket() {
        return hand.hi >= 7;
    }
    if hand.suited {
        return hand.hi == 14 && (hand.lo >= 11 || hand.lo == 5);
    }
    hand.hi == 14 && hand.lo >= 12
}

/// Defend-or-fold after hero's open gets 3-bet. In position the defence
/// core alone defends; out of position the hand must also pass the
/// tighter vs-IP filter.
pub fn three_bet_defence(in_position: bool, hand: HandType) -> DefenceAction {
    if !defence_core(hand) {
        return DefenceAction::Fold;
    }
    if !in_position && !defend_vs_ip_three_bet(hand) {
        return DefenceAction::Fold;
    }
    DefenceAction::Defend
}
