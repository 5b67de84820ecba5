//! First-in open-raise ranges by position.
//!
//! Each predicate is a literal threshold table — these constants are range
//! design data and must stay exact. UTG+1/UTG+2 share one range, as do
//! LJ/HJ.

use crate::cards::{is_broadway, HandType};
use crate::positions::Position;

/// UTG: pockets 88+, offsuit hi+lo >= 26, suited hi+lo >= 24.
pub fn utg_open(hand: HandType) -> bool {
    if hand.is_pocket() {
        return hand.hi >= 8;
    }
    let total = hand.hi + hand.lo;
    if hand.suited {
        total >= 24
    } else {
        total >= 26
    }
}

/// UTG+1 / UTG+2: pockets 55+, offsuit hi+lo >= 25, suited A9s+/A4s/A5s
/// plus all broadway-suited.
pub fn utg12_open(hand: HandType) -> bool {
    if hand.is_pocket() {
        return hand.hi >= 5;
    }
    if !hand.suited {
        return hand.hi + hand.lo >= 25;
    }
    if hand.hi == 14 && (hand.lo >= 9 || hand.lo == 4 || hand.lo == 5) {
        return true;
    }
    is_broadway(hand.hi) && is_broadway(hand.lo)
}

/// LJ / HJ: any pocket, offsuit hi+lo >= 23, suited AXs/KXs or both >= 8.
pub fn ljhj_open(hand: HandType) -> bool {
    if hand.is_pocket() {
        return true;
    }
    if !hand.suited {
        return hand.hi + hand.lo >= 23;
    }
    if hand.hi == 14 || hand.hi == 13 {
        return true;
    }
    hand.hi >= 8 && hand.lo >= 8
}

/// CO: any pocket; offsuit both >= 9 or A8o+; suited AXs-QXs, both >= 7,
/// or connectors/gappers 45s+ (lo >= 4, gap <= 3).
pub fn co_open(hand: HandType) -> bool {
    if hand.is_pocket() {
        return true;
    }
    if !hand.suited {
        if hand.hi >= 9 && hand.lo >= 9 {
            return true;
        }
        return hand.hi == 14 && hand.lo >= 8;
    }
    if hand.hi >= 12 {
        return true;
    }
    if hand.hi >= 7 && hand.lo >= 7 {
        return true;
    }
    hand.lo >= 4 && hand.hi - hand.lo <= 3
}

/// BTN: any pocket; offsuit both >= 8 or any Axo; suited TXs+, both >= 5,
/// or connectors/gappers with lo >= 4 and gap <= 2.
pub fn btn_open(hand: HandType) -> bool {
    if hand.is_pocket() {
        return true;
    }
    if !hand.suited {
        if hand.hi >= 8 && hand.lo >= 8 {
            return true;
        }
        return hand.hi == 14;
    }
    if hand.hi >= 10 {
        return true;
    }
    if hand.hi >= 5 && hand.lo >= 5 {
        return true;
    }
    hand.lo >= 4 && hand.hi - hand.lo <= 2
}

/// Position-keyed dispatcher. Blinds never open-raise here (SB first-in
/// has its own three-way action, BB closes the preflop action).
pub fn in_open_range(pos: Position, hand: HandType) -> bool {
    match pos {
        Position::Utg => utg_open(hand),
        Position::Utg1 | Position::Utg2 => utg12_open(hand),
        Position::Lj | Position::Hj => ljhj_open(hand),
        Position::Co => co_open(hand),
        Position::Btn => btn_open(hand),
        Position::Sb | Position::Bb => false,
    }
}
