//! Power-number shove/fold heuristic for short stacks.
//!
//! Each hand gets an integer score from a strict fallback chain over the
//! open ranges; a shove is valid only below M = 6 and compares the score
//! against M times the number of players left to act.

use crate::cards::HandType;
use crate::open_ranges::{btn_open, co_open, ljhj_open, utg12_open, utg_open};
use crate::positions::Position;

/// Score a hand via the fallback chain. 999 stands in for "always".
pub fn assign_power_number(hand: HandType) -> u32 {
    if utg_open(hand) {
        return 999;
    }

    // UTG+1/2 range, excluding the A4s/A5s wheel adds.
    if utg12_open(hand) && !(hand.suited && hand.hi == 14 && (hand.lo == 4 || hand.lo == 5)) {
        return 50;
    }

    if ljhj_open(hand) {
        // Low suited kings scale with the kicker.
        if hand.suited && hand.hi == 13 && hand.lo <= 8 {
            return 9 + hand.lo as u32;
        }
        return 20;
    }

    if co_open(hand) {
        return 10;
    }

    if btn_open(hand) {
        return 5;
    }

    // Offsuit KX / QX not caught by any range above.
    if !hand.suited && !hand.is_pocket() && (hand.hi == 13 || hand.hi == 12) {
        return 5;
    }

    0
}

/// Players still to act behind each seat, 9-handed.
pub fn players_behind(pos: Position) -> u32 {
    match pos {
        Position::Utg => 8,
        Position::Utg1 => 7,
        Position::Utg2 => 6,
        Position::Lj => 5,
        Position::Hj => 4,
        Position::Co => 3,
        Position::Btn => 2,
        Position::Sb => 1,
        Position::Bb => 0,
    }
}

/// Shove decision: only defined for M < 6; shove iff the power number is
/// positive and at least M times the players behind.
pub fn should_shove(hero: Position, hand: HandType, m_value: f64) -> bool {
    if m_value >= 6.0 {
        return false;
    }

    let pn = assign_power_number(hand);
    if pn == 0 {
        return false;
    }

    pn as f64 >= m_value * players_behind(hero) as f64
}
