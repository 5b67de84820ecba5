//! Named-range resolution: a range identifier string to the set of combos
//! its predicate accepts, drawn from the full 1326-combo enumeration.

use crate::blind_defence::{bb_defends_vs_open, sb_first_in, SbAction};
use crate::cards::{all_combos, Combo, HandType};
use crate::open_ranges::{in_open_range, utg12_open};
use crate::positions::Position;
use crate::three_bet::{defence_core, defend_vs_ip_three_bet};

/// The range identifiers the quiz and CLI offer.
pub const KNOWN_RANGE_IDS: [&str; 12] = [
    "OPEN_UTG",
    "OPEN_UTG1",
    "OPEN_LJ",
    "OPEN_HJ",
    "OPEN_CO",
    "OPEN_BTN",
    "3BET_DEFENCE_IP",
    "3BET_DEFENCE_OOP",
    "BB_DEFENCE_vs_UTG",
    "BB_DEFENCE_vs_CO",
    "BB_DEFENCE_vs_BTN",
    "SB_RFI",
];

fn filter_combos(pred: impl Fn(HandType) -> bool) -> Vec<Combo> {
    all_combos()
        .iter()
        .copied()
        .filter(|&c| pred(HandType::of(c)))
        .collect()
}

fn open_position(label: &str) -> Option<Position> {
    match label {
        "UTG" => Some(Position::Utg),
        "UTG1" | "UTG+1" => Some(Position::Utg1),
        "UTG2" | "UTG+2" => Some(Position::Utg2),
        "LJ" => Some(Position::Lj),
        "HJ" => Some(Position::Hj),
        "CO" => Some(Position::Co),
        "BTN" => Some(Position::Btn),
        _ => None,
    }
}

fn bb_villain(label: &str) -> Option<Position> {
    match label {
        "UTG" => Some(Position::Utg),
        "UTG1" | "UTG2" | "UTG+1" | "UTG+2" => Some(Position::Utg1),
        "LJ" | "HJ" => Some(Position::Lj),
        "CO" => Some(Position::Co),
        "BTN" => Some(Position::Btn),
        _ => None,
    }
}

/// Resolve a range id to its combo set. Unrecognized ids resolve to the
/// empty set — "no such range" is not an error for the caller.
pub fn resolve_range(range_id: &str) -> Vec<Combo> {
    if let Some(label) = range_id.strip_prefix("OPEN_") {
        return match open_position(label) {
            Some(pos) => filter_combos(|hand| in_open_range(pos, hand)),
            None => Vec::new(),
        };
    }

    match range_id {
        // In position the whole UTG+1/2 core defends.
        "3BET_DEFENCE_IP" => filter_combos(utg12_open),
        "3BET_DEFENCE_OOP" => {
            filter_combos(|hand| defence_core(hand) && defend_vs_ip_three_bet(hand))
        }
        "SB_RFI" => filter_combos(|hand| sb_first_in(hand) == SbAction::Raise),
        _ => {
            if let Some(label) = range_id.strip_prefix("BB_DEFENCE_vs_") {
                return match bb_villain(label) {
                    Some(villain) => filter_combos(|hand| bb_defends_vs_open(villain, hand)),
                    None => Vec::new(),
                };
            }
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn unknown_id_resolves_empty() {
        assert!(resolve_range("OPEN_MP").is_empty());
        assert!(resolve_range("BB_DEFENCE_vs_SB").is_empty());
        assert!(resolve_range("nonsense").is_empty());
    }

    #[test]
    fn every_known_id_resolves_nonempty() {
        for id in KNOWN_RANGE_IDS {
            assert!(!resolve_range(id).is_empty(), "{} resolved empty", id);
        }
    }

    #[test]
    fn open_ranges_widen_toward_the_button() {
        let sizes: Vec<usize> = ["OPEN_UTG", "OPEN_UTG1", "OPEN_LJ", "OPEN_CO", "OPEN_BTN"]
            .iter()
            .map(|id| resolve_range(id).len())
            .collect();
        for pair in sizes.windows(2) {
            assert!(pair[0] < pair[1], "sizes not widening: {:?}", sizes);
        }
    }

    #[test]
    fn sb_rfi_matches_btn_open() {
        let sb: HashSet<Combo> = resolve_range("SB_RFI").into_iter().collect();
        let btn: HashSet<Combo> = resolve_range("OPEN_BTN").into_iter().collect();
        assert_eq!(sb, btn);
    }

    #[test]
    fn oop_defence_is_subset_of_ip_defence() {
        let ip: HashSet<Combo> = resolve_range("3BET_DEFENCE_IP").into_iter().collect();
        let oop: HashSet<Combo> = resolve_range("3BET_DEFENCE_OOP").into_iter().collect();
        assert!(oop.is_subset(&ip));
        assert!(oop.len() < ip.len());
    }

    #[test]
    fn utg_spellings_resolve_to_the_same_range() {
        assert_eq!(resolve_range("OPEN_UTG1"), resolve_range("OPEN_UTG+1"));
        assert_eq!(resolve_range("OPEN_UTG1"), resolve_range("OPEN_UTG2"));
    }

    #[test]
    fn pocket_pair_combo_counts() {
        // Any pocket rank contributes C(4,2) = 6 combos; UTG takes 88+.
        let utg = resolve_range("OPEN_UTG");
        let pockets = utg
            .iter()
            .filter(|c| HandType::of(**c).is_pocket())
            .count();
        assert_eq!(pockets, 7 * 6);
    }
}
