//! End-to-end checks over the range classifiers and named-range
//! resolution.

use range_trainer::cards::{all_combos, parse_hand_type, HandType};
use range_trainer::open_ranges::in_open_range;
use range_trainer::positions::Position;
use range_trainer::power_number::{assign_power_number, should_shove};
use range_trainer::ranges::{resolve_range, KNOWN_RANGE_IDS};
use range_trainer::three_bet::{three_bet_actions, ThreeBetAction};

fn ht(s: &str) -> HandType {
    parse_hand_type(s).unwrap()
}

// ---------------------------------------------------------------------------
// Named-range resolution
// ---------------------------------------------------------------------------

#[test]
fn resolved_ranges_contain_only_enumerated_combos() {
    let universe = all_combos();
    for id in KNOWN_RANGE_IDS {
        for combo in resolve_range(id) {
            assert!(universe.contains(&combo), "{} produced {}", id, combo);
        }
    }
}

#[test]
fn resolution_agrees_with_the_predicate() {
    let resolved = resolve_range("OPEN_CO");
    for combo in all_combos() {
        let hand = HandType::of(*combo);
        assert_eq!(
            resolved.contains(combo),
            in_open_range(Position::Co, hand),
            "disagreement on {}",
            hand
        );
    }
}

#[test]
fn unknown_ids_are_nonfatal() {
    assert!(resolve_range("").is_empty());
    assert!(resolve_range("OPEN_").is_empty());
    assert!(resolve_range("3BET_DEFENCE").is_empty());
}

// ---------------------------------------------------------------------------
// Cross-classifier consistency
// ---------------------------------------------------------------------------

#[test]
fn every_open_range_hand_has_a_positive_power_number() {
    for combo in all_combos() {
        let hand = HandType::of(*combo);
        if in_open_range(Position::Btn, hand) {
            assert!(
                assign_power_number(hand) > 0,
                "{} opens BTN but scores 0",
                hand
            );
        }
    }
}

#[test]
fn premium_three_bet_rule_dominates_every_villain_seat() {
    for villain in [
        Position::Utg,
        Position::Utg2,
        Position::Lj,
        Position::Hj,
        Position::Co,
    ] {
        let actions = three_bet_actions(Position::Btn, villain, ht("KK"));
        assert_eq!(actions, vec![ThreeBetAction::ThreeBet]);
    }
}

#[test]
fn utg_premium_shoves_at_any_short_stack() {
    // Spec scenario: QQ from UTG scores 999 and shoves for every M < 6.
    assert_eq!(assign_power_number(ht("QQ")), 999);
    for m in [1.0, 3.3, 5.9] {
        assert!(should_shove(Position::Utg, ht("QQ"), m));
    }
    assert!(!should_shove(Position::Utg, ht("QQ"), 6.0));
}
