//! Strength-classifier scenarios exercised through the public API.

use range_trainer::cards::{parse_board, parse_combo};
use range_trainer::hand_strength::{evaluate_hand, Bucket};

fn eval(combo: &str, board: &str) -> Bucket {
    evaluate_hand(parse_combo(combo).unwrap(), &parse_board(board).unwrap())
}

#[test]
fn pocket_kings_under_an_ace_are_weak_made() {
    assert_eq!(eval("KsKh", "As2h7d"), Bucket::WeakMade);
}

#[test]
fn top_pair_king_kicker_is_strong_made() {
    assert_eq!(eval("AhKh", "As2h7d"), Bucket::StrongMade);
}

#[test]
fn five_six_on_seven_eight_nine_completes_the_straight() {
    // 5-6-7-8-9 is a made straight, not a draw.
    assert_eq!(eval("5c6c", "7s8h9d"), Bucket::Monster);
}

#[test]
fn five_six_below_a_broadway_card_is_an_open_ended_draw() {
    assert_eq!(eval("5c6c", "7s8hKd"), Bucket::Draw);
}

#[test]
fn priority_order_resolves_overlaps_upward() {
    // A suited ace with top pair and a flush draw: made hand wins.
    assert_eq!(eval("AhQh", "Ad7h2h"), Bucket::StrongMade);
    // The same suits without the pair stay a draw.
    assert_eq!(eval("QhJh", "Ad7h2h"), Bucket::Draw);
}

#[test]
fn ace_high_with_no_interaction_is_sd_value() {
    assert_eq!(eval("AhJc", "7d8s2h"), Bucket::SdValue);
}

#[test]
fn low_offsuit_junk_is_air() {
    assert_eq!(eval("Jh4c", "7d8s2h"), Bucket::Air);
}
