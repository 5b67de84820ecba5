//! Six-tier hand-strength classification for a combo on a flop.
//!
//! The classifier is an ordered cascade: each test is checked in strict
//! descending strength order and the first match wins. The order is
//! load-bearing — an overpair that is also a flush draw must classify as
//! Strong Made, never Draw. Open-ended and gutshot straight draws
//! deliberately collapse into the single Draw tier.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Board, Combo};

/// Strength tiers, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bucket {
    #[serde(rename = "Monster")]
    Monster,
    #[serde(rename = "Strong Made")]
    StrongMade,
    #[serde(rename = "Weak Made")]
    WeakMade,
    #[serde(rename = "Draw")]
    Draw,
    #[serde(rename = "SD Value")]
    SdValue,
    #[serde(rename = "Air")]
    Air,
}

/// Fixed aggregation order, strongest to weakest. The MDF walk depends on
/// this exact sequence.
pub const BUCKET_ORDER: [Bucket; 6] = [
    Bucket::Monster,
    Bucket::StrongMade,
    Bucket::WeakMade,
    Bucket::Draw,
    Bucket::SdValue,
    Bucket::Air,
];

impl Bucket {
    pub fn name(self) -> &'static str {
        match self {
            Bucket::Monster => "Monster",
            Bucket::StrongMade => "Strong Made",
            Bucket::WeakMade => "Weak Made",
            Bucket::Draw => "Draw",
            Bucket::SdValue => "SD Value",
            Bucket::Air => "Air",
        }
    }

    /// Index into `BUCKET_ORDER` (0 = strongest).
    pub fn strength_index(self) -> usize {
        match self {
            Bucket::Monster => 0,
            Bucket::StrongMade => 1,
            Bucket::WeakMade => 2,
            Bucket::Draw => 3,
            Bucket::SdValue => 4,
            Bucket::Air => 5,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Distinct ranks of the 5 cards, descending.
fn unique_ranks_desc(ranks: &[u8]) -> Vec<u8> {
    let mut seen = [false; 15];
    for &r in ranks {
        seen[r as usize] = true;
    }
    (2..=14u8).rev().filter(|&r| seen[r as usize]).collect()
}

/// Five distinct ranks containing a 5-long contiguous run, or the wheel.
fn has_straight(unique: &[u8]) -> bool {
    if [14u8, 5, 4, 3, 2].iter().all(|r| unique.contains(r)) {
        return true;
    }
    unique.windows(5).any(|w| w[0] - w[4] == 4)
}

/// Any 4 distinct ranks spanning 3 (open-ended) or 4 (gutshot). An ace
/// also counts low for wheel-adjacent draws.
fn has_straight_draw(unique: &[u8]) -> bool {
    let mut ranks = unique.to_vec();
    if ranks.contains(&14) {
        ranks.push(1);
    }
    ranks
        .windows(4)
        .any(|w| w[0] - w[3] == 3 || w[0] - w[3] == 4)
}

/// Classify a two-card combo on a three-card flop into exactly one bucket.
pub fn evaluate_hand(combo: Combo, board: &Board) -> Bucket {
    let hole = combo.cards();
    let hole_ranks = [hole[0].rank.value(), hole[1].rank.value()];
    let board_ranks = board.ranks();

    let mut rank_counts = [0u8; 15];
    let mut suit_counts = [0u8; 4];
    for card in hole.iter().chain(board.cards().iter()) {
        rank_counts[card.rank.value() as usize] += 1;
        suit_counts[card.suit as usize] += 1;
    }

    let all_ranks: Vec<u8> = hole_ranks
        .iter()
        .chain(board_ranks.iter())
        .copied()
        .collect();
    let unique = unique_ranks_desc(&all_ranks);
    let board_top = *board_ranks.iter().max().unwrap_or(&0);
    let is_pocket = hole_ranks[0] == hole_ranks[1];

    // ----- Monster: flush, straight, quads, full house, set, two pair
    // using both hole cards.
    if suit_counts.iter().any(|&c| c >= 5) {
        return Bucket::Monster;
    }
    if unique.len() >= 5 && has_straight(&unique) {
        return Bucket::Monster;
    }

    let pair_ranks: Vec<u8> = (2..=14u8).filter(|&r| rank_counts[r as usize] == 2).collect();
    let trip_ranks: Vec<u8> = (2..=14u8).filter(|&r| rank_counts[r as usize] == 3).collect();
    let has_quads = rank_counts.iter().any(|&c| c == 4);

    if has_quads {
        return Bucket::Monster;
    }
    if !trip_ranks.is_empty() {
        if !pair_ranks.is_empty() {
            return Bucket::Monster; // full house
        }
        // A set: the pocket pair itself makes the trips.
        if is_pocket && trip_ranks.contains(&hole_ranks[0]) {
            return Bucket::Monster;
        }
    }
    if pair_ranks.len() >= 2 {
        let hits = hole_ranks
            .iter()
            .filter(|r| board_ranks.contains(r))
            .count();
        if hits == 2 {
            return Bucket::Monster; // two pair with both hole cards
        }
    }

    // ----- Strong Made: top pair with a Q+ kicker, or an overpair.
    for (i, &hr) in hole_ranks.iter().enumerate() {
        if hr == board_top {
            let kicker = if is_pocket { hr } else { hole_ranks[1 - i] };
            if kicker >= 12 {
                return Bucket::StrongMade;
            }
        }
    }
    if is_pocket && hole_ranks[0] > board_top {
        return Bucket::StrongMade;
    }

    // ----- Weak Made: top pair with any kicker, any pocket pair, second
    // or third pair.
    if hole_ranks.contains(&board_top) {
        return Bucket::WeakMade;
    }
    if is_pocket {
        return Bucket::WeakMade;
    }
    let board_unique = unique_ranks_desc(&board_ranks);
    for &hr in &hole_ranks {
        if board_unique.len() >= 2 && hr == board_unique[1] {
            return Bucket::WeakMade;
        }
        if board_unique.len() >= 3 && hr == board_unique[2] {
            return Bucket::WeakMade;
        }
    }

    // ----- Draw: four-card flush draw or a 4-in-5-window straight draw.
    if hole[0].suit == hole[1].suit {
        let matching = board
            .cards()
            .iter()
            .filter(|c| c.suit == hole[0].suit)
            .count();
        if matching == 2 {
            return Bucket::Draw;
        }
    }
    if has_straight_draw(&unique) {
        return Bucket::Draw;
    }

    // ----- SD Value: unimproved ace- or king-high.
    let high = hole_ranks[0].max(hole_ranks[1]);
    if high >= 13 {
        return Bucket::SdValue;
    }

    Bucket::Air
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_board, parse_combo};

    fn eval(combo: &str, board: &str) -> Bucket {
        evaluate_hand(parse_combo(combo).unwrap(), &parse_board(board).unwrap())
    }

    // --- Monster tier ---

    #[test]
    fn flush_is_monster() {
        assert_eq!(eval("AhKh", "2h7hTh"), Bucket::Monster);
    }

    #[test]
    fn straight_is_monster() {
        assert_eq!(eval("5c6c", "7s8h9d"), Bucket::Monster);
        assert_eq!(eval("TdJc", "QsKh9d"), Bucket::Monster);
    }

    #[test]
    fn wheel_is_monster() {
        assert_eq!(eval("Ah2c", "3s4d5h"), Bucket::Monster);
    }

    #[test]
    fn quads_and_full_house_are_monster() {
        assert_eq!(eval("KsKh", "KdKc5s"), Bucket::Monster);
        assert_eq!(eval("AsAh", "Ad7s7h"), Bucket::Monster);
        // Pocket under the board pair also fills up? No — 77 on KK5 is
        // pocket + board pair = two pair, only one hole card hits.
        assert_eq!(eval("7s7h", "KdKc5s"), Bucket::WeakMade);
    }

    #[test]
    fn set_is_monster() {
        assert_eq!(eval("7s7h", "7dKc2s"), Bucket::Monster);
    }

    #[test]
    fn two_pair_needs_both_hole_cards() {
        assert_eq!(eval("KsQh", "KdQc2s"), Bucket::Monster);
        // Top pair + board pair is not two-pair-with-both-cards.
        assert_eq!(eval("KsQh", "Kd2c2s"), Bucket::StrongMade);
    }

    #[test]
    fn board_trips_without_pocket_is_not_a_set() {
        // Hole card pairs nothing; trips live on the board.
        assert_eq!(eval("AhQc", "7d7s7h"), Bucket::SdValue);
    }

    // --- Strong Made tier ---

    #[test]
    fn top_pair_good_kicker() {
        assert_eq!(eval("AhKh", "As2h7d"), Bucket::StrongMade);
        assert_eq!(eval("AhQc", "As2h7d"), Bucket::StrongMade);
    }

    #[test]
    fn overpair() {
        assert_eq!(eval("QsQh", "Jd7c2s"), Bucket::StrongMade);
    }

    #[test]
    fn made_hand_outranks_simultaneous_draw() {
        // Top pair + open-ended draw stays Strong Made.
        assert_eq!(eval("KhQs", "KdJcTc"), Bucket::StrongMade);
        // Weak top pair + flush draw stays Weak Made.
        assert_eq!(eval("Ah4h", "Ad7h2h"), Bucket::WeakMade);
    }

    // --- Weak Made tier ---

    #[test]
    fn top_pair_weak_kicker() {
        assert_eq!(eval("Ah4c", "As2h7d"), Bucket::WeakMade);
    }

    #[test]
    fn underpair_is_weak_made() {
        assert_eq!(eval("KsKh", "As2h7d"), Bucket::WeakMade);
    }

    #[test]
    fn second_and_third_pair() {
        assert_eq!(eval("Th9c", "KsTd4h"), Bucket::WeakMade);
        assert_eq!(eval("4s9c", "KsTd4h"), Bucket::WeakMade);
    }

    // --- Draw tier ---

    #[test]
    fn flush_draw() {
        assert_eq!(eval("9h8h", "Ah2h7d"), Bucket::Draw);
    }

    #[test]
    fn open_ended_straight_draw() {
        assert_eq!(eval("5c6c", "7s8hKd"), Bucket::Draw);
    }

    #[test]
    fn gutshot_is_also_draw() {
        // 9-J-Q-K spans 4: gutshot needing a ten.
        assert_eq!(eval("9c8s", "JdQhKs"), Bucket::Draw);
    }

    #[test]
    fn wheel_adjacent_draw_counts_ace_low() {
        // A-2-3-4 with the ace counted low.
        assert_eq!(eval("2c3s", "4dAh9s"), Bucket::Draw);
    }

    // --- SD Value / Air ---

    #[test]
    fn unimproved_ace_or_king_high() {
        assert_eq!(eval("AhQc", "7d2s9h"), Bucket::SdValue);
        assert_eq!(eval("Kh2c", "7d8s9h"), Bucket::SdValue);
    }

    #[test]
    fn air() {
        assert_eq!(eval("Qh2c", "7d8s9h"), Bucket::Air);
    }

    #[test]
    fn every_combo_gets_exactly_one_bucket() {
        let board = parse_board("Ks8h3d").unwrap();
        for combo in crate::cards::all_combos() {
            if crate::cards::blocks_board(*combo, &board) {
                continue;
            }
            // Must not panic; any returned bucket is one of the six.
            let bucket = evaluate_hand(*combo, &board);
            assert!(BUCKET_ORDER.contains(&bucket));
        }
    }
}
