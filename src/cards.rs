//! Card, combo, and hand-type model.
//!
//! Ranks run 2..=14 (14 = Ace). A `Combo` is an unordered pair of distinct
//! cards; all 1326 = C(52,2) of them are enumerated once and memoized. A
//! `HandType` is the (hi, lo, suited) view of a combo used by every range
//! predicate — pockets are never "suited" since equal ranks force
//! different suits.

use std::fmt;

use itertools::Itertools;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{TrainerError, TrainerResult};

// ---------------------------------------------------------------------------
// Ranks and suits
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(v: u8) -> Option<Rank> {
        if (2..=14).contains(&v) {
            Some(ALL_RANKS[(v - 2) as usize])
        } else {
            None
        }
    }

    pub fn from_char(c: char) -> Option<Rank> {
        let v = match c.to_ascii_uppercase() {
            '2' => 2,
            '3' => 3,
            '4' => 4,
            '5' => 5,
            '6' => 6,
            '7' => 7,
            '8' => 8,
            '9' => 9,
            'T' => 10,
            'J' => 11,
            'Q' => 12,
            'K' => 13,
            'A' => 14,
            _ => return None,
        };
        Rank::from_value(v)
    }

    pub fn to_char(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            r => (b'0' + r.value()) as char,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

impl Suit {
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            's' => Some(Suit::Spades),
            'h' => Some(Suit::Hearts),
            'd' => Some(Suit::Diamonds),
            'c' => Some(Suit::Clubs),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spades => 's',
            Suit::Hearts => 'h',
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

// ---------------------------------------------------------------------------
// Cards
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parse a two-character card notation like "As" or "7d".
pub fn parse_card(notation: &str) -> TrainerResult<Card> {
    let chars: Vec<char> = notation.trim().chars().collect();
    if chars.len() != 2 {
        return Err(TrainerError::InvalidCard(notation.to_string()));
    }
    let rank = Rank::from_char(chars[0]).ok_or_else(|| TrainerError::InvalidCard(notation.to_string()))?;
    let suit = Suit::from_char(chars[1]).ok_or_else(|| TrainerError::InvalidCard(notation.to_string()))?;
    Ok(Card::new(rank, suit))
}

/// Parse a run of concatenated cards like "As2h7d".
pub fn parse_cards(notation: &str) -> TrainerResult<Vec<Card>> {
    let s = notation.trim();
    if s.len() % 2 != 0 {
        return Err(TrainerError::InvalidCard(notation.to_string()));
    }
    s.as_bytes()
        .chunks(2)
        .map(|pair| parse_card(std::str::from_utf8(pair).unwrap_or("")))
        .collect()
}

// ---------------------------------------------------------------------------
// Combos
// ---------------------------------------------------------------------------

/// An unordered pair of two distinct cards — a starting hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combo(pub Card, pub Card);

impl Combo {
    pub fn new(a: Card, b: Card) -> TrainerResult<Combo> {
        if a == b {
            return Err(TrainerError::DuplicateCard(a.to_string()));
        }
        Ok(Combo(a, b))
    }

    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
}

impl fmt::Display for Combo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}

/// Parse a four-character combo notation like "AsKh".
pub fn parse_combo(notation: &str) -> TrainerResult<Combo> {
    let cards = parse_cards(notation)?;
    if cards.len() != 2 {
        return Err(TrainerError::InvalidCard(notation.to_string()));
    }
    Combo::new(cards[0], cards[1])
}

/// The full 52-card deck, rank-major.
pub fn full_deck() -> Vec<Card> {
    ALL_RANKS
        .iter()
        .cartesian_product(ALL_SUITS.iter())
        .map(|(&r, &s)| Card::new(r, s))
        .collect()
}

static ALL_COMBOS: Lazy<Vec<Combo>> = Lazy::new(|| {
    full_deck()
        .into_iter()
        .tuple_combinations()
        .map(|(a, b)| Combo(a, b))
        .collect()
});

/// All 1326 unordered two-card starting hands.
pub fn all_combos() -> &'static [Combo] {
    &ALL_COMBOS
}

// ---------------------------------------------------------------------------
// Boards
// ---------------------------------------------------------------------------

/// A flop: exactly three distinct cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board([Card; 3]);

impl Board {
    pub fn new(cards: &[Card]) -> TrainerResult<Board> {
        if cards.len() != 3 {
            return Err(TrainerError::InvalidBoard(
                cards.iter().map(|c| c.to_string()).collect(),
            ));
        }
        let board = [cards[0], cards[1], cards[2]];
        if board[0] == board[1] || board[0] == board[2] || board[1] == board[2] {
            return Err(TrainerError::InvalidBoard(
                cards.iter().map(|c| c.to_string()).collect(),
            ));
        }
        Ok(Board(board))
    }

    pub fn cards(&self) -> &[Card; 3] {
        &self.0
    }

    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(&card)
    }

    pub fn ranks(&self) -> [u8; 3] {
        [
            self.0[0].rank.value(),
            self.0[1].rank.value(),
            self.0[2].rank.value(),
        ]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

/// Parse a six-character flop notation like "As2h7d".
pub fn parse_board(notation: &str) -> TrainerResult<Board> {
    let cards = parse_cards(notation).map_err(|_| TrainerError::InvalidBoard(notation.to_string()))?;
    Board::new(&cards).map_err(|_| TrainerError::InvalidBoard(notation.to_string()))
}

/// True iff either card of the combo appears in the board. Blocked combos
/// are impossible holdings and must be excluded before evaluation.
pub fn blocks_board(combo: Combo, board: &Board) -> bool {
    board.contains(combo.0) || board.contains(combo.1)
}

// ---------------------------------------------------------------------------
// Hand types
// ---------------------------------------------------------------------------

/// The (hi, lo, suited) view of a starting hand, e.g. AKs / T9o / QQ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandType {
    /// Higher rank value (2-14).
    pub hi: u8,
    /// Lower rank value (2-14).
    pub lo: u8,
    /// True only when the suits match and the ranks differ.
    pub suited: bool,
}

impl HandType {
    pub fn new(hi: u8, lo: u8, suited: bool) -> HandType {
        let (hi, lo) = if hi >= lo { (hi, lo) } else { (lo, hi) };
        HandType {
            hi,
            lo,
            suited: suited && hi != lo,
        }
    }

    pub fn of(combo: Combo) -> HandType {
        let r1 = combo.0.rank.value();
        let r2 = combo.1.rank.value();
        HandType::new(r1.max(r2), r1.min(r2), combo.0.suit == combo.1.suit)
    }

    pub fn is_pocket(&self) -> bool {
        self.hi == self.lo
    }

    /// Canonical label: "QQ", "AKs", "T9o".
    pub fn label(&self) -> String {
        let hi = Rank::from_value(self.hi).map(Rank::to_char).unwrap_or('?');
        let lo = Rank::from_value(self.lo).map(Rank::to_char).unwrap_or('?');
        if self.is_pocket() {
            format!("{}{}", hi, lo)
        } else {
            format!("{}{}{}", hi, lo, if self.suited { 's' } else { 'o' })
        }
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Parse a hand-type label: "QQ", "AKs", "T9o". Non-pairs require the
/// explicit s/o marker.
pub fn parse_hand_type(notation: &str) -> TrainerResult<HandType> {
    let chars: Vec<char> = notation.trim().chars().collect();
    let err = || TrainerError::InvalidHandType(notation.to_string());

    match chars.len() {
        2 => {
            let r1 = Rank::from_char(chars[0]).ok_or_else(err)?;
            let r2 = Rank::from_char(chars[1]).ok_or_else(err)?;
            if r1 != r2 {
                return Err(err());
            }
            Ok(HandType::new(r1.value(), r2.value(), false))
        }
        3 => {
            let r1 = Rank::from_char(chars[0]).ok_or_else(err)?;
            let r2 = Rank::from_char(chars[1]).ok_or_else(err)?;
            if r1 == r2 {
                return Err(err());
            }
            let suited = match chars[2].to_ascii_lowercase() {
                's' => true,
                'o' => false,
                _ => return Err(err()),
            };
            Ok(HandType::new(r1.value(), r2.value(), suited))
        }
        _ => Err(err()),
    }
}

pub fn is_pocket(hi: u8, lo: u8) -> bool {
    hi == lo
}

/// T, J, Q, K, A.
pub fn is_broadway(rank: u8) -> bool {
    rank >= 10
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deck_has_52_cards() {
        let deck = full_deck();
        assert_eq!(deck.len(), 52);
        let unique: HashSet<Card> = deck.into_iter().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn enumerates_1326_distinct_combos() {
        let combos = all_combos();
        assert_eq!(combos.len(), 1326);
        let unique: HashSet<(Card, Card)> = combos.iter().map(|c| (c.0, c.1)).collect();
        assert_eq!(unique.len(), 1326);
        for combo in combos {
            assert_ne!(combo.0, combo.1, "combo {} repeats a card", combo);
        }
    }

    #[test]
    fn hand_type_is_order_independent() {
        for combo in all_combos() {
            let swapped = Combo(combo.1, combo.0);
            assert_eq!(HandType::of(*combo), HandType::of(swapped));
        }
    }

    #[test]
    fn pockets_are_never_suited() {
        for combo in all_combos() {
            let ht = HandType::of(*combo);
            if ht.is_pocket() {
                assert!(!ht.suited, "{} claims a suited pocket", combo);
            }
        }
    }

    #[test]
    fn combo_rejects_duplicate_card() {
        let a = parse_card("As").unwrap();
        assert!(Combo::new(a, a).is_err());
    }

    #[test]
    fn card_parse_roundtrip() {
        for notation in ["As", "Kh", "Td", "2c", "9s"] {
            let card = parse_card(notation).unwrap();
            assert_eq!(card.to_string(), notation);
        }
        assert!(parse_card("Xx").is_err());
        assert!(parse_card("A").is_err());
    }

    #[test]
    fn board_parse_validates_shape() {
        assert!(parse_board("As2h7d").is_ok());
        assert!(parse_board("As2h").is_err());
        assert!(parse_board("As2h7d9c").is_err());
        assert!(parse_board("AsAs7d").is_err());
    }

    #[test]
    fn blocks_board_detects_collision() {
        let board = parse_board("As2h7d").unwrap();
        assert!(blocks_board(parse_combo("AsKs").unwrap(), &board));
        assert!(blocks_board(parse_combo("Kh2h").unwrap(), &board));
        assert!(!blocks_board(parse_combo("KhQh").unwrap(), &board));
    }

    #[test]
    fn hand_type_labels() {
        assert_eq!(parse_hand_type("AKs").unwrap().label(), "AKs");
        assert_eq!(parse_hand_type("t9o").unwrap().label(), "T9o");
        assert_eq!(parse_hand_type("QQ").unwrap().label(), "QQ");
        // lo-hi order normalizes
        assert_eq!(parse_hand_type("9Ts").unwrap().label(), "T9s");
        assert!(parse_hand_type("AK").is_err());
        assert!(parse_hand_type("QQs").is_err());
    }
}
