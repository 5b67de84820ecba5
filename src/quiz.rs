//! Quiz question generation: random spots posed against the range rules.
//!
//! Pure glue over the classifiers — every correct answer is computed by
//! the same predicates the trainer teaches.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::blind_defence::{bb_defends_vs_open, sb_first_in};
use crate::cards::{full_deck, Board, HandType};
use crate::error::{TrainerError, TrainerResult};
use crate::mdf::{analyze_mdf, MdfResult};
use crate::open_ranges::in_open_range;
use crate::positions::{Position, OPEN_POSITIONS};
use crate::power_number::should_shove;
use crate::ranges::{resolve_range, KNOWN_RANGE_IDS};
use crate::three_bet::{three_bet_actions, three_bet_defence};

/// Study modes, mirrored by the CLI `quiz --mode` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StudyMode {
    OpenRange,
    SbOpen,
    ThreeBet,
    ThreeBetDefence,
    PowerNumber,
    BbDefence,
    MdfTrainer,
    Mix,
}

const BASE_MODES: [StudyMode; 7] = [
    StudyMode::OpenRange,
    StudyMode::SbOpen,
    StudyMode::ThreeBet,
    StudyMode::ThreeBetDefence,
    StudyMode::PowerNumber,
    StudyMode::BbDefence,
    StudyMode::MdfTrainer,
];

impl StudyMode {
    pub fn label(self) -> &'static str {
        match self {
            StudyMode::OpenRange => "open_range",
            StudyMode::SbOpen => "sb_open",
            StudyMode::ThreeBet => "three_bet",
            StudyMode::ThreeBetDefence => "three_bet_defence",
            StudyMode::PowerNumber => "power_number",
            StudyMode::BbDefence => "bb_defence",
            StudyMode::MdfTrainer => "mdf_trainer",
            StudyMode::Mix => "mix",
        }
    }
}

impl fmt::Display for StudyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for StudyMode {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open_range" | "open" => Ok(StudyMode::OpenRange),
            "sb_open" | "sb" => Ok(StudyMode::SbOpen),
            "three_bet" | "3bet" => Ok(StudyMode::ThreeBet),
            "three_bet_defence" | "3bet_defence" => Ok(StudyMode::ThreeBetDefence),
            "power_number" | "shove" => Ok(StudyMode::PowerNumber),
            "bb_defence" | "bb" => Ok(StudyMode::BbDefence),
            "mdf_trainer" | "mdf" => Ok(StudyMode::MdfTrainer),
            "mix" => Ok(StudyMode::Mix),
            _ => Err(TrainerError::UnknownStudyMode(s.to_string())),
        }
    }
}

/// Extra payload for MDF questions.
#[derive(Debug, Clone, Serialize)]
pub struct MdfSpot {
    pub range_id: &'static str,
    pub board: String,
    pub bet_size: f64,
    pub analysis: MdfResult,
}

/// One generated question with its correct answer. Fields not relevant to
/// the mode stay `None`.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub mode: StudyMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_pos: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub villain_pos: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_position: Option<bool>,
    /// Comma-joined when several actions are acceptable ("3bet,call").
    pub correct_action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mdf: Option<MdfSpot>,
}

impl Question {
    /// Compare a learner's answer against the expected one. Multi-action
    /// answers match as unordered sets ("call,3bet" == "3bet,call").
    pub fn is_correct(&self, answer: &str) -> bool {
        let mut expected: Vec<&str> = self.correct_action.split(',').map(str::trim).collect();
        let mut given: Vec<String> = answer
            .split(',')
            .map(|a| a.trim().to_ascii_lowercase())
            .filter(|a| !a.is_empty())
            .collect();
        expected.sort_unstable();
        given.sort_unstable();
        expected.len() == given.len()
            && expected
                .iter()
                .zip(given.iter())
                .all(|(e, g)| e.eq_ignore_ascii_case(g))
    }
}

/// Uniform random hand type: two independent ranks, 50/50 suited when the
/// ranks differ.
pub fn random_hand(rng: &mut impl Rng) -> HandType {
    let hi = rng.gen_range(2..=14u8);
    let lo = rng.gen_range(2..=14u8);
    let suited = hi != lo && rng.gen_bool(0.5);
    HandType::new(hi.max(lo), hi.min(lo), suited)
}

/// Deal a random flop.
pub fn random_board(rng: &mut impl Rng) -> Board {
    let mut deck = full_deck();
    deck.shuffle(rng);
    Board::new(&deck[..3]).expect("three cards off a shuffled deck form a board")
}

const BET_SIZES: [f64; 5] = [0.25, 0.33, 0.50, 0.80, 1.25];

pub fn generate(mode: StudyMode, rng: &mut impl Rng) -> TrainerResult<Question> {
    match mode {
        StudyMode::OpenRange => Ok(open_range_question(rng)),
        StudyMode::SbOpen => Ok(sb_open_question(rng)),
        StudyMode::ThreeBet => Ok(three_bet_question(rng)),
        StudyMode::ThreeBetDefence => Ok(three_bet_defence_question(rng)),
        StudyMode::PowerNumber => Ok(power_number_question(rng)),
        StudyMode::BbDefence => Ok(bb_defence_question(rng)),
        StudyMode::MdfTrainer => mdf_question(rng),
        StudyMode::Mix => {
            let base = *BASE_MODES.choose(rng).expect("base modes are non-empty");
            generate(base, rng)
        }
    }
}

fn blank(mode: StudyMode, correct: String) -> Question {
    Question {
        mode,
        hero_pos: None,
        villain_pos: None,
        hand: None,
        m_value: None,
        in_position: None,
        correct_action: correct,
        mdf: None,
    }
}

fn open_range_question(rng: &mut impl Rng) -> Question {
    let hero = *OPEN_POSITIONS.choose(rng).expect("positions are non-empty");
    let hand = random_hand(rng);
    let correct = if in_open_range(hero, hand) { "open" } else { "fold" };

    let mut q = blank(StudyMode::OpenRange, correct.to_string());
    q.hero_pos = Some(hero);
    q.hand = Some(hand.label());
    q
}

fn sb_open_question(rng: &mut impl Rng) -> Question {
    let hand = random_hand(rng);
    let mut q = blank(StudyMode::SbOpen, sb_first_in(hand).label().to_string());
    q.hero_pos = Some(Position::Sb);
    q.hand = Some(hand.label());
    q
}

fn three_bet_question(rng: &mut impl Rng) -> Question {
    // Villain opens anywhere before the BTN; hero sits behind the opener.
    let v_idx = rng.gen_range(0..OPEN_POSITIONS.len() - 1);
    let villain = OPEN_POSITIONS[v_idx];
    let hero = OPEN_POSITIONS[rng.gen_range(v_idx + 1..OPEN_POSITIONS.len())];

    let hand = random_hand(rng);
    let allowed = three_bet_actions(hero, villain, hand);
    let correct = allowed
        .iter()
        .map(|a| a.label())
        .collect::<Vec<_>>()
        .join(",");

    let mut q = blank(StudyMode::ThreeBet, correct);
    q.hero_pos = Some(hero);
    q.villain_pos = Some(villain);
    q.hand = Some(hand.label());
    q
}

fn three_bet_defence_question(rng: &mut impl Rng) -> Question {
    // Hero opened, so sample a hand from hero's own open range.
    let hero = *OPEN_POSITIONS.choose(rng).expect("positions are non-empty");
    let hand = loop {
        let candidate = random_hand(rng);
        if in_open_range(hero, candidate) {
            break candidate;
        }
    };

    // A BTN open only gets 3-bet by the blinds, leaving hero in position;
    // otherwise the 3-bettor sits behind hero.
    let hero_idx = OPEN_POSITIONS.iter().position(|&p| p == hero).unwrap_or(0);
    let (villain, in_position) = if hero == Position::Btn {
        (*[Position::Sb, Position::Bb].choose(rng).expect("blinds"), true)
    } else {
        let v_idx = rng.gen_range(hero_idx + 1..OPEN_POSITIONS.len());
        (OPEN_POSITIONS[v_idx], false)
    };

    let action = three_bet_defence(in_position, hand);
    let mut q = blank(StudyMode::ThreeBetDefence, action.label().to_string());
    q.hero_pos = Some(hero);
    q.villain_pos = Some(villain);
    q.hand = Some(hand.label());
    q.in_position = Some(in_position);
    q
}

fn power_number_question(rng: &mut impl Rng) -> Question {
    let hero = *OPEN_POSITIONS.choose(rng).expect("positions are non-empty");
    // M between 1.0 and 5.5, one decimal.
    let m_value = (rng.gen_range(10..=55) as f64) / 10.0;
    let hand = random_hand(rng);

    let correct = if should_shove(hero, hand, m_value) { "shove" } else { "fold" };
    let mut q = blank(StudyMode::PowerNumber, correct.to_string());
    q.hero_pos = Some(hero);
    q.hand = Some(hand.label());
    q.m_value = Some(m_value);
    q
}

fn bb_defence_question(rng: &mut impl Rng) -> Question {
    let villain = *OPEN_POSITIONS.choose(rng).expect("positions are non-empty");
    let hand = random_hand(rng);

    let correct = if bb_defends_vs_open(villain, hand) { "defend" } else { "fold" };
    let mut q = blank(StudyMode::BbDefence, correct.to_string());
    q.hero_pos = Some(Position::Bb);
    q.villain_pos = Some(villain);
    q.hand = Some(hand.label());
    q
}

fn mdf_question(rng: &mut impl Rng) -> TrainerResult<Question> {
    let range_id = *KNOWN_RANGE_IDS.choose(rng).expect("range ids are non-empty");
    let board = random_board(rng);
    let bet_size = *BET_SIZES.choose(rng).expect("bet sizes are non-empty");

    let combos = resolve_range(range_id);
    let analysis = analyze_mdf(&combos, &board, bet_size)?;

    let mut q = blank(StudyMode::MdfTrainer, analysis.cutoff_bucket.clone());
    q.mdf = Some(MdfSpot {
        range_id,
        board: board.to_string(),
        bet_size,
        analysis,
    });
    Ok(q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn random_hand_is_normalized() {
        let mut rng = rng();
        for _ in 0..500 {
            let hand = random_hand(&mut rng);
            assert!(hand.hi >= hand.lo);
            assert!((2..=14).contains(&hand.hi));
            if hand.is_pocket() {
                assert!(!hand.suited);
            }
        }
    }

    #[test]
    fn every_mode_generates_well_formed_questions() {
        let mut rng = rng();
        for mode in BASE_MODES {
            for _ in 0..20 {
                let q = generate(mode, &mut rng).unwrap();
                assert!(!q.correct_action.is_empty(), "{} gave no answer", mode);
            }
        }
    }

    #[test]
    fn three_bet_defence_hand_is_in_heros_open_range() {
        let mut rng = rng();
        for _ in 0..50 {
            let q = generate(StudyMode::ThreeBetDefence, &mut rng).unwrap();
            let hero = q.hero_pos.unwrap();
            let hand = crate::cards::parse_hand_type(q.hand.as_deref().unwrap()).unwrap();
            assert!(in_open_range(hero, hand));
            if hero == Position::Btn {
                assert_eq!(q.in_position, Some(true));
            }
        }
    }

    #[test]
    fn mdf_question_carries_its_analysis() {
        let mut rng = rng();
        let q = generate(StudyMode::MdfTrainer, &mut rng).unwrap();
        let spot = q.mdf.expect("mdf question has a spot");
        assert!(BET_SIZES.contains(&spot.bet_size));
        assert_eq!(q.correct_action, spot.analysis.cutoff_bucket);
    }

    #[test]
    fn answers_match_as_unordered_sets() {
        let q = blank(StudyMode::ThreeBet, "3bet,call".to_string());
        assert!(q.is_correct("call,3bet"));
        assert!(q.is_correct("3bet, call"));
        assert!(!q.is_correct("3bet"));
        assert!(!q.is_correct("fold"));
    }
}
