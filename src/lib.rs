//! Preflop range and MDF study engine.
//!
//! The core is four layers: the card/combo model (`cards`), the range
//! predicates (`open_ranges`, `three_bet`, `blind_defence`,
//! `power_number`), the flop strength classifier (`hand_strength`), and
//! the MDF aggregation over a named range (`mdf`, `ranges`). Everything
//! else is transport: quiz generation and the CLI.

pub mod blind_defence;
pub mod cards;
pub mod cli;
pub mod display;
pub mod error;
pub mod hand_strength;
pub mod mdf;
pub mod open_ranges;
pub mod positions;
pub mod power_number;
pub mod quiz;
pub mod ranges;
pub mod three_bet;
