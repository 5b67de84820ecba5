//! Crate-wide error type.

use thiserror::Error;

pub type TrainerResult<T> = Result<T, TrainerError>;

#[derive(Debug, Error)]
pub enum TrainerError {
    #[error("invalid card notation: '{0}'")]
    InvalidCard(String),

    #[error("invalid board '{0}': expected exactly 3 distinct cards (a flop)")]
    InvalidBoard(String),

    #[error("combo cards must be distinct, got {0} twice")]
    DuplicateCard(String),

    #[error("unknown position: '{0}'")]
    UnknownPosition(String),

    #[error("invalid hand notation '{0}': expected e.g. 'AKs', 'T9o', 'QQ'")]
    InvalidHandType(String),

    #[error("invalid bet size {0}: must be a non-negative fraction of pot")]
    InvalidBetSize(f64),

    #[error("unknown study mode: '{0}'")]
    UnknownStudyMode(String),
}
