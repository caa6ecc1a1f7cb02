// src/core/error.rs

use thiserror::Error;

use crate::core::arithmetic_sequence::ArithmeticSequence;
use crate::core::non_standard_integer::NonStandardInteger;

/// Failures of the symbolic engine and its persistence layer.
///
/// The algebra variants are contract violations: they abort the run instead of
/// being repaired, since a repaired block would be a wrong block.
#[derive(Debug, Error)]
pub enum UlamError {
    #[error("invalid range: start {start} is larger than end {end}")]
    InvalidRange {
        start: NonStandardInteger,
        end: NonStandardInteger,
    },

    #[error("sequences {first} and {second} overlap but were declared disjoint")]
    OverlapViolation {
        first: ArithmeticSequence,
        second: ArithmeticSequence,
    },

    #[error("addition of intersecting sequences {left} and {right} is undefined")]
    NonDisjointAddition {
        left: ArithmeticSequence,
        right: ArithmeticSequence,
    },

    #[error("cannot extend an Ulam sequence with no confirmed blocks")]
    EmptySequence,

    #[error("no one-representation candidate left beyond {frontier}")]
    ExhaustedCandidates { frontier: NonStandardInteger },

    #[error("U(1,{n}) is only defined for N >= 2")]
    UndefinedSequence { n: i64 },

    #[error("{path}:{line}: cannot parse `{content}`: {reason}")]
    Parse {
        path: String,
        line: usize,
        content: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, UlamError>;
