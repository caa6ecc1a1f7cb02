// src/core/serialization/load.rs

use std::fs;
use std::path::Path;

use log::info;

use crate::core::arithmetic_sequence::ArithmeticSequence;
use crate::core::disjoint_sequences::DisjointSequences;
use crate::core::error::{Result, UlamError};
use crate::core::non_standard_integer::NonStandardInteger;
use crate::core::non_standard_ring::NonStandardRing;

pub fn generic<T: serde::de::DeserializeOwned>(filename: &str) -> Result<T> {
    let load_json = fs::read_to_string(filename)?;
    Ok(serde_json::from_str(&load_json)?)
}

fn parse_pair(pair: &str) -> std::result::Result<(i64, i64), String> {
    let values = pair
        .split(',')
        .map(|part| part.parse::<i64>().map_err(|e| format!("'{}': {}", part, e)))
        .collect::<std::result::Result<Vec<i64>, String>>()?;

    match values.as_slice() {
        [coefficient, offset] => Ok((*coefficient, *offset)),
        _ => Err(format!("expected 2 integers in '({})', found {}", pair, values.len())),
    }
}

/// Parses `((a0, b0), (a1, b1))` into the two coefficient pairs.
pub fn parse_block(line: &str) -> std::result::Result<((i64, i64), (i64, i64)), String> {
    let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    let inner = compact
        .strip_prefix("((")
        .and_then(|rest| rest.strip_suffix("))"))
        .ok_or_else(|| "expected a block of the form ((a0, b0), (a1, b1))".to_string())?;

    let is_paren = |c: char| c == '(' || c == ')';
    match inner.split("),(").collect::<Vec<&str>>().as_slice() {
        [start, end] if !start.contains(is_paren) && !end.contains(is_paren) => {
            Ok((parse_pair(start)?, parse_pair(end)?))
        }
        _ => Err("expected exactly two pairs of the form (a, b)".to_string()),
    }
}

/// Reads a collection written by `save::sequences`. Blank lines are skipped.
/// Every block is rebuilt through the ring, so inverted bounds and
/// overlapping blocks are rejected. Blocks are put in order of start.
pub fn sequences(ring: &mut NonStandardRing, filename: &str) -> Result<DisjointSequences> {
    let content = fs::read_to_string(filename)?;
    let mut blocks = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let ((a0, b0), (a1, b1)) = parse_block(trimmed).map_err(|reason| UlamError::Parse {
            path: filename.to_string(),
            line: index + 1,
            content: trimmed.to_string(),
            reason,
        })?;
        blocks.push(ArithmeticSequence::new(
            ring,
            NonStandardInteger::new(a0, b0),
            NonStandardInteger::new(a1, b1),
        )?);
    }

    info!("Loaded {} blocks from {}", blocks.len(), filename);
    DisjointSequences::from_sequences(ring, blocks, true)
}

/// Like `sequences`, but a missing file is an empty collection.
pub fn sequences_or_empty(ring: &mut NonStandardRing, filename: &str) -> Result<DisjointSequences> {
    if Path::new(filename).exists() {
        sequences(ring, filename)
    } else {
        Ok(DisjointSequences::new())
    }
}
