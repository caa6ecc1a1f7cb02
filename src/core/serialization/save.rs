// src/core/serialization/save.rs

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};

use log::info;
use serde::Serialize;

use crate::core::arithmetic_sequence::ArithmeticSequence;
use crate::core::disjoint_sequences::DisjointSequences;
use crate::core::error::Result;

/// One persisted block: `((a0, b0), (a1, b1))`.
pub fn format_block(sequence: &ArithmeticSequence) -> String {
    let ((a0, b0), (a1, b1)) = sequence.as_pairs();
    format!("(({}, {}), ({}, {}))", a0, b0, a1, b1)
}

pub fn object<T: Serialize>(obj: &T, filename: &str) -> Result<()> {
    let save_json = serde_json::to_string_pretty(obj)?;
    fs::write(filename, save_json)?;
    Ok(())
}

/// Rewrites `filename` with one block per line.
pub fn sequences(sequences: &DisjointSequences, filename: &str) -> Result<()> {
    let file = fs::File::create(filename)?;
    let mut writer = BufWriter::new(file);
    for sequence in sequences {
        writeln!(writer, "{}", format_block(sequence))?;
    }
    writer.flush()?;

    info!("Saved {} blocks to {}", sequences.len(), filename);
    Ok(())
}

pub mod exclusions {
    use super::*;

    /// Appends `"<frontier>: <constraint>"` to the exclusion log.
    pub fn append(frontier: &str, description: &str, filename: &str) -> Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(filename)?;
        writeln!(file, "{}: {}", frontier, description)?;
        Ok(())
    }

    pub fn clear(filename: &str) -> Result<()> {
        fs::write(filename, "")?;
        Ok(())
    }
}
