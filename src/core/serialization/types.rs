// src/core/serialization/types.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Written next to the collection files after every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub bound_multiplier: i64,
    pub blocks: usize,
    pub one_representation_blocks: usize,
    pub multiple_representation_blocks: usize,
    /// Frontier in `aN + b` notation.
    pub computed_up_to: String,
    pub minimal_guess: i64,
    pub exclusions: Vec<i64>,
    pub validity: String,
    pub resumed: bool,
    pub finished_at: DateTime<Utc>,
}
