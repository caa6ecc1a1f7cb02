// src/reference/verify.rs

use log::{info, warn};
use rayon::prelude::*;

use crate::core::disjoint_sequences::DisjointSequences;
use crate::core::error::Result;
use crate::core::non_standard_integer::NonStandardInteger;
use crate::core::non_standard_ring::NonStandardRing;
use crate::core::ulam_sequence::NonStandardUlamSequence;
use crate::reference::naive::ulam_terms_up_to;

/// A concrete N at which the symbolic blocks disagree with direct computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Mismatch {
    pub n: i64,
    /// Index of the first differing term.
    pub position: usize,
    pub expected: Option<i64>,
    pub computed: Option<i64>,
    /// Whether the ring claimed the blocks hold at this N.
    pub within_validity: bool,
}

/// Compares `blocks` evaluated at every N in `min_n..=max_n` against U(1,N),
/// up to `bound_multiplier * N`.
pub fn compare_blocks(
    blocks: &DisjointSequences,
    ring: &NonStandardRing,
    bound_multiplier: i64,
    min_n: i64,
    max_n: i64,
) -> Result<Vec<Mismatch>> {
    let guess = ring.minimal_guess();
    let exclusions = ring.exclusions();

    let results = (min_n.max(2)..=max_n)
        .into_par_iter()
        .map(|n| {
            let bound = bound_multiplier * n;
            let expected = ulam_terms_up_to(n, bound)?;
            let computed = blocks.project(n, bound);

            let position = expected.iter().zip(&computed).take_while(|(e, c)| e == c).count();
            if position == expected.len() && position == computed.len() {
                return Ok(None);
            }

            Ok(Some(Mismatch {
                n,
                position,
                expected: expected.get(position).copied(),
                computed: computed.get(position).copied(),
                within_validity: n >= guess && !exclusions.contains(&n),
            }))
        })
        .collect::<Result<Vec<Option<Mismatch>>>>()?;

    Ok(results.into_iter().flatten().collect())
}

/// Computes the blocks up to `bound_multiplier * N` and checks them against
/// direct computation for each N in range.
pub fn verify_range(bound_multiplier: i64, min_n: i64, max_n: i64) -> Result<Vec<Mismatch>> {
    let mut sequence = NonStandardUlamSequence::new();
    let bound = bound_multiplier * NonStandardInteger::N;
    let blocks = sequence.coeff_up_to(&bound)?.clone();

    let mismatches = compare_blocks(&blocks, sequence.ring(), bound_multiplier, min_n, max_n)?;
    for mismatch in &mismatches {
        if mismatch.within_validity {
            warn!(
                "N = {}: term {} is {:?}, blocks give {:?}",
                mismatch.n, mismatch.position, mismatch.expected, mismatch.computed
            );
        }
    }

    info!(
        "Checked {} blocks against N in {}..={}: {} mismatches",
        blocks.len(),
        min_n,
        max_n,
        mismatches.len()
    );
    Ok(mismatches)
}
