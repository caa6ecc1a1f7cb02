// src/core/ulam_sequence.rs

use std::fmt;

use log::{debug, info, trace};

use crate::core::arithmetic_sequence::ArithmeticSequence;
use crate::core::disjoint_sequences::DisjointSequences;
use crate::core::error::{Result, UlamError};
use crate::core::non_standard_integer::NonStandardInteger;
use crate::core::non_standard_ring::NonStandardRing;

/// The Ulam sequence U(1,N) over non-standard integers, computed one block
/// at a time for every sufficiently large N at once.
///
/// After every extension:
/// - the last Ulam block ends right before `largest_constant_computed`,
/// - neither candidate collection holds anything below it, though a
///   candidate block may start exactly at it,
/// - the three collections are pairwise disjoint.
#[derive(Debug, Clone)]
pub struct NonStandardUlamSequence {
    ring: NonStandardRing,
    ulam: DisjointSequences,
    one_representation: DisjointSequences,
    multiple_representation: DisjointSequences,
    largest_constant_computed: NonStandardInteger,
}

impl NonStandardUlamSequence {
    /// U(1,N) seeded with its first two blocks, `{1}` and `[N, 2N]`.
    pub fn new() -> Self {
        Self::with_ring(NonStandardRing::new())
    }

    pub fn with_ring(ring: NonStandardRing) -> Self {
        let n = NonStandardInteger::N;
        let seed = vec![
            ArithmeticSequence::singleton(NonStandardInteger::ONE),
            ArithmeticSequence::from_ordered(n, 2 * n),
        ];

        NonStandardUlamSequence {
            ring,
            ulam: DisjointSequences::from_sorted(seed),
            one_representation: DisjointSequences::new(),
            multiple_representation: DisjointSequences::new(),
            largest_constant_computed: (2 * n).next(1),
        }
    }

    /// Resumes from previously computed collections.
    pub fn from_state(
        ring: NonStandardRing,
        ulam: DisjointSequences,
        one_representation: DisjointSequences,
        multiple_representation: DisjointSequences,
    ) -> Result<Self> {
        let largest_constant_computed = ulam.last().ok_or(UlamError::EmptySequence)?.end().next(1);

        Ok(NonStandardUlamSequence {
            ring,
            ulam,
            one_representation,
            multiple_representation,
            largest_constant_computed,
        })
    }

    pub fn ring(&self) -> &NonStandardRing {
        &self.ring
    }

    pub fn ring_mut(&mut self) -> &mut NonStandardRing {
        &mut self.ring
    }

    pub fn ulam(&self) -> &DisjointSequences {
        &self.ulam
    }

    pub fn one_representation(&self) -> &DisjointSequences {
        &self.one_representation
    }

    pub fn multiple_representation(&self) -> &DisjointSequences {
        &self.multiple_representation
    }

    /// One past the end of the last confirmed block.
    pub fn largest_constant_computed(&self) -> NonStandardInteger {
        self.largest_constant_computed
    }

    fn newest_block(&self) -> Result<ArithmeticSequence> {
        self.ulam.last().copied().ok_or(UlamError::EmptySequence)
    }

    /// Folds the sums of the newest block with every block into the running
    /// candidate collections. The block `{1}` is skipped: its sums with the
    /// newest block were settled when that block was chosen.
    fn accumulate_sums(&mut self) -> Result<()> {
        let newest = self.newest_block()?;
        let count = self.ulam.len();
        let frontier = self.largest_constant_computed;
        let ring = &mut self.ring;

        for i in 1..count {
            let sums = if i == count - 1 {
                newest.add_to_itself(ring)?
            } else {
                self.ulam.sequences()[i].add(ring, &newest)?
            };

            let one_guess = DisjointSequences::from_sorted(sums.one).select_larger_than(ring, &frontier)?;
            let multiple_guess = DisjointSequences::from_sorted(sums.multiple).select_larger_than(ring, &frontier)?;

            // Seen once before and once now: promoted to multiple.
            let one = one_guess.symmetric_difference(ring, &self.one_representation)?;
            let promoted = one_guess.difference(ring, &one)?;

            let multiple = promoted.union(ring, &multiple_guess)?;
            self.multiple_representation = multiple.union(ring, &self.multiple_representation)?;
            self.one_representation = one.difference(ring, &self.multiple_representation)?;
        }

        trace!(
            "accumulated sums: {} one-representation blocks, {} multiple-representation blocks",
            self.one_representation.len(),
            self.multiple_representation.len()
        );
        Ok(())
    }

    /// Confirms the next block of U(1,N).
    pub fn extend_one_block(&mut self) -> Result<()> {
        self.accumulate_sums()?;

        let frontier = self.largest_constant_computed;
        let minimal = *self
            .one_representation
            .first()
            .ok_or(UlamError::ExhaustedCandidates { frontier })?;
        let (a, b) = (minimal.start(), minimal.end());
        let ring = &mut self.ring;

        self.multiple_representation = self.multiple_representation.select_larger_than(ring, &a)?;

        let block = if ring.eq(&a, &b) {
            // Consecutive integers from a join up to the next recorded sum,
            // and never past a + N.
            let trivial_bound = a + NonStandardInteger::N;
            let one_bound = self.one_representation.get(1).map_or(trivial_bound, |s| s.start());
            let multiple_bound = self.multiple_representation.first().map_or(trivial_bound, |s| s.start());

            let bound = ring.min(trivial_bound, one_bound);
            let bound = ring.min(bound, multiple_bound);

            let block = ArithmeticSequence::new(ring, a, bound.previous(1))?;
            self.one_representation = self.one_representation.select_larger_than(ring, &bound)?;
            block
        } else {
            // a + 1 = 1 + a is a second representation, so only a joins.
            let after = a.next(1);
            self.one_representation = self.one_representation.select_larger_than(ring, &after)?;
            self.multiple_representation = self.multiple_representation.select_larger_than(ring, &after)?;
            ArithmeticSequence::singleton(a)
        };

        self.ulam.push(block);
        self.largest_constant_computed = block.end().next(1);

        debug!(
            "block {}: {} (computed up to {})",
            self.ulam.len(),
            block,
            self.largest_constant_computed.to_affine_string()
        );
        Ok(())
    }

    /// Whether the known prefix already reaches `bound`. Does not touch the
    /// ring, so asking cannot raise the validity threshold.
    pub fn covers(&self, bound: &NonStandardInteger) -> bool {
        match self.ulam.last() {
            Some(last) => !last.end().less_than_without_recording(bound),
            None => false,
        }
    }

    /// Extends until the known prefix reaches `bound` and returns all blocks.
    pub fn coeff_up_to(&mut self, bound: &NonStandardInteger) -> Result<&DisjointSequences> {
        if self.largest_constant_computed.less_than_without_recording(bound) {
            while !self.covers(bound) {
                self.extend_one_block()?;
            }
        }

        info!(
            "U(1,N) known up to {} in {} blocks; valid for {}",
            self.largest_constant_computed.to_affine_string(),
            self.ulam.len(),
            self.ring.describe()
        );
        Ok(&self.ulam)
    }
}

impl Default for NonStandardUlamSequence {
    fn default() -> Self {
        NonStandardUlamSequence::new()
    }
}

impl fmt::Display for NonStandardUlamSequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Nonstandard Ulam sequence U(1,N) computed up to {}",
            self.largest_constant_computed
        )
    }
}

/// Blocks of U(1,N) up to `C * N`, as `((a0, b0), (a1, b1))` coefficient pairs.
pub fn ulam_coefficients(bound_multiplier: i64) -> Result<Vec<((i64, i64), (i64, i64))>> {
    let mut sequence = NonStandardUlamSequence::new();
    let bound = bound_multiplier * NonStandardInteger::N;
    Ok(sequence.coeff_up_to(&bound)?.coefficient_pairs())
}
