// src/core/disjoint_sequences.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::arithmetic_sequence::ArithmeticSequence;
use crate::core::error::{Result, UlamError};
use crate::core::non_standard_integer::NonStandardInteger;
use crate::core::non_standard_ring::NonStandardRing;

/// Ordered collection of pairwise disjoint sequences, sorted by start.
///
/// Treated as a value: every set operation consumes or borrows the receiver
/// and hands back a new collection. Adjacent blocks are only coalesced when
/// a merge touches them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisjointSequences {
    sequences: Vec<ArithmeticSequence>,
}

impl DisjointSequences {
    pub fn new() -> Self {
        DisjointSequences { sequences: Vec::new() }
    }

    /// Wraps sequences already known to be sorted and disjoint.
    pub fn from_sorted(sequences: Vec<ArithmeticSequence>) -> Self {
        DisjointSequences { sequences }
    }

    /// Sorts `sequences` by start and, when `check_disjoint` is set, reports
    /// the first neighbouring pair that intersects.
    pub fn from_sequences(
        ring: &mut NonStandardRing,
        mut sequences: Vec<ArithmeticSequence>,
        check_disjoint: bool,
    ) -> Result<Self> {
        sequences.sort_by(|x, y| ring.cmp(&x.start(), &y.start()));

        if check_disjoint {
            for pair in sequences.windows(2) {
                if pair[0].intersects(ring, &pair[1]) {
                    return Err(UlamError::OverlapViolation { first: pair[0], second: pair[1] });
                }
            }
        }

        Ok(DisjointSequences { sequences })
    }

    pub fn sequences(&self) -> &[ArithmeticSequence] {
        &self.sequences
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn first(&self) -> Option<&ArithmeticSequence> {
        self.sequences.first()
    }

    pub fn last(&self) -> Option<&ArithmeticSequence> {
        self.sequences.last()
    }

    pub fn get(&self, index: usize) -> Option<&ArithmeticSequence> {
        self.sequences.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ArithmeticSequence> {
        self.sequences.iter()
    }

    /// Appends a block lying entirely after the current last one.
    pub(crate) fn push(&mut self, sequence: ArithmeticSequence) {
        self.sequences.push(sequence);
    }

    /// First index at or after `low` whose block does not end before `bound`.
    fn first_ending_at_or_after(&self, ring: &mut NonStandardRing, bound: &NonStandardInteger, low: usize) -> usize {
        let (mut low, mut high) = (low, self.sequences.len());
        while low < high {
            let mid = (low + high) / 2;
            if ring.lt(&self.sequences[mid].end(), bound) {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
        low
    }

    /// First index at or after `low` whose block starts after `bound`.
    fn first_starting_after(&self, ring: &mut NonStandardRing, bound: &NonStandardInteger, low: usize) -> usize {
        let (mut low, mut high) = (low, self.sequences.len());
        while low < high {
            let mid = (low + high) / 2;
            if ring.lt(bound, &self.sequences[mid].start()) {
                high = mid;
            } else {
                low = mid + 1;
            }
        }
        low
    }

    /// Index range of blocks intersecting or abutting `sequence`.
    fn touching(&self, ring: &mut NonStandardRing, sequence: &ArithmeticSequence, starting_index: usize) -> (usize, usize) {
        let first = self.first_ending_at_or_after(ring, &sequence.start().previous(1), starting_index);
        let last = self.first_starting_after(ring, &sequence.end().next(1), first);
        (first, last)
    }

    /// Unions `sequence` in, coalescing every block it touches. Also returns
    /// the index the search began at, a valid lower bound for merging in a
    /// later (larger) sequence.
    pub fn merge_in(
        mut self,
        ring: &mut NonStandardRing,
        sequence: &ArithmeticSequence,
        starting_index: usize,
    ) -> Result<(Self, usize)> {
        let (first, last) = self.touching(ring, sequence, starting_index);

        if first == last {
            self.sequences.insert(first, *sequence);
        } else {
            let start = ring.min(sequence.start(), self.sequences[first].start());
            let end = ring.max(sequence.end(), self.sequences[last - 1].end());
            let merged = ArithmeticSequence::new(ring, start, end)?;
            self.sequences.splice(first..last, std::iter::once(merged));
        }

        Ok((self, first))
    }

    /// Removes every element of `sequence`, splitting the blocks at either
    /// boundary. Returns the index the search began at, as `merge_in` does.
    pub fn cut_out(
        mut self,
        ring: &mut NonStandardRing,
        sequence: &ArithmeticSequence,
        starting_index: usize,
    ) -> Result<(Self, usize)> {
        let (first, last) = self.touching(ring, sequence, starting_index);

        if first < last {
            let mut remaining = self.sequences[first].complement(ring, sequence)?;
            if first < last - 1 {
                remaining.extend(self.sequences[last - 1].complement(ring, sequence)?);
            }
            self.sequences.splice(first..last, remaining);
        }

        Ok((self, first))
    }

    /// Keeps only the elements strictly larger than `element`.
    pub fn select_larger_than(&self, ring: &mut NonStandardRing, element: &NonStandardInteger) -> Result<Self> {
        let (first, last) = match (self.sequences.first(), self.sequences.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Ok(DisjointSequences::new()),
        };

        if ring.lt(element, &first.start()) {
            return Ok(self.clone());
        }
        if ring.ge(element, &last.end()) {
            return Ok(DisjointSequences::new());
        }

        let index = self.first_starting_after(ring, element, 0);
        let straddling = self.sequences[index - 1];
        let mut kept = Vec::with_capacity(self.sequences.len() - index + 1);

        if ring.gt(&straddling.end(), element) {
            kept.push(ArithmeticSequence::new(ring, element.next(1), straddling.end())?);
        }
        kept.extend_from_slice(&self.sequences[index..]);

        Ok(DisjointSequences::from_sorted(kept))
    }

    pub fn union(&self, ring: &mut NonStandardRing, other: &DisjointSequences) -> Result<Self> {
        let mut result = self.clone();
        let mut index = 0;
        for sequence in &other.sequences {
            (result, index) = result.merge_in(ring, sequence, index)?;
        }
        Ok(result)
    }

    pub fn difference(&self, ring: &mut NonStandardRing, other: &DisjointSequences) -> Result<Self> {
        let mut result = self.clone();
        let mut index = 0;
        for sequence in &other.sequences {
            (result, index) = result.cut_out(ring, sequence, index)?;
        }
        Ok(result)
    }

    pub fn symmetric_difference(&self, ring: &mut NonStandardRing, other: &DisjointSequences) -> Result<Self> {
        let left = self.difference(ring, other)?;
        let right = other.difference(ring, self)?;
        left.union(ring, &right)
    }

    pub fn intersection(&self, ring: &mut NonStandardRing, other: &DisjointSequences) -> Result<Self> {
        let outside = self.difference(ring, other)?;
        self.difference(ring, &outside)
    }

    /// `((a0, b0), (a1, b1))` per block, the comparable form of the output.
    pub fn coefficient_pairs(&self) -> Vec<((i64, i64), (i64, i64))> {
        self.sequences.iter().map(|s| s.as_pairs()).collect()
    }

    /// Readable listing: singletons as one element, blocks as `[start, end]`.
    pub fn formal_blocks(&self) -> Vec<String> {
        self.sequences
            .iter()
            .map(|s| {
                if s.start() == s.end() {
                    s.start().to_affine_string()
                } else {
                    format!("[{}, {}]", s.start().to_affine_string(), s.end().to_affine_string())
                }
            })
            .collect()
    }

    /// All concrete elements up to `bound` for a given N, in order.
    pub fn project(&self, n: i64, bound: i64) -> Vec<i64> {
        self.sequences
            .iter()
            .flat_map(|s| s.values_at(n))
            .filter(|&value| value <= bound)
            .collect()
    }
}

impl<'a> IntoIterator for &'a DisjointSequences {
    type Item = &'a ArithmeticSequence;
    type IntoIter = std::slice::Iter<'a, ArithmeticSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.iter()
    }
}

impl fmt::Display for DisjointSequences {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Increasing sequences: [{}]", self.formal_blocks().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(ring: &mut NonStandardRing, start: i64, end: i64) -> ArithmeticSequence {
        ArithmeticSequence::new(ring, NonStandardInteger::constant(start), NonStandardInteger::constant(end)).unwrap()
    }

    fn collection(ring: &mut NonStandardRing, blocks: &[(i64, i64)]) -> DisjointSequences {
        let sequences = blocks.iter().map(|&(s, e)| block(ring, s, e)).collect();
        DisjointSequences::from_sequences(ring, sequences, true).unwrap()
    }

    fn bounds(collection: &DisjointSequences) -> Vec<(i64, i64)> {
        collection.iter().map(|s| (s.start().offset, s.end().offset)).collect()
    }

    #[test]
    fn test_from_sequences_sorts() {
        let mut ring = NonStandardRing::new();
        let sequences = vec![block(&mut ring, 9, 14), block(&mut ring, -3, 3), block(&mut ring, 6, 6)];
        let collection = DisjointSequences::from_sequences(&mut ring, sequences, true).unwrap();
        assert_eq!(bounds(&collection), vec![(-3, 3), (6, 6), (9, 14)]);
    }

    #[test]
    fn test_from_sequences_rejects_overlap() {
        let mut ring = NonStandardRing::new();
        let sequences = vec![block(&mut ring, 0, 5), block(&mut ring, 5, 8)];
        let result = DisjointSequences::from_sequences(&mut ring, sequences, true);
        assert!(matches!(result, Err(UlamError::OverlapViolation { .. })));
    }

    #[test]
    fn test_merge_in_positions() {
        let mut ring = NonStandardRing::new();
        let base = collection(&mut ring, &[(-3, 3), (6, 6), (9, 14), (16, 22)]);

        let before = block(&mut ring, -10, -8);
        let (merged, _) = base.clone().merge_in(&mut ring, &before, 0).unwrap();
        assert_eq!(bounds(&merged)[0], (-10, -8));

        let after = block(&mut ring, 30, 31);
        let (merged, _) = base.clone().merge_in(&mut ring, &after, 0).unwrap();
        assert_eq!(bounds(&merged).last(), Some(&(30, 31)));

        let bridging = block(&mut ring, 7, 8);
        let (merged, index) = base.clone().merge_in(&mut ring, &bridging, 0).unwrap();
        assert_eq!(bounds(&merged), vec![(-3, 3), (6, 14), (16, 22)]);
        assert_eq!(index, 1);

        let (resumed, _) = base.merge_in(&mut ring, &bridging, 1).unwrap();
        assert_eq!(resumed, merged);
    }

    #[test]
    fn test_merge_in_interior_gap() {
        let mut ring = NonStandardRing::new();
        let base = collection(&mut ring, &[(0, 2), (10, 12)]);
        let gap = block(&mut ring, 5, 6);
        let (merged, index) = base.merge_in(&mut ring, &gap, 0).unwrap();
        assert_eq!(bounds(&merged), vec![(0, 2), (5, 6), (10, 12)]);
        assert_eq!(index, 1);
    }

    #[test]
    fn test_merge_in_abutting_coalesces() {
        let mut ring = NonStandardRing::new();
        let base = collection(&mut ring, &[(0, 4), (10, 12)]);
        let abutting = block(&mut ring, 5, 9);
        let (merged, _) = base.merge_in(&mut ring, &abutting, 0).unwrap();
        assert_eq!(bounds(&merged), vec![(0, 12)]);
    }

    #[test]
    fn test_cut_out_splits_boundaries() {
        let mut ring = NonStandardRing::new();
        let base = collection(&mut ring, &[(-3, 3), (6, 6), (9, 14), (16, 22)]);
        let cut = block(&mut ring, 2, 10);
        let (remaining, _) = base.cut_out(&mut ring, &cut, 0).unwrap();
        assert_eq!(bounds(&remaining), vec![(-3, 1), (11, 14), (16, 22)]);
    }

    #[test]
    fn test_cut_out_in_gap_changes_nothing() {
        let mut ring = NonStandardRing::new();
        let base = collection(&mut ring, &[(0, 2), (10, 12), (20, 22)]);
        let cut = block(&mut ring, 14, 17);
        let (remaining, _) = base.clone().cut_out(&mut ring, &cut, 0).unwrap();
        assert_eq!(remaining, base);
    }

    #[test]
    fn test_select_larger_than() {
        let mut ring = NonStandardRing::new();
        let base = collection(&mut ring, &[(0, 2), (5, 9), (12, 12)]);

        let below = NonStandardInteger::constant(-1);
        assert_eq!(base.select_larger_than(&mut ring, &below).unwrap(), base);

        let above = NonStandardInteger::constant(12);
        assert!(base.select_larger_than(&mut ring, &above).unwrap().is_empty());

        let inside = NonStandardInteger::constant(6);
        assert_eq!(bounds(&base.select_larger_than(&mut ring, &inside).unwrap()), vec![(7, 9), (12, 12)]);

        let at_end = NonStandardInteger::constant(9);
        assert_eq!(bounds(&base.select_larger_than(&mut ring, &at_end).unwrap()), vec![(12, 12)]);

        let empty = DisjointSequences::new();
        assert!(empty.select_larger_than(&mut ring, &inside).unwrap().is_empty());
    }

    #[test]
    fn test_symmetric_difference_with_itself_is_empty() {
        let mut ring = NonStandardRing::new();
        let base = collection(&mut ring, &[(0, 2), (5, 9), (12, 12)]);
        assert!(base.symmetric_difference(&mut ring, &base).unwrap().is_empty());
    }

    #[test]
    fn test_symmetric_difference_and_intersection() {
        let mut ring = NonStandardRing::new();
        let left = collection(&mut ring, &[(0, 5), (10, 15)]);
        let right = collection(&mut ring, &[(3, 12)]);
        let symmetric = left.symmetric_difference(&mut ring, &right).unwrap();
        assert_eq!(bounds(&symmetric), vec![(0, 2), (6, 9), (13, 15)]);
        let common = left.intersection(&mut ring, &right).unwrap();
        assert_eq!(bounds(&common), vec![(3, 5), (10, 12)]);
    }

    #[test]
    fn test_formal_blocks_and_projection() {
        let mut ring = NonStandardRing::new();
        let one = ArithmeticSequence::singleton(NonStandardInteger::ONE);
        let block = ArithmeticSequence::new(&mut ring, NonStandardInteger::N, 2 * NonStandardInteger::N).unwrap();
        let collection = DisjointSequences::from_sorted(vec![one, block]);
        assert_eq!(collection.formal_blocks(), vec!["1".to_string(), "[N, 2N]".to_string()]);
        assert_eq!(collection.project(4, 100), vec![1, 4, 5, 6, 7, 8]);
        assert_eq!(collection.project(4, 6), vec![1, 4, 5, 6]);
        assert_eq!(collection.coefficient_pairs(), vec![((0, 1), (0, 1)), ((1, 0), (2, 0))]);
    }
}
