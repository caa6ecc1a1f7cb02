// tests/property_tests.rs
//
// Property-based checks of block sums and the disjoint-set algebra against
// plain integer sets.

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use ulam::core::arithmetic_sequence::ArithmeticSequence;
use ulam::core::disjoint_sequences::DisjointSequences;
use ulam::core::non_standard_integer::NonStandardInteger;
use ulam::core::non_standard_ring::NonStandardRing;

fn block(ring: &mut NonStandardRing, start: i64, end: i64) -> ArithmeticSequence {
    ArithmeticSequence::new(ring, NonStandardInteger::constant(start), NonStandardInteger::constant(end)).unwrap()
}

fn values(blocks: &[ArithmeticSequence]) -> BTreeSet<i64> {
    blocks.iter().flat_map(|b| b.values_at(0)).collect()
}

fn model(sequences: &DisjointSequences) -> BTreeSet<i64> {
    values(sequences.sequences())
}

// Sorted blocks of constants with at least one missing integer between neighbours
fn disjoint_strategy() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((2i64..6, 0i64..5), 0..6).prop_map(|pieces| {
        let mut cursor = -10;
        pieces
            .into_iter()
            .map(|(gap, length)| {
                let start = cursor + gap;
                cursor = start + length;
                (start, start + length)
            })
            .collect()
    })
}

fn build(ring: &mut NonStandardRing, pieces: &[(i64, i64)]) -> DisjointSequences {
    let blocks = pieces.iter().map(|&(s, e)| block(ring, s, e)).collect();
    DisjointSequences::from_sequences(ring, blocks, true).unwrap()
}

fn assert_sorted_disjoint(sequences: &DisjointSequences) {
    for pair in sequences.sequences().windows(2) {
        assert!(pair[0].end().offset < pair[1].start().offset, "{} then {}", pair[0], pair[1]);
    }
}

proptest! {
    #[test]
    fn test_sum_of_disjoint_blocks_counts_representations(
        start in -20i64..20,
        first_length in 0i64..6,
        gap in 1i64..6,
        second_length in 0i64..6,
    ) {
        let mut ring = NonStandardRing::new();
        let x = block(&mut ring, start, start + first_length);
        let y_start = start + first_length + gap;
        let y = block(&mut ring, y_start, y_start + second_length);

        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for u in x.values_at(0) {
            for w in y.values_at(0) {
                *counts.entry(u + w).or_default() += 1;
            }
        }

        let sums = x.add(&mut ring, &y).unwrap();
        let expected_one: BTreeSet<i64> = counts.iter().filter(|(_, c)| **c == 1).map(|(v, _)| *v).collect();
        let expected_multiple: BTreeSet<i64> = counts.iter().filter(|(_, c)| **c > 1).map(|(v, _)| *v).collect();
        prop_assert_eq!(values(&sums.one), expected_one);
        prop_assert_eq!(values(&sums.multiple), expected_multiple);

        let swapped = y.add(&mut ring, &x).unwrap();
        prop_assert_eq!(values(&swapped.one), values(&sums.one));
        prop_assert_eq!(values(&swapped.multiple), values(&sums.multiple));
    }

    #[test]
    fn test_self_sum_counts_representations(start in -20i64..20, length in 0i64..10) {
        let mut ring = NonStandardRing::new();
        let x = block(&mut ring, start, start + length);

        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for u in x.values_at(0) {
            for w in x.values_at(0) {
                if u < w {
                    *counts.entry(u + w).or_default() += 1;
                }
            }
        }

        let sums = x.add_to_itself(&mut ring).unwrap();
        let expected_one: BTreeSet<i64> = counts.iter().filter(|(_, c)| **c == 1).map(|(v, _)| *v).collect();
        let expected_multiple: BTreeSet<i64> = counts.iter().filter(|(_, c)| **c > 1).map(|(v, _)| *v).collect();
        prop_assert_eq!(values(&sums.one), expected_one);
        prop_assert_eq!(values(&sums.multiple), expected_multiple);
    }

    #[test]
    fn test_union_matches_model(a in disjoint_strategy(), b in disjoint_strategy()) {
        let mut ring = NonStandardRing::new();
        let x = build(&mut ring, &a);
        let y = build(&mut ring, &b);

        let union = x.union(&mut ring, &y).unwrap();
        assert_sorted_disjoint(&union);
        let expected: BTreeSet<i64> = model(&x).union(&model(&y)).copied().collect();
        prop_assert_eq!(model(&union), expected);

        let reversed = y.union(&mut ring, &x).unwrap();
        prop_assert_eq!(model(&reversed), model(&union));
    }

    #[test]
    fn test_union_is_associative(a in disjoint_strategy(), b in disjoint_strategy(), c in disjoint_strategy()) {
        let mut ring = NonStandardRing::new();
        let x = build(&mut ring, &a);
        let y = build(&mut ring, &b);
        let z = build(&mut ring, &c);

        let left = x.union(&mut ring, &y).unwrap().union(&mut ring, &z).unwrap();
        let y_z = y.union(&mut ring, &z).unwrap();
        let right = x.union(&mut ring, &y_z).unwrap();
        prop_assert_eq!(model(&left), model(&right));
    }

    #[test]
    fn test_difference_matches_model(a in disjoint_strategy(), b in disjoint_strategy()) {
        let mut ring = NonStandardRing::new();
        let x = build(&mut ring, &a);
        let y = build(&mut ring, &b);

        let difference = x.difference(&mut ring, &y).unwrap();
        assert_sorted_disjoint(&difference);
        let expected: BTreeSet<i64> = model(&x).difference(&model(&y)).copied().collect();
        prop_assert_eq!(model(&difference), expected);
    }

    #[test]
    fn test_intersection_is_difference_of_difference(a in disjoint_strategy(), b in disjoint_strategy()) {
        let mut ring = NonStandardRing::new();
        let x = build(&mut ring, &a);
        let y = build(&mut ring, &b);

        let intersection = x.intersection(&mut ring, &y).unwrap();
        let expected: BTreeSet<i64> = model(&x).intersection(&model(&y)).copied().collect();
        prop_assert_eq!(model(&intersection), expected);
    }

    #[test]
    fn test_symmetric_difference(a in disjoint_strategy(), b in disjoint_strategy()) {
        let mut ring = NonStandardRing::new();
        let x = build(&mut ring, &a);
        let y = build(&mut ring, &b);

        let symmetric = x.symmetric_difference(&mut ring, &y).unwrap();
        let expected: BTreeSet<i64> = model(&x).symmetric_difference(&model(&y)).copied().collect();
        prop_assert_eq!(model(&symmetric), expected);

        let with_itself = x.symmetric_difference(&mut ring, &x).unwrap();
        prop_assert!(with_itself.is_empty());
    }

    #[test]
    fn test_select_larger_than(a in disjoint_strategy(), pivot in -15i64..30) {
        let mut ring = NonStandardRing::new();
        let x = build(&mut ring, &a);

        let selected = x.select_larger_than(&mut ring, &NonStandardInteger::constant(pivot)).unwrap();
        let expected: BTreeSet<i64> = model(&x).into_iter().filter(|&v| v > pivot).collect();
        prop_assert_eq!(model(&selected), expected);
    }
}
