// src/reference/naive.rs

use std::collections::{BTreeSet, HashSet};

use crate::core::error::{Result, UlamError};

/// Direct computation of U(1,N) for one concrete N.
///
/// Keeps every pairwise sum above the last term, split into sums seen once
/// and sums seen more than once, so more terms can be requested later
/// without starting over.
#[derive(Debug, Clone)]
pub struct NaiveUlam {
    n: i64,
    terms: Vec<i64>,
    unique: BTreeSet<i64>,
    multiple: HashSet<i64>,
}

impl NaiveUlam {
    pub fn new(n: i64) -> Result<Self> {
        if n < 2 {
            return Err(UlamError::UndefinedSequence { n });
        }

        Ok(NaiveUlam {
            n,
            terms: vec![1, n],
            unique: BTreeSet::from([1 + n]),
            multiple: HashSet::new(),
        })
    }

    pub fn n(&self) -> i64 {
        self.n
    }

    pub fn terms(&self) -> &[i64] {
        &self.terms
    }

    fn push_next(&mut self) -> Option<i64> {
        let next = self.unique.pop_first()?;
        for &term in &self.terms {
            let sum = term + next;
            if self.multiple.contains(&sum) {
                continue;
            }
            if !self.unique.remove(&sum) {
                self.unique.insert(sum);
            } else {
                self.multiple.insert(sum);
            }
        }
        self.terms.push(next);
        Some(next)
    }

    /// Extends until the last term is at least `bound`.
    pub fn extend_to(&mut self, bound: i64) {
        while self.terms.last().map_or(false, |&last| last < bound) {
            if self.push_next().is_none() {
                break;
            }
        }
    }

    /// Terms not larger than `bound`.
    pub fn terms_up_to(&mut self, bound: i64) -> Vec<i64> {
        self.extend_to(bound);
        self.terms.iter().copied().filter(|&t| t <= bound).collect()
    }
}

/// Terms of U(1,n) not larger than `bound`.
pub fn ulam_terms_up_to(n: i64, bound: i64) -> Result<Vec<i64>> {
    Ok(NaiveUlam::new(n)?.terms_up_to(bound))
}
