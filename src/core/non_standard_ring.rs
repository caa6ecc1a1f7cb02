// src/core/non_standard_ring.rs

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use log::debug;

use crate::core::non_standard_integer::NonStandardInteger;

pub const DEFAULT_INITIAL_GUESS: i64 = 1;

/// Validity bookkeeping for the ring Z[N].
///
/// Every order comparison between integers with different coefficients only
/// holds past some N; the ring keeps the largest such threshold seen so far
/// together with the values of N at which an equality test was ambiguous.
/// One ring belongs to one computation and is passed explicitly to every
/// operation that compares.
#[derive(Debug, Clone)]
pub struct NonStandardRing {
    minimal_guess: i64,
    exclusions: BTreeSet<i64>,
    report_guess_above: Option<i64>,
}

impl NonStandardRing {
    pub fn new() -> Self {
        Self::with_minimal_guess(DEFAULT_INITIAL_GUESS)
    }

    pub fn with_minimal_guess(minimal_guess: i64) -> Self {
        NonStandardRing {
            minimal_guess,
            exclusions: BTreeSet::new(),
            report_guess_above: None,
        }
    }

    /// Comparisons needing N above `threshold` get logged with both operands.
    pub fn set_report_threshold(&mut self, threshold: Option<i64>) {
        self.report_guess_above = threshold;
    }

    pub fn minimal_guess(&self) -> i64 {
        self.minimal_guess
    }

    pub fn record_order_guess(&mut self, guess: i64) {
        self.minimal_guess = self.minimal_guess.max(guess);
    }

    pub fn record_exclusion(&mut self, exclusion: i64) {
        self.exclusions.insert(exclusion);
    }

    /// Exclusions that still matter, i.e. those above the minimal guess.
    pub fn exclusions(&self) -> Vec<i64> {
        self.exclusions
            .range(self.minimal_guess + 1..)
            .copied()
            .collect()
    }

    /// Drops exclusions at or below the minimal guess and describes the
    /// constraint on N under which everything compared so far is valid.
    pub fn describe(&mut self) -> String {
        self.exclusions = self.exclusions.split_off(&(self.minimal_guess + 1));
        self.constraint_string()
    }

    /// Starts a new reporting period.
    pub fn reset(&mut self, minimal_guess: i64) {
        self.minimal_guess = minimal_guess;
        self.exclusions.clear();
    }

    fn constraint_string(&self) -> String {
        let remaining = self.exclusions();
        if remaining.is_empty() {
            return format!("N >= {}", self.minimal_guess);
        }

        let listed: Vec<String> = remaining.iter().map(|e| e.to_string()).collect();
        format!("N >= {} and N != {}", self.minimal_guess, listed.join(", "))
    }

    /// Eventual order of `x` and `y`, recording the threshold it relies on.
    pub fn cmp(&mut self, x: &NonStandardInteger, y: &NonStandardInteger) -> Ordering {
        let comparison = x.compare(y);
        if let Some(guess) = comparison.required_minimum {
            if self.report_guess_above.map_or(false, |bound| guess > bound) {
                debug!("{} against {} requires N >= {}", x, y, guess);
            }
            self.record_order_guess(guess);
        }
        comparison.ordering
    }

    pub fn lt(&mut self, x: &NonStandardInteger, y: &NonStandardInteger) -> bool {
        self.cmp(x, y) == Ordering::Less
    }

    pub fn le(&mut self, x: &NonStandardInteger, y: &NonStandardInteger) -> bool {
        self.cmp(x, y) != Ordering::Greater
    }

    pub fn gt(&mut self, x: &NonStandardInteger, y: &NonStandardInteger) -> bool {
        self.cmp(x, y) == Ordering::Greater
    }

    pub fn ge(&mut self, x: &NonStandardInteger, y: &NonStandardInteger) -> bool {
        self.cmp(x, y) != Ordering::Less
    }

    /// Equality for large N, recording the N at which the two sides meet.
    pub fn eq(&mut self, x: &NonStandardInteger, y: &NonStandardInteger) -> bool {
        let equality = x.equality(y);
        if let Some(exclusion) = equality.exclusion {
            self.record_exclusion(exclusion);
        }
        equality.equal
    }

    pub fn ne(&mut self, x: &NonStandardInteger, y: &NonStandardInteger) -> bool {
        !self.eq(x, y)
    }

    pub fn min(&mut self, x: NonStandardInteger, y: NonStandardInteger) -> NonStandardInteger {
        if self.lt(&y, &x) {
            y
        } else {
            x
        }
    }

    pub fn max(&mut self, x: NonStandardInteger, y: NonStandardInteger) -> NonStandardInteger {
        if self.gt(&y, &x) {
            y
        } else {
            x
        }
    }
}

impl Default for NonStandardRing {
    fn default() -> Self {
        NonStandardRing::new()
    }
}

impl fmt::Display for NonStandardRing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Nonstandard Ring Z[N]; standardized for {}", self.constraint_string())
    }
}
