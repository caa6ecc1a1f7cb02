// src/core/arithmetic_sequence.rs

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, UlamError};
use crate::core::non_standard_integer::NonStandardInteger;
use crate::core::non_standard_ring::NonStandardRing;

/// Consecutive non-standard integers from `start` to `end`, both included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArithmeticSequence {
    start: NonStandardInteger,
    end: NonStandardInteger,
}

/// Sums sorted by how many ways they can be written: one, or more than one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Representations {
    pub one: Vec<ArithmeticSequence>,
    pub multiple: Vec<ArithmeticSequence>,
}

/// Length class of a sequence. Self-sums are case split on it, since the
/// short classes have boundary behaviour the long formula gets wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Singleton,
    Pair,
    Triple,
    Long,
}

impl ArithmeticSequence {
    /// Fails with `InvalidRange` when `start > end`. The check is a real
    /// comparison and may raise the ring's validity threshold.
    pub fn new(ring: &mut NonStandardRing, start: NonStandardInteger, end: NonStandardInteger) -> Result<Self> {
        if ring.gt(&start, &end) {
            return Err(UlamError::InvalidRange { start, end });
        }
        Ok(ArithmeticSequence { start, end })
    }

    /// For bounds ordered for every N >= 0, such as `[N, 2N]`: no
    /// comparison is needed or recorded.
    pub(crate) fn from_ordered(start: NonStandardInteger, end: NonStandardInteger) -> Self {
        ArithmeticSequence { start, end }
    }

    pub fn singleton(element: NonStandardInteger) -> Self {
        ArithmeticSequence { start: element, end: element }
    }

    pub fn start(&self) -> NonStandardInteger {
        self.start
    }

    pub fn end(&self) -> NonStandardInteger {
        self.end
    }

    pub fn is_singleton(&self, ring: &mut NonStandardRing) -> bool {
        ring.eq(&self.start, &self.end)
    }

    pub fn span_class(&self, ring: &mut NonStandardRing) -> Span {
        if self.is_singleton(ring) {
            Span::Singleton
        } else if ring.eq(&self.end, &self.start.next(1)) {
            Span::Pair
        } else if ring.eq(&self.end, &self.start.next(2)) {
            Span::Triple
        } else {
            Span::Long
        }
    }

    pub fn contains(&self, ring: &mut NonStandardRing, element: &NonStandardInteger) -> bool {
        ring.ge(element, &self.start) && ring.le(element, &self.end)
    }

    pub fn equals(&self, ring: &mut NonStandardRing, other: &ArithmeticSequence) -> bool {
        ring.eq(&self.start, &other.start) && ring.eq(&self.end, &other.end)
    }

    pub fn intersects(&self, ring: &mut NonStandardRing, other: &ArithmeticSequence) -> bool {
        if ring.ge(&other.end, &self.start) && ring.le(&other.start, &self.end) {
            return true;
        }
        ring.ge(&self.end, &other.start) && ring.le(&self.start, &other.end)
    }

    /// Sums `x + y` with `x` in `self` and `y` in `other`, classified by
    /// number of representations. The sequences must be disjoint.
    ///
    /// With a singleton on either side every sum is unique. Otherwise only the
    /// two extremal sums are: `start + 1` is already both
    /// `x0 + y1` and `x1 + y0`, and the same holds symmetrically at the top.
    pub fn add(&self, ring: &mut NonStandardRing, other: &ArithmeticSequence) -> Result<Representations> {
        if self.intersects(ring, other) {
            return Err(UlamError::NonDisjointAddition { left: *self, right: *other });
        }

        let start = self.start + other.start;
        let end = self.end + other.end;

        if self.is_singleton(ring) || other.is_singleton(ring) {
            return Ok(Representations {
                one: vec![ArithmeticSequence::new(ring, start, end)?],
                multiple: Vec::new(),
            });
        }

        Ok(Representations {
            one: vec![ArithmeticSequence::singleton(start), ArithmeticSequence::singleton(end)],
            multiple: vec![ArithmeticSequence::new(ring, start.next(1), end.previous(1))?],
        })
    }

    /// Sums `x + y` with `x < y` both taken from `self`.
    pub fn add_to_itself(&self, ring: &mut NonStandardRing) -> Result<Representations> {
        let low = 2 * self.start;
        let high = 2 * self.end;

        let representations = match self.span_class(ring) {
            Span::Singleton => Representations::default(),
            Span::Pair => Representations {
                one: vec![ArithmeticSequence::singleton(low.next(1))],
                multiple: Vec::new(),
            },
            Span::Triple => Representations {
                one: vec![ArithmeticSequence::new(ring, low.next(1), low.next(3))?],
                multiple: Vec::new(),
            },
            Span::Long => Representations {
                one: vec![
                    ArithmeticSequence::new(ring, low.next(1), low.next(2))?,
                    ArithmeticSequence::new(ring, high.previous(2), high.previous(1))?,
                ],
                multiple: vec![ArithmeticSequence::new(ring, low.next(3), high.previous(3))?],
            },
        };
        Ok(representations)
    }

    /// Smallest sequence containing both.
    pub fn span(&self, ring: &mut NonStandardRing, other: &ArithmeticSequence) -> Result<Self> {
        let start = ring.min(self.start, other.start);
        let end = ring.max(self.end, other.end);
        ArithmeticSequence::new(ring, start, end)
    }

    pub fn intersection(&self, ring: &mut NonStandardRing, other: &ArithmeticSequence) -> Result<Option<Self>> {
        if !self.intersects(ring, other) {
            return Ok(None);
        }
        let start = ring.max(self.start, other.start);
        let end = ring.min(self.end, other.end);
        ArithmeticSequence::new(ring, start, end).map(Some)
    }

    /// What is left of `self` once `other` is removed: zero, one or two pieces.
    pub fn complement(&self, ring: &mut NonStandardRing, other: &ArithmeticSequence) -> Result<Vec<Self>> {
        let mut remaining = Vec::with_capacity(2);

        if ring.lt(&self.start, &other.start) {
            let end = ring.min(self.end, other.start.previous(1));
            remaining.push(ArithmeticSequence::new(ring, self.start, end)?);
        }

        if ring.gt(&self.end, &other.end) {
            let start = ring.max(self.start, other.end.next(1));
            remaining.push(ArithmeticSequence::new(ring, start, self.end)?);
        }

        Ok(remaining)
    }

    pub fn next_singleton(&self) -> Self {
        ArithmeticSequence::singleton(self.end.next(1))
    }

    /// Concrete integers of the sequence for a given N.
    pub fn values_at(&self, n: i64) -> RangeInclusive<i64> {
        self.start.evaluate(n)..=self.end.evaluate(n)
    }

    pub fn as_pairs(&self) -> ((i64, i64), (i64, i64)) {
        (self.start.as_pair(), self.end.as_pair())
    }
}

impl fmt::Display for ArithmeticSequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.start, self.end)
    }
}
