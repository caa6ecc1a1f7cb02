// src/core/non_standard_integer.rs

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num::Integer;
use serde::{Deserialize, Serialize};

/// Non-standard integer `coefficient * N + offset`.
///
/// Values are plain data; the ordering between two of them is only known once
/// N is large enough, so every ordering question goes through
/// [`NonStandardInteger::compare`] (which reports the threshold it relies on)
/// or through a [`NonStandardRing`](crate::core::non_standard_ring::NonStandardRing)
/// that records it. The derived `PartialEq` is structural equality, which is
/// exactly equality for all large N.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonStandardInteger {
    pub coefficient: i64,
    pub offset: i64,
}

/// Result of an order comparison that holds for all N past `required_minimum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub ordering: Ordering,
    /// `None` when the coefficients agree and the answer holds for every N.
    pub required_minimum: Option<i64>,
}

/// Result of an equality test: for differing coefficients the two sides
/// coincide at exactly one N, which callers must exclude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equality {
    pub equal: bool,
    pub exclusion: Option<i64>,
}

impl NonStandardInteger {
    pub const ONE: NonStandardInteger = NonStandardInteger { coefficient: 0, offset: 1 };
    /// The parameter N itself.
    pub const N: NonStandardInteger = NonStandardInteger { coefficient: 1, offset: 0 };

    pub fn new(coefficient: i64, offset: i64) -> Self {
        NonStandardInteger { coefficient, offset }
    }

    pub fn constant(offset: i64) -> Self {
        NonStandardInteger { coefficient: 0, offset }
    }

    /// The integer `n` steps further along the lattice, same coefficient.
    pub fn next(&self, n: i64) -> Self {
        NonStandardInteger::new(self.coefficient, self.offset + n)
    }

    /// The integer `n` steps back along the lattice, same coefficient.
    pub fn previous(&self, n: i64) -> Self {
        NonStandardInteger::new(self.coefficient, self.offset - n)
    }

    /// Orders `self` against `other` for all sufficiently large N.
    ///
    /// For `a + bN` against `c + dN` with `b != d` the answer is decided by the
    /// coefficients, and it is valid from `ceil((c - a) / (b - d))` on.
    pub fn compare(&self, other: &NonStandardInteger) -> Comparison {
        if self.coefficient == other.coefficient {
            return Comparison {
                ordering: self.offset.cmp(&other.offset),
                required_minimum: None,
            };
        }

        let numerator = other.offset - self.offset;
        let denominator = self.coefficient - other.coefficient;
        Comparison {
            ordering: self.coefficient.cmp(&other.coefficient),
            required_minimum: Some(Integer::div_ceil(&numerator, &denominator)),
        }
    }

    /// Eventual order, without reporting the threshold it depends on.
    pub fn compare_without_recording(&self, other: &NonStandardInteger) -> Ordering {
        if self.coefficient == other.coefficient {
            self.offset.cmp(&other.offset)
        } else {
            self.coefficient.cmp(&other.coefficient)
        }
    }

    pub fn less_than_without_recording(&self, other: &NonStandardInteger) -> bool {
        self.compare_without_recording(other) == Ordering::Less
    }

    pub fn equality(&self, other: &NonStandardInteger) -> Equality {
        if self.coefficient == other.coefficient {
            return Equality {
                equal: self.offset == other.offset,
                exclusion: None,
            };
        }

        let numerator = other.offset - self.offset;
        let denominator = self.coefficient - other.coefficient;
        let exclusion = if numerator % denominator == 0 {
            Some(numerator / denominator)
        } else {
            None
        };
        Equality { equal: false, exclusion }
    }

    /// Concrete value for a given N.
    pub fn evaluate(&self, n: i64) -> i64 {
        self.coefficient * n + self.offset
    }

    /// `(coefficient, offset)`, the persisted coordinate pair.
    pub fn as_pair(&self) -> (i64, i64) {
        (self.coefficient, self.offset)
    }

    /// Human notation such as `2N + 1`, `N`, `4N - 3` or `7`.
    pub fn to_affine_string(&self) -> String {
        let n_part = match self.coefficient {
            0 => return self.offset.to_string(),
            1 => "N".to_string(),
            -1 => "-N".to_string(),
            c => format!("{}N", c),
        };
        match self.offset.cmp(&0) {
            Ordering::Equal => n_part,
            Ordering::Greater => format!("{} + {}", n_part, self.offset),
            Ordering::Less => format!("{} - {}", n_part, -self.offset),
        }
    }
}

impl From<(i64, i64)> for NonStandardInteger {
    fn from((coefficient, offset): (i64, i64)) -> Self {
        NonStandardInteger::new(coefficient, offset)
    }
}

impl fmt::Display for NonStandardInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.coefficient, self.offset)
    }
}

impl Add for NonStandardInteger {
    type Output = NonStandardInteger;

    fn add(self, other: NonStandardInteger) -> NonStandardInteger {
        NonStandardInteger::new(self.coefficient + other.coefficient, self.offset + other.offset)
    }
}

impl Sub for NonStandardInteger {
    type Output = NonStandardInteger;

    fn sub(self, other: NonStandardInteger) -> NonStandardInteger {
        NonStandardInteger::new(self.coefficient - other.coefficient, self.offset - other.offset)
    }
}

impl Neg for NonStandardInteger {
    type Output = NonStandardInteger;

    fn neg(self) -> NonStandardInteger {
        NonStandardInteger::new(-self.coefficient, -self.offset)
    }
}

impl Mul<NonStandardInteger> for i64 {
    type Output = NonStandardInteger;

    fn mul(self, other: NonStandardInteger) -> NonStandardInteger {
        NonStandardInteger::new(self * other.coefficient, self * other.offset)
    }
}

impl Mul<i64> for NonStandardInteger {
    type Output = NonStandardInteger;

    fn mul(self, scalar: i64) -> NonStandardInteger {
        scalar * self
    }
}
