use crate::error::Error;
use std::{fmt, str::FromStr};

/// Values a [`LazySegmentTree`](crate::LazySegmentTree) can aggregate.
pub trait Elem: num::Num + num::Bounded + PartialOrd + Copy + fmt::Debug {}
impl<T: num::Num + num::Bounded + PartialOrd + Copy + fmt::Debug> Elem for T {}

/// The aggregation mode of a tree, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Aggregate {
    Sum,
    Min,
    Max,
}

impl Aggregate {
    /// Identity of `combine`: 0 for sum, the largest value for min, the smallest for max.
    #[inline]
    pub fn neutral<T: Elem>(self) -> T {
        match self {
            Self::Sum => T::zero(),
            Self::Min => T::max_value(),
            Self::Max => T::min_value(),
        }
    }

    #[inline]
    pub fn combine<T: Elem>(self, lhs: T, rhs: T) -> T {
        match self {
            Self::Sum => lhs + rhs,
            Self::Min => {
                if rhs < lhs {
                    rhs
                } else {
                    lhs
                }
            }
            Self::Max => {
                if lhs < rhs {
                    rhs
                } else {
                    lhs
                }
            }
        }
    }

    /// Aggregate of `len` elements that all equal (or all moved by) `val`.
    #[inline]
    pub fn upstream<T: Elem>(self, val: T, len: usize) -> T {
        match self {
            Self::Sum => times(val, len),
            Self::Min | Self::Max => val,
        }
    }
}

impl fmt::Display for Aggregate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sum => "sum",
            Self::Min => "min",
            Self::Max => "max",
        })
    }
}

impl FromStr for Aggregate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "sum" => Ok(Self::Sum),
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            _ => Err(Error::UnknownMode(s.to_owned())),
        }
    }
}

/// `x` added to itself `n` times.
///
/// O(log n)
pub fn times<T: num::Num + Copy>(mut x: T, mut n: usize) -> T {
    let mut acc = T::zero();
    while n != 0 {
        if n & 1 == 1 {
            acc = acc + x;
        }
        n >>= 1;
        if n != 0 {
            x = x + x;
        }
    }
    acc
}
