use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Caller-input errors. Nothing inside the tree fails once these are ruled out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A tree must cover at least one element.
    ZeroLength,
    /// More initial values than the tree length.
    TooManyValues { given: usize, len: usize },
    /// `start > end` in an inclusive range.
    EmptyRange { start: usize, end: usize },
    /// A range bound outside `0..len`.
    OutOfBounds { index: usize, len: usize },
    /// An aggregation mode name other than `sum`, `min` or `max`.
    UnknownMode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "tree length must be non-zero"),
            Self::TooManyValues { given, len } => {
                write!(f, "{} initial values given for a tree of length {}", given, len)
            }
            Self::EmptyRange { start, end } => {
                write!(f, "range start {} is greater than range end {}", start, end)
            }
            Self::OutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
            Self::UnknownMode(name) => write!(f, "unknown aggregation mode `{}`", name),
        }
    }
}

impl std::error::Error for Error {}
