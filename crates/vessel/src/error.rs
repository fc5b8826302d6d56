//! Error types for dynamic array operations and growth-policy configuration.

use std::error::Error;
use std::fmt;

/// Errors returned by fallible [`DynArray`](crate::DynArray) operations.
///
/// Only checked access, `erase`, and `pop_back` can fail. Every other
/// operation either cannot fail or clamps (see `insert`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An index at or past the logical length was used with a checked
    /// operation (`at`, `at_mut`, `erase`).
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The array length at the time of the call.
        len: usize,
    },
    /// `pop_back` was called on an array with no elements.
    Empty,
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index out of range: index {index}, len {len}")
            }
            Self::Empty => write!(f, "array is empty while calling pop_back"),
        }
    }
}

impl Error for ArrayError {}

/// Errors from validating a [`GrowthPolicy`](crate::GrowthPolicy).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// Growing a full buffer would not add a slot for some capacity
    /// (`factor == 0` or `increment == 0`).
    NoProgress {
        /// The rejected growth factor.
        factor: usize,
        /// The rejected increment.
        increment: usize,
    },
    /// `presize_factor` of zero would leave sized arrays with
    /// fewer slots than elements.
    ZeroPresizeFactor,
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoProgress { factor, increment } => {
                write!(
                    f,
                    "growth policy makes no progress: factor {factor}, increment {increment}"
                )
            }
            Self::ZeroPresizeFactor => write!(f, "presize factor must be at least 1"),
        }
    }
}

impl Error for PolicyError {}
