//! Capacity growth configuration.

use crate::error::PolicyError;

/// Rules for choosing a new capacity.
///
/// Build policies with [`GrowthPolicy::new`] to have them validated. A
/// policy assembled from its public fields that fails to add a slot when
/// growing makes `push_back`/`insert` panic.
///
/// Two independent rules apply:
///
/// - **Growth on overflow** (`push_back`/`insert` into a full array):
///   `new = old * factor + increment`. With the defaults this yields
///   8, 24, 56, 120, ... starting from an empty array.
/// - **Sized construction** (`with_len`/`filled`): `capacity = n * presize_factor`.
///
/// The two rules do not agree: an array built with `with_len(8)` has
/// capacity 16, while pushing 8 elements into an empty array leaves
/// capacity 8. Callers and tests rely on both numbers, so they are kept
/// separate rather than unified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Multiplier applied to the old capacity on overflow.
    pub factor: usize,
    /// Constant added after multiplying on overflow.
    pub increment: usize,
    /// Multiplier from element count to capacity for sized construction.
    pub presize_factor: usize,
}

impl GrowthPolicy {
    /// Default overflow multiplier.
    pub const DEFAULT_FACTOR: usize = 2;

    /// Default overflow increment.
    pub const DEFAULT_INCREMENT: usize = 8;

    /// Default sized-construction multiplier.
    pub const DEFAULT_PRESIZE_FACTOR: usize = 2;

    /// The default policy: `2c + 8` on overflow, `2n` when presizing.
    pub const DEFAULT: Self = Self {
        factor: Self::DEFAULT_FACTOR,
        increment: Self::DEFAULT_INCREMENT,
        presize_factor: Self::DEFAULT_PRESIZE_FACTOR,
    };

    /// Build a validated policy.
    ///
    /// Rejects policies where growing a full buffer would not add a slot
    /// for some capacity (including zero), and a zero presize factor.
    pub fn new(
        factor: usize,
        increment: usize,
        presize_factor: usize,
    ) -> Result<Self, PolicyError> {
        // c * factor + increment > c for every c >= 0 needs both terms.
        if factor == 0 || increment == 0 {
            return Err(PolicyError::NoProgress { factor, increment });
        }
        if presize_factor == 0 {
            return Err(PolicyError::ZeroPresizeFactor);
        }
        Ok(Self {
            factor,
            increment,
            presize_factor,
        })
    }

    /// Capacity to grow to when an array of capacity `old` is full.
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if the result does not fit in `usize`.
    pub fn grow(&self, old: usize) -> usize {
        old.checked_mul(self.factor)
            .and_then(|c| c.checked_add(self.increment))
            .expect("capacity overflow")
    }

    /// Capacity for an array constructed with `len` elements.
    ///
    /// # Panics
    ///
    /// Panics with "capacity overflow" if the result does not fit in `usize`.
    pub fn presized(&self, len: usize) -> usize {
        len.checked_mul(self.presize_factor)
            .expect("capacity overflow")
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}
