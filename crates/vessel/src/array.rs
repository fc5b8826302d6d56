//! The growable array.
//!
//! [`DynArray`] owns a single `Buffer` of `capacity` slots and tracks how
//! many of them (`len`) hold live elements. Every capacity change goes
//! through [`DynArray::reserve`], which allocates a new buffer, moves the
//! occupied prefix across, and drops the old buffer.

use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use crate::buffer::Buffer;
use crate::config::GrowthPolicy;
use crate::error::ArrayError;

/// A contiguous, growable array with an explicit growth policy.
///
/// Invariants:
///
/// - `len <= capacity`.
/// - Slots `[0, len)` are the array's elements; slots `[len, capacity)`
///   are allocated but not part of the array.
/// - A capacity of zero means no allocation is held.
///
/// # Access paths
///
/// | Operation | Checked against `len` | On failure |
/// |-----------|-----------------------|------------|
/// | `array[i]` | no | panics only past `capacity` |
/// | [`get_unchecked`](Self::get_unchecked) | no | undefined behaviour |
/// | [`at`](Self::at) / [`at_mut`](Self::at_mut) | yes | [`ArrayError::OutOfRange`] |
/// | [`front`](Self::front) / [`back`](Self::back) | yes | panics |
/// | [`first`](Self::first) / [`last`](Self::last) | yes | `None` |
///
/// # Example
///
/// ```
/// use vessel::DynArray;
///
/// let mut v = DynArray::new();
/// for i in 0..10 {
///     v.push_back(i);
/// }
/// assert_eq!(v.len(), 10);
/// assert_eq!(v.capacity(), 24);
/// assert_eq!(v[3], 3);
/// assert!(v.at(10).is_err());
/// ```
pub struct DynArray<T> {
    data: Buffer<T>,
    len: usize,
    policy: GrowthPolicy,
}

impl<T> DynArray<T> {
    /// Create an empty array with the default growth policy.
    ///
    /// Does not allocate.
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::DEFAULT)
    }

    /// Create an empty array that grows according to `policy`.
    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            data: Buffer::empty(),
            len: 0,
            policy,
        }
    }

    /// Number of elements in the array.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// `true` if the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The growth policy this array was built with.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// The elements `[0, len)` as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data.as_slice()[..self.len]
    }

    /// The elements `[0, len)` as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data.as_mut_slice()[..self.len]
    }

    /// Bounds-checked shared access.
    ///
    /// Returns [`ArrayError::OutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        self.check_index(index)?;
        Ok(&self.data.as_slice()[index])
    }

    /// Bounds-checked mutable access.
    ///
    /// Returns [`ArrayError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        self.check_index(index)?;
        Ok(&mut self.data.as_mut_slice()[index])
    }

    /// Slot `index` with no bounds check at all.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`capacity()`](Self::capacity). A slot in
    /// `[len, capacity)` is readable but is not an element of the array.
    #[allow(unsafe_code)]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: caller guarantees index < capacity, and every slot is initialised.
        unsafe { self.data.as_slice().get_unchecked(index) }
    }

    /// Mutable slot `index` with no bounds check at all.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`capacity()`](Self::capacity).
    #[allow(unsafe_code)]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: caller guarantees index < capacity, and every slot is initialised.
        unsafe { self.data.as_mut_slice().get_unchecked_mut(index) }
    }

    /// The first element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty. Use [`first`](Self::first) for a
    /// non-panicking variant.
    pub fn front(&self) -> &T {
        assert!(!self.is_empty(), "called `front` on an empty array");
        &self.data.as_slice()[0]
    }

    /// The first element, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn front_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "called `front_mut` on an empty array");
        &mut self.data.as_mut_slice()[0]
    }

    /// The last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty. Use [`last`](Self::last) for a
    /// non-panicking variant.
    pub fn back(&self) -> &T {
        assert!(!self.is_empty(), "called `back` on an empty array");
        &self.data.as_slice()[self.len - 1]
    }

    /// The last element, mutably.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn back_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "called `back_mut` on an empty array");
        let last = self.len - 1;
        &mut self.data.as_mut_slice()[last]
    }

    /// The first element, or `None` if empty.
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// The last element, or `None` if empty.
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index >= self.len {
            return Err(ArrayError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl<T: Default> DynArray<T> {
    /// Create an array of `len` default elements.
    ///
    /// Capacity is `2 * len` under the default policy, which differs from
    /// the capacity reached by pushing `len` elements one at a time.
    pub fn with_len(len: usize) -> Self {
        Self::with_len_in(len, GrowthPolicy::DEFAULT)
    }

    /// Create an array of `len` default elements sized by `policy`.
    ///
    /// # Panics
    ///
    /// Panics if `policy` presizes below `len` (a zero `presize_factor`
    /// that bypassed [`GrowthPolicy::new`]).
    pub fn with_len_in(len: usize, policy: GrowthPolicy) -> Self {
        let capacity = policy.presized(len);
        assert!(
            capacity >= len,
            "presized capacity {capacity} is below len {len}"
        );
        Self {
            data: Buffer::allocate(capacity),
            len,
            policy,
        }
    }

    /// Append `value`, growing first if the array is full.
    ///
    /// # Panics
    ///
    /// Panics if growing is needed and the policy does not add a slot (a
    /// policy built without [`GrowthPolicy::new`]).
    pub fn push_back(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.data.as_mut_slice()[self.len] = value;
        self.len += 1;
    }

    /// Remove and return the last element.
    ///
    /// Returns [`ArrayError::Empty`] if there is nothing to remove. The
    /// vacated slot is reset to `T::default()`.
    pub fn pop_back(&mut self) -> Result<T, ArrayError> {
        if self.is_empty() {
            return Err(ArrayError::Empty);
        }
        self.len -= 1;
        Ok(mem::take(&mut self.data.as_mut_slice()[self.len]))
    }

    /// Insert `value` at `index`, shifting later elements right.
    ///
    /// An `index` at or past `len()` is clamped to `len()`, making this an
    /// append. Never fails.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`push_back`](Self::push_back).
    pub fn insert(&mut self, index: usize, value: T) {
        let index = if index > self.len {
            log::debug!(
                "insert index {index} past len {}, appending instead",
                self.len
            );
            self.len
        } else {
            index
        };
        if self.len == self.capacity() {
            self.grow();
        }
        let len = self.len;
        let slots = self.data.as_mut_slice();
        slots[len] = value;
        // Bring the new element down to `index`; [index, len) moves up by one.
        slots[index..=len].rotate_right(1);
        self.len += 1;
    }

    /// Remove and return the element at `index`, shifting later elements left.
    ///
    /// Returns [`ArrayError::OutOfRange`] if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> Result<T, ArrayError> {
        self.check_index(index)?;
        let len = self.len;
        let slots = self.data.as_mut_slice();
        slots[index..len].rotate_left(1);
        self.len -= 1;
        Ok(mem::take(&mut slots[len - 1]))
    }

    /// Reallocate to exactly `capacity` slots.
    ///
    /// Moves the current elements into a fresh buffer and releases the old
    /// one. `capacity` may be smaller than the current capacity but never
    /// smaller than `len()`. A capacity of zero releases the allocation.
    ///
    /// # Panics
    ///
    /// Panics if `capacity < len()`.
    pub fn reserve(&mut self, capacity: usize) {
        assert!(
            capacity >= self.len,
            "reserve capacity {capacity} is below len {}",
            self.len
        );
        let mut fresh = Buffer::allocate(capacity);
        fresh.move_prefix_from(&mut self.data, self.len);
        log::trace!(
            "reallocated: capacity {} -> {capacity}, moved {} elements",
            self.data.capacity(),
            self.len
        );
        self.data = fresh;
    }

    fn grow(&mut self) {
        let old = self.capacity();
        let capacity = self.policy.grow(old);
        assert!(
            capacity > old,
            "growth policy made no progress from capacity {old}"
        );
        self.reserve(capacity);
    }
}

impl<T: Clone + Default> DynArray<T> {
    /// Create an array of `len` copies of `value`.
    ///
    /// Capacity follows the same presizing rule as [`with_len`](Self::with_len).
    pub fn filled(len: usize, value: T) -> Self {
        Self::filled_in(len, value, GrowthPolicy::DEFAULT)
    }

    /// Create an array of `len` copies of `value` sized by `policy`.
    ///
    /// # Panics
    ///
    /// Panics under the same condition as [`with_len_in`](Self::with_len_in).
    pub fn filled_in(len: usize, value: T, policy: GrowthPolicy) -> Self {
        let capacity = policy.presized(len);
        assert!(
            capacity >= len,
            "presized capacity {capacity} is below len {len}"
        );
        let mut data = Buffer::allocate(capacity);
        data.as_mut_slice()[..len].fill(value);
        Self { data, len, policy }
    }
}

/// Deep copy: same length, capacity and policy, with the elements cloned
/// into an independent buffer.
impl<T: Clone + Default> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut data = Buffer::allocate(self.capacity());
        data.clone_prefix_from(self.as_slice());
        Self {
            data,
            len: self.len,
            policy: self.policy,
        }
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynArray<T> {}

/// Unchecked against `len`: any slot below `capacity` is reachable.
///
/// Panics only if `index >= capacity()`. Use [`DynArray::at`] for access
/// checked against the array length.
impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data.as_mut_slice()[index]
    }
}
