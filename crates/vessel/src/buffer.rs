//! Owned backing store for [`DynArray`](crate::DynArray).
//!
//! A [`Buffer`] is a fixed-length boxed slice. It provides the three
//! primitives every resize is built from:
//!
//! 1. **allocate**: [`Buffer::allocate`] creates `capacity` default slots.
//! 2. **copy**: [`Buffer::move_prefix_from`] (reallocation) and
//!    [`Buffer::clone_prefix_from`] (copy construction) transfer elements.
//! 3. **release**: dropping the buffer frees the allocation exactly once.
//!
//! A buffer never changes length. Growing means building a new buffer,
//! transferring the occupied prefix, and dropping the old one.

/// Fixed-length, exclusively owned element storage.
///
/// Every slot is always initialised. Slots past the owning array's length
/// hold `T::default()` or a value left behind by a removal.
pub struct Buffer<T> {
    slots: Box<[T]>,
}

impl<T> Buffer<T> {
    /// A zero-capacity buffer. Does not allocate.
    pub fn empty() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    /// Number of slots in this buffer.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// All slots, including those past the owning array's length.
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    /// All slots, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Move the first `count` elements of `src` into the first `count`
    /// slots of `self`.
    ///
    /// The elements are swapped, so `src` receives whatever `self` held in
    /// those slots. Nothing is cloned or dropped.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds the capacity of either buffer.
    pub fn move_prefix_from(&mut self, src: &mut Buffer<T>, count: usize) {
        self.slots[..count].swap_with_slice(&mut src.slots[..count]);
    }
}

impl<T: Default> Buffer<T> {
    /// Allocate `capacity` slots, each set to `T::default()`.
    ///
    /// `capacity == 0` returns an unallocated buffer.
    pub fn allocate(capacity: usize) -> Self {
        if capacity == 0 {
            return Self::empty();
        }
        Self {
            slots: std::iter::repeat_with(T::default).take(capacity).collect(),
        }
    }
}

impl<T: Clone> Buffer<T> {
    /// Clone every element of `src` into the leading slots of `self`.
    ///
    /// # Panics
    ///
    /// Panics if `src` is longer than this buffer.
    pub fn clone_prefix_from(&mut self, src: &[T]) {
        self.slots[..src.len()].clone_from_slice(src);
    }
}
