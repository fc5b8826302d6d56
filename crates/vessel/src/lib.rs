//! A contiguous, growable array with an explicit capacity-growth policy.
//!
//! [`DynArray<T>`] owns one exclusively held buffer of `capacity` slots and
//! a logical length `len <= capacity`. Appends are amortized O(1); indexed
//! access is O(1); `insert` and `erase` shift the tail in O(len - index).
//!
//! # Architecture
//!
//! ```text
//! DynArray<T> (array.rs)
//! ├── Buffer<T> (buffer.rs)      allocate / move or clone prefix / release on drop
//! └── GrowthPolicy (config.rs)   2c + 8 on overflow, 2n when presizing
//! ```
//!
//! The only `unsafe` code is [`DynArray::get_unchecked`] and
//! [`DynArray::get_unchecked_mut`], each allowed individually under the
//! crate-wide `deny(unsafe_code)`.
//!
//! # Growth
//!
//! Two capacity rules coexist and both are observable:
//!
//! - Growing a full array: `new = 2 * old + 8` (8, 24, 56, 120, ...).
//! - Constructing with [`DynArray::with_len`] or [`DynArray::filled`]:
//!   `capacity = 2 * n`.
//!
//! See [`GrowthPolicy`] to change either rule.
//!
//! # Errors
//!
//! Checked access and `erase` return [`ArrayError::OutOfRange`];
//! `pop_back` on an empty array returns [`ArrayError::Empty`]. `insert`
//! never fails: an index past the end appends.
//!
//! # Logging
//!
//! Reallocations are reported through the [`log`] facade at `trace`
//! level; clamped inserts at `debug`. No logger is installed here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub(crate) mod buffer;
pub mod config;
pub mod error;

// Public re-exports for the primary API surface.
pub use array::DynArray;
pub use config::GrowthPolicy;
pub use error::{ArrayError, PolicyError};
