//! Test fixtures for Vessel development.
//!
//! Element types with observable construction, cloning, and dropping, for
//! checking how a container treats its elements:
//!
//! - [`TestNode`]: default-constructs to a non-zero sentinel value.
//! - [`CloneCounter`]: counts how many times it has been cloned.
//! - [`DropCounter`]: counts how many tracked instances have been dropped.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::rc::Rc;

/// Element whose default value is distinguishable from zeroed memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestNode {
    pub val: i32,
}

impl TestNode {
    /// Value produced by [`TestNode::default`].
    pub const DEFAULT_VAL: i32 = 42;

    pub fn new(val: i32) -> Self {
        Self { val }
    }
}

impl Default for TestNode {
    fn default() -> Self {
        Self {
            val: Self::DEFAULT_VAL,
        }
    }
}

/// Shared counter handed to tracked fixtures.
///
/// Cloning a `Tally` shares the underlying count.
#[derive(Clone, Debug, Default)]
pub struct Tally(Rc<Cell<usize>>);

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }

    fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }
}

/// Value that records every clone in a shared [`Tally`].
///
/// `Default` builds an untracked instance so that default-filled slots do
/// not disturb the count.
#[derive(Debug, Default)]
pub struct CloneCounter {
    pub value: u32,
    tally: Option<Tally>,
}

impl CloneCounter {
    pub fn new(value: u32, tally: &Tally) -> Self {
        Self {
            value,
            tally: Some(tally.clone()),
        }
    }
}

impl Clone for CloneCounter {
    fn clone(&self) -> Self {
        if let Some(tally) = &self.tally {
            tally.bump();
        }
        Self {
            value: self.value,
            tally: self.tally.clone(),
        }
    }
}

impl PartialEq for CloneCounter {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Value that records its own drop in a shared [`Tally`].
///
/// `Default` builds an untracked instance, so only values created with
/// [`DropCounter::new`] (and their clones) are counted.
#[derive(Clone, Debug, Default)]
pub struct DropCounter {
    pub id: usize,
    tally: Option<Tally>,
}

impl DropCounter {
    pub fn new(id: usize, tally: &Tally) -> Self {
        Self {
            id,
            tally: Some(tally.clone()),
        }
    }

    /// `true` for instances created with [`DropCounter::new`].
    pub fn is_tracked(&self) -> bool {
        self.tally.is_some()
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        if let Some(tally) = &self.tally {
            tally.bump();
        }
    }
}
