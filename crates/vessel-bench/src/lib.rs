//! Benchmark workloads for the Vessel dynamic array.
//!
//! Each builder produces a populated array of a fixed size so benchmarks
//! measure the operation under test rather than setup:
//!
//! - [`sequential`]: `0..len` pushed one at a time (growth-policy capacity).
//! - [`presized`]: `len` default elements from sized construction.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use vessel::DynArray;

/// Element counts used across the benchmark suite.
pub const SIZES: [usize; 3] = [100, 1_000, 10_000];

/// An array holding `0..len`, built by repeated `push_back`.
pub fn sequential(len: usize) -> DynArray<u64> {
    let mut v = DynArray::new();
    for i in 0..len as u64 {
        v.push_back(i);
    }
    v
}

/// An array of `len` zeros from sized construction.
pub fn presized(len: usize) -> DynArray<u64> {
    DynArray::with_len(len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_holds_indices() {
        let v = sequential(30);
        assert_eq!(v.len(), 30);
        assert_eq!(v.capacity(), 56);
        assert_eq!(v[29], 29);
    }

    #[test]
    fn presized_capacity_is_double() {
        let v = presized(100);
        assert_eq!(v.len(), 100);
        assert_eq!(v.capacity(), 200);
    }
}
