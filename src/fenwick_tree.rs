//! `FenwickTree` — a Binary Indexed Tree over a fixed 1-based index range.
//!
//! A Fenwick Tree provides efficient calculation and manipulation of the
//! prefix sums of a table of values.
//!
//! Time Complexity:
//! - Update: O(log n)
//! - Prefix Sum: O(log n)
//! - Range Sum: O(log n)
//!
//! Space Complexity: O(n)
//!
//! The public index domain is `[1, capacity]`; slot 0 is a dummy that keeps
//! the lowest-set-bit arithmetic uniform.

use crate::error::Error;
use core::ops::AddAssign;
use num_traits::PrimInt;

/// A Fenwick Tree (Binary Indexed Tree) with a fixed capacity.
///
/// `tree[i]` holds the partial sum for the block implied by the lowest set
/// bit of `i`; the prefix sum for `k` is the sum of `tree[j]` for each `j`
/// reached by repeatedly clearing the lowest set bit starting from `k`.
pub struct FenwickTree<T> {
    /// 1-indexed storage. Index 0 is unused (dummy).
    tree: Vec<T>,
}

impl<T> FenwickTree<T>
where
    T: PrimInt + AddAssign,
{
    /// Creates a zeroed Fenwick Tree over the index domain `[1, capacity]`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity);
        }
        Ok(Self {
            tree: vec![T::zero(); capacity + 1],
        })
    }

    /// Returns the number of addressable slots (excluding the dummy).
    pub fn capacity(&self) -> usize {
        self.tree.len() - 1
    }

    /// Adds `delta` to the slot at 1-based `index`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] unless `1 <= index <= capacity`.
    pub fn update(&mut self, index: usize, delta: T) -> Result<(), Error> {
        let n = self.capacity();
        if index == 0 || index > n {
            return Err(Error::IndexOutOfRange { index, len: n });
        }

        let mut idx = index;
        while idx <= n {
            self.tree[idx] += delta;
            idx += idx & (!idx + 1); // isolate lowest set bit
        }
        Ok(())
    }

    /// Computes the sum of all deltas applied at indices `<= index`.
    ///
    /// `query(0)` is the empty prefix and returns zero.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if `index > capacity`.
    pub fn query(&self, index: usize) -> Result<T, Error> {
        let n = self.capacity();
        if index > n {
            return Err(Error::IndexOutOfRange { index, len: n });
        }

        let mut sum = T::zero();
        let mut idx = index;
        while idx > 0 {
            sum += self.tree[idx];
            idx -= idx & (!idx + 1);
        }
        Ok(sum)
    }

    /// Computes the sum over the inclusive 1-based range `[left, right]`.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] if the range leaves `[1, capacity]`
    /// or is reversed.
    pub fn range_sum(&self, left: usize, right: usize) -> Result<T, Error> {
        let n = self.capacity();
        if left == 0 || left > right {
            return Err(Error::IndexOutOfRange { index: left, len: n });
        }
        Ok(self.query(right)? - self.query(left - 1)?)
    }
}
