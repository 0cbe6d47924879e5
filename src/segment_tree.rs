//! `SegmentTree` — an array-backed sum segment tree over a fixed leaf range.
//!
//! The tree keeps sum aggregates for a sequence of `n` integers, addressed by
//! the 0-based leaf range `[0, n - 1]`.
//!
//! Time Complexity:
//! - Build: O(n)
//! - Point Update: O(log n)
//! - Range Query: O(log n)
//! - Range Add: O((r - l + 1) * log n), one root-to-leaf pass per leaf
//!
//! Space Complexity: O(n) (`4n` slots, a safe bound for the `2i+1`/`2i+2`
//! child layout over arbitrary leaf counts).
//!
//! Range add deliberately walks every leaf in range rather than using lazy
//! propagation: the operation also mutates the caller's backing sequence
//! element by element, keeping sequence and aggregates in sync.

use crate::error::Error;
use crate::fenwick_tree::FenwickTree;
use core::ops::AddAssign;
use num_traits::PrimInt;

/// A sum segment tree with root at node 0 and children at `2i+1` / `2i+2`.
///
/// Nodes cover closed index ranges; an internal node covering `[start, end]`
/// splits at `mid = start + (end - start) / 2`, and its aggregate equals the
/// sum of its children's aggregates.
pub struct SegmentTree<T> {
    len: usize,
    tree: Vec<T>,
}

impl<T> SegmentTree<T>
where
    T: PrimInt + AddAssign,
{
    /// Creates a zeroed tree sized for `len` leaves. Aggregates are all zero
    /// until [`build`](Self::build) is called.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `len` is zero.
    pub fn new(len: usize) -> Result<Self, Error> {
        if len == 0 {
            return Err(Error::InvalidCapacity);
        }
        Ok(Self {
            len,
            tree: vec![T::zero(); 4 * len],
        })
    }

    /// Creates a tree and populates it from `values` in one step.
    ///
    /// # Errors
    /// Returns [`Error::InvalidCapacity`] if `values` is empty.
    pub fn from_slice(values: &[T]) -> Result<Self, Error> {
        let mut st = Self::new(values.len())?;
        st.build(values)?;
        Ok(st)
    }

    /// Returns the number of leaves.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Populates every aggregate from `values`. Calling it again recomputes
    /// from the then-current input, so a rebuild is just another `build`.
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] unless `values.len()` equals the
    /// tree's length.
    pub fn build(&mut self, values: &[T]) -> Result<(), Error> {
        if values.len() != self.len {
            return Err(Error::LengthMismatch {
                expected: self.len,
                actual: values.len(),
            });
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len, "building aggregates");
        self.build_node(0, 0, self.len - 1, values);
        Ok(())
    }

    fn build_node(&mut self, node: usize, start: usize, end: usize, values: &[T]) {
        if start == end {
            self.tree[node] = values[start];
            return;
        }
        let mid = start + (end - start) / 2;
        self.build_node(2 * node + 1, start, mid, values);
        self.build_node(2 * node + 2, mid + 1, end, values);
        self.tree[node] = self.tree[2 * node + 1] + self.tree[2 * node + 2];
    }

    /// Assigns `value` to the leaf at 0-based `index` and recomputes the
    /// aggregates along the root-to-leaf path.
    ///
    /// # Errors
    /// Returns [`Error::IndexOutOfRange`] unless `index < len`.
    pub fn update(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.update_node(0, 0, self.len - 1, index, value);
        Ok(())
    }

    fn update_node(&mut self, node: usize, start: usize, end: usize, index: usize, value: T) {
        if start == end {
            self.tree[node] = value;
            return;
        }
        let mid = start + (end - start) / 2;
        if index <= mid {
            self.update_node(2 * node + 1, start, mid, index, value);
        } else {
            self.update_node(2 * node + 2, mid + 1, end, index, value);
        }
        // Pull up
        self.tree[node] = self.tree[2 * node + 1] + self.tree[2 * node + 2];
    }

    /// Returns the sum over the closed range `[left, right]` intersected with
    /// `[0, len - 1]`. Disjoint or reversed ranges contribute zero, so the
    /// query is total.
    pub fn query(&self, left: usize, right: usize) -> T {
        self.query_node(0, 0, self.len - 1, left, right)
    }

    fn query_node(&self, node: usize, start: usize, end: usize, left: usize, right: usize) -> T {
        if right < start || left > end {
            return T::zero();
        }
        if left <= start && right >= end {
            return self.tree[node];
        }
        let mid = start + (end - start) / 2;
        self.query_node(2 * node + 1, start, mid, left, right)
            + self.query_node(2 * node + 2, mid + 1, end, left, right)
    }

    /// Adds `delta` to every element of `values` whose index lies in
    /// `[left, right] ∩ [0, len - 1]`, keeping leaf and internal aggregates
    /// in sync with the mutated sequence. Subtrees disjoint from the range
    /// are pruned. Returns the same borrow it was given so the mutation is
    /// visible at the call site.
    ///
    /// # Errors
    /// Returns [`Error::LengthMismatch`] unless `values.len()` equals the
    /// tree's length.
    pub fn range_add<'a>(
        &mut self,
        left: usize,
        right: usize,
        delta: T,
        values: &'a mut [T],
    ) -> Result<&'a mut [T], Error> {
        if values.len() != self.len {
            return Err(Error::LengthMismatch {
                expected: self.len,
                actual: values.len(),
            });
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(left, right, "applying range add");
        self.range_add_node(0, 0, self.len - 1, left, right, delta, values);
        Ok(values)
    }

    #[allow(clippy::too_many_arguments)]
    fn range_add_node(
        &mut self,
        node: usize,
        start: usize,
        end: usize,
        left: usize,
        right: usize,
        delta: T,
        values: &mut [T],
    ) {
        if right < start || left > end {
            return;
        }
        if start == end {
            // A leaf that survived the disjointness check lies in range.
            values[start] += delta;
            self.tree[node] += delta;
            return;
        }
        let mid = start + (end - start) / 2;
        self.range_add_node(2 * node + 1, start, mid, left, right, delta, values);
        self.range_add_node(2 * node + 2, mid + 1, end, left, right, delta, values);
        self.tree[node] = self.tree[2 * node + 1] + self.tree[2 * node + 2];
    }
}

/// Counts pairs `(i, j)` with `i < j` and `values[i] > values[j]`.
///
/// Scans from the last element to the first over a transient [`FenwickTree`]
/// of per-value frequencies sized to `max(values)`: for each element, the
/// prefix sum below it counts the already-seen smaller elements, each of
/// which sits to its right. O(n log n).
///
/// # Errors
/// Returns [`Error::InvalidCapacity`] if `values` is empty and
/// [`Error::NonPositiveValue`] if any element is below 1 (the frequency
/// index domain starts at 1).
pub fn count_inversions<T>(values: &[T]) -> Result<u64, Error>
where
    T: PrimInt + AddAssign,
{
    if values.is_empty() {
        return Err(Error::InvalidCapacity);
    }

    let mut ranks = Vec::with_capacity(values.len());
    let mut max = 0usize;
    for &v in values {
        if v < T::one() {
            return Err(Error::NonPositiveValue);
        }
        let rank = v.to_usize().ok_or(Error::InvalidCapacity)?;
        max = max.max(rank);
        ranks.push(rank);
    }

    let mut seen = FenwickTree::<u64>::with_capacity(max)?;
    let mut inversions = 0u64;
    for &rank in ranks.iter().rev() {
        inversions += seen.query(rank - 1)?;
        seen.update(rank, 1)?;
    }
    Ok(inversions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_tree_sum() {
        let data = vec![1i64, 2, 3, 4, 5, 6, 7, 8];
        let st = SegmentTree::from_slice(&data).unwrap();

        assert_eq!(st.query(0, 7), 36);
        assert_eq!(st.query(0, 3), 10);
        assert_eq!(st.query(4, 7), 26);
        for (i, &v) in data.iter().enumerate() {
            assert_eq!(st.query(i, i), v);
        }
    }

    #[test]
    fn test_segment_tree_point_update() {
        let mut st = SegmentTree::from_slice(&[1i64, 2, 3, 4]).unwrap();
        st.update(0, 10).unwrap();
        assert_eq!(st.query(0, 3), 19);
        assert_eq!(st.query(0, 0), 10);
        assert_eq!(st.query(1, 3), 9);
    }

    #[test]
    fn test_segment_tree_rebuild() {
        let mut st = SegmentTree::new(3).unwrap();
        assert_eq!(st.query(0, 2), 0);
        st.build(&[5i64, 5, 5]).unwrap();
        assert_eq!(st.query(0, 2), 15);
        st.build(&[1i64, 1, 1]).unwrap();
        assert_eq!(st.query(0, 2), 3);
    }

    #[test]
    fn test_range_add_updates_sequence_and_aggregates() {
        let mut values = vec![1i64, 3, 5, 7, 9, 11];
        let mut st = SegmentTree::from_slice(&values).unwrap();

        let updated = st.range_add(1, 4, 10, &mut values).unwrap();
        assert_eq!(updated, &[1, 13, 15, 17, 19, 11]);
        assert_eq!(st.query(1, 4), 13 + 15 + 17 + 19);
        assert_eq!(st.query(0, 5), 1 + 13 + 15 + 17 + 19 + 11);
    }

    #[test]
    fn test_range_add_clamps_to_leaf_range() {
        let mut values = vec![2i64, 2, 2];
        let mut st = SegmentTree::from_slice(&values).unwrap();
        st.range_add(1, 100, 1, &mut values).unwrap();
        assert_eq!(values, vec![2, 3, 3]);
        assert_eq!(st.query(0, 2), 8);
    }

    #[test]
    fn test_query_boundaries() {
        let st = SegmentTree::from_slice(&[4i64, 5, 6]).unwrap();
        // Disjoint and reversed ranges contribute nothing.
        assert_eq!(st.query(3, 10), 0);
        assert_eq!(st.query(2, 1), 0);
        // Out-of-range tails are clamped.
        assert_eq!(st.query(1, 9), 11);
    }

    #[test]
    fn test_query_decomposes() {
        let st = SegmentTree::from_slice(&[3i64, 1, 4, 1, 5, 9, 2, 6]).unwrap();
        for mid in 0..7 {
            assert_eq!(st.query(0, 7), st.query(0, mid) + st.query(mid + 1, 7));
        }
    }

    #[test]
    fn test_single_leaf() {
        let st = SegmentTree::from_slice(&[42i64]).unwrap();
        assert_eq!(st.query(0, 0), 42);
        assert_eq!(count_inversions(&[42i64]).unwrap(), 0);
    }

    #[test]
    fn test_errors() {
        assert_eq!(SegmentTree::<i64>::new(0).err(), Some(Error::InvalidCapacity));

        let mut st = SegmentTree::<i64>::new(3).unwrap();
        assert_eq!(
            st.update(3, 1),
            Err(Error::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(
            st.build(&[1, 2]),
            Err(Error::LengthMismatch {
                expected: 3,
                actual: 2
            })
        );
        let mut short = vec![0i64; 2];
        assert!(st.range_add(0, 1, 1, &mut short).is_err());
    }

    #[test]
    fn test_count_inversions() {
        assert_eq!(count_inversions(&[8i64, 4, 2, 1]).unwrap(), 6);
        assert_eq!(count_inversions(&[1i64, 2, 3, 4]).unwrap(), 0);
        assert_eq!(count_inversions(&[4i64, 3, 2, 1]).unwrap(), 6);
        assert_eq!(count_inversions(&[2i64, 1, 2]).unwrap(), 1);
    }

    #[test]
    fn test_count_inversions_rejects_bad_input() {
        assert_eq!(count_inversions::<i64>(&[]).err(), Some(Error::InvalidCapacity));
        assert_eq!(
            count_inversions(&[3i64, 0, 1]).err(),
            Some(Error::NonPositiveValue)
        );
        assert_eq!(
            count_inversions(&[-1i64, 5]).err(),
            Some(Error::NonPositiveValue)
        );
    }
}
