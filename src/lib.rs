//! # `rangekit` - Range Aggregation Tree Toolkit
//!
//! Array-indexed trees for range aggregation over fixed-size integer
//! sequences: a Fenwick tree for prefix sums and a sum segment tree for
//! range queries and updates.
//!
//! ## Structures
//!
//! 1. **Fenwick Tree** ([`FenwickTree`]):
//!    - Cumulative sums over the 1-based index domain `[1, n]`
//!    - O(log n) point update and prefix query via lowest-set-bit jumps
//!
//! 2. **Segment Tree** ([`SegmentTree`]):
//!    - Sum aggregates over the 0-based leaf range `[0, n - 1]`
//!    - O(log n) point assignment and range-sum query
//!    - Pointwise range add that keeps the caller's backing sequence and
//!      the tree's aggregates in sync
//!
//! 3. **Inversion counting** ([`count_inversions`]):
//!    - O(n log n) scan composing a transient [`FenwickTree`] of value
//!      frequencies
//!
//! ## Design
//!
//! Both trees have a fixed size chosen at construction and never resize.
//! They are plain single-threaded values: no interior mutability, no
//! locking. Concurrent callers need either independent instances or
//! external synchronization.
//!
//! Invalid inputs (zero capacity, out-of-domain indices, mismatched
//! sequence lengths, non-positive inversion-count elements) fail fast with
//! [`Error`]; there is no recovery path.
//!
//! ## Example
//!
//! ```
//! use rangekit::{count_inversions, SegmentTree};
//!
//! let mut values = vec![1i64, 3, 5, 7, 9, 11];
//! let mut tree = SegmentTree::from_slice(&values)?;
//!
//! tree.range_add(1, 4, 10, &mut values)?;
//! assert_eq!(values, vec![1, 13, 15, 17, 19, 11]);
//! assert_eq!(tree.query(1, 4), 13 + 15 + 17 + 19);
//!
//! assert_eq!(count_inversions(&[8i64, 4, 2, 1])?, 6);
//! # Ok::<(), rangekit::Error>(())
//! ```

pub mod error;
pub mod fenwick_tree;
pub mod segment_tree;

pub use error::Error;
pub use fenwick_tree::FenwickTree;
pub use segment_tree::{count_inversions, SegmentTree};
