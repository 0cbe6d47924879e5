//! Walkthrough of the crate's operation set: build a sum segment tree,
//! apply a range add that mutates the backing sequence, and count
//! inversions in a second sequence.

use anyhow::Result;
use rangekit::{count_inversions, SegmentTree};

fn main() -> Result<()> {
    let mut values = vec![1i64, 3, 5, 7, 9, 11];
    let mut tree = SegmentTree::from_slice(&values)?;

    println!("Original array: {:?}", values);

    tree.range_add(1, 4, 10, &mut values)?;
    println!("Updated array: {:?}", values);
    println!("Sum of updated range: {}", tree.query(1, 4));

    let inversions = count_inversions(&[8i64, 4, 2, 1])?;
    println!("Inversion count: {}", inversions);

    Ok(())
}
