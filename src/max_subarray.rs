use log::{debug, trace};

use crate::{
    error::{non_empty, InputError},
    span::{sum_of, Elem, Span},
};

pub trait MaxSubarray<T> {
    /// The non-empty contiguous span of `seq` with the largest sum.
    fn max_subarray(&self, seq: &[T]) -> Result<Span<T>, InputError>;
}

/// Re-sums every candidate and the incumbent on each comparison. O(n³).
///
/// Ties go to the first span found, scanning starts then ends in order.
pub struct BruteForce;

impl<T: Elem> MaxSubarray<T> for BruteForce {
    fn max_subarray(&self, seq: &[T]) -> Result<Span<T>, InputError> {
        non_empty(seq)?;
        debug!("brute force max subarray, n={}", seq.len());

        let n = seq.len();
        let (mut best_start, mut best_end) = (0, 1);
        for i in 0..n {
            for j in i + 1..=n {
                if sum_of(&seq[i..j]) > sum_of(&seq[best_start..best_end]) {
                    (best_start, best_end) = (i, j);
                }
            }
        }
        Ok(Span::from_slice(best_start, best_end, seq))
    }
}

/// Splits at the midpoint, solves both halves, and merges with the best span
/// crossing the split. O(n log n) time, O(log n) recursion depth.
pub struct DivideAndConquer;

impl<T: Elem> MaxSubarray<T> for DivideAndConquer {
    fn max_subarray(&self, seq: &[T]) -> Result<Span<T>, InputError> {
        non_empty(seq)?;
        debug!("divide and conquer max subarray, n={}", seq.len());
        Ok(recurse(seq, 0, seq.len() - 1))
    }
}

/// `low` and `high` are inclusive.
fn recurse<T: Elem>(seq: &[T], low: usize, high: usize) -> Span<T> {
    if low == high {
        return Span::new(low, low + 1, seq[low]);
    }
    let middle = low + (high - low) / 2;
    let left = recurse(seq, low, middle);
    let right = recurse(seq, middle + 1, high);
    let cross = crossing(seq, low, middle, high);

    // a crossing sum that only ties is never better than the larger half
    if cross.sum() > left.sum() && cross.sum() > right.sum() {
        cross
    } else if left.sum() > right.sum() {
        left
    } else {
        right
    }
}

/// The largest-sum span of `seq[low..=high]` that contains both `middle` and
/// `middle + 1`. Requires `low <= middle < high < seq.len()`. O(high - low).
///
/// Within each half, the span nearest the split wins ties.
pub fn crossing<T: Elem>(seq: &[T], low: usize, middle: usize, high: usize) -> Span<T> {
    assert!(
        low <= middle && middle < high && high < seq.len(),
        "invalid crossing bounds {low}..={middle}..={high} for length {}",
        seq.len()
    );

    let (mut left_sum, mut start) = (seq[middle], middle);
    let mut running = left_sum;
    for (i, &item) in seq.iter().enumerate().take(middle).skip(low).rev() {
        running = running + item;
        if running > left_sum {
            (left_sum, start) = (running, i);
        }
    }

    let (mut right_sum, mut last) = (seq[middle + 1], middle + 1);
    let mut running = right_sum;
    for (j, &item) in seq.iter().enumerate().take(high + 1).skip(middle + 2) {
        running = running + item;
        if running > right_sum {
            (right_sum, last) = (running, j);
        }
    }

    trace!("crossing {low}..={middle}..={high}: [{start}, {})", last + 1);
    Span::new(start, last + 1, left_sum + right_sum)
}

pub fn max_subarray_exhaustive<T: Elem>(seq: &[T]) -> Result<Span<T>, InputError> {
    BruteForce.max_subarray(seq)
}

pub fn max_subarray_divide_and_conquer<T: Elem>(seq: &[T]) -> Result<Span<T>, InputError> {
    DivideAndConquer.max_subarray(seq)
}
