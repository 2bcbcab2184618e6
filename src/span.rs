use num_traits::{PrimInt, Signed};
use std::{fmt, ops::Range};

/// Fixed-width signed integers. Sums are not overflow-checked.
pub trait Elem: PrimInt + Signed + fmt::Debug {}

impl<T: PrimInt + Signed + fmt::Debug> Elem for T {}

pub(crate) fn sum_of<T: Elem>(items: &[T]) -> T {
    items.iter().fold(T::zero(), |acc, &item| acc + item)
}

/// A non-empty half-open range `[start, end)` of positions in some sequence,
/// together with the sum of the elements it covers.
///
/// A span only stores positions, it does not borrow the sequence it was
/// computed from. Two spans are equal when their positions are equal; the
/// sum is derived data and is not compared.
#[derive(Clone, Copy, Debug)]
pub struct Span<T> {
    start: usize,
    end: usize,
    sum: T,
}

impl<T: Elem> Span<T> {
    /// Builds a span whose sum is already known. O(1).
    ///
    /// Panics if `start >= end`.
    pub fn new(start: usize, end: usize, sum: T) -> Self {
        assert!(start < end, "span [{start}, {end}) is empty");
        Self { start, end, sum }
    }

    /// Builds a span over `seq[start..end]`, summing the covered elements.
    /// O(end - start).
    ///
    /// Panics if `start >= end` or `end > seq.len()`.
    pub fn from_slice(start: usize, end: usize, seq: &[T]) -> Self {
        assert!(start < end, "span [{start}, {end}) is empty");
        assert!(
            end <= seq.len(),
            "span end {end} is past sequence length {}",
            seq.len()
        );
        Self::new(start, end, sum_of(&seq[start..end]))
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn sum(&self) -> T {
        self.sum
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The covered elements of `seq`, which must be the sequence (or one at
    /// least as long) the span was computed from.
    pub fn slice_of<'a>(&self, seq: &'a [T]) -> &'a [T] {
        &seq[self.range()]
    }
}

impl<T> PartialEq for Span<T> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl<T> Eq for Span<T> {}

impl<T: fmt::Display> fmt::Display for Span<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Span [{}, {}), size={}, sum={}",
            self.start,
            self.end,
            self.end - self.start,
            self.sum
        )
    }
}
