//! Exhaustive and divide-and-conquer solutions to the maximum subarray
//! problem, and an exhaustive solution to the subset sum problem.

pub mod error;
pub mod rand;
pub mod span;

#[cfg(feature = "max_subarray")]
pub mod max_subarray;
#[cfg(feature = "subset_sum")]
pub mod subset_sum;

pub use error::InputError;
pub use span::{Elem, Span};

#[cfg(feature = "max_subarray")]
pub use max_subarray::{max_subarray_divide_and_conquer, max_subarray_exhaustive};
#[cfg(feature = "subset_sum")]
pub use subset_sum::subset_sum_exhaustive;
