use rand::{
    distributions::uniform::{SampleRange, SampleUniform},
    prelude::*,
};
use std::{array, cell::RefCell, iter};

fn array_of<T, const N: usize>(mut randomizer: impl FnMut() -> T) -> [T; N] {
    array::from_fn(|_| randomizer())
}

pub fn ten_of<T>(randomizer: impl FnMut() -> T) -> [T; 10] {
    array_of(randomizer)
}

pub fn hundred_of<T>(randomizer: impl FnMut() -> T) -> [T; 100] {
    array_of(randomizer)
}

pub fn vec_of<T>(len: usize, randomizer: impl FnMut() -> T) -> Vec<T> {
    iter::repeat_with(randomizer).take(len).collect()
}

thread_local! {
    static RNG: RefCell<ThreadRng> = RefCell::new(thread_rng());
}

/// Small enough that sums of a few thousand never overflow an `i32`.
pub fn small_int() -> i32 {
    range(-1000..=1000)
}

pub fn range<T: SampleUniform, R: SampleRange<T>>(range: R) -> T {
    RNG.with_borrow_mut(|rng| rng.gen_range(range))
}
