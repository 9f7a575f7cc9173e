//! Provides a set of patterns useful for testing and benchmarking sorting algorithms.
//! Currently limited to i32 values.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::distributions::{Distribution, Uniform};
use rand::prelude::*;

use once_cell::sync::OnceCell;

use crate::error::SetupError;

// --- Public ---

/// Draws `size` values uniformly from `[0, size)` out of `rng`.
///
/// This is the dataset every algorithm of a benchmark configuration sorts a copy of.
pub fn generate_random_sequence<R>(size: usize, rng: &mut R) -> Result<Vec<i32>, SetupError>
where
    R: Rng + ?Sized,
{
    // :.:.:.::
    if size == 0 {
        return Ok(Vec::new());
    }

    // `size - 1` is the largest value that gets drawn.
    let max_val = i32::try_from(size - 1).map_err(|_| SetupError::SizeOutOfRange { size })?;
    let dist = Uniform::new_inclusive(0, max_val);

    Ok((0..size).map(|_| dist.sample(rng)).collect())
}

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(size)
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_seed();

    // Abstracting over ranges in Rust :(
    let dist: Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect::<Vec<_>>()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(size);
    let chunks_size = (size / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((size / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(size);

    let first_half = &mut vals[0..(size / 2)];
    first_half.sort();

    let second_half = &mut vals[(size / 2)..size];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// Returns the seed for the next random pattern.
///
/// By default this is the same value for the whole process, so that a failure can be reproduced
/// from the printed seed. After `disable_fixed_seed` every call returns a fresh seed.
pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
    } else {
        thread_rng().gen()
    }
}

/// A generator seeded from `random_init_seed`.
pub fn new_seed() -> StdRng {
    SeedableRng::seed_from_u64(random_init_seed())
}

// --- Private ---

fn random_vec(size: usize) -> Vec<i32> {
    let mut rng = new_seed();

    (0..size).map(|_| rng.gen::<i32>()).collect()
}
