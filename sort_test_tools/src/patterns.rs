//! Input patterns for the test suite.
//!
//! Random data comes from the library's own generator seeded with the process seed, so a failing
//! run can be reproduced with `OVERRIDE_SEED`. The structured `i32` patterns cover shapes the
//! generator doesn't produce.

use rand::prelude::*;

use sort_metrics::config::random_init_seed;
use sort_metrics::{ArrayShape, Element, GenerationParameters, Generator};

// --- Public ---

pub fn random<T: Element>(len: usize) -> Vec<T> {
    //     .
    // : . : :
    // :.:::.::

    generated(len, T::MIN, T::MAX, None, ArrayShape::Random)
}

/// Uniform values in `[min, max]`.
pub fn random_uniform<T: Element>(len: usize, min: T, max: T) -> Vec<T> {
    // :.:.:.::

    generated(len, min, max, None, ArrayShape::Random)
}

/// Full range values with one value repeated according to `similarity`.
pub fn random_similar<T: Element>(len: usize, similarity: f64) -> Vec<T> {
    generated(len, T::MIN, T::MAX, Some(similarity), ArrayShape::Random)
}

pub fn shaped<T: Element>(len: usize, shape: ArrayShape) -> Vec<T> {
    generated(len, T::MIN, T::MAX, None, shape)
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random::<i32>(len);
    let chunk_size = (len / saw_count.max(1)).max(1);
    let mut rng = new_rng();

    for chunk in vals.chunks_mut(chunk_size) {
        if rng.gen_bool(0.5) {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random::<i32>(len);

    let (first_half, second_half) = vals.split_at_mut(len / 2);
    first_half.sort();
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

// --- Private ---

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn generated<T: Element>(
    len: usize,
    min: T,
    max: T,
    similarity: Option<f64>,
    shape: ArrayShape,
) -> Vec<T> {
    if len == 0 {
        return Vec::new();
    }

    let params = GenerationParameters {
        size: len,
        min,
        max,
        similarity,
    };

    Generator::with_seed(random_init_seed())
        .generate(&params, shape)
        .unwrap_or_else(|err| panic!("test pattern parameters rejected: {err}"))
        .into_vec()
}
