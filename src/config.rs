use std::env;
use std::str::FromStr;
use std::sync::Mutex;

use once_cell::sync::OnceCell;
use rand::prelude::*;

/// Largest length a generated or doubled array may have.
pub const MAX_CAPACITY: usize = 2_146_435_071;

/// Length of `TypedArray::default`.
pub const DEFAULT_SIZE: usize = 10;

/// Exclusive lower bound of the similarity expectancy.
pub const MIN_SIMILARITY: f64 = 0.1;

/// Inclusive upper bound of the similarity expectancy.
pub const MAX_SIMILARITY: f64 = 1.0;

/// Gap shrink factor used by comb sort.
pub const COMB_SHRINK_FACTOR: f64 = 1.247330950103979;

/// Bogo sort logs a warning above this length.
pub const BOGO_WARN_LEN: usize = 10;

/// Overwrites the default behavior so that each new generator yields new random values.
///
/// By default two generators created in the same process produce the same values. For benchmarks
/// it's advised to call this function.
pub fn use_random_seed_each_time() {
    let (seed_type, _) = get_or_init_seed_type_and_value();
    if seed_type == SeedType::ExternalOverride {
        panic!("Using use_random_seed_each_time conflicts with the external seed override.");
    }

    *SEED_TYPE_AND_VALUE.lock().unwrap() = Some((SeedType::RandomEachTime, 0));
}

/// The seed new generators start from. Set `OVERRIDE_SEED` to reproduce a run.
pub fn random_init_seed() -> u64 {
    get_or_init_seed_type_and_value().1
}

// --- Private ---

#[derive(Copy, Clone, PartialEq, Eq)]
enum SeedType {
    RandomEachTime,
    RandomOncePerProcess,
    ExternalOverride,
}

static SEED_TYPE_AND_VALUE: Mutex<Option<(SeedType, u64)>> = Mutex::new(None);

fn override_seed() -> Option<u64> {
    static OVERRIDE: OnceCell<Option<u64>> = OnceCell::new();

    *OVERRIDE.get_or_init(|| {
        env::var("OVERRIDE_SEED").ok().map(|seed| {
            u64::from_str(seed.trim())
                .unwrap_or_else(|_| panic!("OVERRIDE_SEED is not a valid u64: {seed}"))
        })
    })
}

fn get_or_init_seed_type_and_value() -> (SeedType, u64) {
    let (seed_type, seed_val) = *SEED_TYPE_AND_VALUE.lock().unwrap().get_or_insert_with(|| {
        if let Some(seed) = override_seed() {
            (SeedType::ExternalOverride, seed)
        } else {
            (SeedType::RandomOncePerProcess, thread_rng().gen())
        }
    });

    if seed_type == SeedType::RandomEachTime {
        (SeedType::RandomEachTime, thread_rng().gen())
    } else {
        (seed_type, seed_val)
    }
}
