//! Bogo sort. Shuffles until the slice happens to be sorted.
//!
//! The expected number of shuffles grows factorially and the worst case is unbounded. Only the
//! sortedness check compares, shuffling only swaps. Callers that can't guarantee a tiny input
//! should set a shuffle cap or hand in a [`CancelToken`].

use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use log::warn;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::algorithm::{AlgorithmInfo, AlgorithmKind, Sort};
use crate::comparator::Comparator;
use crate::config::{random_init_seed, BOGO_WARN_LEN};
use crate::error::{Error, Result};

pub static INFO: AlgorithmInfo = AlgorithmInfo {
    kind: AlgorithmKind::Bogo,
    stable: false,
    best_case: "Ω(n)",
    average_case: "θ((n+1)!)",
    worst_case: "O(∞)",
    worst_case_space: "O(1)",
};

/// Shared flag to stop a running Bogo sort from another thread. Checked before every shuffle.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, AtomicOrdering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(AtomicOrdering::Acquire)
    }
}

#[derive(Clone, Debug)]
pub struct BogoSort {
    rng: StdRng,
    max_shuffles: Option<u64>,
    cancel: Option<CancelToken>,
}

impl Default for BogoSort {
    fn default() -> Self {
        Self::with_seed(random_init_seed())
    }
}

impl BogoSort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_shuffles: None,
            cancel: None,
        }
    }

    /// Fails the run with [`Error::Cancelled`] once `max` shuffles didn't produce a sorted slice.
    pub fn with_max_shuffles(mut self, max: u64) -> Self {
        self.max_shuffles = Some(max);
        self
    }

    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    fn should_stop(&self, shuffles: u64) -> bool {
        let cancelled = self.cancel.as_ref().is_some_and(CancelToken::is_cancelled);
        cancelled || self.max_shuffles.is_some_and(|max| shuffles >= max)
    }
}

impl Sort for BogoSort {
    fn info(&self) -> &'static AlgorithmInfo {
        &INFO
    }

    fn sort_by<T, F>(&mut self, v: &mut [T], cmp: &mut Comparator<F>) -> Result<()>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        if v.len() > BOGO_WARN_LEN {
            warn!(
                "bogo_sort on {} elements, expect roughly {}! shuffles",
                v.len(),
                v.len() + 1
            );
        }

        let mut shuffles = 0;

        while !cmp.is_sorted(v) {
            if self.should_stop(shuffles) {
                warn!("bogo_sort stopped after {shuffles} shuffles");
                return Err(Error::Cancelled { shuffles });
            }

            shuffle(v, &mut self.rng, cmp);
            shuffles += 1;
        }

        Ok(())
    }
}

/// Uniform Fisher-Yates permutation, every exchange counts as a swap.
fn shuffle<T, F, R: Rng>(v: &mut [T], rng: &mut R, cmp: &mut Comparator<F>) {
    let mut n = v.len();

    while n > 1 {
        n -= 1;
        let k = rng.gen_range(0..=n);
        cmp.swap(v, k, n);
    }
}
