//! Comb sort, bubble sort over a gap that shrinks by `COMB_SHRINK_FACTOR` each pass. Finishes
//! once a pass with gap 1 performs no exchange.

use std::cmp::Ordering;

use crate::algorithm::{AlgorithmInfo, AlgorithmKind};
use crate::comparator::Comparator;
use crate::config::COMB_SHRINK_FACTOR;

pub static INFO: AlgorithmInfo = AlgorithmInfo {
    kind: AlgorithmKind::Comb,
    stable: false,
    best_case: "Ω(n^2/2^p)",
    average_case: "θ(nlog(n))",
    worst_case: "O(n^2)",
    worst_case_space: "O(1)",
};

sort_impl!(CombSort);

pub fn sort_by<T, F>(v: &mut [T], cmp: &mut Comparator<F>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut gap = len as f64;
    let mut swapped = true;

    while gap > 1.0 || swapped {
        gap = (gap / COMB_SHRINK_FACTOR).max(1.0);
        let step = gap as usize;

        swapped = false;
        for i in 0..len.saturating_sub(step) {
            if cmp.is_greater(&v[i], &v[i + step]) {
                cmp.swap(v, i, i + step);
                swapped = true;
            }
        }
    }
}
