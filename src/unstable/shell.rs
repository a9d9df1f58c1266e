//! Shell sort with the halving gap sequence n/2, n/4, ..., 1. Every shift and every final
//! placement counts as a swap.

use std::cmp::Ordering;

use crate::algorithm::{AlgorithmInfo, AlgorithmKind};
use crate::comparator::Comparator;

pub static INFO: AlgorithmInfo = AlgorithmInfo {
    kind: AlgorithmKind::Shell,
    stable: false,
    best_case: "Ω(nlog(n))",
    average_case: "θ(nlog(n))",
    worst_case: "O(n^2)",
    worst_case_space: "O(1)",
};

sort_impl!(ShellSort);

pub fn sort_by<T, F>(v: &mut [T], cmp: &mut Comparator<F>)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    let mut gap = len / 2;

    while gap > 0 {
        for i in gap..len {
            let current = v[i].clone();
            let mut k = i;

            while k >= gap && cmp.is_greater(&v[k - gap], &current) {
                v[k] = v[k - gap].clone();
                cmp.count_placement();
                k -= gap;
            }

            v[k] = current;
            cmp.count_placement();
        }

        gap /= 2;
    }
}
