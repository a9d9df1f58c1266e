//! Adjacent exchange passes, each pass bubbles the largest remaining element to the end.

use std::cmp::Ordering;

use crate::algorithm::{AlgorithmInfo, AlgorithmKind};
use crate::comparator::Comparator;

pub static INFO: AlgorithmInfo = AlgorithmInfo {
    kind: AlgorithmKind::Bubble,
    stable: true,
    best_case: "Ω(n)",
    average_case: "θ(n^2)",
    worst_case: "O(n^2)",
    worst_case_space: "O(1)",
};

sort_impl!(BubbleSort);

pub fn sort_by<T, F>(v: &mut [T], cmp: &mut Comparator<F>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut end = v.len();

    while end > 1 {
        // Everything after the last exchange is already in place.
        let mut last_swap = 0;

        for i in 1..end {
            if cmp.is_greater(&v[i - 1], &v[i]) {
                cmp.swap(v, i - 1, i);
                last_swap = i;
            }
        }

        end = last_swap;
    }
}
