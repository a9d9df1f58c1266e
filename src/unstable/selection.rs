use std::cmp::Ordering;

use crate::algorithm::{AlgorithmInfo, AlgorithmKind};
use crate::comparator::Comparator;

pub static INFO: AlgorithmInfo = AlgorithmInfo {
    kind: AlgorithmKind::Selection,
    stable: false,
    best_case: "Ω(n^2)",
    average_case: "θ(n^2)",
    worst_case: "O(n^2)",
    worst_case_space: "O(1)",
};

sort_impl!(SelectionSort);

pub fn sort_by<T, F>(v: &mut [T], cmp: &mut Comparator<F>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in (i + 1)..len {
            if cmp.is_less(&v[j], &v[min]) {
                min = j;
            }
        }

        if min != i {
            cmp.swap(v, min, i);
        }
    }
}
