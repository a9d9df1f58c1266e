//! Stooge sort. Exists for its famously bad O(n^2.71) complexity.

use std::cmp::Ordering;

use crate::algorithm::{AlgorithmInfo, AlgorithmKind};
use crate::comparator::Comparator;

pub static INFO: AlgorithmInfo = AlgorithmInfo {
    kind: AlgorithmKind::Stooge,
    stable: false,
    best_case: "Ω(n^(log3/log1.5))",
    average_case: "θ(n^(log3/log1.5))",
    worst_case: "O(n^(log3/log1.5))",
    worst_case_space: "O(n)",
};

sort_impl!(StoogeSort);

pub fn sort_by<T, F>(v: &mut [T], cmp: &mut Comparator<F>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    if cmp.is_greater(&v[0], &v[len - 1]) {
        cmp.swap(v, 0, len - 1);
    }

    if len >= 3 {
        // Two thirds, rounded up.
        let third = len / 3;
        sort_by(&mut v[..len - third], cmp);
        sort_by(&mut v[third..], cmp);
        sort_by(&mut v[..len - third], cmp);
    }
}
