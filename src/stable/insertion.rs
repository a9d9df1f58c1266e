use std::cmp::Ordering;

use crate::algorithm::{AlgorithmInfo, AlgorithmKind};
use crate::comparator::Comparator;

pub static INFO: AlgorithmInfo = AlgorithmInfo {
    kind: AlgorithmKind::Insertion,
    stable: true,
    best_case: "Ω(n)",
    average_case: "θ(n^2)",
    worst_case: "O(n^2)",
    worst_case_space: "O(1)",
};

sort_impl!(InsertionSort);

pub fn sort_by<T, F>(v: &mut [T], cmp: &mut Comparator<F>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..v.len() {
        // Shift v[i] left through the sorted prefix.
        let mut j = i;
        while j > 0 && cmp.is_greater(&v[j - 1], &v[j]) {
            cmp.swap(v, j - 1, j);
            j -= 1;
        }
    }
}
