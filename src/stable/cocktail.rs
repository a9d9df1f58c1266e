//! Bidirectional bubble sort, alternating forward and backward sweeps with shrinking bounds.

use std::cmp::Ordering;

use crate::algorithm::{AlgorithmInfo, AlgorithmKind};
use crate::comparator::Comparator;

pub static INFO: AlgorithmInfo = AlgorithmInfo {
    kind: AlgorithmKind::Cocktail,
    stable: true,
    best_case: "Ω(n)",
    average_case: "θ(n^2)",
    worst_case: "O(n^2)",
    worst_case_space: "O(1)",
};

sort_impl!(CocktailSort);

pub fn sort_by<T, F>(v: &mut [T], cmp: &mut Comparator<F>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        return;
    }

    let mut left = 0;
    let mut right = v.len() - 1;

    while left < right {
        for i in left..right {
            if cmp.is_greater(&v[i], &v[i + 1]) {
                cmp.swap(v, i, i + 1);
            }
        }
        right -= 1;

        for i in (left + 1..=right).rev() {
            if cmp.is_greater(&v[i - 1], &v[i]) {
                cmp.swap(v, i - 1, i);
            }
        }
        left += 1;
    }
}
