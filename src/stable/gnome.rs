//! Gnome sort. Walks forward and on an inversion swaps and steps back, `j` remembers where to
//! resume once the element has found its place.

use std::cmp::Ordering;

use crate::algorithm::{AlgorithmInfo, AlgorithmKind};
use crate::comparator::Comparator;

pub static INFO: AlgorithmInfo = AlgorithmInfo {
    kind: AlgorithmKind::Gnome,
    stable: true,
    best_case: "Ω(n)",
    average_case: "θ(n^2)",
    worst_case: "O(n^2)",
    worst_case_space: "O(1)",
};

sort_impl!(GnomeSort);

pub fn sort_by<T, F>(v: &mut [T], cmp: &mut Comparator<F>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    let mut i = 1;
    let mut j = 2;

    while i < len {
        // Equal neighbours are never exchanged.
        if !cmp.is_greater(&v[i - 1], &v[i]) {
            i = j;
            j += 1;
        } else {
            cmp.swap(v, i - 1, i);
            i -= 1;
            if i == 0 {
                i = j;
                j += 1;
            }
        }
    }
}
