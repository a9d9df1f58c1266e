//! Quicksort with a Hoare partition around the leftmost element. No pivot randomization, sorted
//! and reversed inputs hit the quadratic worst case.

use std::cmp::Ordering;

use crate::algorithm::{AlgorithmInfo, AlgorithmKind};
use crate::comparator::Comparator;

pub static INFO: AlgorithmInfo = AlgorithmInfo {
    kind: AlgorithmKind::Quick,
    stable: false,
    best_case: "Ω(nlog(n))",
    average_case: "θ(nlog(n))",
    worst_case: "O(n^2)",
    worst_case_space: "O(log(n))",
};

sort_impl!(QuickSort);

pub fn sort_by<T, F>(mut v: &mut [T], cmp: &mut Comparator<F>)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    // Only the smaller side recurses, the stack depth stays below log2(n).
    while v.len() >= 2 {
        let (left_end, right_start) = partition(v, cmp);

        let whole = v;
        let (left, right) = whole.split_at_mut(right_start);
        let left = &mut left[..=left_end];

        if left.len() <= right.len() {
            sort_by(left, cmp);
            v = right;
        } else {
            sort_by(right, cmp);
            v = left;
        }
    }
}

/// Returns `(j, i)` such that `v[..=j]` holds elements not greater than the pivot and `v[i..]`
/// elements not less than it. `j` is clamped to 0, a left side of at most one element is done.
fn partition<T, F>(v: &mut [T], cmp: &mut Comparator<F>) -> (usize, usize)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let pivot = v[0].clone();

    let mut i: isize = 0;
    let mut j: isize = v.len() as isize - 1;

    while i <= j {
        // The pivot value bounds both scans.
        while cmp.is_less(&v[i as usize], &pivot) {
            i += 1;
        }

        while cmp.is_greater(&v[j as usize], &pivot) {
            j -= 1;
        }

        if i <= j {
            cmp.swap(v, i as usize, j as usize);
            i += 1;
            j -= 1;
        }
    }

    (j.max(0) as usize, i as usize)
}
