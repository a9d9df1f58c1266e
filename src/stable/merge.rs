//! Top-down merge sort. Every element moved into the merge buffer and back counts as a swap.

use std::cmp::Ordering;

use crate::algorithm::{AlgorithmInfo, AlgorithmKind};
use crate::comparator::Comparator;

pub static INFO: AlgorithmInfo = AlgorithmInfo {
    kind: AlgorithmKind::Merge,
    stable: true,
    best_case: "Ω(nlog(n))",
    average_case: "θ(nlog(n))",
    worst_case: "O(nlog(n))",
    worst_case_space: "O(n)",
};

sort_impl!(MergeSort);

pub fn sort_by<T, F>(v: &mut [T], cmp: &mut Comparator<F>)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // The left half takes the middle element for odd lengths.
    let mid = (len + 1) / 2;
    sort_by(&mut v[..mid], cmp);
    sort_by(&mut v[mid..], cmp);
    merge(v, mid, cmp);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` through a buffer sized to `v`.
fn merge<T, F>(v: &mut [T], mid: usize, cmp: &mut Comparator<F>)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    let mut buf = Vec::with_capacity(len);

    let mut left = 0;
    let mut right = mid;

    while left < mid && right < len {
        // Ties take from the left run.
        if cmp.is_greater(&v[left], &v[right]) {
            buf.push(v[right].clone());
            right += 1;
        } else {
            buf.push(v[left].clone());
            left += 1;
        }
        cmp.count_placement();
    }

    for elem in v[left..mid].iter().chain(&v[right..len]) {
        buf.push(elem.clone());
        cmp.count_placement();
    }

    for (dst, src) in v.iter_mut().zip(buf) {
        *dst = src;
        cmp.count_placement();
    }
}
