//! Heap sort. Builds a max heap, which the comparator turns into a min heap for descending runs,
//! then repeatedly moves the root behind the shrinking heap.

use std::cmp::Ordering;

use crate::algorithm::{AlgorithmInfo, AlgorithmKind};
use crate::comparator::Comparator;

pub static INFO: AlgorithmInfo = AlgorithmInfo {
    kind: AlgorithmKind::Heap,
    stable: false,
    best_case: "Ω(nlog(n))",
    average_case: "θ(nlog(n))",
    worst_case: "O(nlog(n))",
    worst_case_space: "O(1)",
};

sort_impl!(HeapSort);

pub fn sort_by<T, F>(v: &mut [T], cmp: &mut Comparator<F>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in (0..len / 2).rev() {
        heapify(v, len, i, cmp);
    }

    for end in (1..len).rev() {
        cmp.swap(v, 0, end);
        heapify(v, end, 0, cmp);
    }
}

/// Sifts `v[node]` down within the heap `v[..heap_len]`, recursing on the larger child.
fn heapify<T, F>(v: &mut [T], heap_len: usize, node: usize, cmp: &mut Comparator<F>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut largest = node;
    let left = 2 * node + 1;
    let right = 2 * node + 2;

    if left < heap_len && cmp.is_greater(&v[left], &v[largest]) {
        largest = left;
    }

    if right < heap_len && cmp.is_greater(&v[right], &v[largest]) {
        largest = right;
    }

    if largest != node {
        cmp.swap(v, node, largest);
        heapify(v, heap_len, largest, cmp);
    }
}
