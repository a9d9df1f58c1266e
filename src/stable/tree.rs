//! Tree sort. Inserts every element into an unbalanced binary search tree, then writes the
//! in-order traversal back. Only insertion compares, each insertion counts as one swap.

use std::cmp::Ordering;

use crate::algorithm::{AlgorithmInfo, AlgorithmKind};
use crate::comparator::Comparator;

pub static INFO: AlgorithmInfo = AlgorithmInfo {
    kind: AlgorithmKind::Tree,
    stable: true,
    best_case: "Ω(nlog(n))",
    average_case: "θ(nlog(n))",
    worst_case: "O(n^2)",
    worst_case_space: "O(n)",
};

sort_impl!(TreeSort);

struct Node<T> {
    value: T,
    left: Option<usize>,
    right: Option<usize>,
}

pub fn sort_by<T, F>(v: &mut [T], cmp: &mut Comparator<F>)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() < 2 {
        return;
    }

    // Nodes live in an arena, index 0 is the root.
    let mut nodes = Vec::with_capacity(v.len());
    for elem in v.iter() {
        insert(&mut nodes, elem.clone(), cmp);
        cmp.count_placement();
    }

    let mut stack = Vec::new();
    let mut current = Some(0);
    let mut out = 0;

    loop {
        while let Some(idx) = current {
            stack.push(idx);
            current = nodes[idx].left;
        }

        let Some(idx) = stack.pop() else {
            break;
        };

        let node: &Node<T> = &nodes[idx];
        v[out] = node.value.clone();
        out += 1;
        current = node.right;
    }

    debug_assert_eq!(out, v.len());
}

fn insert<T, F>(nodes: &mut Vec<Node<T>>, value: T, cmp: &mut Comparator<F>)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let new_idx = nodes.len();

    if new_idx > 0 {
        let mut idx = 0;
        loop {
            // Equal keys descend right, after the ones inserted before them.
            let slot = if cmp.is_less(&value, &nodes[idx].value) {
                &mut nodes[idx].left
            } else {
                &mut nodes[idx].right
            };

            match *slot {
                Some(next) => idx = next,
                None => {
                    *slot = Some(new_idx);
                    break;
                }
            }
        }
    }

    nodes.push(Node {
        value,
        left: None,
        right: None,
    });
}
