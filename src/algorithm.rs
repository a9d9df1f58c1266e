//! The uniform sort contract and the run protocol shared by every algorithm.

use std::cmp::Ordering;
use std::fmt;
use std::time::{Duration, Instant};

use log::debug;

use crate::array::ArrayShape;
use crate::comparator::{Comparator, SortDirection};
use crate::element::Element;
use crate::error::Result;
use crate::other::bogo;
use crate::stable::{bubble, cocktail, gnome, insertion, merge, tree};
use crate::unstable::{comb, heap, quick, selection, shell, stooge};

/// Static description of an algorithm, fixed at construction.
#[derive(Debug, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub kind: AlgorithmKind,
    /// Whether the relative order of equal elements is preserved.
    pub stable: bool,
    pub best_case: &'static str,
    pub average_case: &'static str,
    pub worst_case: &'static str,
    pub worst_case_space: &'static str,
}

impl AlgorithmInfo {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

/// An algorithm body. Implementations sort `v` in place and route every comparison and exchange
/// through `cmp`. Lengths 0 and 1 must not touch `cmp`.
pub trait Sort {
    fn info(&self) -> &'static AlgorithmInfo;

    fn sort_by<T, F>(&mut self, v: &mut [T], cmp: &mut Comparator<F>) -> Result<()>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;
}

/// An algorithm instance together with the counters of its latest run.
///
/// Each call to [`Algorithm::sort`] resets the counters, copies the input, and times only the
/// algorithm body. The input is never modified. The same instance must not be shared between
/// threads while a run is in progress, counters are per instance.
#[derive(Debug, Default)]
pub struct Algorithm<S> {
    sort: S,
    comparisons: u64,
    swaps: u64,
    elapsed: Duration,
}

impl<S: Sort> Algorithm<S> {
    pub fn new(sort: S) -> Self {
        Self {
            sort,
            comparisons: 0,
            swaps: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn info(&self) -> &'static AlgorithmInfo {
        self.sort.info()
    }

    /// Returns a sorted copy of `input`.
    pub fn sort<T: Element>(&mut self, input: &[T], direction: SortDirection) -> Result<Vec<T>> {
        self.sort_by(input, direction, T::total_cmp)
    }

    /// Returns a copy of `input` sorted by `compare`, reversed for [`SortDirection::Descending`].
    pub fn sort_by<T, F>(
        &mut self,
        input: &[T],
        direction: SortDirection,
        compare: F,
    ) -> Result<Vec<T>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        self.comparisons = 0;
        self.swaps = 0;
        self.elapsed = Duration::ZERO;

        let mut output = input.to_vec();
        let mut cmp = Comparator::new(direction, compare);

        let start = Instant::now();
        let outcome = self.sort.sort_by(&mut output, &mut cmp);
        self.elapsed = start.elapsed();

        self.comparisons = cmp.comparisons();
        self.swaps = cmp.swaps();

        debug!(
            "{} {direction} len={}: comparisons={} swaps={} elapsed={:?}",
            self.info().name(),
            output.len(),
            self.comparisons,
            self.swaps,
            self.elapsed
        );

        outcome.map(|()| output)
    }

    /// Sorts `input` and packages the output with the statistics of the run.
    pub fn run<T: Element>(&mut self, input: &[T], direction: SortDirection) -> Result<RunResult<T>> {
        self.run_by(input, direction, T::total_cmp)
    }

    pub fn run_by<T, F>(
        &mut self,
        input: &[T],
        direction: SortDirection,
        compare: F,
    ) -> Result<RunResult<T>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let output = self.sort_by(input, direction, compare)?;

        Ok(RunResult {
            info: self.info(),
            direction,
            comparisons: self.comparisons,
            swaps: self.swaps,
            elapsed: self.elapsed,
            output,
        })
    }

    /// Comparisons of the latest run.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Swaps, or element placements, of the latest run.
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Time spent in the algorithm body of the latest run.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn inner(&self) -> &S {
        &self.sort
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.sort
    }
}

/// Immutable record of one run.
#[derive(Clone, Debug)]
pub struct RunResult<T> {
    info: &'static AlgorithmInfo,
    direction: SortDirection,
    comparisons: u64,
    swaps: u64,
    elapsed: Duration,
    output: Vec<T>,
}

impl<T> RunResult<T> {
    pub fn kind(&self) -> AlgorithmKind {
        self.info.kind
    }

    pub fn name(&self) -> &'static str {
        self.info.name()
    }

    pub fn info(&self) -> &'static AlgorithmInfo {
        self.info
    }

    pub fn is_stable(&self) -> bool {
        self.info.stable
    }

    pub fn best_case(&self) -> &'static str {
        self.info.best_case
    }

    pub fn average_case(&self) -> &'static str {
        self.info.average_case
    }

    pub fn worst_case(&self) -> &'static str {
        self.info.worst_case
    }

    pub fn worst_case_space(&self) -> &'static str {
        self.info.worst_case_space
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn output(&self) -> &[T] {
        &self.output
    }

    pub fn into_output(self) -> Vec<T> {
        self.output
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    // Stable
    Bubble,
    Cocktail,
    Insertion,
    Gnome,
    Merge,
    Tree,
    // Unstable
    Selection,
    Comb,
    Shell,
    Heap,
    Quick,
    Stooge,
    // Non-practical
    Bogo,
}

// Builds the default instance of `$kind` and runs `$body` with it bound to `$algo`.
macro_rules! with_algorithm {
    ($kind:expr, $algo:ident => $body:expr) => {
        match $kind {
            AlgorithmKind::Bubble => {
                let mut $algo = Algorithm::new(bubble::BubbleSort);
                $body
            }
            AlgorithmKind::Cocktail => {
                let mut $algo = Algorithm::new(cocktail::CocktailSort);
                $body
            }
            AlgorithmKind::Insertion => {
                let mut $algo = Algorithm::new(insertion::InsertionSort);
                $body
            }
            AlgorithmKind::Gnome => {
                let mut $algo = Algorithm::new(gnome::GnomeSort);
                $body
            }
            AlgorithmKind::Merge => {
                let mut $algo = Algorithm::new(merge::MergeSort);
                $body
            }
            AlgorithmKind::Tree => {
                let mut $algo = Algorithm::new(tree::TreeSort);
                $body
            }
            AlgorithmKind::Selection => {
                let mut $algo = Algorithm::new(selection::SelectionSort);
                $body
            }
            AlgorithmKind::Comb => {
                let mut $algo = Algorithm::new(comb::CombSort);
                $body
            }
            AlgorithmKind::Shell => {
                let mut $algo = Algorithm::new(shell::ShellSort);
                $body
            }
            AlgorithmKind::Heap => {
                let mut $algo = Algorithm::new(heap::HeapSort);
                $body
            }
            AlgorithmKind::Quick => {
                let mut $algo = Algorithm::new(quick::QuickSort);
                $body
            }
            AlgorithmKind::Stooge => {
                let mut $algo = Algorithm::new(stooge::StoogeSort);
                $body
            }
            AlgorithmKind::Bogo => {
                let mut $algo = Algorithm::new(bogo::BogoSort::default());
                $body
            }
        }
    };
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 13] = [
        AlgorithmKind::Bubble,
        AlgorithmKind::Cocktail,
        AlgorithmKind::Insertion,
        AlgorithmKind::Gnome,
        AlgorithmKind::Merge,
        AlgorithmKind::Tree,
        AlgorithmKind::Selection,
        AlgorithmKind::Comb,
        AlgorithmKind::Shell,
        AlgorithmKind::Heap,
        AlgorithmKind::Quick,
        AlgorithmKind::Stooge,
        AlgorithmKind::Bogo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "bubble_sort",
            AlgorithmKind::Cocktail => "cocktail_sort",
            AlgorithmKind::Insertion => "insertion_sort",
            AlgorithmKind::Gnome => "gnome_sort",
            AlgorithmKind::Merge => "merge_sort",
            AlgorithmKind::Tree => "tree_sort",
            AlgorithmKind::Selection => "selection_sort",
            AlgorithmKind::Comb => "comb_sort",
            AlgorithmKind::Shell => "shell_sort",
            AlgorithmKind::Heap => "heap_sort",
            AlgorithmKind::Quick => "quick_sort",
            AlgorithmKind::Stooge => "stooge_sort",
            AlgorithmKind::Bogo => "bogo_sort",
        }
    }

    pub fn info(self) -> &'static AlgorithmInfo {
        match self {
            AlgorithmKind::Bubble => &bubble::INFO,
            AlgorithmKind::Cocktail => &cocktail::INFO,
            AlgorithmKind::Insertion => &insertion::INFO,
            AlgorithmKind::Gnome => &gnome::INFO,
            AlgorithmKind::Merge => &merge::INFO,
            AlgorithmKind::Tree => &tree::INFO,
            AlgorithmKind::Selection => &selection::INFO,
            AlgorithmKind::Comb => &comb::INFO,
            AlgorithmKind::Shell => &shell::INFO,
            AlgorithmKind::Heap => &heap::INFO,
            AlgorithmKind::Quick => &quick::INFO,
            AlgorithmKind::Stooge => &stooge::INFO,
            AlgorithmKind::Bogo => &bogo::INFO,
        }
    }

    pub fn is_stable(self) -> bool {
        self.info().stable
    }

    /// Whether runs on inputs of `shape` can take O(n^2) or more work.
    pub fn is_quadratic_on(self, shape: ArrayShape) -> bool {
        match self {
            AlgorithmKind::Merge
            | AlgorithmKind::Comb
            | AlgorithmKind::Shell
            | AlgorithmKind::Heap => false,
            // Leftmost pivots and an unbalanced tree degrade on ordered input.
            AlgorithmKind::Quick | AlgorithmKind::Tree => matches!(
                shape,
                ArrayShape::Sorted | ArrayShape::NearlySorted | ArrayShape::Reversed
            ),
            _ => true,
        }
    }

    /// Practical stable algorithms.
    pub fn stable() -> impl Iterator<Item = AlgorithmKind> {
        Self::ALL.into_iter().filter(|k| k.is_stable())
    }

    /// Practical unstable algorithms, Bogo sort excluded.
    pub fn unstable() -> impl Iterator<Item = AlgorithmKind> {
        Self::ALL
            .into_iter()
            .filter(|k| !k.is_stable() && *k != AlgorithmKind::Bogo)
    }

    /// Runs a fresh default instance of this algorithm. Bogo sort runs without a cap.
    pub fn run<T: Element>(self, input: &[T], direction: SortDirection) -> Result<RunResult<T>> {
        with_algorithm!(self, algo => algo.run(input, direction))
    }

    pub fn run_by<T, F>(
        self,
        input: &[T],
        direction: SortDirection,
        compare: F,
    ) -> Result<RunResult<T>>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        with_algorithm!(self, algo => algo.run_by(input, direction, compare))
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
