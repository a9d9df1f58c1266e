use std::cmp::Ordering;
use std::fmt;

/// Order of a run, fixed for its whole duration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("ascending"),
            SortDirection::Descending => f.write_str("descending"),
        }
    }
}

/// Three-way comparison with a run direction and the per-run instrumentation.
///
/// Every comparison and every exchange an algorithm performs goes through this type. Descending
/// runs swap the operands, `compare(a, b)` descending is `compare(b, a)` ascending, so algorithms
/// never look at the direction themselves.
pub struct Comparator<F> {
    direction: SortDirection,
    compare: F,
    comparisons: u64,
    swaps: u64,
}

impl<F> Comparator<F> {
    pub fn new(direction: SortDirection, compare: F) -> Self {
        Self {
            direction,
            compare,
            comparisons: 0,
            swaps: 0,
        }
    }

    #[inline]
    pub fn compare<T>(&mut self, a: &T, b: &T) -> Ordering
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.comparisons += 1;

        match self.direction {
            SortDirection::Ascending => (self.compare)(a, b),
            SortDirection::Descending => (self.compare)(b, a),
        }
    }

    #[inline]
    pub fn is_less<T>(&mut self, a: &T, b: &T) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.compare(a, b) == Ordering::Less
    }

    #[inline]
    pub fn is_greater<T>(&mut self, a: &T, b: &T) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.compare(a, b) == Ordering::Greater
    }

    /// Exchanges `v[a]` and `v[b]`, counted as one swap.
    #[inline]
    pub fn swap<T>(&mut self, v: &mut [T], a: usize, b: usize) {
        v.swap(a, b);
        self.swaps += 1;
    }

    /// Counts an element placement that is not a literal exchange, e.g. a write into a merge buffer.
    #[inline]
    pub fn count_placement(&mut self) {
        self.swaps += 1;
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

    /// Checks `v` is ordered for this run's direction. Every comparison made here is counted.
    pub fn is_sorted<T>(&mut self, v: &[T]) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        v.windows(2).all(|w| !self.is_greater(&w[0], &w[1]))
    }
}
