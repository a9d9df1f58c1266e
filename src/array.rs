use std::fmt;
use std::ops::{Index, IndexMut};

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::comparator::SortDirection;
use crate::config::{DEFAULT_SIZE, MAX_CAPACITY};
use crate::element::Element;
use crate::error::Result;
use crate::patterns::{self, GenerationParameters, Generator};

/// How the values of an array were arranged when it was built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ArrayShape {
    #[default]
    Random,
    Sorted,
    NearlySorted,
    Reversed,
    FewUnique,
    /// Built from caller supplied values.
    Other,
}

impl ArrayShape {
    pub const GENERATED: [ArrayShape; 5] = [
        ArrayShape::Random,
        ArrayShape::Sorted,
        ArrayShape::NearlySorted,
        ArrayShape::Reversed,
        ArrayShape::FewUnique,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ArrayShape::Random => "random",
            ArrayShape::Sorted => "sorted",
            ArrayShape::NearlySorted => "nearly_sorted",
            ArrayShape::Reversed => "reversed",
            ArrayShape::FewUnique => "few_unique",
            ArrayShape::Other => "other",
        }
    }
}

impl fmt::Display for ArrayShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Owned sequence of one element kind, tagged with the shape it was built with.
///
/// The shape is provenance only. It is set at construction and never re-derived from the content,
/// mutating the values through [`TypedArray::as_mut_slice`], indexing, [`TypedArray::reverse`] or
/// [`TypedArray::shuffle`] leaves it as is. Use [`TypedArray::is_sorted`] for the actual order.
#[derive(Clone, Debug, PartialEq)]
pub struct TypedArray<T> {
    values: Vec<T>,
    shape: ArrayShape,
}

impl<T: Element> TypedArray<T> {
    pub fn new(values: Vec<T>, shape: ArrayShape) -> Self {
        Self { values, shape }
    }

    /// Wraps caller supplied values, tagged [`ArrayShape::Other`].
    pub fn from_vec(values: Vec<T>) -> Self {
        Self::new(values, ArrayShape::Other)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn shape(&self) -> ArrayShape {
        self.shape
    }

    /// Relabels the array. Keeping the tag meaningful is up to the caller.
    pub fn set_shape(&mut self, shape: ArrayShape) {
        self.shape = shape;
    }

    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.values
    }

    pub fn into_vec(self) -> Vec<T> {
        self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Non-decreasing check, recomputed on every call.
    pub fn is_sorted(&self) -> bool {
        self.is_sorted_by(SortDirection::Ascending)
    }

    pub fn is_sorted_by(&self, direction: SortDirection) -> bool {
        is_sorted_by(&self.values, direction)
    }

    /// Appends a copy of the values to themselves. Does nothing if the result would exceed
    /// [`MAX_CAPACITY`].
    pub fn double(&mut self) {
        match self.values.len().checked_mul(2) {
            Some(new_len) if new_len <= MAX_CAPACITY => {
                self.values.extend_from_within(..);
            }
            _ => debug!(
                "double: {} elements would exceed capacity, array left unchanged",
                self.values.len()
            ),
        }
    }

    pub fn reverse(&mut self) {
        self.values.reverse();
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.values.shuffle(rng);
    }

    /// Ascending copy of the values, leaving the array untouched.
    pub fn sorted(&self) -> Vec<T> {
        let mut values = self.values.clone();
        values.sort_by(T::total_cmp);
        values
    }

    /// Sorts the values ascending in place.
    pub fn sort(&mut self) {
        self.values.sort_by(T::total_cmp);
    }

    /// Forces roughly `similarity * len` elements to one value already present in the array.
    pub fn apply_similarity<R: Rng + ?Sized>(&mut self, rng: &mut R, similarity: f64) -> Result<()> {
        patterns::apply_similarity(&mut self.values, rng, similarity)
    }

    /// Refills the array in place with new values of the same length and relabels it.
    pub fn regenerate(
        &mut self,
        generator: &mut Generator,
        min: T,
        max: T,
        similarity: Option<f64>,
        shape: ArrayShape,
    ) -> Result<()> {
        let params = GenerationParameters {
            size: self.len(),
            min,
            max,
            similarity,
        };
        *self = generator.generate(&params, shape)?;
        Ok(())
    }
}

pub(crate) fn is_sorted_by<T: Element>(v: &[T], direction: SortDirection) -> bool {
    let out_of_order = match direction {
        SortDirection::Ascending => std::cmp::Ordering::Greater,
        SortDirection::Descending => std::cmp::Ordering::Less,
    };

    v.windows(2)
        .all(|w| w[0].total_cmp(&w[1]) != out_of_order)
}

impl<T: Element> Default for TypedArray<T> {
    /// [`DEFAULT_SIZE`] random values across the whole range of the kind.
    fn default() -> Self {
        let mut generator = Generator::new();
        let values = generator.random_values(DEFAULT_SIZE, T::MIN, T::MAX);
        Self::new(values, ArrayShape::Random)
    }
}

impl<T> Index<usize> for TypedArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.values[index]
    }
}

impl<T> IndexMut<usize> for TypedArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.values[index]
    }
}

impl<T: Element> fmt::Display for TypedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, val) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{val}")?;
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a TypedArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
