//! Plain data handed to whatever renders the results of a session.

use log::debug;

use crate::algorithm::{AlgorithmKind, RunResult};
use crate::array::{self, ArrayShape, TypedArray};
use crate::comparator::SortDirection;
use crate::element::Element;
use crate::error::Result;

/// Snapshot of an array. The sortedness flags are computed when the descriptor is built, never
/// copied from the generation request.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayDescriptor<T> {
    values: Vec<T>,
    shape: ArrayShape,
    sorted: bool,
    sorted_descending: bool,
}

impl<T: Element> ArrayDescriptor<T> {
    pub fn from_slice(values: &[T], shape: ArrayShape) -> Self {
        Self {
            values: values.to_vec(),
            shape,
            sorted: array::is_sorted_by(values, SortDirection::Ascending),
            sorted_descending: array::is_sorted_by(values, SortDirection::Descending),
        }
    }

    pub fn values(&self) -> &[T] {
        &self.values
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

    /// Non-decreasing.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn is_sorted_by(&self, direction: SortDirection) -> bool {
        match direction {
            SortDirection::Ascending => self.sorted,
            SortDirection::Descending => self.sorted_descending,
        }
    }
}

impl<T: Element> From<&TypedArray<T>> for ArrayDescriptor<T> {
    fn from(array: &TypedArray<T>) -> Self {
        Self::from_slice(array.as_slice(), array.shape())
    }
}

/// Whether a renderer should print the element sequences or only the metadata.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReportLayout {
    WithArray,
    #[default]
    WithoutArray,
}

/// One input, its sorted output and the statistics of every run over it.
#[derive(Clone, Debug)]
pub struct RunReport<T> {
    input: ArrayDescriptor<T>,
    output: Option<ArrayDescriptor<T>>,
    runs: Vec<RunResult<T>>,
    layout: ReportLayout,
}

impl<T: Element> RunReport<T> {
    pub fn new(input: ArrayDescriptor<T>, layout: ReportLayout) -> Self {
        Self {
            input,
            output: None,
            runs: Vec::new(),
            layout,
        }
    }

    /// Runs every kind in `kinds` over `input` in order. The first failing run aborts the report.
    pub fn collect(
        input: &TypedArray<T>,
        kinds: &[AlgorithmKind],
        direction: SortDirection,
        layout: ReportLayout,
    ) -> Result<Self> {
        let mut report = Self::new(ArrayDescriptor::from(input), layout);

        for &kind in kinds {
            let run = kind.run(input.as_slice(), direction)?;
            report.push_run(run);
        }

        debug!(
            "report over {} {} elements: {} runs",
            input.len(),
            T::KIND,
            report.runs.len()
        );

        Ok(report)
    }

    /// Adds a run. The first run added also provides the output descriptor.
    pub fn push_run(&mut self, run: RunResult<T>) {
        if self.output.is_none() {
            self.output = Some(ArrayDescriptor::from_slice(run.output(), ArrayShape::Other));
        }
        self.runs.push(run);
    }

    pub fn input(&self) -> &ArrayDescriptor<T> {
        &self.input
    }

    pub fn output(&self) -> Option<&ArrayDescriptor<T>> {
        self.output.as_ref()
    }

    pub fn runs(&self) -> &[RunResult<T>] {
        &self.runs
    }

    pub fn layout(&self) -> ReportLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: ReportLayout) {
        self.layout = layout;
    }
}
