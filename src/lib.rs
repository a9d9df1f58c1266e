//! Instrumented classical sorting algorithms and a shaped test array generator.
//!
//! Every algorithm sorts a copy of its input through a counting [`Comparator`], so comparison and
//! swap counts, elapsed time and the complexity metadata of each run can be compared side by side.

macro_rules! sort_impl {
    ($sort_name:ident) => {
        #[derive(Copy, Clone, Debug, Default)]
        pub struct $sort_name;

        impl crate::algorithm::Sort for $sort_name {
            fn info(&self) -> &'static crate::algorithm::AlgorithmInfo {
                &INFO
            }

            #[inline]
            fn sort_by<T, F>(
                &mut self,
                v: &mut [T],
                cmp: &mut crate::comparator::Comparator<F>,
            ) -> crate::error::Result<()>
            where
                T: Clone,
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(v, cmp);
                Ok(())
            }
        }
    };
}

pub mod algorithm;
pub mod array;
pub mod comparator;
pub mod config;
pub mod decimal;
pub mod element;
pub mod error;
pub mod patterns;
pub mod report;

pub mod other;
pub mod stable;
pub mod unstable;

pub use algorithm::{Algorithm, AlgorithmInfo, AlgorithmKind, RunResult, Sort};
pub use array::{ArrayShape, TypedArray};
pub use comparator::{Comparator, SortDirection};
pub use decimal::Decimal;
pub use element::{Element, ElementKind};
pub use error::{Error, Result};
pub use patterns::{generate, GenerationParameters, Generator};
pub use report::{ArrayDescriptor, ReportLayout, RunReport};
