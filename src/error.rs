//! Error type shared by the generator, the array helpers and the run protocol.

use thiserror::Error;

use crate::element::ElementKind;

/// Every failure the library reports as a value. Programming errors (out of bounds indices and the
/// like) panic instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Requested array length is zero or above the maximum capacity.
    #[error("Invalid size: {size}, it should be within the range [1 ; {max}]")]
    InvalidSize {
        /// The requested length
        size: usize,
        /// The largest accepted length
        max: usize,
    },

    /// The lower bound is not strictly below the upper bound.
    #[error("Invalid range: minimum value {min} is not less than maximum value {max}")]
    InvalidRange {
        /// Requested lower bound, formatted
        min: String,
        /// Requested upper bound, formatted
        max: String,
    },

    /// The requested bounds can't be represented by the element kind.
    #[error(
        "The boundary values were either too large or too small for {kind}, \
         they should be within the range [{min} ; {max}]"
    )]
    Overflow {
        /// Element kind that was asked for
        kind: ElementKind,
        /// Smallest representable value of the kind, formatted
        min: String,
        /// Largest representable value of the kind, formatted
        max: String,
    },

    /// Similarity expectancy outside of (0.1, 1.0].
    #[error("Invalid similarity expectancy {0}, it should be within the range (0.1 ; 1.0]")]
    InvalidSimilarity(f64),

    /// A floating point bound is NaN.
    #[error("Boundary value is not a number")]
    NotANumber,

    /// A run was stopped before it finished, by its shuffle cap or its cancellation token.
    #[error("Sort cancelled after {shuffles} shuffles")]
    Cancelled {
        /// Number of permutations applied before stopping
        shuffles: u64,
    },
}

impl Error {
    /// True for ordinary "bad request" failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidSize { .. }
                | Error::InvalidRange { .. }
                | Error::InvalidSimilarity(_)
                | Error::NotANumber
        )
    }

    /// True when the request was only bad for the specific element kind.
    pub fn is_overflow(&self) -> bool {
        matches!(self, Error::Overflow { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
