//! The error type returned by fallible operations across the crate.

use thiserror::Error;

/// Failure modes for construction and queries.
///
/// All four variants surface synchronously at the call site; there is no
/// partial success. A tree is never returned half-built, and a query never
/// returns a partial result alongside an error.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// [`crate::builder::build`] was called with zero points.
    #[error("cannot build a tree from an empty set of points")]
    EmptyInput,

    /// Two points compared against each other (during construction or a
    /// query) did not share the same dimension.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// The dimension of the first point in the comparison.
        expected: usize,
        /// The dimension of the second point in the comparison.
        found: usize,
    },

    /// [`crate::tree::Tree::range_search`] was called with a negative or
    /// NaN radius.
    #[error("invalid search radius: {0}")]
    InvalidRadius(f32),

    /// [`crate::tree::Tree::knn`] was called with a negative `k`.
    #[error("invalid k for k-nearest-neighbour search: {0}")]
    InvalidK(i64),
}
