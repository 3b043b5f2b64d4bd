//! The metric used to measure distance between two [`Point`]s.
//!
//! The tree and its queries are written against the [`Metric`] trait rather
//! than a free function, so the construction and query algorithms stay
//! generic over "a true metric" even though [`Euclidean`] is currently the
//! only implementor the crate ships (per the spec's non-goal of supporting
//! other metrics).

use crate::error::Error;
use crate::point::Point;

/// A metric (distance function) in the space of all points.
pub trait Metric {
    /// Returns the distance between `a` and `b`.
    ///
    /// Fails with [`Error::DimensionMismatch`] if `a` and `b` do not share a
    /// dimension. The result is NaN-free for finite inputs.
    fn distance(a: &Point, b: &Point) -> Result<f32, Error>;
}

/// The Euclidean metric: `dist(x, y) = sqrt(sum((x_i - y_i)^2))`.
///
/// # Examples
///
/// ```rust
/// use satree::{Euclidean, Metric, Point};
///
/// let a = Point::new(vec![0.0, 0.0]);
/// let b = Point::new(vec![3.0, 4.0]);
/// assert_eq!(Euclidean::distance(&a, &b).unwrap(), 5.0);
/// ```
pub struct Euclidean;

impl Metric for Euclidean {
    fn distance(a: &Point, b: &Point) -> Result<f32, Error> {
        if a.dimension() != b.dimension() {
            return Err(Error::DimensionMismatch {
                expected: a.dimension(),
                found: b.dimension(),
            });
        }
        let sum_sq: f32 = a
            .coords()
            .iter()
            .zip(b.coords().iter())
            .map(|(x, y)| (x - y) * (x - y))
            .sum();
        Ok(sum_sq.sqrt())
    }
}
