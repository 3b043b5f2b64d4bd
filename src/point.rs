//! The point type stored in and queried against a [`crate::tree::Tree`].

use std::fmt;

/// An immutable, fixed-length sequence of real numbers.
///
/// Two points are equal iff they are coordinate-wise equal. Dimension is a
/// property of the batch an index is built from; a [`Tree`](crate::tree::Tree)
/// assumes every point it holds shares the dimension of the others, and any
/// distance computation across mismatched dimensions fails with
/// [`Error::DimensionMismatch`](crate::error::Error::DimensionMismatch).
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    coords: Vec<f32>,
}

impl Point {
    /// Creates a point from its coordinates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use satree::Point;
    ///
    /// let p = Point::new(vec![1.0, 2.0, 5.0]);
    /// assert_eq!(p.dimension(), 3);
    /// ```
    pub fn new(coords: Vec<f32>) -> Self {
        Self { coords }
    }

    /// The number of coordinates in this point.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// The raw coordinates, in the order they were supplied to [`Point::new`].
    #[inline]
    pub fn coords(&self) -> &[f32] {
        &self.coords
    }

    /// Renders this point the way [`crate::tree::Tree::dump_text`] does:
    /// `(c1, c2, ..., cd)` with each coordinate as a signed decimal.
    pub(crate) fn repr(&self) -> String {
        let mut out = String::from("(");
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&c.to_string());
        }
        out.push(')');
        out
    }
}

impl From<Vec<f32>> for Point {
    fn from(coords: Vec<f32>) -> Self {
        Self::new(coords)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.repr())
    }
}
