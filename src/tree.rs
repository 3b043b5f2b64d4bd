//! The tree structure built by [`crate::builder::build`] and queried by
//! [`crate::query`].

use crate::error::Error;
use crate::point::Point;
use crate::query;

/// A node of an SA-Tree: a pivot point, its admitted neighbours, and the
/// covering radius of the subtree rooted here.
///
/// Child links are owning and one-way; there are no parent back-pointers.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node {
    pub(crate) point: Point,
    /// Direct children, in construction (admission) order. Order has no
    /// semantic meaning for queries but is observable via [`Tree::dump_text`].
    pub(crate) neighbours: Vec<Node>,
    /// The maximum distance from `point` to any point in this subtree,
    /// `point` itself excluded. Zero for a leaf.
    pub(crate) covering_radius: f32,
}

impl Node {
    pub(crate) fn count(&self) -> usize {
        1 + self.neighbours.iter().map(Node::count).sum::<usize>()
    }

    fn dump(&self, out: &mut String) {
        out.push('{');
        out.push_str(&self.point.repr());
        out.push('}');
        if !self.neighbours.is_empty() {
            out.push('(');
            for (i, child) in self.neighbours.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                child.dump(out);
            }
            out.push(')');
        }
    }
}

/// A constructed, read-only Spatial Approximation Tree.
///
/// Built once by [`crate::builder::build`]; thereafter immutable. Destroying
/// the tree destroys every node it owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub(crate) root: Node,
}

impl Tree {
    /// The number of points stored in the tree.
    pub fn len(&self) -> usize {
        self.root.count()
    }

    /// Always `false`: [`crate::builder::build`] refuses empty input, so a
    /// `Tree` is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns a deterministic textual form of the tree: for each node,
    /// `{point}` followed by `(child, child, ...)` in neighbour order if it
    /// has children. Used by property tests to pin down tree shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use satree::{build, Point};
    ///
    /// let tree = build(vec![
    ///     Point::new(vec![3.0, 3.0]),
    ///     Point::new(vec![5.0, 3.0]),
    ///     Point::new(vec![2.0, 2.0]),
    ///     Point::new(vec![4.0, 4.0]),
    /// ]).unwrap();
    ///
    /// assert_eq!(tree.dump_text(), "{(4, 4)}({(3, 3)}({(2, 2)}),{(5, 3)})");
    /// ```
    pub fn dump_text(&self) -> String {
        let mut out = String::new();
        self.root.dump(&mut out);
        out
    }

    /// Returns *some* point stored in the tree within `radius` of `query`, or
    /// `None` if no such point exists. Not required to return all matching
    /// points, nor the closest one — a membership witness query.
    ///
    /// Fails with [`Error::InvalidRadius`] if `radius` is negative or NaN.
    pub fn range_search(&self, query: &Point, radius: f32) -> Result<Option<Point>, Error> {
        query::range::range_search(self, query, radius)
    }

    /// Returns the `k` points nearest `query`, sorted by ascending distance.
    /// Returns fewer than `k` if the tree holds fewer than `k` points.
    ///
    /// Fails with [`Error::InvalidK`] if `k` is negative.
    pub fn knn(&self, query: &Point, k: i64) -> Result<Vec<query::Neighbour>, Error> {
        query::knn::knn(self, query, k)
    }
}
