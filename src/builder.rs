//! The offline SA-Tree construction algorithm.
//!
//! [`build`] picks a root pivot, then recursively partitions the remaining
//! points into an admitted neighbour set and a Voronoi-assigned remainder
//! per neighbour, per the SA-Tree neighbour selection rule.

use crate::distance::{Euclidean, Metric};
use crate::error::Error;
use crate::point::Point;
use crate::tree::{Node, Tree};

/// Builds an SA-Tree from an unordered batch of points.
///
/// Fails with [`Error::EmptyInput`] if `points` is empty, or
/// [`Error::DimensionMismatch`] if the points do not all share a dimension.
/// Construction is deterministic for a given input order: distances are
/// pure functions of the points, and neighbour admission uses a stable sort.
///
/// # Examples
///
/// ```rust
/// use satree::{build, Point};
///
/// let tree = build(vec![Point::new(vec![1.0, 1.0])]).unwrap();
/// assert_eq!(tree.len(), 1);
///
/// assert!(matches!(build(vec![]), Err(satree::Error::EmptyInput)));
/// ```
pub fn build(points: Vec<Point>) -> Result<Tree, Error> {
    if points.is_empty() {
        return Err(Error::EmptyInput);
    }

    log::debug!(
        "building SA-tree from {} point(s), dimension {}",
        points.len(),
        points[0].dimension()
    );

    let mut points = points;
    // the last point of the batch seeds the root; the remaining bag keeps
    // its original relative order for stable tie-breaking during admission
    let root_point = points.pop().expect("checked non-empty above");
    let root = build_subtree(root_point, points)?;

    log::debug!(
        "built SA-tree: {} node(s), root covering_radius={}",
        root.count(),
        root.covering_radius
    );
    Ok(Tree { root })
}

/// Builds the neighbours and descendants of pivot `a` from the candidate
/// bag `s`, then recurses into each neighbour's Voronoi-assigned bucket.
fn build_subtree(a: Point, s: Vec<Point>) -> Result<Node, Error> {
    if s.is_empty() {
        return Ok(Node {
            point: a,
            neighbours: Vec::new(),
            covering_radius: 0.0,
        });
    }

    // sort ascending by dist(a, ·); sort_by is stable, so ties keep their
    // original insertion order without an explicit secondary key
    let mut by_dist: Vec<(f32, Point)> = s
        .into_iter()
        .map(|c| Euclidean::distance(&a, &c).map(|d| (d, c)))
        .collect::<Result<_, _>>()?;
    by_dist.sort_by(|x, y| {
        x.0.partial_cmp(&y.0)
            .expect("distance is NaN for finite input")
    });

    // every candidate ends up somewhere in this subtree, so the distances
    // already computed to `a` give the exact covering radius directly
    let covering_radius = by_dist.iter().map(|(d, _)| *d).fold(0.0_f32, f32::max);

    let mut neighbours: Vec<Point> = Vec::new();
    let mut rest: Vec<Point> = Vec::new();
    for (d_a, c) in by_dist {
        let mut admitted = true;
        for b in &neighbours {
            if d_a >= Euclidean::distance(b, &c)? {
                admitted = false;
                break;
            }
        }
        if admitted {
            neighbours.push(c);
        } else {
            rest.push(c);
        }
    }
    log::trace!(
        "pivot admitted {} neighbour(s), deferred {} descendant(s)",
        neighbours.len(),
        rest.len()
    );

    // Voronoi assignment: each deferred point joins the closest neighbour,
    // ties broken by admission order (earlier wins, via strict `<`)
    let mut buckets: Vec<Vec<Point>> = vec![Vec::new(); neighbours.len()];
    for x in rest {
        let mut best = 0;
        let mut best_dist = f32::INFINITY;
        for (i, b) in neighbours.iter().enumerate() {
            let d = Euclidean::distance(b, &x)?;
            if d < best_dist {
                best_dist = d;
                best = i;
            }
        }
        buckets[best].push(x);
    }

    let mut children = Vec::with_capacity(neighbours.len());
    for (b, bucket) in neighbours.into_iter().zip(buckets) {
        children.push(build_subtree(b, bucket)?);
    }

    Ok(Node {
        point: a,
        neighbours: children,
        covering_radius,
    })
}
