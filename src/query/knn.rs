//! k-nearest-neighbour search via best-first traversal.
//!
//! Maintains a bounded max-heap of the best `k` candidates found so far (`R`)
//! and a min-heap frontier of unexplored subtrees ordered by an admissible
//! lower bound on the distance from the query to any point inside them.
//! Grounded on `examples/sdd-kiddo/src/float/query/nearest_n.rs`'s recursive
//! best-first search and its `NearestNeighbour`/`BestNeighbour` ordering
//! pattern, generalized from a fixed-radius recursion to an explicit
//! two-heap frontier per the spec's best-first k-NN operation.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::distance::{Euclidean, Metric};
use crate::error::Error;
use crate::point::Point;
use crate::tree::{Node, Tree};

/// One result of a [`Tree::knn`](crate::tree::Tree::knn) query: a point and
/// its distance from the query.
///
/// Ordered by distance so a `BinaryHeap<Neighbour>` is a max-heap on
/// "farthest from the query", matching
/// `examples/sdd-kiddo`'s `NearestNeighbour`/`BestNeighbour` pattern.
#[derive(Debug, Clone)]
pub struct Neighbour {
    /// The point found.
    pub point: Point,
    /// Its distance from the query point.
    pub distance: f32,
}

impl PartialEq for Neighbour {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}
impl Eq for Neighbour {}

impl PartialOrd for Neighbour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.distance.partial_cmp(&other.distance)
    }
}

impl Ord for Neighbour {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

/// A not-yet-visited subtree, ordered (via `Reverse`) by ascending lower
/// bound so the frontier `BinaryHeap` behaves as a min-heap on `lb`.
struct Frontier<'a> {
    lb: f32,
    node: &'a Node,
}

impl PartialEq for Frontier<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.lb == other.lb
    }
}
impl Eq for Frontier<'_> {}

impl PartialOrd for Frontier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.lb.partial_cmp(&other.lb)
    }
}

impl Ord for Frontier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

/// Returns the `k` points of `tree` nearest `query`, ascending by distance.
///
/// Returns fewer than `k` results if the tree holds fewer than `k` points,
/// and an empty `Vec` if `k` is zero. Fails with [`Error::InvalidK`] if `k`
/// is negative.
pub(crate) fn knn(tree: &Tree, query: &Point, k: i64) -> Result<Vec<Neighbour>, Error> {
    if k < 0 {
        return Err(Error::InvalidK(k));
    }
    log::debug!("knn query={query} k={k}");
    if k == 0 {
        return Ok(Vec::new());
    }
    let k = k as usize;

    let mut results: BinaryHeap<Neighbour> = BinaryHeap::with_capacity(k + 1);
    let root_dist = Euclidean::distance(query, &tree.root.point)?;
    let mut frontier: BinaryHeap<Reverse<Frontier>> = BinaryHeap::new();
    frontier.push(Reverse(Frontier {
        lb: lower_bound(root_dist, tree.root.covering_radius),
        node: &tree.root,
    }));

    while let Some(Reverse(Frontier { lb, node })) = frontier.pop() {
        let tau = worst_distance(&results, k);
        if lb > tau {
            log::trace!("frontier exhausted: lb={lb} > tau={tau}");
            break;
        }

        let d_pivot = Euclidean::distance(query, &node.point)?;
        consider(&mut results, k, node.point.clone(), d_pivot);

        let tau = worst_distance(&results, k);
        for child in &node.neighbours {
            let d_child = Euclidean::distance(query, &child.point)?;
            let child_lb = lower_bound(d_child, child.covering_radius);
            if child_lb <= tau {
                frontier.push(Reverse(Frontier {
                    lb: child_lb,
                    node: child,
                }));
            } else {
                log::trace!("lower-bound prune at {}", child.point);
            }
        }
    }

    let mut out: Vec<Neighbour> = results.into_vec();
    out.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
    Ok(out)
}

/// The admissible lower bound on the distance from the query to any point in
/// a subtree whose pivot is `d_pivot` away and whose covering radius is
/// `covering_radius`: `max(0, d_pivot - covering_radius)`.
fn lower_bound(d_pivot: f32, covering_radius: f32) -> f32 {
    (d_pivot - covering_radius).max(0.0)
}

/// The distance of the current worst (farthest) kept result, or `+inf` while
/// fewer than `k` results have been collected.
fn worst_distance(results: &BinaryHeap<Neighbour>, k: usize) -> f32 {
    if results.len() < k {
        f32::INFINITY
    } else {
        results.peek().map(|n| n.distance).unwrap_or(f32::INFINITY)
    }
}

fn consider(results: &mut BinaryHeap<Neighbour>, k: usize, point: Point, distance: f32) {
    if results.len() < k {
        results.push(Neighbour { point, distance });
    } else if let Some(worst) = results.peek() {
        if distance < worst.distance {
            results.pop();
            results.push(Neighbour { point, distance });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build;
    use rand::Rng;

    fn pt(coords: &[f32]) -> Point {
        Point::new(coords.to_vec())
    }

    fn ten_point_tree() -> (Tree, Vec<Point>) {
        let points = vec![
            pt(&[1.0, 1.0]),
            pt(&[3.0, 3.0]),
            pt(&[5.0, 3.0]),
            pt(&[3.0, 4.0]),
            pt(&[6.0, 4.0]),
            pt(&[-3.0, -3.0]),
            pt(&[-3.0, -4.0]),
            pt(&[-5.0, -3.0]),
            pt(&[-4.0, -4.0]),
            pt(&[-1.0, -1.0]),
        ];
        let tree = build(points.clone()).unwrap();
        (tree, points)
    }

    #[test]
    fn negative_k_fails() {
        let (tree, _) = ten_point_tree();
        assert_eq!(
            tree.knn(&pt(&[0.0, 0.0]), -1).unwrap_err(),
            Error::InvalidK(-1)
        );
    }

    #[test]
    fn query_dimension_mismatch_fails() {
        let (tree, _) = ten_point_tree();
        assert_eq!(
            tree.knn(&pt(&[0.0, 0.0, 0.0]), 1).unwrap_err(),
            Error::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    // S6: k=0 returns no results
    #[test]
    fn scenario_s6_zero_k_returns_empty() {
        let (tree, _) = ten_point_tree();
        assert_eq!(tree.knn(&pt(&[0.0, 0.0]), 0).unwrap().len(), 0);
    }

    // S5: 2 nearest neighbours of (-4,-5) are (-4,-4) then (-3,-4)
    #[test]
    fn scenario_s5_two_nearest_neighbours() {
        let (tree, _) = ten_point_tree();
        let got = tree.knn(&pt(&[-4.0, -5.0]), 2).unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].point, pt(&[-4.0, -4.0]));
        assert!((got[0].distance - 1.0).abs() < 1e-6);
        assert_eq!(got[1].point, pt(&[-3.0, -4.0]));
        assert!((got[1].distance - 2.0_f32.sqrt()).abs() < 1e-6);
    }

    // S7: single nearest neighbour in three dimensions
    #[test]
    fn scenario_s7_single_nearest_neighbour_3d() {
        let points = vec![
            pt(&[1.0, 1.0, 1.0]),
            pt(&[3.0, 3.0, 3.0]),
            pt(&[5.0, 3.0, 2.0]),
            pt(&[3.0, 4.0, 1.0]),
            pt(&[6.0, 4.0, 2.0]),
        ];
        let tree = build(points).unwrap();
        let got = tree.knn(&pt(&[1.0, 1.0, 0.0]), 1).unwrap();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].point, pt(&[1.0, 1.0, 1.0]));
        assert!((got[0].distance - 1.0).abs() < 1e-6);
    }

    // property: k >= tree size returns every point, sorted ascending
    #[test]
    fn k_at_least_tree_size_returns_all_points_sorted() {
        let (tree, points) = ten_point_tree();
        let got = tree.knn(&pt(&[0.0, 0.0]), points.len() as i64 + 5).unwrap();
        assert_eq!(got.len(), points.len());
        for w in got.windows(2) {
            assert!(w[0].distance <= w[1].distance);
        }
        for p in &points {
            assert!(got.iter().any(|n| &n.point == p));
        }
    }

    #[test]
    fn results_are_sorted_ascending_by_distance() {
        let (tree, _) = ten_point_tree();
        let got = tree.knn(&pt(&[0.0, 0.0]), 5).unwrap();
        for w in got.windows(2) {
            assert!(w[0].distance <= w[1].distance);
        }
    }

    #[test]
    fn matches_brute_force_oracle() {
        fn linear_search(points: &[Point], query: &Point, k: usize) -> Vec<Neighbour> {
            let mut all: Vec<Neighbour> = points
                .iter()
                .map(|p| Neighbour {
                    point: p.clone(),
                    distance: Euclidean::distance(p, query).unwrap(),
                })
                .collect();
            all.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap());
            all.truncate(k);
            all
        }

        let mut rng = rand::thread_rng();
        let points: Vec<Point> = (0..50)
            .map(|_| {
                pt(&[
                    rng.gen_range(-20.0..20.0),
                    rng.gen_range(-20.0..20.0),
                    rng.gen_range(-20.0..20.0),
                ])
            })
            .collect();
        let tree = build(points.clone()).unwrap();

        for _ in 0..20 {
            let q = pt(&[
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
                rng.gen_range(-20.0..20.0),
            ]);
            let k = rng.gen_range(1..10);
            let expected = linear_search(&points, &q, k);
            let got = tree.knn(&q, k as i64).unwrap();
            assert_eq!(got.len(), expected.len());
            for (g, e) in got.iter().zip(expected.iter()) {
                assert!((g.distance - e.distance).abs() < 1e-4);
            }
        }
    }
}
