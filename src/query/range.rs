//! Range search: find *some* point within a radius of a query, or prove none
//! exists, via pruned depth-first search.
//!
//! Grounded on the SA-Tree range-search algorithm (digression-bound pruning
//! plus covering-radius pruning); see `examples/original_source/SATree.h`'s
//! `search` method and the spec's range-search operation.

use crate::distance::{Euclidean, Metric};
use crate::error::Error;
use crate::point::Point;
use crate::tree::{Node, Tree};

/// Returns some point in `tree` within `radius` of `query`, or `None`.
///
/// Not guaranteed to be the closest point, nor does it enumerate every point
/// within range; it stops at the first match it finds via DFS. Fails with
/// [`Error::InvalidRadius`] if `radius` is negative or NaN.
pub(crate) fn range_search(
    tree: &Tree,
    query: &Point,
    radius: f32,
) -> Result<Option<Point>, Error> {
    if radius < 0.0 || radius.is_nan() {
        return Err(Error::InvalidRadius(radius));
    }
    log::debug!("range_search query={query} radius={radius}");
    let found = search(&tree.root, query, radius, f32::INFINITY)?;
    log::debug!("range_search found={}", found.is_some());
    Ok(found)
}

/// `digression` is the smallest `dist(query, pivot)` seen along the path
/// from the root to `node`'s parent; it bounds how far `query` could be from
/// any point this search has already committed to descending past.
fn search(
    node: &Node,
    query: &Point,
    radius: f32,
    digression: f32,
) -> Result<Option<Point>, Error> {
    let d_pivot = Euclidean::distance(query, &node.point)?;
    if d_pivot <= radius {
        return Ok(Some(node.point.clone()));
    }

    let digression = digression.min(d_pivot);
    for child in &node.neighbours {
        let d_child = Euclidean::distance(query, &child.point)?;
        if d_child > child.covering_radius + radius {
            log::trace!("covering-radius prune at {}", child.point);
            continue;
        }
        if d_child > 2.0 * digression + radius {
            log::trace!("digression prune at {}", child.point);
            continue;
        }
        if let Some(found) = search(child, query, radius, digression)? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}
