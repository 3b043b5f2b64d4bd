#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![doc(html_root_url = "https://docs.rs/satree/0.1.0")]

//! # satree
//!
//! An in-memory [Spatial Approximation Tree](https://en.wikipedia.org/wiki/Spatial_access_method)
//! (SA-Tree) — a metric-space index over a static set of points in a real
//! vector space under Euclidean distance.
//!
//! satree is ideal for applications that build an index once from a batch
//! of points and then issue many read-only proximity queries:
//!  - [`Tree::range_search`] returns *some* point within a given radius of a
//!    query (a membership witness, not an exhaustive match list);
//!  - [`Tree::knn`] returns the `k` nearest points to a query, sorted by
//!    ascending distance.
//!
//! ## Usage
//!
//! ```rust
//! use satree::{build, Point};
//!
//! let points = vec![
//!     Point::new(vec![3.0, 3.0]),
//!     Point::new(vec![5.0, 3.0]),
//!     Point::new(vec![2.0, 2.0]),
//!     Point::new(vec![4.0, 4.0]),
//! ];
//!
//! let tree = build(points).unwrap();
//! assert_eq!(tree.dump_text(), "{(4, 4)}({(3, 3)}({(2, 2)}),{(5, 3)})");
//!
//! let nearest = tree.knn(&Point::new(vec![4.0, 4.0]), 1).unwrap();
//! assert_eq!(nearest[0].distance, 0.0);
//! ```
//!
//! ## Scope
//!
//! The tree is built once from a batch of points and is read-only
//! thereafter: there is no dynamic insertion/deletion, no persistence
//! format, and no metric other than Euclidean. See the module docs of
//! [`builder`] and [`query`] for the construction and traversal algorithms.

pub mod builder;
pub mod distance;
pub mod error;
pub mod point;
pub mod query;
pub mod tree;

pub use builder::build;
pub use distance::{Euclidean, Metric};
pub use error::Error;
pub use point::Point;
pub use query::Neighbour;
pub use tree::Tree;
