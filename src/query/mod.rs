//! Query algorithms over a built [`crate::tree::Tree`].

pub mod knn;
pub mod range;

pub use knn::Neighbour;
