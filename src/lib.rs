#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
mod r#type;

pub use error::{Result, SpatialTreeError};
pub use kdtree::{SpatialIndex, SpatialTree, SpatialTreeBuilder};
pub use r#type::{CoordNum, Point};

#[cfg(test)]
pub(crate) mod test;
