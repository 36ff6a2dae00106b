//! An implementation of an incremental, unbalanced K-D Tree.

#![warn(missing_docs)]

mod builder;
mod index;
mod node;
mod r#trait;
mod traversal;

pub use builder::SpatialTreeBuilder;
pub use index::SpatialTree;
pub use r#trait::SpatialIndex;
pub use traversal::{Iter, NodeRef};
