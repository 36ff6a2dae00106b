use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpatialTreeError {
    /// A point did not have as many coordinates as the tree has dimensions.
    #[error("Dimension mismatch: expected a point with {expected} coordinates, got {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A nearest neighbor query was made against a tree without any points.
    #[error("Cannot query an empty tree")]
    EmptyTree,

    /// A tree was configured with an unusable number of dimensions.
    #[error("A tree must have at least one dimension, got {0}")]
    InvalidDimensions(usize),
}

pub type Result<T> = std::result::Result<T, SpatialTreeError>;
