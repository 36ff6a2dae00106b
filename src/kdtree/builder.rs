use crate::error::{Result, SpatialTreeError};
use crate::kdtree::node::check_dimensions;
use crate::kdtree::SpatialTree;
use crate::r#type::{CoordNum, Point};

const DEFAULT_CAPACITY: usize = 16;

/// A builder to create a [`SpatialTree`].
///
/// Points are validated as they are added and inserted in the order they were added when the
/// builder is finished. No balancing is performed, so the shape of the resulting tree depends on
/// that order.
#[derive(Debug, Clone)]
pub struct SpatialTreeBuilder<N: CoordNum> {
    points: Vec<Point<N>>,
    dimensions: usize,
}

impl<N: CoordNum> SpatialTreeBuilder<N> {
    /// Create a new builder for points with `dimensions` coordinates.
    pub fn new(dimensions: usize) -> Result<Self> {
        Self::new_with_capacity(dimensions, DEFAULT_CAPACITY)
    }

    /// Create a new builder, reserving space for `capacity` points up front.
    pub fn new_with_capacity(dimensions: usize, capacity: usize) -> Result<Self> {
        if dimensions == 0 {
            return Err(SpatialTreeError::InvalidDimensions(dimensions));
        }
        Ok(Self {
            points: Vec::with_capacity(capacity),
            dimensions,
        })
    }

    /// Add a point to the index. Returns the insertion index of the point.
    pub fn add(&mut self, point: &[N]) -> Result<usize> {
        check_dimensions(self.dimensions, point)?;
        let index = self.points.len();
        self.points.push(Point::new(point));
        Ok(index)
    }

    /// Add every point of an interleaved coordinate buffer, `dimensions` values per point.
    pub fn add_interleaved(&mut self, coords: &[N]) -> Result<()> {
        // Only a trailing partial point can be short; check it before adding anything.
        if let Some(last) = coords.chunks(self.dimensions).last() {
            check_dimensions(self.dimensions, last)?;
        }
        self.points.extend(coords.chunks(self.dimensions).map(Point::new));
        Ok(())
    }

    /// The number of points added so far.
    pub fn num_items(&self) -> usize {
        self.points.len()
    }

    /// Consume this builder, inserting every added point into a new tree.
    pub fn finish(self) -> SpatialTree<N> {
        log::debug!(
            "building {}-dimensional tree from {} points",
            self.dimensions,
            self.points.len()
        );
        let mut tree = SpatialTree {
            root: None,
            dimensions: self.dimensions,
            num_items: 0,
        };
        for point in self.points {
            tree.insert_point(point);
        }
        tree
    }
}
