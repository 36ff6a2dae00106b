use geo_traits::CoordTrait;

use crate::error::{Result, SpatialTreeError};
use crate::kdtree::node::{check_dimensions, hyperplane_distance, node_distance, Node};
use crate::kdtree::{NodeRef, SpatialTree};
use crate::r#type::{CoordNum, Point};

/// A trait for searching and accessing data out of a tree or one of its subtrees.
pub trait SpatialIndex<N: CoordNum>: Sized {
    /// The number of coordinates of every point in this index
    fn dimensions(&self) -> usize;

    /// The number of points in this index
    fn num_items(&self) -> usize;

    /// Access the root node for manual traversal, or `None` if there are no points.
    fn root(&self) -> Option<NodeRef<'_, N>>;

    /// Returns `true` if a point with exactly these coordinates is stored.
    ///
    /// Points that aren't present are not an error; this only fails if `point` has the wrong
    /// number of coordinates.
    fn search(&self, point: &[N]) -> Result<bool> {
        check_dimensions(self.dimensions(), point)?;
        let Some(root) = self.root() else {
            return Ok(false);
        };

        let mut depth = root.depth();
        let mut current = Some(root.node());
        while let Some(node) = current {
            if node.point == *point {
                return Ok(true);
            }
            let (next, _) = node.children_towards(point, depth % self.dimensions());
            current = next.as_deref();
            depth += 1;
        }
        Ok(false)
    }

    /// Search for a point from any type implementing [`CoordTrait`].
    fn search_coord(&self, coord: &impl CoordTrait<T = N>) -> Result<bool> {
        self.search(&coord_to_vec(coord))
    }

    /// Find the stored point closest to `target` under Euclidean distance.
    ///
    /// When several points are equally close, the one found first wins: the subtree on the
    /// target's side of a split is preferred over the node itself, which is preferred over the
    /// opposite subtree.
    fn nearest_neighbor(&self, target: &[N]) -> Result<Point<N>> {
        self.nearest_neighbor_with_distance(target)
            .map(|(point, _)| point)
    }

    /// Like [`nearest_neighbor`][Self::nearest_neighbor], also returning the distance to the
    /// found point.
    fn nearest_neighbor_with_distance(&self, target: &[N]) -> Result<(Point<N>, f64)> {
        check_dimensions(self.dimensions(), target)?;
        let root = self.root().ok_or(SpatialTreeError::EmptyTree)?;
        let (node, distance) =
            nearest(root.node(), target, root.depth(), self.dimensions());
        Ok((node.point.clone(), distance))
    }

    /// Find the stored point closest to any type implementing [`CoordTrait`].
    fn nearest_neighbor_coord(&self, coord: &impl CoordTrait<T = N>) -> Result<Point<N>> {
        self.nearest_neighbor(&coord_to_vec(coord))
    }
}

impl<N: CoordNum> SpatialIndex<N> for SpatialTree<N> {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn num_items(&self) -> usize {
        self.num_items
    }

    fn root(&self) -> Option<NodeRef<'_, N>> {
        SpatialTree::root(self)
    }
}

impl<N: CoordNum> SpatialIndex<N> for NodeRef<'_, N> {
    fn dimensions(&self) -> usize {
        NodeRef::dimensions(self)
    }

    fn num_items(&self) -> usize {
        self.iter().count()
    }

    fn root(&self) -> Option<NodeRef<'_, N>> {
        Some(*self)
    }
}

/// Branch-and-bound nearest neighbor search below `node`.
///
/// The subtree on the target's side is searched first. The opposite subtree is only searched
/// when the best distance so far reaches the splitting hyperplane.
fn nearest<'a, N: CoordNum>(
    node: &'a Node<N>,
    target: &[N],
    depth: usize,
    dimensions: usize,
) -> (&'a Node<N>, f64) {
    let axis = depth % dimensions;
    let (near, far) = node.children_towards(target, axis);

    let here = (node, node_distance(target, node));
    let mut best = match near.as_deref() {
        Some(child) => {
            let candidate = nearest(child, target, depth + 1, dimensions);
            if here.1 < candidate.1 {
                here
            } else {
                candidate
            }
        }
        None => here,
    };

    if best.1 >= hyperplane_distance(target, &node.point, axis) {
        if let Some(child) = far.as_deref() {
            let candidate = nearest(child, target, depth + 1, dimensions);
            if candidate.1 < best.1 {
                best = candidate;
            }
        }
    }
    best
}

fn coord_to_vec<N: CoordNum>(coord: &impl CoordTrait<T = N>) -> Vec<N> {
    (0..coord.dim().size())
        .map(|n| coord.nth_or_panic(n))
        .collect()
}
