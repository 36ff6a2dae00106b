use crate::error::{Result, SpatialTreeError};
use crate::kdtree::node::{check_dimensions, clone_subtree, find_min, Link, Node};
use crate::kdtree::traversal::{Iter, NodeRef};
use crate::r#type::{CoordNum, Point};

/// An incremental, unbalanced K-D tree over points with a fixed number of dimensions.
///
/// At depth `d` every node splits its children on axis `d % K`: points with a strictly smaller
/// value on that axis live in the left subtree, all others in the right subtree. Duplicate points
/// are stored as separate nodes.
///
/// Read-only queries live on the [`SpatialIndex`][crate::kdtree::SpatialIndex] trait.
#[derive(Debug)]
pub struct SpatialTree<N: CoordNum> {
    pub(crate) root: Link<N>,
    pub(crate) dimensions: usize,
    pub(crate) num_items: usize,
}

impl<N: CoordNum> SpatialTree<N> {
    /// Create a new empty tree whose points have `dimensions` coordinates.
    pub fn new(dimensions: usize) -> Result<Self> {
        if dimensions == 0 {
            return Err(SpatialTreeError::InvalidDimensions(dimensions));
        }
        log::debug!("creating {}-dimensional tree", dimensions);
        Ok(Self {
            root: None,
            dimensions,
            num_items: 0,
        })
    }

    /// The number of coordinates of every point in this tree.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// The number of points stored in this tree, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_items
    }

    /// Returns `true` if this tree holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in this tree. An empty tree has height 0.
    pub fn height(&self) -> usize {
        self.root().map_or(0, |root| root.height())
    }

    /// Iterate over every stored point in pre-order.
    pub fn iter(&self) -> Iter<'_, N> {
        Iter::new(self.root())
    }

    /// Access the root node of the tree for manual traversal.
    ///
    /// Returns `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_, N>> {
        self.root
            .as_deref()
            .map(|node| NodeRef::new(node, 0, self.dimensions))
    }

    /// Add a point to the tree.
    ///
    /// The point is copied into a new leaf; no rebalancing takes place.
    pub fn insert(&mut self, point: &[N]) -> Result<()> {
        check_dimensions(self.dimensions, point)?;
        self.insert_point(Point::new(point));
        Ok(())
    }

    /// Insert a point that is already known to have the right number of coordinates.
    pub(crate) fn insert_point(&mut self, point: Point<N>) {
        debug_assert_eq!(point.dimensions(), self.dimensions);
        let depth = insert_into(&mut self.root, point, 0, self.dimensions);
        self.num_items += 1;
        log::trace!("inserted point at depth {}", depth);
    }

    /// Add a coordinate from any type implementing [`CoordTrait`][geo_traits::CoordTrait].
    pub fn insert_coord(&mut self, coord: &impl geo_traits::CoordTrait<T = N>) -> Result<()> {
        let point: Vec<N> = (0..coord.dim().size())
            .map(|n| coord.nth_or_panic(n))
            .collect();
        self.insert(&point)
    }

    /// Remove one node whose coordinates equal `point`.
    ///
    /// When several equal points are stored, the first one met on the descent from the root is
    /// removed. Returns `true` if a node was removed and `false` if `point` was not present.
    pub fn delete(&mut self, point: &[N]) -> Result<bool> {
        check_dimensions(self.dimensions, point)?;
        let removed = delete_from(&mut self.root, point, 0, self.dimensions);
        if removed {
            self.num_items -= 1;
            log::trace!("deleted {:?}", point);
        }
        Ok(removed)
    }

    /// Remove every point, leaving an empty tree with the same number of dimensions.
    ///
    /// Children are destroyed before their parents. Calling this on an empty tree does nothing.
    pub fn clear(&mut self) {
        if self.root.is_none() {
            return;
        }
        log::debug!("clearing tree with {} points", self.num_items);

        let mut stack: Vec<Box<Node<N>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            if node.is_leaf() {
                continue;
            }
            let left = node.left.take();
            let right = node.right.take();
            // Revisit the now childless node after its children are gone.
            stack.push(node);
            stack.extend(left);
            stack.extend(right);
        }
        self.num_items = 0;
    }
}

impl<N: CoordNum> Clone for SpatialTree<N> {
    fn clone(&self) -> Self {
        Self {
            root: clone_subtree(self.root.as_deref()),
            dimensions: self.dimensions,
            num_items: self.num_items,
        }
    }
}

impl<N: CoordNum> Drop for SpatialTree<N> {
    fn drop(&mut self) {
        // Dropping nested boxes recursively could overflow the stack on a degenerate tree.
        self.clear();
    }
}

/// Descend from `slot` and place `point` in the first empty slot. Returns the new node's depth.
fn insert_into<N: CoordNum>(
    slot: &mut Link<N>,
    point: Point<N>,
    depth: usize,
    dimensions: usize,
) -> usize {
    match slot.as_deref_mut() {
        Some(node) => {
            let axis = depth % dimensions;
            let slot = node.slot_towards(point.coords(), axis);
            insert_into(slot, point, depth + 1, dimensions)
        }
        None => {
            *slot = Some(Node::new(point));
            depth
        }
    }
}

fn delete_from<N: CoordNum>(
    slot: &mut Link<N>,
    point: &[N],
    depth: usize,
    dimensions: usize,
) -> bool {
    let Some(node) = slot.as_deref_mut() else {
        return false;
    };
    let axis = depth % dimensions;

    if node.point != *point {
        return delete_from(node.slot_towards(point, axis), point, depth + 1, dimensions);
    }

    if node.right.is_some() {
        // Replace with the minimum on this axis from the right subtree, then remove that
        // minimum from where it came from.
        if let Some(min) = find_min(node.right.as_deref(), axis, depth + 1, dimensions) {
            let replacement = min.point.clone();
            node.point.copy_from(&replacement);
            delete_from(&mut node.right, replacement.coords(), depth + 1, dimensions);
        }
    } else if node.left.is_some() {
        // Same as above using the left subtree. Every remaining point is >= the promoted
        // minimum on this axis, so the subtree has to move to the right side.
        if let Some(min) = find_min(node.left.as_deref(), axis, depth + 1, dimensions) {
            let replacement = min.point.clone();
            node.point.copy_from(&replacement);
            delete_from(&mut node.left, replacement.coords(), depth + 1, dimensions);
            node.right = node.left.take();
        }
    } else {
        *slot = None;
    }
    true
}

impl<'a, N: CoordNum> IntoIterator for &'a SpatialTree<N> {
    type Item = &'a Point<N>;
    type IntoIter = Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
