//! Utilities to traverse the tree structure.

use crate::kdtree::node::Node;
use crate::r#type::{CoordNum, Point};

/// A read-only view onto a node of a [`SpatialTree`][crate::kdtree::SpatialTree].
///
/// The view knows the node's depth, and with it the axis its children are split over.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a, N: CoordNum> {
    node: &'a Node<N>,
    depth: usize,
    dimensions: usize,
}

impl<'a, N: CoordNum> NodeRef<'a, N> {
    pub(crate) fn new(node: &'a Node<N>, depth: usize, dimensions: usize) -> Self {
        Self {
            node,
            depth,
            dimensions,
        }
    }

    pub(crate) fn node(&self) -> &'a Node<N> {
        self.node
    }

    /// The point stored in this node.
    #[inline]
    pub fn point(&self) -> &'a Point<N> {
        &self.node.point
    }

    /// The coordinates of the point stored in this node.
    #[inline]
    pub fn coords(&self) -> &'a [N] {
        self.node.point.coords()
    }

    /// Distance from the root, which has depth 0.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The axis that the children of this node are split over.
    #[inline]
    pub fn axis(&self) -> usize {
        self.depth % self.dimensions
    }

    /// The number of coordinates of every point below this node.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// The child holding points strictly smaller than this node on [`axis`][Self::axis].
    pub fn left_child(&self) -> Option<NodeRef<'a, N>> {
        self.child(self.node.left.as_deref())
    }

    /// The child holding points greater than or equal to this node on [`axis`][Self::axis].
    pub fn right_child(&self) -> Option<NodeRef<'a, N>> {
        self.child(self.node.right.as_deref())
    }

    #[inline]
    fn child(&self, node: Option<&'a Node<N>>) -> Option<NodeRef<'a, N>> {
        node.map(|node| NodeRef::new(node, self.depth + 1, self.dimensions))
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }

    /// The number of levels in the subtree rooted at this node, counting this node.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self.node, 1)];
        while let Some((node, level)) = stack.pop() {
            height = height.max(level);
            stack.extend(node.left.as_deref().map(|child| (child, level + 1)));
            stack.extend(node.right.as_deref().map(|child| (child, level + 1)));
        }
        height
    }

    /// Iterate over every point in the subtree rooted at this node, in pre-order.
    pub fn iter(&self) -> Iter<'a, N> {
        Iter::new(Some(*self))
    }
}

/// A pre-order iterator over the points of a tree or subtree.
#[derive(Debug, Clone)]
pub struct Iter<'a, N: CoordNum> {
    stack: Vec<&'a Node<N>>,
}

impl<'a, N: CoordNum> Iter<'a, N> {
    pub(crate) fn new(root: Option<NodeRef<'a, N>>) -> Self {
        Self {
            stack: root.map(|root| root.node()).into_iter().collect(),
        }
    }
}

impl<'a, N: CoordNum> Iterator for Iter<'a, N> {
    type Item = &'a Point<N>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is visited first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.point)
    }
}
