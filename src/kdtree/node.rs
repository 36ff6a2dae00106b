//! Owned node storage and the comparison helpers shared by every tree operation.

use crate::error::{Result, SpatialTreeError};
use crate::r#type::{euclidean_distance, to_f64, CoordNum, Point};

/// A link to an optional, exclusively owned child.
pub(crate) type Link<N> = Option<Box<Node<N>>>;

/// A single node of the tree. Each node owns its point and both of its children.
#[derive(Debug)]
pub(crate) struct Node<N: CoordNum> {
    pub(crate) point: Point<N>,
    pub(crate) left: Link<N>,
    pub(crate) right: Link<N>,
}

impl<N: CoordNum> Node<N> {
    pub(crate) fn new(point: Point<N>) -> Box<Self> {
        Box::new(Self {
            point,
            left: None,
            right: None,
        })
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The child on the side of this node's splitting hyperplane that `point` falls on, followed
    /// by the opposite child.
    #[inline]
    pub(crate) fn children_towards(&self, point: &[N], axis: usize) -> (&Link<N>, &Link<N>) {
        if goes_left(point, &self.point, axis) {
            (&self.left, &self.right)
        } else {
            (&self.right, &self.left)
        }
    }

    /// The mutable child slot that `point` descends into.
    #[inline]
    pub(crate) fn slot_towards(&mut self, point: &[N], axis: usize) -> &mut Link<N> {
        if goes_left(point, &self.point, axis) {
            &mut self.left
        } else {
            &mut self.right
        }
    }
}

/// Strictly smaller values go left, everything else goes right.
#[inline]
pub(crate) fn goes_left<N: CoordNum>(point: &[N], node: &Point<N>, axis: usize) -> bool {
    point[axis] < node[axis]
}

/// Distance from `point` to the splitting hyperplane of `node` on `axis`.
#[inline]
pub(crate) fn hyperplane_distance<N: CoordNum>(point: &[N], node: &Point<N>, axis: usize) -> f64 {
    (to_f64(point[axis]) - to_f64(node[axis])).abs()
}

#[inline]
pub(crate) fn node_distance<N: CoordNum>(point: &[N], node: &Node<N>) -> f64 {
    euclidean_distance(point, node.point.coords())
}

/// Reject points that don't have exactly `expected` coordinates.
pub(crate) fn check_dimensions<N: CoordNum>(expected: usize, point: &[N]) -> Result<()> {
    if point.len() != expected {
        log::warn!(
            "rejected point with {} coordinates for a {}-dimensional tree",
            point.len(),
            expected
        );
        return Err(SpatialTreeError::DimensionMismatch {
            expected,
            found: point.len(),
        });
    }
    Ok(())
}

/// Find the node holding the minimum value on `target_axis` within the subtree rooted at `node`,
/// which sits at `depth`.
///
/// Where the subtree splits on `target_axis` only its left half can hold smaller values, so the
/// right half is skipped. Ties keep the first candidate in pre-order: a node beats anything in
/// its subtrees and the left subtree beats the right one.
pub(crate) fn find_min<N: CoordNum>(
    node: Option<&Node<N>>,
    target_axis: usize,
    depth: usize,
    dimensions: usize,
) -> Option<&Node<N>> {
    let node = node?;
    let axis = depth % dimensions;

    let left = find_min(node.left.as_deref(), target_axis, depth + 1, dimensions);
    let min = min_on_axis(node, left, target_axis);
    if axis == target_axis {
        return min;
    }

    let right = find_min(node.right.as_deref(), target_axis, depth + 1, dimensions);
    min_on_axis_opt(min, right, target_axis)
}

#[inline]
fn min_on_axis<'a, N: CoordNum>(
    current: &'a Node<N>,
    candidate: Option<&'a Node<N>>,
    axis: usize,
) -> Option<&'a Node<N>> {
    min_on_axis_opt(Some(current), candidate, axis)
}

/// `b` only replaces `a` when it is strictly smaller.
#[inline]
fn min_on_axis_opt<'a, N: CoordNum>(
    a: Option<&'a Node<N>>,
    b: Option<&'a Node<N>>,
    axis: usize,
) -> Option<&'a Node<N>> {
    match (a, b) {
        (Some(a), Some(b)) if b.point[axis] < a.point[axis] => Some(b),
        (Some(a), _) => Some(a),
        (None, b) => b,
    }
}

/// Deep copy of the subtree rooted at `node`.
///
/// Subtrees are rebuilt bottom-up from an explicit stack, so the copy never recurses once per
/// level.
pub(crate) fn clone_subtree<N: CoordNum>(node: Option<&Node<N>>) -> Link<N> {
    enum Step<'a, N: CoordNum> {
        Enter(Option<&'a Node<N>>),
        Exit(&'a Node<N>),
    }

    let mut steps = vec![Step::Enter(node)];
    let mut built: Vec<Link<N>> = Vec::new();
    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(None) => built.push(None),
            Step::Enter(Some(node)) => {
                steps.push(Step::Exit(node));
                steps.push(Step::Enter(node.right.as_deref()));
                steps.push(Step::Enter(node.left.as_deref()));
            }
            Step::Exit(node) => {
                // The left copy was finished first, so it sits below the right one.
                let right = built.pop().flatten();
                let left = built.pop().flatten();
                built.push(Some(Box::new(Node {
                    point: node.point.clone(),
                    left,
                    right,
                })));
            }
        }
    }
    built.pop().flatten()
}
