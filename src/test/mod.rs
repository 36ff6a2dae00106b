use crate::kdtree::{NodeRef, SpatialIndex, SpatialTree};
use crate::r#type::CoordNum;


/// Panic unless every node's subtrees are on the correct side of its splitting hyperplane and
/// the tree's item count matches its nodes.
pub(crate) fn assert_valid<N: CoordNum>(tree: &SpatialTree<N>) {
    if let Some(root) = tree.root() {
        assert_eq!(root.depth(), 0);
        assert_subtree_valid(root);
    }
    assert_eq!(tree.iter().count(), tree.num_items(), "item count matches nodes");
    assert_eq!(tree.is_empty(), tree.num_items() == 0);
}

fn assert_subtree_valid<N: CoordNum>(node: NodeRef<'_, N>) {
    let axis = node.axis();
    let split = node.coords()[axis];
    if let Some(left) = node.left_child() {
        for point in left.iter() {
            assert!(
                point[axis] < split,
                "{:?} left of {:?} on axis {}",
                point,
                node.point(),
                axis
            );
        }
        assert_subtree_valid(left);
    }
    if let Some(right) = node.right_child() {
        for point in right.iter() {
            assert!(
                point[axis] >= split,
                "{:?} right of {:?} on axis {}",
                point,
                node.point(),
                axis
            );
        }
        assert_subtree_valid(right);
    }
}

/// The smallest Euclidean distance from `target` to any of `points`.
pub(crate) fn brute_force_distance(points: &[Vec<f64>], target: &[f64]) -> f64 {
    points
        .iter()
        .map(|point| {
            point
                .iter()
                .zip(target)
                .map(|(a, b)| (a - b) * (a - b))
                .sum::<f64>()
                .sqrt()
        })
        .fold(f64::INFINITY, f64::min)
}
