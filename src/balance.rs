use log::trace;

/// A binary search tree node that carries AVL metrics.
pub trait Node {
    /// Returns a reference to the node's metrics.
    fn metrics(&self) -> &Metrics;

    /// Returns a mutable reference to the node's metrics.
    fn metrics_mut(&mut self) -> &mut Metrics;

    /// Returns a reference to the node's left child, if any.
    fn left(&self) -> Option<&Self>;

    /// Returns a mutable reference to the node's left child, if any.
    fn left_mut(&mut self) -> Option<&mut Self>;

    /// Returns a reference to the node's right child, if any.
    fn right(&self) -> Option<&Self>;

    /// Returns a mutable reference to the node's right child, if any.
    fn right_mut(&mut self) -> Option<&mut Self>;

    /// Rotates the node to the left, if possible.
    ///
    /// Implementations must leave the metrics of both the demoted and the promoted node
    /// up to date.
    fn rotate_left(&mut self);

    /// Rotates the node to the right, if possible.
    ///
    /// Implementations must leave the metrics of both the demoted and the promoted node
    /// up to date.
    fn rotate_right(&mut self);
}

/// The height of an absent subtree.
pub const EMPTY_HEIGHT: isize = -1;

/// Returns the height of the given subtree, or `EMPTY_HEIGHT` if there is none.
pub fn height<N>(node: Option<&N>) -> isize where N: Node {
    node.map_or(EMPTY_HEIGHT, |node| node.metrics().height)
}

/// Height and balance metadata for a single node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metrics {
    height: isize,
    balance_factor: isize,
}

impl Default for Metrics {
    fn default() -> Self { Metrics { height: 0, balance_factor: 0 } }
}

impl Metrics {
    /// The length of the longest path from the node down to a leaf.
    pub fn height(&self) -> isize { self.height }

    /// The height of the left subtree minus the height of the right subtree.
    pub fn balance_factor(&self) -> isize { self.balance_factor }

    /// Recomputes the node's metrics from its immediate children.
    pub fn update<N>(node: &mut N) where N: Node {
        let left = height(node.left());
        let right = height(node.right());
        *node.metrics_mut() = Metrics { height: left.max(right) + 1, balance_factor: left - right };
    }

    /// Updates the node's metrics after a change in one of its subtrees and restores the
    /// balance invariant at the node with at most one single or double rotation.
    ///
    /// Both subtrees must already be balanced.
    pub fn rebalance<N>(node: &mut N) where N: Node {
        Self::update(node);
        let balance_factor = node.metrics().balance_factor();

        if balance_factor > 1 {
            if node.left().map_or(false, |left| left.metrics().balance_factor() == -1) {
                trace!("left-right rotation");
                if let Some(left) = node.left_mut() { left.rotate_left(); }
            } else {
                trace!("right rotation");
            }
            node.rotate_right();
        } else if balance_factor < -1 {
            if node.right().map_or(false, |right| right.metrics().balance_factor() == 1) {
                trace!("right-left rotation");
                if let Some(right) = node.right_mut() { right.rotate_right(); }
            } else {
                trace!("left rotation");
            }
            node.rotate_left();
        }
    }
}
