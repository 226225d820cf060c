use log::trace;

use crate::node::Node;

// Single rotation lifting the `$up` child of `x` into its place.  The lifted
// node's `$down` subtree is handed over to `x`, and `x` becomes its `$down`
// child.  Only the two rotated nodes need their heights refreshed.
//
macro_rules! rotate {
    ($name:ident, $up:ident, $down:ident) => {
        pub(crate) fn $name<T>(mut x: Box<Node<T>>) -> Box<Node<T>> {
            let mut y = match x.$up.take() {
                Some(y) => y,
                None => {
                    debug_assert!(false, "rotation without a child to lift");
                    return x;
                }
            };
            x.$up = y.$down.take();
            x.update_height();
            y.$down = Some(x);
            y.update_height();
            y
        }
    };
}

rotate!(rotate_left, right, left);
rotate!(rotate_right, left, right);

/// Refreshes the cached height of `node` and, if its balance factor has
/// drifted to +/-2, applies the single or double rotation that restores it.
/// Returns the new owner of the subtree.
pub fn rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    node.update_height();
    let bf = node.balance_factor();

    if bf > 1 {
        // Left heavy.
        //
        if let Some(left) = node.left.take() {
            if left.balance_factor() < 0 {
                trace!("left-right rotation (bf={})", bf);
                node.left = Some(rotate_left(left));
            } else {
                trace!("right rotation (bf={})", bf);
                node.left = Some(left);
            }
        }
        rotate_right(node)
    } else if bf < -1 {
        // Right heavy.
        //
        if let Some(right) = node.right.take() {
            if right.balance_factor() > 0 {
                trace!("right-left rotation (bf={})", bf);
                node.right = Some(rotate_right(right));
            } else {
                trace!("left rotation (bf={})", bf);
                node.right = Some(right);
            }
        }
        rotate_left(node)
    } else {
        node
    }
}
