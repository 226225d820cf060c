use std::cmp::Ordering;

use log::trace;

use crate::balance::rebalance;
use crate::node::{Link, Node};

#[derive(Debug, PartialEq, Eq)]
pub enum RemoveResult<T> {
    NotFound,
    Removed(T),
}

use RemoveResult::{NotFound, Removed};

/// Removes the value equal to `value` from the subtree owned by `link`,
/// returning the new owner of the subtree.  Unlike insertion, the height may
/// shrink at every level, so each unwound frame is rebalanced.
pub fn remove<T, C>(link: Link<T>, value: &T, cmp: &C) -> (Link<T>, RemoveResult<T>)
where
    C: Fn(&T, &T) -> Ordering,
{
    let mut node = match link {
        Some(node) => node,
        None => return (None, NotFound),
    };

    let result = match cmp(value, &node.value) {
        Ordering::Less => {
            let (left, result) = remove(node.left.take(), value, cmp);
            node.left = left;
            result
        }
        Ordering::Greater => {
            let (right, result) = remove(node.right.take(), value, cmp);
            node.right = right;
            result
        }
        Ordering::Equal => return remove_node(node),
    };

    match result {
        NotFound => (Some(node), NotFound),
        removed => (Some(rebalance(node)), removed),
    }
}

fn remove_node<T>(mut node: Box<Node<T>>) -> (Link<T>, RemoveResult<T>) {
    match (node.left.take(), node.right.take()) {
        (None, None) => {
            trace!("removing leaf");
            let Node { value, .. } = *node;
            (None, Removed(value))
        }
        (Some(child), None) | (None, Some(child)) => {
            trace!("splicing out node with one child");
            let Node { value, .. } = *node;
            (Some(child), Removed(value))
        }
        (Some(left), Some(right)) => {
            // The in-order successor takes this node's place; it has no left
            // child, so pulling it out of `right` is one of the simple cases.
            //
            trace!("replacing node with its in-order successor");
            let (right, successor) = remove_min(right);
            let removed = std::mem::replace(&mut node.value, successor);
            node.left = Some(left);
            node.right = right;
            (Some(rebalance(node)), Removed(removed))
        }
    }
}

/// Detaches the leftmost node of the subtree, returning the remaining subtree
/// and the detached value.
pub fn remove_min<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (right, value)
        }
        Some(left) => {
            let (left, min) = remove_min(left);
            node.left = left;
            (Some(rebalance(node)), min)
        }
    }
}
