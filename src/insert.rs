use std::cmp::Ordering;

use crate::balance::rebalance;
use crate::node::{Link, Node};

#[derive(Debug, PartialEq, Eq)]
pub enum InsertResult<T> {
    Inserted,
    // Equal value already stored; the rejected value is handed back.
    Present(T),
}

use InsertResult::{Inserted, Present};

pub fn insert<T, C>(link: Link<T>, value: T, cmp: &C) -> (Box<Node<T>>, InsertResult<T>)
where
    C: Fn(&T, &T) -> Ordering,
{
    let mut node = match link {
        Some(node) => node,
        None => return (Node::leaf(value), Inserted),
    };

    let result = match cmp(&value, &node.value) {
        Ordering::Less => {
            let (left, result) = insert(node.left.take(), value, cmp);
            node.left = Some(left);
            result
        }
        Ordering::Greater => {
            let (right, result) = insert(node.right.take(), value, cmp);
            node.right = Some(right);
            result
        }
        Ordering::Equal => return (node, Present(value)),
    };

    match result {
        Inserted => (rebalance(node), Inserted),
        present => (node, present),
    }
}
