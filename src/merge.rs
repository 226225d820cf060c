use std::cmp::Ordering;

use itertools::EitherOrBoth::{Both, Left, Right};
use itertools::Itertools;
use log::debug;

use crate::insert::{insert, InsertResult};
use crate::node::{Link, Node};

/// Inserts clones of every `source` value into `dest` through the ordinary
/// insertion path.  Values already present in `dest` are kept as they are.
/// Returns the new root and the number of values added.
pub fn merge_by_insertion<'a, T, C, I>(mut dest: Link<T>, source: I, cmp: &C) -> (Link<T>, usize)
where
    T: Clone + 'a,
    C: Fn(&T, &T) -> Ordering,
    I: Iterator<Item = &'a T>,
{
    let mut added = 0;
    for value in source {
        let (root, result) = insert(dest.take(), value.clone(), cmp);
        if let InsertResult::Inserted = result {
            added += 1;
        }
        dest = Some(root);
    }
    debug!("merged {} new values by insertion", added);
    (dest, added)
}

/// Union of an ascending `dest` stream with `source` values in any order.
/// `source` is sorted and deduplicated under `cmp` first, which is linear when
/// it already ascends.  On ties the value from `dest` wins.  Returns a freshly
/// built, perfectly balanced tree and its size.
pub fn union<T, C, D, S>(dest: D, source: S, cmp: &C) -> (Link<T>, usize)
where
    C: Fn(&T, &T) -> Ordering,
    D: Iterator<Item = T>,
    S: Iterator<Item = T>,
{
    let mut source: Vec<T> = source.collect();
    source.sort_by(|a, b| cmp(a, b));
    source.dedup_by(|later, earlier| cmp(&*later, &*earlier) == Ordering::Equal);

    let merged: Vec<T> = dest
        .merge_join_by(source, |a, b| cmp(a, b))
        .map(|either| match either {
            Left(kept) | Both(kept, _) => kept,
            Right(added) => added,
        })
        .collect();

    let len = merged.len();
    debug!("rebuilding union of {} values", len);
    (build_balanced(&mut merged.into_iter(), len), len)
}

/// Builds a tree from the next `n` values of an ascending iterator.  The two
/// halves of every subtree differ in size by at most one, so the result
/// satisfies the height-balance rule without any rotation.
pub fn build_balanced<T, I>(values: &mut I, n: usize) -> Link<T>
where
    I: Iterator<Item = T>,
{
    if n == 0 {
        return None;
    }
    let left = build_balanced(values, n / 2);
    let mut node = Node::leaf(values.next()?);
    node.left = left;
    node.right = build_balanced(values, n - n / 2 - 1);
    node.update_height();
    Some(node)
}
