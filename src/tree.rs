use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use log::debug;

use crate::error::{TreeError, TreeResult};
use crate::insert::{insert, InsertResult};
use crate::merge::{merge_by_insertion, union};
use crate::node::{self, Link};
use crate::remove::{remove, RemoveResult};
use crate::traverse::{Inorder, IntoIter, LevelOrder, Postorder, Preorder};
use crate::Height;

pub type NaturalOrder<T> = fn(&T, &T) -> Ordering;

/// A height-balanced binary search tree holding unique values.
#[derive(Clone)]
pub struct AvlTree<T, C = NaturalOrder<T>> {
    root: Link<T>,
    len: usize,
    cmp: C,
}

/// Builds a tree from a list of values, inserting them left to right.
///
/// ```
/// let t = avltree::avltree![30, 20, 40];
/// assert_eq!(t.root(), Ok(&30));
/// ```
#[macro_export]
macro_rules! avltree {
    () => {
        $crate::AvlTree::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::AvlTree::from_values(vec![$($x),+])
    };
}

impl<T: Ord> AvlTree<T> {
    pub fn new() -> Self {
        Self::with_comparator(T::cmp)
    }

    pub fn from_value(value: T) -> Self {
        let mut tree = Self::new();
        tree.insert(value);
        tree
    }

    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut tree = Self::new();
        tree.extend(values);
        tree
    }
}

impl<T: Ord> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: None,
            len: 0,
            cmp,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn height(&self) -> Height {
        node::height(&self.root)
    }

    pub fn root(&self) -> TreeResult<&T> {
        self.root
            .as_ref()
            .map(|node| &node.value)
            .ok_or(TreeError::Empty)
    }

    pub fn contains(&self, value: &T) -> bool {
        node::find(&self.root, value, &self.cmp).is_some()
    }

    pub fn find(&self, value: &T) -> TreeResult<&T> {
        node::find(&self.root, value, &self.cmp).ok_or(TreeError::NotFound)
    }

    /// Mutable access to the stored value equal to `value`.
    ///
    /// Only parts of the value that do not take part in the comparison may be
    /// changed; altering its ordering leaves the tree corrupted.
    pub fn find_mut(&mut self, value: &T) -> TreeResult<&mut T> {
        node::find_mut(&mut self.root, value, &self.cmp).ok_or(TreeError::NotFound)
    }

    pub fn find_min(&self) -> TreeResult<&T> {
        node::min(&self.root).ok_or(TreeError::Empty)
    }

    pub fn find_max(&self) -> TreeResult<&T> {
        node::max(&self.root).ok_or(TreeError::Empty)
    }

    pub fn insert(&mut self, value: T) -> bool {
        let (root, result) = insert(self.root.take(), value, &self.cmp);
        self.root = Some(root);
        match result {
            InsertResult::Inserted => {
                self.len += 1;
                true
            }
            InsertResult::Present(_) => false,
        }
    }

    pub fn erase(&mut self, value: &T) -> TreeResult<T> {
        if self.root.is_none() {
            return Err(TreeError::NotFound);
        }
        let (root, result) = remove(self.root.take(), value, &self.cmp);
        self.root = root;
        match result {
            RemoveResult::Removed(removed) => {
                self.len -= 1;
                Ok(removed)
            }
            RemoveResult::NotFound => Err(TreeError::NotFound),
        }
    }

    pub fn clear(&mut self) {
        debug!("clearing {} nodes", self.len);
        self.root = None;
        self.len = 0;
    }

    pub fn merge<D>(&mut self, other: &AvlTree<T, D>)
    where
        T: Clone,
        D: Fn(&T, &T) -> Ordering,
    {
        let (root, added) = merge_by_insertion(self.root.take(), other.preorder(), &self.cmp);
        self.root = root;
        self.len += added;
    }

    /// Consumes both trees and returns their union ordered by `self`'s
    /// comparator.  On ties the value from `self` is kept.  Linear when `other`
    /// ascends under the same relation; otherwise its values are re-sorted.
    pub fn union<D>(self, other: AvlTree<T, D>) -> Self
    where
        D: Fn(&T, &T) -> Ordering,
    {
        let AvlTree { root, len, cmp } = self;
        debug!("union of {} and {} values", len, other.len);
        let (root, len) = union(IntoIter::new(root, len), other.into_iter(), &cmp);
        Self { root, len, cmp }
    }

    pub fn take(&mut self) -> Self
    where
        C: Clone,
    {
        Self {
            root: self.root.take(),
            len: std::mem::replace(&mut self.len, 0),
            cmp: self.cmp.clone(),
        }
    }

    pub fn iter(&self) -> Inorder<'_, T> {
        self.inorder()
    }

    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(&self.root, self.len)
    }

    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(&self.root, self.len)
    }

    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(&self.root, self.len)
    }

    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(&self.root, self.len)
    }

    /// Panics unless the tree is ordered, balanced, its cached heights are
    /// current and `len()` matches the number of nodes.
    pub fn check_invariants(&self) {
        let count = match &self.root {
            Some(root) => root.check_invariants(&self.cmp, None, None).1,
            None => 0,
        };
        assert_eq!(self.len, count, "size does not match node count");
    }
}

impl<T, C> Extend<T> for AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from_values(values)
    }
}

impl<T, C> IntoIterator for AvlTree<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.root, self.len)
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Inorder<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for AvlTree<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set()
            .entries(Inorder::new(&self.root, self.len))
            .finish()
    }
}

impl<T: PartialEq, C, D> PartialEq<AvlTree<T, D>> for AvlTree<T, C> {
    fn eq(&self, other: &AvlTree<T, D>) -> bool {
        self.len == other.len
            && Inorder::new(&self.root, self.len).eq(Inorder::new(&other.root, other.len))
    }
}

impl<T: Eq, C> Eq for AvlTree<T, C> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_test() {
        let mut t: AvlTree<i32> = AvlTree::new();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert_eq!(t.height(), 0);
        assert_eq!(t.root(), Err(TreeError::Empty));
        assert_eq!(t.find_min(), Err(TreeError::Empty));
        assert_eq!(t.find_max(), Err(TreeError::Empty));
        assert_eq!(t.find(&1), Err(TreeError::NotFound));
        assert_eq!(t.erase(&1), Err(TreeError::NotFound));
        assert_eq!(t.iter().count(), 0);
        t.check_invariants();
    }

    #[test]
    fn from_value_test() {
        let t = AvlTree::from_value("x");
        assert_eq!(t.len(), 1);
        assert_eq!(t.root(), Ok(&"x"));
        assert_eq!(t.height(), 1);
    }

    #[test]
    fn macro_test() {
        let t = avltree![3, 1, 2, 1];
        assert_eq!(t.len(), 3);
        assert_eq!(t.iter().cloned().collect::<Vec<i32>>(), vec![1, 2, 3]);

        let e: AvlTree<u8> = avltree![];
        assert!(e.is_empty());
    }

    #[test]
    fn comparator_test() {
        let mut t = AvlTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        t.extend(vec![1, 5, 3, 4, 2]);
        t.check_invariants();
        assert_eq!(t.iter().cloned().collect::<Vec<i32>>(), vec![5, 4, 3, 2, 1]);
        assert_eq!(t.find_min(), Ok(&5));
        assert_eq!(t.find_max(), Ok(&1));
    }

    #[test]
    fn find_mut_test() {
        #[derive(Debug)]
        struct Entry {
            key: u32,
            hits: u32,
        }
        let mut t = AvlTree::with_comparator(|a: &Entry, b: &Entry| a.key.cmp(&b.key));
        for key in 0..10 {
            t.insert(Entry { key, hits: 0 });
        }

        let probe = Entry { key: 7, hits: 0 };
        if let Ok(entry) = t.find_mut(&probe) {
            entry.hits += 1;
        }
        assert_eq!(t.find(&probe).map(|e| e.hits), Ok(1));
        assert_eq!(
            t.find_mut(&Entry { key: 70, hits: 0 }).map(|e| e.hits),
            Err(TreeError::NotFound)
        );
        t.check_invariants();
    }

    #[test]
    fn clone_independence_test() {
        let original = avltree![5, 3, 8, 1, 4];
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.insert(10);
        assert_eq!(copy.erase(&3), Ok(3));
        copy.check_invariants();

        assert_eq!(original.len(), 5);
        assert!(original.contains(&3));
        assert!(!original.contains(&10));
        original.check_invariants();
    }

    #[test]
    fn union_with_other_comparator_test() {
        let mut reversed = AvlTree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        reversed.extend(vec![2, 3, 4]);
        assert_eq!(reversed.iter().cloned().collect::<Vec<i32>>(), vec![4, 3, 2]);

        let u = avltree![1, 2, 3].union(reversed);
        u.check_invariants();
        assert_eq!(u.len(), 4);
        assert_eq!(u.iter().cloned().collect::<Vec<i32>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn take_test() {
        let mut source = avltree![1, 2, 3];
        let moved = source.take();
        assert!(source.is_empty());
        assert_eq!(source.len(), 0);
        source.check_invariants();
        assert_eq!(moved.len(), 3);
        moved.check_invariants();

        source.insert(9);
        assert_eq!(source.root(), Ok(&9));
    }

    #[test]
    fn clear_test() {
        let mut t: AvlTree<i32> = (0..100).collect();
        assert_eq!(t.len(), 100);
        t.clear();
        assert!(t.is_empty());
        t.check_invariants();
        assert!(t.insert(1));
    }

    #[test]
    fn debug_test() {
        let t = avltree![2, 1, 3];
        assert_eq!(format!("{:?}", t), "{1, 2, 3}");
    }

    #[test]
    fn into_iter_test() {
        let t = avltree![20, 10, 30, 25];
        let mut seen = Vec::new();
        for v in &t {
            seen.push(*v);
        }
        assert_eq!(seen, vec![10, 20, 25, 30]);
        assert_eq!(t.into_iter().collect::<Vec<i32>>(), vec![10, 20, 25, 30]);
    }
}
