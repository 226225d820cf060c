use std::collections::VecDeque;
use std::iter::FusedIterator;

use smallvec::SmallVec;

use crate::node::{Link, Node};

// Deep enough for any AVL tree that fits in memory without spilling; the
// vector still grows if it has to.
//
const STACK_SIZE: usize = 32;

macro_rules! exact_size {
    ($iter:ident) => {
        impl<'a, T> Iterator for $iter<'a, T> {
            type Item = &'a T;

            fn next(&mut self) -> Option<Self::Item> {
                let item = self.step()?;
                self.len -= 1;
                Some(item)
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                (self.len, Some(self.len))
            }
        }

        impl<'a, T> ExactSizeIterator for $iter<'a, T> {}
        impl<'a, T> FusedIterator for $iter<'a, T> {}
    };
}

/// Left subtree, node, right subtree: ascending order.
pub struct Inorder<'a, T> {
    stack: SmallVec<[&'a Node<T>; STACK_SIZE]>,
    len: usize,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: SmallVec::new(),
            len,
        };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut next: Option<&'a Node<T>>) {
        while let Some(node) = next {
            self.stack.push(node);
            next = node.left.as_deref();
        }
    }

    fn step(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

exact_size!(Inorder);

/// Node, left subtree, right subtree.
pub struct Preorder<'a, T> {
    stack: SmallVec<[&'a Node<T>; STACK_SIZE]>,
    len: usize,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        Self {
            stack: root.as_deref().into_iter().collect(),
            len,
        }
    }

    fn step(&mut self) -> Option<&'a T> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.value)
    }
}

exact_size!(Preorder);

/// Left subtree, right subtree, node.
pub struct Postorder<'a, T> {
    // The flag is set once a node's children have been pushed above it.
    stack: SmallVec<[(&'a Node<T>, bool); STACK_SIZE]>,
    len: usize,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        Self {
            stack: root.as_deref().map(|node| (node, false)).into_iter().collect(),
            len,
        }
    }

    fn step(&mut self) -> Option<&'a T> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|right| (right, false)));
            self.stack.extend(node.left.as_deref().map(|left| (left, false)));
        }
    }
}

exact_size!(Postorder);

/// Breadth first: depth 0, then depth 1, ... each level left to right.
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
    len: usize,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        Self {
            queue: root.as_deref().into_iter().collect(),
            len,
        }
    }

    fn step(&mut self) -> Option<&'a T> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        Some(&node.value)
    }
}

exact_size!(LevelOrder);

/// Owning ascending iterator; nodes are freed as they are passed.
pub struct IntoIter<T> {
    stack: SmallVec<[Box<Node<T>>; STACK_SIZE]>,
    len: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: SmallVec::new(),
            len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut next: Link<T>) {
        while let Some(mut node) = next {
            next = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.len -= 1;
        let Node { value, .. } = *node;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
