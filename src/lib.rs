//! A comparison-ordered, height-balanced (AVL) binary search tree.
//!
//! Every node owns its two subtrees.  Insertion and removal take ownership of
//! a subtree and hand back its (possibly rotated) new owner, caching each
//! node's height so that rebalancing on the way back up costs O(1) per level.

pub mod balance;
pub mod error;
pub mod insert;
pub mod merge;
pub mod node;
pub mod remove;
pub mod traverse;
#[macro_use]
pub mod tree;

pub type Height = u16;

pub use error::{TreeError, TreeResult};
pub use traverse::{Inorder, IntoIter, LevelOrder, Postorder, Preorder};
pub use tree::{AvlTree, NaturalOrder};
