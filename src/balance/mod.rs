mod avl;
pub use avl::*;
mod red_black;
pub use red_black::*;
mod llrb;
pub use llrb::*;

use std::fmt::Debug;

use crate::tree::{Error, Link, Node};

/// Insertion fixup of one balancing discipline.
pub trait Balance {
    /// Per-node bookkeeping this discipline caches.
    type Meta: Debug;

    /// Metadata of a freshly created node whose children are both the sentinel.
    fn leaf() -> Self::Meta;

    /// Restores the discipline's invariant at `node` after an insertion below it.
    ///
    /// Returns the node that replaces `node` as child of its parent.
    fn fixup<K, V>(node: Box<Node<K, V, Self::Meta>>) -> Result<Box<Node<K, V, Self::Meta>>, Error>;

    /// Runs once on the root after every top-level insertion.
    #[inline(always)]
    fn settle<K, V>(_root: &mut Link<K, V, Self::Meta>) -> Result<(), Error> {
        Ok(())
    }
}

/// Plain binary search tree, never rotates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbalanced;
impl Balance for Unbalanced {
    type Meta = ();

    #[inline(always)]
    fn leaf() -> Self::Meta { }
    #[inline(always)]
    fn fixup<K, V>(node: Box<Node<K, V, Self::Meta>>) -> Result<Box<Node<K, V, Self::Meta>>, Error> {
        Ok(node)
    }
}
