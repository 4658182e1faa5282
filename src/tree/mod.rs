mod node;
pub use node::*;
mod interface;
mod iter;
pub use iter::*;
mod cursor;
pub use cursor::*;

use std::{
    cmp::Ordering,
    marker::PhantomData,
    mem::take
};

use log::{error, trace};
use thiserror::Error;

use crate::{
    balance::Balance,
    verify::{Verify, Violation}
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("the sentinel cannot be painted red")]
    RedSentinel,
    #[error("the sentinel has no key, value or children")]
    EmptyLink,
    #[error(transparent)]
    Violation(#[from] Violation)
}

/// Ordered map over a recursive binary search tree.
///
/// `B` restores the structural invariant after every insertion step,
/// `C` re-derives that invariant from scratch when the tree is verifying.
pub struct Tree<K, V, B: Balance, C> {
    pub(crate) root: Link<K, V, B::Meta>,
    pub(crate) len: usize,
    pub(crate) verifying: bool,
    pub(crate) _phantom: PhantomData<fn() -> (B, C)>
}

impl<K: Ord, V, B: Balance, C: Verify<B::Meta>> Tree<K, V, B, C> {
    /// Inserts below `link` and returns the root of the rebalanced subtree.
    ///
    /// Descends with an explicit parent stack and runs the fixup on every
    /// node on the way back up. `len` is bumped when a new node is created.
    fn insert(mut link: Link<K, V, B::Meta>, key: K, value: V, len: &mut usize) -> Result<Box<Node<K, V, B::Meta>>, Error> {
        let mut parents: Vec<(Box<Node<K, V, B::Meta>>, Side)> = Vec::new();
        let mut node = loop {
            let mut node = match link {
                Link::Node(node) => node,
                Link::Empty => {
                    trace!("creating node #{}", *len + 1);
                    *len += 1;
                    break Box::new(Node::new(key, value, B::leaf()));
                }
            };
            let side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Equal => {
                    node.value = value;
                    break B::fixup(node)?;
                },
                Ordering::Greater => Side::Right
            };
            link = node.take_child(side);
            parents.push((node, side));
        };
        while let Some((mut parent, side)) = parents.pop() {
            parent.children[side.index()] = Link::Node(node);
            node = B::fixup(parent)?;
        }
        Ok(node)
    }
    #[inline]
    fn put_root(&mut self, key: K, value: V) -> Result<(), Error> {
        let root = take(&mut self.root);
        let root = Self::insert(root, key, value, &mut self.len);
        let mut root = match root {
            Ok(root) => Link::Node(root),
            Err(error) => {
                // the old root was consumed by the failed insertion
                self.len = 0;
                return Err(error);
            }
        };
        B::settle(&mut root)?;
        self.root = root;
        Ok(())
    }
    #[inline]
    fn search<'a>(mut link: &'a Link<K, V, B::Meta>, key: &K) -> Option<&'a Node<K, V, B::Meta>> {
        while let Link::Node(node) = link {
            link = match node.key.cmp(key) {
                Ordering::Greater => &node.children[0],
                Ordering::Equal => return Some(&**node),
                Ordering::Less => &node.children[1]
            };
        }
        None
    }
    #[inline]
    fn search_mut<'a>(mut link: &'a mut Link<K, V, B::Meta>, key: &K) -> Option<&'a mut Node<K, V, B::Meta>> {
        while let Link::Node(node) = link {
            match node.key.cmp(key) {
                Ordering::Greater => link = &mut node.children[0],
                Ordering::Equal => return Some(&mut **node),
                Ordering::Less => link = &mut node.children[1]
            }
        }
        None
    }
    #[inline]
    fn limit(side: Side, link: &Link<K, V, B::Meta>) -> Option<&Node<K, V, B::Meta>> {
        let mut node = link.as_node()?;
        while let Link::Node(next) = node.child(side) {
            node = &**next;
        }
        Some(node)
    }
    /// Runs the verifier if this tree was built with verification enabled.
    #[inline]
    fn check(&self) -> Result<(), Error> {
        if !self.verifying {
            return Ok(());
        }
        C::verify(&self.root).map_err( |violation| {
            error!("tree failed verification: {}", violation);
            Error::from(violation)
        })
    }
    #[inline]
    fn assert_valid(&self) {
        if let Err(error) = self.check() {
            panic!("{}", error);
        }
    }
}

impl<K, V, B: Balance, C> Drop for Tree<K, V, B, C> {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        if let Link::Node(root) = take(&mut self.root) {
            stack.push(root);
        }
        while let Some(mut node) = stack.pop() {
            for child in node.children.iter_mut() {
                if let Link::Node(child) = take(child) {
                    stack.push(child);
                }
            }
        }
    }
}
