use std::mem::take;

use log::trace;

use crate::{
    balance::Balance,
    tree::{Error, Link, Node}
};

/// Cached shape of an AVL subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Height {
    pub(crate) height: u32,
    pub(crate) balance: i32,
    pub(crate) size: usize
}
impl Height {
    /// Longest distance from this node down to the sentinel, the sentinel itself counts 0.
    #[inline(always)]
    pub const fn height(&self) -> u32 {
        self.height
    }
    /// Height of the left subtree minus height of the right subtree.
    ///
    /// Positive values lean left, negative values lean right.
    #[inline(always)]
    pub const fn balance(&self) -> i32 {
        self.balance
    }
    #[inline(always)]
    pub const fn size(&self) -> usize {
        self.size
    }
}

impl<K, V> Link<K, V, Height> {
    #[inline]
    pub fn height(&self) -> u32 {
        self.meta().map_or(0, |meta| meta.height )
    }
    #[inline]
    pub fn size(&self) -> usize {
        self.meta().map_or(0, |meta| meta.size )
    }
}

impl<K, V> Node<K, V, Height> {
    /// Recomputes height, balance and size assuming the children's metadata is current.
    #[inline]
    pub(crate) fn recompute(&mut self) {
        let [left, right] = &self.children;
        let (left_height, right_height) = (left.height(), right.height());
        self.meta = Height {
            height: left_height.max(right_height) + 1,
            balance: left_height as i32 - right_height as i32,
            size: left.size() + right.size() + 1
        };
    }
    #[inline]
    fn skew(&self) -> i32 {
        let [left, right] = &self.children;
        left.height() as i32 - right.height() as i32
    }
    /// Index of the taller child according to the cached balance.
    #[inline]
    fn heavier(&self) -> Option<usize> {
        match self.meta.balance {
            0 => None,
            balance if balance > 0 => Some(0),
            _ => Some(1)
        }
    }
}

/// Height-balanced discipline: sibling subtrees differ in height by at most one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Avl;

impl Avl {
    /// Rotation that keeps metadata current, the demoted node is recomputed first.
    #[inline]
    fn rotate<K, V, const I: usize>(node: Box<Node<K, V, Height>>) -> Result<Box<Node<K, V, Height>>, Error> {
        let mut top = node.rotate::<I>()?;
        top.children[I].node_mut()?.recompute();
        top.recompute();
        Ok(top)
    }
    /// Fixes a node whose `H` side is two levels taller than its `I` side.
    #[inline]
    fn restore<K, V, const I: usize, const H: usize>(mut node: Box<Node<K, V, Height>>) -> Result<Box<Node<K, V, Height>>, Error> {
        debug_assert_eq!(I + H, 1);
        if node.children[H].node()?.heavier() == Some(I) {
            trace!("avl: double rotation, side {} then side {}", H, I);
            let child = take(&mut node.children[H]).into_node()?;
            node.children[H] = Link::Node(Self::rotate::<K, V, H>(child)?);
        } else {
            trace!("avl: single rotation, side {}", I);
        }
        Self::rotate::<K, V, I>(node)
    }
}

impl Balance for Avl {
    type Meta = Height;

    #[inline(always)]
    fn leaf() -> Self::Meta {
        Height { height: 1, balance: 0, size: 1 }
    }
    fn fixup<K, V>(mut node: Box<Node<K, V, Self::Meta>>) -> Result<Box<Node<K, V, Self::Meta>>, Error> {
        match node.skew() {
            2 => Self::restore::<K, V, 1, 0>(node),
            -2 => Self::restore::<K, V, 0, 1>(node),
            _ => {
                node.recompute();
                Ok(node)
            }
        }
    }
}
