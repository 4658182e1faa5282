use std::mem::take;

use crate::tree::Error;

/// Direction of a child link. The discriminant doubles as index into `Node::children`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left = 0,
    Right = 1,
}
impl Side {
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A child link: either the sentinel or an owned node.
#[derive(Debug)]
pub enum Link<K, V, M> {
    Empty,
    Node(Box<Node<K, V, M>>)
}
impl<K, V, M> Default for Link<K, V, M> {
    #[inline(always)]
    fn default() -> Self { Self::Empty }
}

impl<K, V, M> Link<K, V, M> {
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Link::Empty)
    }
    #[inline]
    pub fn as_node(&self) -> Option<&Node<K, V, M>> {
        match self {
            Link::Node(node) => Some(&**node),
            Link::Empty => None
        }
    }
    #[inline]
    pub fn meta(&self) -> Option<&M> {
        self.as_node().map( |node| &node.meta )
    }
    /// Key stored behind this link.
    ///
    /// The sentinel has no key, asking for one is a structural error.
    #[inline]
    pub fn key(&self) -> Result<&K, Error> {
        self.node().map( |node| &node.key )
    }
    #[inline]
    pub(crate) fn node(&self) -> Result<&Node<K, V, M>, Error> {
        self.as_node().ok_or(Error::EmptyLink)
    }
    #[inline]
    pub(crate) fn node_mut(&mut self) -> Result<&mut Node<K, V, M>, Error> {
        match self {
            Link::Node(node) => Ok(&mut **node),
            Link::Empty => Err(Error::EmptyLink)
        }
    }
    #[inline]
    pub(crate) fn into_node(self) -> Result<Box<Node<K, V, M>>, Error> {
        match self {
            Link::Node(node) => Ok(node),
            Link::Empty => Err(Error::EmptyLink)
        }
    }
}

#[derive(Debug)]
pub struct Node<K, V, M> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) meta: M,
    pub(crate) children: [Link<K, V, M>; 2]
}

impl<K, V, M> Node<K, V, M> {
    #[inline]
    pub(crate) const fn new(key: K, value: V, meta: M) -> Self {
        Self {
            key, value, meta,
            children: [Link::Empty, Link::Empty]
        }
    }
    #[inline(always)]
    pub fn key(&self) -> &K {
        &self.key
    }
    #[inline(always)]
    pub fn value(&self) -> &V {
        &self.value
    }
    #[inline(always)]
    pub fn meta(&self) -> &M {
        &self.meta
    }
    #[inline(always)]
    pub fn child(&self, side: Side) -> &Link<K, V, M> {
        &self.children[side.index()]
    }
    #[inline(always)]
    pub(crate) fn take_child(&mut self, side: Side) -> Link<K, V, M> {
        take(&mut self.children[side.index()])
    }
    /// Moves this node down to side `I`, promoting its child on the opposite side.
    ///
    /// Only links are rewired, metadata of both nodes is left for the caller to recompute.
    /// Fails if the promoted child is the sentinel.
    #[inline]
    pub(crate) fn rotate<const I: usize>(mut self: Box<Self>) -> Result<Box<Self>, Error> {
        let mut pivot = take(&mut self.children[1 - I]).into_node()?;
        self.children[1 - I] = take(&mut pivot.children[I]);
        pivot.children[I] = Link::Node(self);
        Ok(pivot)
    }
}
