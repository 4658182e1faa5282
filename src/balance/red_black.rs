use std::{
    mem::take,
    ops::ControlFlow
};

use log::{debug, trace};

use crate::{
    balance::Balance,
    tree::{Error, Link, Node}
};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red = 0,
    Black = 1,
}

/// Cached color and black height of a red-black node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub(crate) color: Color,
    pub(crate) black_height: u32
}
impl Paint {
    #[inline(always)]
    pub const fn color(&self) -> Color {
        self.color
    }
    #[inline(always)]
    pub const fn is_red(&self) -> bool {
        match self.color {
            Color::Black => false,
            Color::Red => true
        }
    }
    #[inline(always)]
    pub const fn is_black(&self) -> bool {
        !self.is_red()
    }
    /// Number of black nodes from this node (inclusive) down to the sentinel (exclusive).
    #[inline(always)]
    pub const fn black_height(&self) -> u32 {
        self.black_height
    }
}

pub(crate) type PaintNode<K, V> = Node<K, V, Paint>;

impl<K, V> Link<K, V, Paint> {
    /// The sentinel is always black.
    #[inline]
    pub fn is_red(&self) -> bool {
        self.meta().is_some_and( |meta| meta.is_red() )
    }
    #[inline]
    pub fn black_height(&self) -> u32 {
        self.meta().map_or(0, |meta| meta.black_height )
    }
    /// Colors the node behind this link and recomputes its black height.
    ///
    /// Painting the sentinel black is a no-op, painting it red is an error.
    #[inline]
    pub(crate) fn paint(&mut self, color: Color) -> Result<(), Error> {
        match (self, color) {
            (Link::Node(node), color) => {
                node.meta.color = color;
                node.recompute();
                Ok(())
            },
            (Link::Empty, Color::Black) => Ok(()),
            (Link::Empty, Color::Red) => Err(Error::RedSentinel)
        }
    }
}

impl<K, V> PaintNode<K, V> {
    /// Recomputes the black height assuming the children's metadata is current.
    #[inline]
    pub(crate) fn recompute(&mut self) {
        self.meta.black_height = self.children[0].black_height() + (self.meta.color as u32);
    }
    #[inline(always)]
    pub(crate) fn is_red(&self) -> bool {
        self.meta.is_red()
    }
    /// Splits a 4-node: both children turn black and this node turns red.
    #[inline]
    pub(crate) fn flip(&mut self) -> Result<(), Error> {
        debug!("color flip");
        for child in self.children.iter_mut() {
            child.paint(Color::Black)?;
        }
        self.meta.color = Color::Red;
        self.recompute();
        Ok(())
    }
    /// Moves this node down to side `I`.
    ///
    /// The promoted child takes over this node's color, this node turns red.
    /// Both black heights are recomputed, the demoted node first.
    #[inline]
    pub(crate) fn rotate_painted<const I: usize>(self: Box<Self>) -> Result<Box<Self>, Error> {
        let color = self.meta.color;
        let mut top = self.rotate::<I>()?;
        top.children[I].paint(Color::Red)?;
        top.meta.color = color;
        top.recompute();
        Ok(top)
    }
}

/// Root hook shared by both red-black disciplines.
#[inline]
pub(crate) fn blacken_root<K, V>(root: &mut Link<K, V, Paint>) -> Result<(), Error> {
    if root.is_red() {
        debug!("recoloring red root");
    }
    root.paint(Color::Black)
}

/// Classic red-black discipline: no red node has a red child and every path
/// to the sentinel crosses the same number of black nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedBlack;

impl RedBlack {
    /// Resolves a double red below the `S` child, `O` is the opposite side.
    ///
    /// Breaks with the new subtree root when the violation was handled here.
    #[inline]
    fn resolve<K, V, const S: usize, const O: usize>(mut node: Box<PaintNode<K, V>>)
        -> Result<ControlFlow<Box<PaintNode<K, V>>, Box<PaintNode<K, V>>>, Error>
    {
        debug_assert_eq!(S + O, 1);
        let Link::Node(child) = &node.children[S] else { return Ok(ControlFlow::Continue(node)) };
        if !child.is_red() {
            return Ok(ControlFlow::Continue(node));
        }
        if child.children[O].is_red() {
            trace!("red-black: inner rotation, side {}", S);
            let child = take(&mut node.children[S]).into_node()?;
            node.children[S] = Link::Node(child.rotate_painted::<S>()?);
        }
        if !node.children[S].node()?.children[S].is_red() {
            return Ok(ControlFlow::Continue(node));
        }
        if node.children[O].is_red() {
            node.flip()?;
            Ok(ControlFlow::Break(node))
        } else {
            trace!("red-black: outer rotation, side {}", O);
            Ok(ControlFlow::Break(node.rotate_painted::<O>()?))
        }
    }
}

impl Balance for RedBlack {
    type Meta = Paint;

    #[inline(always)]
    fn leaf() -> Self::Meta {
        Paint { color: Color::Red, black_height: 0 }
    }
    fn fixup<K, V>(node: Box<Node<K, V, Self::Meta>>) -> Result<Box<Node<K, V, Self::Meta>>, Error> {
        let mut node = match Self::resolve::<K, V, 1, 0>(node)? {
            ControlFlow::Break(node) => node,
            ControlFlow::Continue(node) => match Self::resolve::<K, V, 0, 1>(node)? {
                ControlFlow::Break(node) | ControlFlow::Continue(node) => node
            }
        };
        node.recompute();
        Ok(node)
    }
    #[inline(always)]
    fn settle<K, V>(root: &mut Link<K, V, Self::Meta>) -> Result<(), Error> {
        blacken_root(root)
    }
}
