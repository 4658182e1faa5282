use std::{
    iter::FusedIterator,
    mem::take
};

#[cfg(feature = "sorted-iter")]
pub use sorted_iter::{
    sorted_iterator::SortedByItem,
    sorted_pair_iterator::SortedByKey
};

use crate::{
    balance::Balance,
    tree::{Link, Node, Tree},
    verify::Verify
};

/// In-order traversal driven by an explicit stack.
///
/// The stack holds the left spine of the next unvisited node, the next node on top.
#[derive(Debug)]
pub struct Iter<'a, K, V, M> {
    stack: Vec<&'a Node<K, V, M>>,
    remaining: usize
}
impl<'a, K, V, M> Iter<'a, K, V, M> {
    #[inline]
    pub(crate) fn new(root: &'a Link<K, V, M>, len: usize) -> Self {
        let mut iter = Self { stack: Vec::new(), remaining: len };
        iter.descend(root);
        iter
    }
    #[inline]
    fn descend(&mut self, mut link: &'a Link<K, V, M>) {
        while let Link::Node(node) = link {
            self.stack.push(node);
            link = &node.children[0];
        }
    }
}
impl<'a, K, V, M> Clone for Iter<'a, K, V, M> {
    #[inline]
    fn clone(&self) -> Self {
        Self { stack: self.stack.clone(), remaining: self.remaining }
    }
}
impl<'a, K, V, M> Iterator for Iter<'a, K, V, M> {
    type Item = (&'a K, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend(&node.children[1]);
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<'a, K, V, M> ExactSizeIterator for Iter<'a, K, V, M> {}
impl<'a, K, V, M> FusedIterator for Iter<'a, K, V, M> {}
#[cfg(feature = "sorted-iter")]
impl<'a, K, V, M> SortedByKey for Iter<'a, K, V, M> {}

#[derive(Debug)]
pub struct Keys<'a, K, V, M>(pub(crate) Iter<'a, K, V, M>);
impl<'a, K, V, M> Clone for Keys<'a, K, V, M> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
impl<'a, K, V, M> Iterator for Keys<'a, K, V, M> {
    type Item = &'a K;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map( |(key, _)| key )
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
impl<'a, K, V, M> ExactSizeIterator for Keys<'a, K, V, M> {}
impl<'a, K, V, M> FusedIterator for Keys<'a, K, V, M> {}
#[cfg(feature = "sorted-iter")]
impl<'a, K, V, M> SortedByItem for Keys<'a, K, V, M> {}

/// Owning in-order traversal, nodes are released as they are visited.
#[derive(Debug)]
pub struct IntoIter<K, V, M> {
    stack: Vec<Box<Node<K, V, M>>>,
    remaining: usize
}
impl<K, V, M> IntoIter<K, V, M> {
    #[inline]
    fn descend(&mut self, mut link: Link<K, V, M>) {
        while let Link::Node(mut node) = link {
            link = take(&mut node.children[0]);
            self.stack.push(node);
        }
    }
}
impl<K, V, M> Iterator for IntoIter<K, V, M> {
    type Item = (K, V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.descend(take(&mut node.children[1]));
        self.remaining -= 1;
        let Node { key, value, .. } = *node;
        Some((key, value))
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<K, V, M> ExactSizeIterator for IntoIter<K, V, M> {}
impl<K, V, M> FusedIterator for IntoIter<K, V, M> {}
#[cfg(feature = "sorted-iter")]
impl<K, V, M> SortedByKey for IntoIter<K, V, M> {}
impl<K, V, M> Drop for IntoIter<K, V, M> {
    #[inline]
    fn drop(&mut self) {
        for _ in self.by_ref() { }
    }
}

impl<K, V, B: Balance, C> IntoIterator for Tree<K, V, B, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V, B::Meta>;
    #[inline]
    fn into_iter(mut self) -> Self::IntoIter {
        let mut iter = IntoIter { stack: Vec::new(), remaining: self.len };
        iter.descend(take(&mut self.root));
        self.len = 0;
        iter
    }
}

impl<'a, K: Ord, V, B: Balance, C: Verify<B::Meta>> IntoIterator for &'a Tree<K, V, B, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, B::Meta>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
