use crate::tree::{Link, Side};

/// Read-only position in a tree, used to inspect its shape.
///
/// A cursor on the sentinel is valid, all accessors then return `None`
/// and moving further down stays on the sentinel.
#[derive(Debug)]
pub struct Cursor<'a, K, V, M> {
    link: &'a Link<K, V, M>
}
impl<'a, K, V, M> Clone for Cursor<'a, K, V, M> {
    #[inline(always)]
    fn clone(&self) -> Self { *self }
}
impl<'a, K, V, M> Copy for Cursor<'a, K, V, M> {}

impl<'a, K, V, M> Cursor<'a, K, V, M> {
    #[inline(always)]
    pub(crate) const fn new(link: &'a Link<K, V, M>) -> Self {
        Self { link }
    }
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.link.is_empty()
    }
    #[inline(always)]
    pub const fn link(&self) -> &'a Link<K, V, M> {
        self.link
    }
    #[inline]
    pub fn key(&self) -> Option<&'a K> {
        self.link.as_node().map( |node| &node.key )
    }
    #[inline]
    pub fn value(&self) -> Option<&'a V> {
        self.link.as_node().map( |node| &node.value )
    }
    #[inline]
    pub fn meta(&self) -> Option<&'a M> {
        self.link.as_node().map( |node| &node.meta )
    }
    #[inline]
    pub fn child(&self, side: Side) -> Self {
        match self.link {
            Link::Node(node) => Self::new(node.child(side)),
            Link::Empty => *self
        }
    }
    #[inline(always)]
    pub fn left(&self) -> Self {
        self.child(Side::Left)
    }
    #[inline(always)]
    pub fn right(&self) -> Self {
        self.child(Side::Right)
    }
    /// Walks `path` from this position.
    #[inline]
    pub fn descend(&self, path: &[Side]) -> Self {
        path.iter().fold(*self, |cursor, &side| cursor.child(side) )
    }
    /// Longest number of nodes from here down to the sentinel, measured by walking the subtree.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self.link, 0)];
        while let Some((link, depth)) = stack.pop() {
            let Link::Node(node) = link else {
                deepest = deepest.max(depth);
                continue;
            };
            for child in node.children.iter() {
                stack.push((child, depth + 1));
            }
        }
        deepest
    }
}
