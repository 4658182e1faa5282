use std::{
    fmt::{self, Display, Formatter},
    marker::PhantomData
};

use crate::{
    OrderedMap, Reader, Writer,
    balance::Balance,
    tree::{Cursor, Error, Iter, Keys, Link, Side, Tree},
    verify::{Verify, Violation}
};

impl<K: Ord, V, B: Balance, C: Verify<B::Meta>> Tree<K, V, B, C> {
    /// Creates an empty map.
    ///
    /// With `verifying` set, the whole tree is re-checked before and after
    /// every operation and any broken invariant panics.
    #[inline]
    pub const fn new(verifying: bool) -> Self {
        Self { root: Link::Empty, len: 0, verifying, _phantom: PhantomData }
    }
    /// Inserts `value` under `key`, overwriting the previous value if the key is present.
    ///
    /// # Panics
    /// If the balancer corrupts the tree, see [`Tree::try_put`].
    #[inline]
    pub fn put(&mut self, key: K, value: V) {
        if let Err(error) = self.try_put(key, value) {
            panic!("{}", error);
        }
    }
    /// Inserts `value` under `key` and reports a broken tree instead of panicking.
    ///
    /// An error always points at a defect in a rotation or fixup.
    /// When the insertion itself fails the tree is left empty.
    pub fn try_put(&mut self, key: K, value: V) -> Result<(), Error> {
        self.check()?;
        self.put_root(key, value)?;
        self.check()
    }
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.assert_valid();
        let value = Self::search(&self.root, key).map( |node| &node.value );
        self.assert_valid();
        value
    }
    /// Mutable access to a value, the shape of the tree is not affected.
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.assert_valid();
        Self::search_mut(&mut self.root, key).map( |node| &mut node.value )
    }
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.assert_valid();
        let found = Self::search(&self.root, key).is_some();
        self.assert_valid();
        found
    }
    #[inline]
    pub fn min(&self) -> Option<&K> {
        self.assert_valid();
        let min = Self::limit(Side::Left, &self.root).map( |node| &node.key );
        self.assert_valid();
        min
    }
    #[inline]
    pub fn max(&self) -> Option<&K> {
        self.assert_valid();
        let max = Self::limit(Side::Right, &self.root).map( |node| &node.key );
        self.assert_valid();
        max
    }
    /// Iterates over all entries in ascending key order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V, B::Meta> {
        self.assert_valid();
        Iter::new(&self.root, self.len)
    }
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V, B::Meta> {
        Keys(self.iter())
    }
    /// Read-only view of the tree's shape, starting at the root.
    #[inline]
    pub fn cursor(&self) -> Cursor<'_, K, V, B::Meta> {
        Cursor::new(&self.root)
    }
    /// Runs the verifier now, whether or not this tree is verifying.
    #[inline]
    pub fn verify(&self) -> Result<(), Violation> {
        C::verify(&self.root)
    }
}

impl<K, V, B: Balance, C> Tree<K, V, B, C> {
    /// Number of distinct keys.
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
    #[inline(always)]
    pub const fn is_verifying(&self) -> bool {
        self.verifying
    }
}

impl<K: Ord, V, B: Balance, C: Verify<B::Meta>> Default for Tree<K, V, B, C> {
    /// Verifies in debug builds only.
    #[inline]
    fn default() -> Self {
        Self::new(cfg!(debug_assertions))
    }
}

impl<K: Ord, V, B: Balance, C: Verify<B::Meta>> Extend<(K, V)> for Tree<K, V, B, C> {
    #[inline]
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Ord, V, B: Balance, C: Verify<B::Meta>> FromIterator<(K, V)> for Tree<K, V, B, C> {
    #[inline]
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut tree = Self::default();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V, B: Balance, C: Verify<B::Meta>> Reader<K> for Tree<K, V, B, C> {
    type Item = V;
    #[inline(always)]
    fn get(&self, key: &K) -> Option<&V> {
        Tree::get(self, key)
    }
    #[inline(always)]
    fn contains(&self, key: &K) -> bool {
        self.contains_key(key)
    }
}

impl<K: Ord, V, B: Balance, C: Verify<B::Meta>> Writer<K> for Tree<K, V, B, C> {
    #[inline(always)]
    fn put(&mut self, key: K, value: V) {
        Tree::put(self, key, value)
    }
}

impl<K: Ord, V, B: Balance, C: Verify<B::Meta>> OrderedMap<K> for Tree<K, V, B, C> {
    #[inline(always)]
    fn min(&self) -> Option<&K> {
        Tree::min(self)
    }
    #[inline(always)]
    fn max(&self) -> Option<&K> {
        Tree::max(self)
    }
    #[inline(always)]
    fn keys<'a>(&'a self) -> impl Iterator<Item = &'a K> where K: 'a {
        Tree::keys(self)
    }
}

/// Pending piece of the parenthesized rendering.
enum Token<'a, K, V, M> {
    Subtree(&'a Link<K, V, M>),
    Key(&'a K),
    Close
}

/// Renders the shape as `(left key right)`, the sentinel as `(:)`.
impl<K: Display, V, B: Balance, C> Display for Tree<K, V, B, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Token::Subtree(&self.root)];
        while let Some(token) = stack.pop() {
            match token {
                Token::Subtree(Link::Empty) => f.write_str("(:)")?,
                Token::Subtree(Link::Node(node)) => {
                    f.write_str("(")?;
                    stack.push(Token::Close);
                    stack.push(Token::Subtree(&node.children[1]));
                    stack.push(Token::Key(&node.key));
                    stack.push(Token::Subtree(&node.children[0]));
                },
                Token::Key(key) => write!(f, " {} ", key)?,
                Token::Close => f.write_str(")")?
            }
        }
        Ok(())
    }
}
