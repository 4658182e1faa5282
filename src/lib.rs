//! Ordered maps over recursive binary search trees.
//!
//! One insertion engine ([`tree::Tree`]) is shared by every tree flavour;
//! the balancing discipline ([`balance::Balance`]) and the independent
//! invariant check ([`verify::Verify`]) are picked through type parameters.

pub mod balance;
pub mod tree;
pub mod verify;

use crate::{
    balance::{Avl, LeftLeaning, RedBlack, Unbalanced},
    tree::Tree,
    verify::{AvlCheck, LeftLeaningCheck, NoCheck, RedBlackCheck}
};

pub trait Reader<K> {
    type Item;
    fn get(&self, key: &K) -> Option<&Self::Item>;
    fn contains(&self, key: &K) -> bool;
}

pub trait Writer<K>: Reader<K> {
    fn put(&mut self, key: K, value: Self::Item);
}

/// Map whose keys are kept in ascending order.
pub trait OrderedMap<K>: Writer<K> {
    fn min(&self) -> Option<&K>;
    fn max(&self) -> Option<&K>;
    fn keys<'a>(&'a self) -> impl Iterator<Item = &'a K> where K: 'a;
}

/// Unbalanced baseline, its verifier accepts every tree.
pub type BasicMap<K, V> = Tree<K, V, Unbalanced, NoCheck>;
pub type AvlMap<K, V> = Tree<K, V, Avl, AvlCheck>;
pub type RedBlackMap<K, V> = Tree<K, V, RedBlack, RedBlackCheck>;
pub type LeftLeaningMap<K, V> = Tree<K, V, LeftLeaning, LeftLeaningCheck>;

pub mod prelude {
    pub use crate::{
        OrderedMap, Reader, Writer,
        AvlMap, BasicMap, LeftLeaningMap, RedBlackMap,
        tree::{Cursor, Error, Side},
        verify::Violation
    };
}

#[cfg(test)]
mod test;
