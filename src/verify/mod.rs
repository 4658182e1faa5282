mod avl;
pub use avl::*;
mod red_black;
pub use red_black::*;

use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::tree::{Link, Side};

/// Steps from the root down to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(pub(crate) Vec<Side>);
impl Path {
    #[inline(always)]
    pub fn steps(&self) -> &[Side] {
        &self.0
    }
}
impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for side in self.0.iter() {
            f.write_str(match side {
                Side::Left => ".left",
                Side::Right => ".right"
            })?;
        }
        Ok(())
    }
}

/// Broken invariant found by a verification walk.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("imbalance at {at}: left height {left}, right height {right}")]
    Imbalance { at: Path, left: u32, right: u32 },
    #[error("double red at {at}")]
    DoubleRed { at: Path },
    #[error("red right child below black node at {at}")]
    RightLeaning { at: Path },
    #[error("inconsistent black height at {at}: left {left}, right {right}")]
    InconsistentBlackHeight { at: Path, left: u32, right: u32 },
    #[error("stale {field} at {at}: cached {cached}, actual {actual}")]
    StaleMetadata { at: Path, field: &'static str, cached: i64, actual: i64 },
    #[error("red root")]
    RedRoot,
}
impl Violation {
    /// Location of the offending node, `None` for whole-tree violations.
    #[inline]
    pub fn at(&self) -> Option<&Path> {
        match self {
            Self::Imbalance { at, .. } |
            Self::DoubleRed { at } |
            Self::RightLeaning { at } |
            Self::InconsistentBlackHeight { at, .. } |
            Self::StaleMetadata { at, .. } => Some(at),
            Self::RedRoot => None
        }
    }
    /// Re-roots the violation one level up, below `side` of the parent.
    #[inline]
    pub(crate) fn below(mut self, side: Side) -> Self {
        match &mut self {
            Self::Imbalance { at, .. } |
            Self::DoubleRed { at } |
            Self::RightLeaning { at } |
            Self::InconsistentBlackHeight { at, .. } |
            Self::StaleMetadata { at, .. } => at.0.insert(0, side),
            Self::RedRoot => {}
        }
        self
    }
    #[inline]
    pub(crate) fn stale(field: &'static str, cached: i64, actual: i64) -> Self {
        Self::StaleMetadata { at: Path::default(), field, cached, actual }
    }
}

/// Independent re-derivation of a discipline's invariant.
///
/// Implementations only read the tree.
pub trait Verify<M> {
    fn verify<K, V>(root: &Link<K, V, M>) -> Result<(), Violation>;
}

/// Accepts every tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCheck;
impl<M> Verify<M> for NoCheck {
    #[inline(always)]
    fn verify<K, V>(_root: &Link<K, V, M>) -> Result<(), Violation> {
        Ok(())
    }
}
