use crate::{
    balance::Height,
    tree::{Link, Side},
    verify::{Verify, Violation}
};

/// Recomputes heights bottom-up and compares them against the cached [`Height`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AvlCheck;

impl AvlCheck {
    /// Returns the true height and size of the subtree at `link`.
    fn measure<K, V>(link: &Link<K, V, Height>) -> Result<(u32, usize), Violation> {
        let Link::Node(node) = link else { return Ok((0, 0)) };
        let [left, right] = &node.children;
        let (left_height, left_size) = Self::measure(left)
            .map_err( |violation| violation.below(Side::Left) )?;
        let (right_height, right_size) = Self::measure(right)
            .map_err( |violation| violation.below(Side::Right) )?;
        if left_height.abs_diff(right_height) > 1 {
            return Err(Violation::Imbalance { at: Default::default(), left: left_height, right: right_height });
        }
        let height = left_height.max(right_height) + 1;
        let balance = left_height as i32 - right_height as i32;
        let size = left_size + right_size + 1;
        let meta = &node.meta;
        if meta.height != height {
            return Err(Violation::stale("height", meta.height.into(), height.into()));
        }
        if meta.balance != balance {
            return Err(Violation::stale("balance", meta.balance.into(), balance.into()));
        }
        if meta.size != size {
            return Err(Violation::stale("size", meta.size as i64, size as i64));
        }
        Ok((height, size))
    }
}

impl Verify<Height> for AvlCheck {
    #[inline]
    fn verify<K, V>(root: &Link<K, V, Height>) -> Result<(), Violation> {
        Self::measure(root).map( |_| () )
    }
}
