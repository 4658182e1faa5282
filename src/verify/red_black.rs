use crate::{
    balance::Paint,
    tree::{Link, Side},
    verify::{Verify, Violation}
};

/// Returns the true black height of the subtree at `link`.
///
/// With `LEAN` set, a black node must not have a red right child.
fn measure<K, V, const LEAN: bool>(link: &Link<K, V, Paint>) -> Result<u32, Violation> {
    let Link::Node(node) = link else { return Ok(0) };
    let [left, right] = &node.children;
    let left_height = measure::<K, V, LEAN>(left)
        .map_err( |violation| violation.below(Side::Left) )?;
    let right_height = measure::<K, V, LEAN>(right)
        .map_err( |violation| violation.below(Side::Right) )?;
    if node.meta.is_red() {
        if left.is_red() || right.is_red() {
            return Err(Violation::DoubleRed { at: Default::default() });
        }
    } else if LEAN && right.is_red() {
        return Err(Violation::RightLeaning { at: Default::default() });
    }
    if left_height != right_height {
        return Err(Violation::InconsistentBlackHeight { at: Default::default(), left: left_height, right: right_height });
    }
    let black_height = left_height + node.meta.is_black() as u32;
    if node.meta.black_height != black_height {
        return Err(Violation::stale("black height", node.meta.black_height.into(), black_height.into()));
    }
    Ok(black_height)
}

#[inline]
fn verify_root<K, V, const LEAN: bool>(root: &Link<K, V, Paint>) -> Result<(), Violation> {
    measure::<K, V, LEAN>(root)?;
    if root.is_red() {
        return Err(Violation::RedRoot);
    }
    Ok(())
}

/// Recomputes black heights bottom-up and checks the red-black coloring rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedBlackCheck;
impl Verify<Paint> for RedBlackCheck {
    #[inline]
    fn verify<K, V>(root: &Link<K, V, Paint>) -> Result<(), Violation> {
        verify_root::<K, V, false>(root)
    }
}

/// [`RedBlackCheck`] that additionally rejects red right children.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeftLeaningCheck;
impl Verify<Paint> for LeftLeaningCheck {
    #[inline]
    fn verify<K, V>(root: &Link<K, V, Paint>) -> Result<(), Violation> {
        verify_root::<K, V, true>(root)
    }
}
