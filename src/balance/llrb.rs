use log::trace;

use crate::{
    balance::{blacken_root, Balance, Color, Paint},
    tree::{Error, Link, Node}
};

/// Left-leaning red-black discipline: a red link is always a left child.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeftLeaning;

impl Balance for LeftLeaning {
    type Meta = Paint;

    #[inline(always)]
    fn leaf() -> Self::Meta {
        Paint { color: Color::Red, black_height: 0 }
    }
    fn fixup<K, V>(mut node: Box<Node<K, V, Self::Meta>>) -> Result<Box<Node<K, V, Self::Meta>>, Error> {
        if node.children[1].is_red() && !node.children[0].is_red() {
            trace!("llrb: rotating right-leaning link");
            node = node.rotate_painted::<0>()?;
        }
        let double_red = node.children[0].as_node()
            .is_some_and( |left| left.is_red() && left.children[0].is_red() );
        if double_red {
            trace!("llrb: rotating double red on the left");
            node = node.rotate_painted::<1>()?;
        }
        if node.children[0].is_red() && node.children[1].is_red() {
            node.flip()?;
        }
        node.recompute();
        Ok(node)
    }
    #[inline(always)]
    fn settle<K, V>(root: &mut Link<K, V, Self::Meta>) -> Result<(), Error> {
        blacken_root(root)
    }
}
