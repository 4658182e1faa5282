use std::marker::PhantomData;

use super::*;
use crate::{
    balance::{Color, Height, Paint, RedBlack},
    tree::{Error, Side, Tree},
    verify::{AvlCheck, LeftLeaningCheck, NoCheck, Path, RedBlackCheck, Verify, Violation}
};

const fn height(height: u32, balance: i32, size: usize) -> Height {
    Height { height, balance, size }
}
const fn red(black_height: u32) -> Paint {
    Paint { color: Color::Red, black_height }
}
const fn black(black_height: u32) -> Paint {
    Paint { color: Color::Black, black_height }
}
fn path(steps: &[Side]) -> Path {
    Path(steps.to_vec())
}

/// 2 (black) whose red left child 1 has a red left child 0.
fn double_red() -> Link<u32, (), Paint> {
    join(2, (), black(1),
        join(1, (), red(0), leaf(0, (), red(0)), Link::Empty),
        Link::Empty
    )
}

#[test]
fn avl_imbalance() {
    init_logger();
    let chain = join(1, (), height(3, -2, 3),
        Link::Empty,
        join(2, (), height(2, -1, 2), Link::Empty, leaf(3, (), height(1, 0, 1)))
    );
    assert_eq!(AvlCheck::verify(&chain), Err(Violation::Imbalance { at: path(&[]), left: 0, right: 2 }));
    assert_eq!(<NoCheck as Verify<Height>>::verify(&chain), Ok(()));
}
#[test]
fn avl_stale_height() {
    init_logger();
    let tree = join(2, (), height(2, 1, 2), leaf(1, (), height(5, 0, 1)), Link::Empty);
    let violation = AvlCheck::verify(&tree).expect_err("stale height");
    assert_eq!(violation, Violation::StaleMetadata {
        at: path(&[Side::Left]),
        field: "height",
        cached: 5,
        actual: 1
    });
    assert_eq!(violation.to_string(), "stale height at root.left: cached 5, actual 1");
}
#[test]
fn avl_stale_balance() {
    init_logger();
    let tree = join(2, (), height(2, -1, 2), leaf(1, (), height(1, 0, 1)), Link::Empty);
    assert_eq!(AvlCheck::verify(&tree), Err(Violation::StaleMetadata {
        at: path(&[]),
        field: "balance",
        cached: -1,
        actual: 1
    }));
}
#[test]
fn avl_stale_size() {
    init_logger();
    let tree = leaf(1, (), height(1, 0, 7));
    assert_eq!(AvlCheck::verify(&tree), Err(Violation::stale("size", 7, 1)));
}
#[test]
fn red_black_double_red() {
    init_logger();
    let violation = RedBlackCheck::verify(&double_red()).expect_err("double red");
    assert_eq!(violation, Violation::DoubleRed { at: path(&[Side::Left]) });
    assert_eq!(violation.at(), Some(&path(&[Side::Left])));
    assert_eq!(violation.to_string(), "double red at root.left");
}
#[test]
fn red_black_inconsistent_height() {
    init_logger();
    let tree = join(2, (), black(2), leaf(1, (), black(1)), Link::Empty);
    assert_eq!(RedBlackCheck::verify(&tree), Err(Violation::InconsistentBlackHeight { at: path(&[]), left: 1, right: 0 }));
}
#[test]
fn red_black_stale_height() {
    init_logger();
    let tree = leaf(1, (), black(3));
    assert_eq!(RedBlackCheck::verify(&tree), Err(Violation::stale("black height", 3, 1)));
}
#[test]
fn red_black_red_root() {
    init_logger();
    let tree = leaf(1, (), red(0));
    let violation = RedBlackCheck::verify(&tree).expect_err("red root");
    assert_eq!(violation, Violation::RedRoot);
    assert_eq!(violation.at(), None);
    assert_eq!(LeftLeaningCheck::verify(&tree), Err(Violation::RedRoot));
}
#[test]
fn right_leaning() {
    init_logger();
    let tree = join(1, (), black(1), Link::Empty, leaf(2, (), red(0)));
    assert_eq!(RedBlackCheck::verify(&tree), Ok(()));
    assert_eq!(LeftLeaningCheck::verify(&tree), Err(Violation::RightLeaning { at: path(&[]) }));
}
#[test]
fn red_right_child_of_red_is_double_red() {
    init_logger();
    let tree = join(3, (), black(1),
        join(1, (), red(0), Link::Empty, leaf(2, (), red(0))),
        Link::Empty
    );
    assert_eq!(LeftLeaningCheck::verify(&tree), Err(Violation::DoubleRed { at: path(&[Side::Left]) }));
}
#[test]
fn empty_tree_is_valid() {
    let empty: Link<u32, (), Paint> = Link::Empty;
    assert_eq!(RedBlackCheck::verify(&empty), Ok(()));
    assert_eq!(LeftLeaningCheck::verify(&empty), Ok(()));
    assert_eq!(AvlCheck::verify(&Link::<u32, (), Height>::Empty), Ok(()));
}

#[test]
#[should_panic(expected = "double red at root.left")]
fn verifying_query_panics() {
    init_logger();
    let tree = Tree::<u32, (), RedBlack, RedBlackCheck> {
        root: double_red(),
        len: 3,
        verifying: true,
        _phantom: PhantomData
    };
    tree.get(&1);
}
#[test]
#[should_panic(expected = "double red at root.left")]
fn verifying_extremes_panic() {
    init_logger();
    let tree = Tree::<u32, (), RedBlack, RedBlackCheck> {
        root: double_red(),
        len: 3,
        verifying: true,
        _phantom: PhantomData
    };
    tree.max();
}
#[test]
fn verifying_try_put_reports() {
    init_logger();
    let mut tree = Tree::<u32, (), RedBlack, RedBlackCheck> {
        root: double_red(),
        len: 3,
        verifying: true,
        _phantom: PhantomData
    };
    let result = tree.try_put(5, ());
    assert!(matches!(result, Err(Error::Violation(Violation::DoubleRed { .. }))));
    // rejected before the insertion touched anything
    assert_eq!(tree.len(), 3);
    assert!(tree.cursor().descend(&[Side::Right]).key().is_none());
}
#[test]
fn quiet_tree_skips_checks() {
    init_logger();
    let tree = Tree::<u32, (), RedBlack, RedBlackCheck> {
        root: double_red(),
        len: 3,
        verifying: false,
        _phantom: PhantomData
    };
    assert_eq!(tree.get(&0), Some(&()));
    assert!(tree.contains_key(&2));
    assert_eq!(tree.verify(), Err(Violation::DoubleRed { at: path(&[Side::Left]) }));
}

#[test]
fn structural_errors() {
    let mut sentinel: Link<u32, (), Paint> = Link::Empty;
    assert!(matches!(sentinel.paint(Color::Red), Err(Error::RedSentinel)));
    assert!(sentinel.paint(Color::Black).is_ok());
    assert!(matches!(Link::<u32, (), ()>::Empty.key(), Err(Error::EmptyLink)));
    let lonely = Box::new(Node::new(1u32, (), ()));
    assert!(matches!(lonely.rotate::<0>(), Err(Error::EmptyLink)));
}
#[test]
fn path_display() {
    assert_eq!(path(&[]).to_string(), "root");
    assert_eq!(path(&[Side::Left, Side::Right, Side::Right]).to_string(), "root.left.right.right");
    assert_eq!(path(&[Side::Right]).steps(), &[Side::Right]);
}
