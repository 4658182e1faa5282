mod verify;

use std::fmt::Debug;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use simplelog::{Config, LevelFilter, TestLogger};

use crate::tree::{Cursor, Link, Node};

const TEST_SEED: u64 = 0x0b57_f0e5;

fn init_logger() {
    // every test tries, only the first one wins
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(TEST_SEED)
}

/// Walks the tree in order without the crate's iterators and checks strict key order.
fn validate_order<'a, K, V, M>(root: Cursor<'a, K, V, M>) -> Vec<&'a K>
    where K: Ord + Debug
{
    let mut keys: Vec<&K> = Vec::new();
    let mut stack = Vec::new();
    let mut current = root;
    loop {
        while !current.is_empty() {
            stack.push(current);
            current = current.left();
        }
        let Some(top) = stack.pop() else { break };
        let key = top.key().expect("not null");
        if let Some(prev) = keys.last() {
            assert!(*prev < key, "keys out of order: {:?} before {:?}", prev, key);
        }
        keys.push(key);
        current = top.right();
    }
    keys
}

/// Pre-order dump of every node including its metadata.
fn snapshot<K, V, M>(root: Cursor<K, V, M>) -> Vec<(K, V, String)>
    where K: Clone, V: Clone, M: Debug
{
    let mut nodes = Vec::new();
    let mut stack = vec![root];
    while let Some(cursor) = stack.pop() {
        let (Some(key), Some(value), Some(meta)) = (cursor.key(), cursor.value(), cursor.meta())
            else { continue };
        nodes.push((key.clone(), value.clone(), format!("{:?}", meta)));
        stack.push(cursor.right());
        stack.push(cursor.left());
    }
    nodes
}

fn print_subtree<K, V, M>(root: Cursor<K, V, M>, depth: u8, markers: u64)
    where K: Debug, V: Debug, M: Debug
{
    for i in 0..depth {
        if markers & (1 << i) == 0 {
            print!("| ");
        } else {
            print!("  ");
        }
    }
    let (Some(key), Some(value), Some(meta)) = (root.key(), root.value(), root.meta())
        else {
            println!("NIL");
            return;
        };
    println!("[{:?}] {:?} => {:?}", meta, key, value);
    print_subtree(root.left(), depth + 1, markers);
    print_subtree(root.right(), depth + 1, markers | (1 << (depth + 1)));
}
#[allow(unused)]
fn print_tree<K, V, M>(root: Cursor<K, V, M>)
    where K: Debug, V: Debug, M: Debug
{
    print_subtree(root, 0, 1);
}

/// Hand-assembles a node, bypassing every balancer.
fn join<K, V, M>(key: K, value: V, meta: M, left: Link<K, V, M>, right: Link<K, V, M>) -> Link<K, V, M> {
    let mut node = Node::new(key, value, meta);
    node.children = [left, right];
    Link::Node(Box::new(node))
}
fn leaf<K, V, M>(key: K, value: V, meta: M) -> Link<K, V, M> {
    join(key, value, meta, Link::Empty, Link::Empty)
}
