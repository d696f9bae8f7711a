use crate::merkle_tree::{Entry, Hasher, Node};
use num_bigint::BigInt;

pub fn index_of<H: Hasher>(
    address: &str,
    amount: BigInt,
    nodes: &[Vec<Node>],
    hasher: &H,
) -> Option<usize> {
    // a record that cannot be encoded cannot be part of the tree either
    let entry = Entry::new(address, amount).ok()?;
    let leaf = entry.compute_leaf(hasher);

    index_of_leaf(&leaf, nodes)
}

pub fn index_of_leaf(leaf: &Node, nodes: &[Vec<Node>]) -> Option<usize> {
    nodes.first()?.iter().position(|node| node == leaf)
}
