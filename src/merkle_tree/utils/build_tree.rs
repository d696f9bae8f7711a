use crate::merkle_tree::utils::create_middle_node::create_middle_node;
use crate::merkle_tree::{Entry, Hasher, MerkleTreeError, Node};
use ark_std::{end_timer, start_timer};
use rayon::prelude::*;

pub fn build_leaves_from_entries<H: Hasher>(entries: &[Entry], hasher: &H) -> Vec<Node> {
    let pf_time = start_timer!(|| "compute leaves");

    let leaves = entries
        .par_iter()
        .map(|entry| entry.compute_leaf(hasher))
        .collect::<Vec<_>>();

    end_timer!(pf_time);
    leaves
}

pub fn build_merkle_tree_from_leaves<H: Hasher>(
    leaves: &[Node],
    depth: usize,
    hasher: &H,
    nodes: &mut Vec<Vec<Node>>,
) -> Result<Node, MerkleTreeError> {
    if leaves.is_empty() {
        return Err(MerkleTreeError::EmptyInput);
    }

    let mut tree: Vec<Vec<Node>> = Vec::with_capacity(depth + 1);
    tree.push(leaves.to_vec());

    for level in 1..=depth {
        let pf_time = start_timer!(|| format!("compute middle level {}", level));
        let middle_level = build_middle_level(&tree[level - 1], hasher);
        end_timer!(pf_time);

        tree.push(middle_level);
    }

    let root = match tree.last().map(Vec::as_slice) {
        Some([root]) => *root,
        _ => return Err(MerkleTreeError::IndexOutOfRange),
    };

    *nodes = tree;
    Ok(root)
}

/// Number of levels above the leaves once odd elements are carried upwards
pub fn tree_depth(n_leaves: usize) -> usize {
    n_leaves.next_power_of_two().trailing_zeros() as usize
}

// Levels with fewer pairs than available cores are hashed on the current thread,
// the wider ones are split across the rayon pool. Output order is the same in both cases.
fn build_middle_level<H: Hasher>(previous_level: &[Node], hasher: &H) -> Vec<Node> {
    let parallelization_threshold = num_cpus::get();

    if previous_level.len() / 2 > parallelization_threshold {
        previous_level
            .par_chunks(2)
            .map(|pair| combine_pair(pair, hasher))
            .collect()
    } else {
        previous_level
            .chunks(2)
            .map(|pair| combine_pair(pair, hasher))
            .collect()
    }
}

// The last element of an odd level has no sibling and is promoted unchanged
fn combine_pair<H: Hasher>(pair: &[Node], hasher: &H) -> Node {
    match pair {
        [left, right] => create_middle_node(hasher, left, right),
        _ => pair[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merkle_tree::Keccak256;

    #[test]
    fn test_tree_depth() {
        assert_eq!(tree_depth(1), 0);
        assert_eq!(tree_depth(2), 1);
        assert_eq!(tree_depth(3), 2);
        assert_eq!(tree_depth(4), 2);
        assert_eq!(tree_depth(5), 3);
        assert_eq!(tree_depth(16), 4);
        assert_eq!(tree_depth(17), 5);
    }

    #[test]
    fn test_level_widths_with_promotion() {
        let leaves = (0..5u8).map(|i| Node::from([i; 32])).collect::<Vec<_>>();
        let mut nodes = vec![];
        let root =
            build_merkle_tree_from_leaves(&leaves, tree_depth(leaves.len()), &Keccak256, &mut nodes)
                .unwrap();

        let widths = nodes.iter().map(Vec::len).collect::<Vec<_>>();
        assert_eq!(widths, vec![5, 3, 2, 1]);
        // the fifth leaf travels up unchanged until it meets a sibling
        assert_eq!(nodes[1][2], leaves[4]);
        assert_eq!(nodes[3][0], root);
    }

    #[test]
    fn test_empty_leaves() {
        let mut nodes = vec![];
        assert!(matches!(
            build_merkle_tree_from_leaves(&[], 0, &Keccak256, &mut nodes),
            Err(MerkleTreeError::EmptyInput)
        ));
    }
}
