use crate::merkle_tree::{MerkleProof, MerkleTreeError, Node};

pub fn create_proof(
    index: usize,
    depth: usize,
    nodes: &[Vec<Node>],
    root: &Node,
) -> Result<MerkleProof, MerkleTreeError> {
    let leaf = nodes
        .first()
        .and_then(|leaves| leaves.get(index))
        .ok_or(MerkleTreeError::IndexOutOfRange)?;

    let mut sibling_hashes = Vec::with_capacity(depth);
    let mut current_index = index;

    for level in nodes.iter().take(depth) {
        // a promoted odd element has no sibling at this level
        if let Some(sibling) = level.get(current_index ^ 1) {
            sibling_hashes.push(sibling.hash);
        }
        current_index /= 2;
    }

    Ok(MerkleProof {
        root_hash: root.hash,
        leaf: *leaf,
        sibling_hashes,
    })
}
