use crate::merkle_tree::params::DIGEST_BYTES;
use crate::merkle_tree::utils::create_middle_node::hash_sorted_pair;
use crate::merkle_tree::{Digest, Hasher, MerkleProof, MerkleTreeError};

/// Folds `leaf` with every sibling in order and compares the result against `root`.
///
/// A proof that is well formed but does not lead to `root` yields `Ok(false)`.
/// A sibling that is not exactly [`DIGEST_BYTES`] long is reported as
/// [`MerkleTreeError::InvalidProofEncoding`].
pub fn verify_proof<H: Hasher, S: AsRef<[u8]>>(
    hasher: &H,
    leaf: &Digest,
    proof: &[S],
    root: &Digest,
) -> Result<bool, MerkleTreeError> {
    let mut current = *leaf;

    for (level, sibling) in proof.iter().enumerate() {
        let sibling = sibling.as_ref();
        let sibling: &Digest = sibling.try_into().map_err(|_| {
            MerkleTreeError::InvalidProofEncoding(format!(
                "sibling {} has {} bytes, expected {}",
                level,
                sibling.len(),
                DIGEST_BYTES
            ))
        })?;
        current = hash_sorted_pair(hasher, &current, sibling);
    }

    Ok(current == *root)
}

/// Checks that a proof produced by the tree chains its leaf up to its own `root_hash`.
pub fn verify_merkle_proof<H: Hasher>(hasher: &H, proof: &MerkleProof) -> bool {
    let computed = proof
        .sibling_hashes
        .iter()
        .fold(proof.leaf.hash, |current, sibling| {
            hash_sorted_pair(hasher, &current, sibling)
        });

    computed == proof.root_hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merkle_tree::Keccak256;

    #[test]
    fn test_malformed_sibling() {
        let leaf = [1u8; 32];
        let root = [2u8; 32];
        let proof = vec![vec![3u8; 32], vec![4u8; 31]];

        assert!(matches!(
            verify_proof(&Keccak256, &leaf, &proof, &root),
            Err(MerkleTreeError::InvalidProofEncoding(_))
        ));
    }

    #[test]
    fn test_empty_proof_compares_leaf_to_root() {
        let leaf = [7u8; 32];
        let empty: &[Digest] = &[];

        assert!(verify_proof(&Keccak256, &leaf, empty, &leaf).unwrap());
        assert!(!verify_proof(&Keccak256, &leaf, empty, &[8u8; 32]).unwrap());
    }
}
