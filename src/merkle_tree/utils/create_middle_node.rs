use crate::merkle_tree::params::DIGEST_BYTES;
use crate::merkle_tree::{Digest, Hasher, Node};

/// Hashes two digests after ordering them by byte value, so the result does not depend on
/// which side each child sits on. Verification must apply the same rule.
pub fn hash_sorted_pair<H: Hasher>(hasher: &H, a: &Digest, b: &Digest) -> Digest {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };

    let mut hash_inputs = [0u8; 2 * DIGEST_BYTES];
    hash_inputs[..DIGEST_BYTES].copy_from_slice(low);
    hash_inputs[DIGEST_BYTES..].copy_from_slice(high);

    hasher.hash(&hash_inputs)
}

pub fn create_middle_node<H: Hasher>(hasher: &H, child_l: &Node, child_r: &Node) -> Node {
    Node {
        hash: hash_sorted_pair(hasher, &child_l.hash, &child_r.hash),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merkle_tree::Keccak256;

    #[test]
    fn test_middle_node_ignores_child_order() {
        let left = Node::from([1u8; 32]);
        let right = Node::from([2u8; 32]);

        let node = create_middle_node(&Keccak256, &left, &right);
        let swapped = create_middle_node(&Keccak256, &right, &left);
        assert_eq!(node, swapped);

        let mut concatenated = [1u8; 64];
        concatenated[32..].copy_from_slice(&[2u8; 32]);
        assert_eq!(node.hash, Keccak256.hash(&concatenated));
    }
}
