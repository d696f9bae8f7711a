mod entry;
mod error;
mod hasher;
mod mt;
pub mod params;
pub mod utils;

/// Output of the hash primitive.
pub type Digest = [u8; params::DIGEST_BYTES];

/// Inclusion proof for a single leaf, ordered from the leaf level up to the level below the root.
///
/// Levels at which the leaf's ancestor had no sibling (odd element promoted upwards) do not
/// contribute an entry, so the proof may be shorter than the tree depth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleProof {
    pub root_hash: Digest,
    pub leaf: Node,
    pub sibling_hashes: Vec<Digest>,
}

impl MerkleProof {
    /// `0x`-prefixed sibling hashes, the shape expected by a `bytes32[]` calldata argument.
    pub fn hex_siblings(&self) -> Vec<String> {
        self.sibling_hashes.iter().map(to_hex_digest).collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Node {
    pub hash: Digest,
}

impl From<Digest> for Node {
    fn from(hash: Digest) -> Self {
        Node { hash }
    }
}

impl Node {
    pub fn to_hex(&self) -> String {
        to_hex_digest(&self.hash)
    }
}

pub use entry::{encode_leaf, Entry};
pub use error::MerkleTreeError;
pub use hasher::{Hasher, Keccak256};
pub use mt::MerkleTree;
pub use utils::{parse_hex_digest, to_hex_digest, AirdropExport, ClaimExport};
