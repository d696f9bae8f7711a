use crate::merkle_tree::params::MAX_DEPTH;
use crate::merkle_tree::utils::{
    build_leaves_from_entries, build_merkle_tree_from_leaves, create_proof, export_claims,
    index_of, index_of_leaf, parse_csv_to_entries, to_hex_digest, tree_depth,
    verify_merkle_proof,
};
use crate::merkle_tree::{
    AirdropExport, Entry, Hasher, Keccak256, MerkleProof, MerkleTreeError, Node,
};
use num_bigint::BigInt;
use std::collections::HashSet;
use std::path::Path;

/// Merkle Tree Data Structure.
///
/// A binary tree over keccak-style 32 byte leaves where every internal node is the hash of
/// its two children sorted by byte value. When a level has an odd number of nodes the last
/// one is carried to the next level unchanged.
///
/// The leaf order is fixed at construction: it does not affect the root of a perfectly
/// balanced tree but it does decide which node gets promoted in an unbalanced one.
///
/// # Type Parameters
///
/// * `H`: The hash primitive, it must be the same one used by the verifying party
#[derive(Clone, Debug)]
pub struct MerkleTree<H: Hasher = Keccak256> {
    root: Node,
    nodes: Vec<Vec<Node>>,
    depth: usize,
    entries: Vec<Entry>,
    hasher: H,
}

impl MerkleTree<Keccak256> {
    /// Builds a keccak256 tree from the eligibility list stored at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, MerkleTreeError> {
        Self::from_csv(path, Keccak256)
    }
}

impl<H: Hasher> MerkleTree<H> {
    pub fn from_csv<P: AsRef<Path>>(path: P, hasher: H) -> Result<Self, MerkleTreeError> {
        let entries = parse_csv_to_entries(path)?;
        Self::from_entries(entries, hasher)
    }

    /// Builds the tree from eligibility records, rejecting lists in which an address
    /// shows up more than once.
    pub fn from_entries(entries: Vec<Entry>, hasher: H) -> Result<Self, MerkleTreeError> {
        let mut seen = HashSet::with_capacity(entries.len());
        if let Some(duplicate) = entries.iter().find(|entry| !seen.insert(*entry.address())) {
            return Err(MerkleTreeError::DuplicateAddress(duplicate.address_hex()));
        }

        let leaves = build_leaves_from_entries(&entries, &hasher);
        let mut tree = Self::from_leaves(leaves, hasher)?;
        tree.entries = entries;

        Ok(tree)
    }

    /// Builds the tree from already hashed leaves. Duplicated leaves are accepted.
    pub fn from_leaves(leaves: Vec<Node>, hasher: H) -> Result<Self, MerkleTreeError> {
        if leaves.is_empty() {
            return Err(MerkleTreeError::EmptyInput);
        }

        let depth = tree_depth(leaves.len());
        if depth > MAX_DEPTH {
            return Err(MerkleTreeError::TreeTooDeep {
                depth,
                max: MAX_DEPTH,
            });
        }

        let mut nodes = vec![];
        let root = build_merkle_tree_from_leaves(&leaves, depth, &hasher, &mut nodes)?;

        Ok(MerkleTree {
            root,
            nodes,
            depth,
            entries: vec![],
            hasher,
        })
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The root as published on chain, `0x` followed by 64 hex characters
    pub fn hex_root(&self) -> String {
        to_hex_digest(&self.root.hash)
    }

    pub fn depth(&self) -> &usize {
        &self.depth
    }

    pub fn leaves(&self) -> &[Node] {
        &self.nodes[0]
    }

    pub fn nodes(&self) -> &[Vec<Node>] {
        &self.nodes
    }

    /// Records the tree was built from, empty when built with [`MerkleTree::from_leaves`]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    pub fn index_of(&self, address: &str, amount: BigInt) -> Option<usize> {
        index_of(address, amount, &self.nodes, &self.hasher)
    }

    pub fn index_of_leaf(&self, leaf: &Node) -> Option<usize> {
        index_of_leaf(leaf, &self.nodes)
    }

    pub fn generate_proof(&self, index: usize) -> Result<MerkleProof, MerkleTreeError> {
        create_proof(index, self.depth, &self.nodes, &self.root)
    }

    /// Generates the proof for the first leaf matching `leaf` byte for byte
    pub fn prove(&self, leaf: &Node) -> Result<MerkleProof, MerkleTreeError> {
        let index = self
            .index_of_leaf(leaf)
            .ok_or(MerkleTreeError::LeafNotFound)?;
        self.generate_proof(index)
    }

    /// Verifies a MerkleProof against the root of this tree
    pub fn verify_proof(&self, proof: &MerkleProof) -> bool {
        proof.root_hash == self.root.hash && verify_merkle_proof(&self.hasher, proof)
    }

    /// Proof bundle for every claimant, in the same order as the entries
    pub fn export(&self) -> Result<AirdropExport, MerkleTreeError> {
        export_claims(&self.entries, self.depth, &self.nodes, &self.root)
    }
}
