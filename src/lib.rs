//! This crate contains the primitives for committing to an airdrop eligibility list.
//! Each `(address, amount)` record becomes a leaf digest (keccak256 by default), the leaves are folded into a
//! sorted-pair Merkle tree whose root is published on chain, and every claimant receives a
//! proof that the verifying contract checks with `MerkleProof.verify`.

/// Utilities to build the merkle tree data structure, generate and verify inclusion proofs.
pub mod merkle_tree;
