use crate::merkle_tree::utils::create_proof;
use crate::merkle_tree::{to_hex_digest, Entry, MerkleTreeError, Node};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// What a claimant needs to submit a claim: its record, its leaf and the sibling path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimExport {
    pub address: String,
    pub amount: String,
    pub leaf: String,
    pub proof: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirdropExport {
    pub root: String,
    pub claims: Vec<ClaimExport>,
}

impl AirdropExport {
    pub fn to_json(&self) -> Result<String, MerkleTreeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, MerkleTreeError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Generates the claim for every entry, `entries[i]` is expected to be the record behind
/// leaf `i`.
pub fn export_claims(
    entries: &[Entry],
    depth: usize,
    nodes: &[Vec<Node>],
    root: &Node,
) -> Result<AirdropExport, MerkleTreeError> {
    let claims = entries
        .par_iter()
        .enumerate()
        .map(|(index, entry)| {
            let proof = create_proof(index, depth, nodes, root)?;
            Ok(ClaimExport {
                address: entry.address_hex(),
                amount: entry.amount().to_string(),
                leaf: proof.leaf.to_hex(),
                proof: proof.hex_siblings(),
            })
        })
        .collect::<Result<Vec<_>, MerkleTreeError>>()?;

    Ok(AirdropExport {
        root: to_hex_digest(&root.hash),
        claims,
    })
}
