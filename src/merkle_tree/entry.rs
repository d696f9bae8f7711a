use crate::merkle_tree::params::{ADDRESS_BYTES, AMOUNT_BYTES};
use crate::merkle_tree::utils::{big_int_to_u256, parse_address};
use crate::merkle_tree::{Hasher, MerkleTreeError, Node};
use ethers::types::{Address, U256};
use num_bigint::BigInt;

/// An entry of the airdrop eligibility list.
/// It contains the claimant's address and the amount it is allowed to claim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    address: [u8; ADDRESS_BYTES],
    amount: U256,
}

impl Entry {
    pub fn new(address: &str, amount: BigInt) -> Result<Self, MerkleTreeError> {
        Ok(Entry {
            address: parse_address(address)?,
            amount: big_int_to_u256(&amount)?,
        })
    }

    pub fn from_address(address: Address, amount: U256) -> Self {
        Entry {
            address: address.0,
            amount,
        }
    }

    /// `address || amount` as packed by `abi.encodePacked(address, uint256)`
    pub fn leaf_preimage(&self) -> [u8; ADDRESS_BYTES + AMOUNT_BYTES] {
        let mut preimage = [0u8; ADDRESS_BYTES + AMOUNT_BYTES];
        preimage[..ADDRESS_BYTES].copy_from_slice(&self.address);
        self.amount.to_big_endian(&mut preimage[ADDRESS_BYTES..]);
        preimage
    }

    pub fn compute_leaf<H: Hasher>(&self, hasher: &H) -> Node {
        Node {
            hash: hasher.hash(&self.leaf_preimage()),
        }
    }

    pub fn address(&self) -> &[u8; ADDRESS_BYTES] {
        &self.address
    }

    pub fn address_hex(&self) -> String {
        format!("0x{}", hex::encode(self.address))
    }

    pub fn amount(&self) -> &U256 {
        &self.amount
    }
}

/// Maps one `(address, amount)` record straight to its leaf.
pub fn encode_leaf<H: Hasher>(
    hasher: &H,
    address: &str,
    amount: BigInt,
) -> Result<Node, MerkleTreeError> {
    Ok(Entry::new(address, amount)?.compute_leaf(hasher))
}
