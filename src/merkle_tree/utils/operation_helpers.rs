use crate::merkle_tree::params::{ADDRESS_BYTES, AMOUNT_BITS, DIGEST_BYTES};
use crate::merkle_tree::{Digest, MerkleTreeError};
use ethers::types::U256;
use num_bigint::BigInt;
use num_traits::Signed;

/// Decodes an account identifier into its raw bytes.
/// The `0x` prefix is optional and the hex digits are matched case-insensitively.
pub fn parse_address(address: &str) -> Result<[u8; ADDRESS_BYTES], MerkleTreeError> {
    let trimmed = address.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed)
        .to_lowercase();

    let bytes = hex::decode(&digits)
        .map_err(|e| MerkleTreeError::InvalidAddress(format!("{}: {}", address, e)))?;

    bytes.try_into().map_err(|bytes: Vec<u8>| {
        MerkleTreeError::InvalidAddress(format!(
            "{}: expected {} bytes, got {}",
            address,
            ADDRESS_BYTES,
            bytes.len()
        ))
    })
}

/// Converts a BigInt to the 256 bit word the verifier works with
pub fn big_int_to_u256(amount: &BigInt) -> Result<U256, MerkleTreeError> {
    if amount.is_negative() {
        return Err(MerkleTreeError::InvalidAmount(format!(
            "{} is negative",
            amount
        )));
    }
    if amount.bits() > AMOUNT_BITS {
        return Err(MerkleTreeError::InvalidAmount(format!(
            "{} does not fit in {} bits",
            amount, AMOUNT_BITS
        )));
    }

    let (_, bytes) = amount.to_bytes_be();
    Ok(U256::from_big_endian(&bytes))
}

/// Renders a digest as `0x` followed by 64 lowercase hex characters
pub fn to_hex_digest(digest: &Digest) -> String {
    format!("0x{}", hex::encode(digest))
}

pub fn parse_hex_digest(digest: &str) -> Result<Digest, MerkleTreeError> {
    let digits = digest.strip_prefix("0x").unwrap_or(digest);
    let bytes = hex::decode(digits)
        .map_err(|e| MerkleTreeError::InvalidProofEncoding(format!("{}: {}", digest, e)))?;

    bytes.try_into().map_err(|bytes: Vec<u8>| {
        MerkleTreeError::InvalidProofEncoding(format!(
            "expected {} bytes, got {}",
            DIGEST_BYTES,
            bytes.len()
        ))
    })
}
