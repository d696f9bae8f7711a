// Length of an account identifier once hex-decoded
pub const ADDRESS_BYTES: usize = 20;
// Width of the big-endian amount word, same as the EVM `uint256`
pub const AMOUNT_BYTES: usize = 32;
// Output length of the hash primitive, every node and sibling in a proof has this size
pub const DIGEST_BYTES: usize = 32;
// Bits available to an amount
pub const AMOUNT_BITS: u64 = (AMOUNT_BYTES * 8) as u64;
// Maximum number of levels above the leaves, namely the tree can hold 2^32 claimants at max
pub const MAX_DEPTH: usize = 32;
