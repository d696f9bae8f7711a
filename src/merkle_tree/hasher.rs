use crate::merkle_tree::Digest;

/// The hash primitive shared by the tree builder and the verifying party.
///
/// Both sides must use the exact same function, otherwise no proof will ever verify.
/// Implementations are expected to be cheap to clone and safe to share across the worker
/// threads used while building a level.
pub trait Hasher: Clone + Send + Sync {
    fn hash(&self, data: &[u8]) -> Digest;
}

/// Keccak-256 as exposed by the EVM, what `keccak256(abi.encodePacked(...))` computes on chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Keccak256;

impl Hasher for Keccak256 {
    fn hash(&self, data: &[u8]) -> Digest {
        ethers::utils::keccak256(data)
    }
}

#[cfg(test)]
mod tests {
    use super::{Hasher, Keccak256};

    #[test]
    fn test_keccak_empty_input() {
        let digest = Keccak256.hash(&[]);
        assert_eq!(
            hex::encode(digest),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }
}
