use thiserror::Error;

#[derive(Error, Debug)]
pub enum MerkleTreeError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Empty input provided")]
    EmptyInput,
    #[error("The leaf does not exist in this tree")]
    LeafNotFound,
    #[error("Index out of range")]
    IndexOutOfRange,
    #[error("Invalid proof encoding: {0}")]
    InvalidProofEncoding(String),
    #[error("Duplicate address in eligibility list: {0}")]
    DuplicateAddress(String),
    #[error("The tree depth must be at most {max}, got {depth}")]
    TreeTooDeep { depth: usize, max: usize },
    #[error("Csv Error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serde Error: {0}")]
    Json(#[from] serde_json::Error),
}
