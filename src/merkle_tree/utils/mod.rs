mod build_tree;
mod create_middle_node;
mod create_proof;
mod csv_parser;
mod export;
mod index_of;
mod operation_helpers;
mod proof_verification;

pub use build_tree::{build_leaves_from_entries, build_merkle_tree_from_leaves, tree_depth};
pub use create_middle_node::{create_middle_node, hash_sorted_pair};
pub use create_proof::create_proof;
pub use csv_parser::parse_csv_to_entries;
pub use export::{export_claims, AirdropExport, ClaimExport};
pub use index_of::{index_of, index_of_leaf};
pub use operation_helpers::*;
pub use proof_verification::{verify_merkle_proof, verify_proof};
