use crate::merkle_tree::{Entry, MerkleTreeError};
use num_bigint::BigInt;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CsvEntry {
    #[serde(alias = "Address")]
    address: String,
    #[serde(alias = "Amount")]
    amount: String,
}

/// Reads the eligibility list, one `address,amount` record per row after the header.
/// Duplicate addresses are not rejected here, the tree builder takes care of that.
pub fn parse_csv_to_entries<P: AsRef<Path>>(path: P) -> Result<Vec<Entry>, MerkleTreeError> {
    let mut entries = Vec::new();
    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(file);

    for result in rdr.deserialize() {
        let record: CsvEntry = result?;

        let amount = BigInt::parse_bytes(record.amount.as_bytes(), 10).ok_or_else(|| {
            MerkleTreeError::InvalidAmount(format!(
                "{} is not a base 10 integer",
                record.amount
            ))
        })?;

        entries.push(Entry::new(&record.address, amount)?);
    }

    Ok(entries)
}
