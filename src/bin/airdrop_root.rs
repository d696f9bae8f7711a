use merkle_airdrop::merkle_tree::MerkleTree;
use std::{env, fs::File, io::Write, process};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <eligibility.csv> [claims.json]", args[0]);
        process::exit(1);
    }

    let merkle_tree = match MerkleTree::new(&args[1]) {
        Ok(tree) => tree,
        Err(error) => {
            eprintln!("Error generating Merkle root: {}", error);
            process::exit(1);
        }
    };

    println!("Merkle Root: {}", merkle_tree.hex_root());

    if let Some(output) = args.get(2) {
        let json = match merkle_tree.export().and_then(|export| export.to_json()) {
            Ok(json) => json,
            Err(error) => {
                eprintln!("Error generating claims: {}", error);
                process::exit(1);
            }
        };

        let written = File::create(output).and_then(|mut file| file.write_all(json.as_bytes()));
        if let Err(error) = written {
            eprintln!("Error writing {}: {}", output, error);
            process::exit(1);
        }

        println!(
            "Wrote {} claims to {}",
            merkle_tree.entries().len(),
            output
        );
    }
}
