use criterion::{criterion_group, criterion_main, Criterion};
use merkle_airdrop::merkle_tree::{Keccak256, MerkleTree, Node};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const MAX_POWER: u32 = 16;
const SAMPLE_SIZE: usize = 10;

fn build_tree_benchmark(_c: &mut Criterion) {
    let mut criterion = Criterion::default().sample_size(SAMPLE_SIZE);
    let mut rng = StdRng::seed_from_u64(42);

    for i in (4..=MAX_POWER).step_by(4) {
        // one extra leaf so every level has an element to promote
        let num_leaves = 2usize.pow(i) + 1;
        let leaves: Vec<Node> = (0..num_leaves)
            .map(|_| Node::from(rng.gen::<[u8; 32]>()))
            .collect();

        let bench_name = format!("build merkle tree for 2 power of {} (+1) leaves", i);
        criterion.bench_function(&bench_name, |b| {
            b.iter(|| {
                MerkleTree::from_leaves(leaves.clone(), Keccak256).unwrap();
            })
        });

        let merkle_tree = MerkleTree::from_leaves(leaves.clone(), Keccak256).unwrap();
        let bench_name = format!("generate and verify proof in a tree of 2 power of {} (+1) leaves", i);
        criterion.bench_function(&bench_name, |b| {
            b.iter(|| {
                let proof = merkle_tree.generate_proof(num_leaves - 1).unwrap();
                assert!(merkle_tree.verify_proof(&proof));
            })
        });
    }
}

criterion_group!(benches, build_tree_benchmark);
criterion_main!(benches);
