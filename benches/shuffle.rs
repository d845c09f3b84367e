use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use bg_shuffle::field::GqGroup;
use bg_shuffle::homomorphic_encryption::el_gamal::{Ciphertext, ElGamal};
use bg_shuffle::homomorphic_encryption::HomomorphicEncryptionScheme;
use bg_shuffle::utils::permutation::Permutation;
use bg_shuffle::vector_commitment::pedersen::CommitKey;
use bg_shuffle::zkp::arguments::shuffle_argument::{self, ShuffleArgument};
use bg_shuffle::zkp::ArgumentOfKnowledge;
use bg_shuffle::{containers::GroupVector, utils::hash::ShakeHashOracle};

use num_bigint::BigUint;
use rand::rngs::OsRng;
use std::sync::Arc;

// `p = 2q + 1`, a 64-bit safe prime, large enough that N up to 26*2 = 52
// ciphertexts stays well under the `N <= q - 3` bound.
fn group() -> Arc<GqGroup> {
    let p = BigUint::from(4222246787777u64);
    let q = BigUint::from(2111123393888u64);
    let g = BigUint::from(5u32);
    Arc::new(GqGroup::new(p, q, g))
}

fn prepare_proof_parameters(group: &Arc<GqGroup>, m: usize, n: usize) -> (CommitKey, GroupVector<Ciphertext>, shuffle_argument::Witness, GroupVector<Ciphertext>) {
    let mut rng = OsRng;
    let number_of_ciphers = m * n;

    let commit_key = CommitKey::setup(group, &mut rng, n);
    let (pk, _sk) = ElGamal::keygen(group, &mut rng, 1).unwrap();

    let ciphers: Vec<Ciphertext> = (0..number_of_ciphers)
        .map(|_| Ciphertext::re_encrypt(&[group.random_element(&mut rng)], &group.random_scalar(&mut rng), &pk).unwrap())
        .collect();
    let c = GroupVector::new(ciphers.clone()).unwrap();

    let permutation = Permutation::new(&mut rng, number_of_ciphers);
    let rho: Vec<_> = (0..number_of_ciphers).map(|_| group.random_scalar(&mut rng)).collect();
    let shuffled: Vec<Ciphertext> = permutation
        .permute_array(&ciphers)
        .iter()
        .zip(rho.iter())
        .map(|(cipher, rho_i)| Ciphertext::masked_by_zero(rho_i, &pk, 1).unwrap().mul(cipher).unwrap())
        .collect();
    let c_prime = GroupVector::new(shuffled).unwrap();

    let witness = shuffle_argument::Witness::new(permutation, GroupVector::new(rho).unwrap()).unwrap();
    (commit_key, c, witness, c_prime)
}

fn criterion_benchmark(c: &mut Criterion) {
    let group = group();
    let mut rng = OsRng;
    let (pk, _sk) = ElGamal::keygen(&group, &mut rng, 1).unwrap();

    // (m, n) pairs with m*n constant; proof cost is O(m^2 + n), so the
    // square-ish factorization is expected to be fastest.
    let shapes = vec![(4, 13), (13, 4), (2, 26), (26, 2)];

    {
        let mut bench_group = c.benchmark_group("PROVING");
        bench_group.sample_size(10);
        for (m, n) in shapes.clone() {
            let (commit_key, ciphers, witness, shuffled) = prepare_proof_parameters(&group, m, n);
            let parameters = shuffle_argument::Parameters::new(m, n, commit_key, pk.clone());
            let statement = shuffle_argument::Statement::new(ciphers, shuffled).unwrap();
            let oracle = ShakeHashOracle::new(group.clone()).unwrap();
            let bench_id = BenchmarkId::new("number_of_ciphers:", format!("({} * {} = {})", m, n, m * n));
            bench_group.bench_function(bench_id, |b| {
                b.iter(|| ShuffleArgument::prove(&mut rng, &parameters, &statement, &witness, &oracle).unwrap())
            });
        }
    }

    {
        let mut bench_group = c.benchmark_group("VERIFYING");
        bench_group.sample_size(10);
        for (m, n) in shapes {
            let (commit_key, ciphers, witness, shuffled) = prepare_proof_parameters(&group, m, n);
            let parameters = shuffle_argument::Parameters::new(m, n, commit_key, pk.clone());
            let statement = shuffle_argument::Statement::new(ciphers, shuffled).unwrap();
            let oracle = ShakeHashOracle::new(group.clone()).unwrap();
            let proof = ShuffleArgument::prove(&mut rng, &parameters, &statement, &witness, &oracle).unwrap();
            assert!(ShuffleArgument::verify(&parameters, &statement, &proof, &oracle).is_ok());
            let bench_id = BenchmarkId::new("number_of_ciphers:", format!("({} * {} = {})", m, n, m * n));
            bench_group.bench_function(bench_id, |b| b.iter(|| ShuffleArgument::verify(&parameters, &statement, &proof, &oracle)));
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
