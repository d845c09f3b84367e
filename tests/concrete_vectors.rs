//! Regression suite pinned to the small `p = 23, q = 11, g = 2` group.
//!
//! S1-S3 (Pedersen commitment scenarios) live next to `PedersenCommitment`
//! itself; S5-S6 (`compute_d`, `hadamard_product_prefix`) live next to
//! `vector_arithmetic`. This file covers S4, the full-shuffle scenario, plus
//! the rejection and soundness tests that exercise the top-level boundary.

use bg_shuffle::containers::GroupVector;
use bg_shuffle::field::GqGroup;
use bg_shuffle::homomorphic_encryption::el_gamal::{Ciphertext, PublicKey};
use bg_shuffle::utils::hash::ShakeHashOracle;
use bg_shuffle::utils::permutation::Permutation;
use bg_shuffle::vector_commitment::pedersen::CommitKey;
use bg_shuffle::zkp::arguments::shuffle_argument::{self, ShuffleArgument};
use bg_shuffle::zkp::ArgumentOfKnowledge;
use bg_shuffle::{CryptoError, Mixnet};

use num_bigint::BigUint;
use rand::thread_rng;
use std::sync::Arc;

fn group() -> Arc<GqGroup> {
    Arc::new(GqGroup::new(BigUint::from(23u32), BigUint::from(11u32), BigUint::from(2u32)))
}

fn biguint(v: u32) -> BigUint {
    BigUint::from(v)
}

/// S4's fixed public key, commitment key, input ciphertexts and witness.
struct S4 {
    pk: PublicKey,
    ck: CommitKey,
    c: GroupVector<Ciphertext>,
    c_prime: GroupVector<Ciphertext>,
    permutation: Permutation,
    rho_prime: GroupVector<bg_shuffle::field::ZqElement>,
}

fn s4_fixture() -> S4 {
    let g = group();
    let pk = PublicKey::new(vec![g.element(biguint(8)), g.element(biguint(13)), g.element(biguint(4))]).unwrap();
    let ck = CommitKey::new(g.element(biguint(3)), vec![g.element(biguint(6)), g.element(biguint(13)), g.element(biguint(12))]).unwrap();

    let messages = [[4u32, 8, 3], [16, 2, 9], [3, 6, 4], [13, 4, 18]];
    let rho = [5u32, 10, 7, 2];
    let c: Vec<Ciphertext> = messages
        .iter()
        .zip(rho.iter())
        .map(|(m, &r)| {
            let m: Vec<_> = m.iter().map(|&v| g.element(biguint(v))).collect();
            Ciphertext::re_encrypt(&m, &g.scalar(biguint(r)), &pk).unwrap()
        })
        .collect();
    let c = GroupVector::new(c).unwrap();

    let permutation = Permutation::from_image(vec![1, 3, 2, 0]);
    let rho_prime = GroupVector::new(vec![3u32, 9, 4, 2].into_iter().map(|v| g.scalar(biguint(v))).collect()).unwrap();

    // `C'_i = ReEnc(1, rho_prime_i) . C_{permutation(i)}`, spelled out as the
    // literal ciphertexts the spec gives for this scenario.
    let expected = [
        (4u32, [12u32, 16, 6]),
        (1, [13, 4, 18]),
        (1, [3, 6, 4]),
        (13, [2, 3, 1]),
    ];
    let c_prime: Vec<Ciphertext> = expected
        .iter()
        .map(|(gamma, phis)| Ciphertext::new(g.element(biguint(*gamma)), phis.iter().map(|&v| g.element(biguint(v))).collect()).unwrap())
        .collect();
    let c_prime = GroupVector::new(c_prime).unwrap();

    S4 { pk, ck, c, c_prime, permutation, rho_prime }
}

/// S4: the literal re-encryption-shuffle witness identity computed by hand
/// against the spec's worked example reproduces the spec's claimed `C'`.
#[test]
fn s4_shuffle_witness_identity_matches_the_worked_example() {
    let fixture = s4_fixture();
    for i in 0..fixture.c.len() {
        let masked = Ciphertext::masked_by_zero(&fixture.rho_prime[i], &fixture.pk, 3).unwrap();
        let reconstructed = masked.mul(&fixture.c[fixture.permutation.apply(i)]).unwrap();
        assert_eq!(reconstructed, fixture.c_prime[i], "mismatch at position {i}");
    }
}

/// S4: `verifyShuffleArgument(stmt, getShuffleArgument(stmt, wit, 2, 2))`
/// holds for the worked example. The Fiat-Shamir challenges are derived from
/// this crate's own `ShakeHashOracle` rather than the unspecified oracle the
/// spec's worked numbers were computed under, so this checks completeness of
/// the argument over the pinned statement/witness, not a byte-exact replay.
#[test]
fn s4_shuffle_argument_round_trips() {
    let fixture = s4_fixture();
    let oracle = ShakeHashOracle::new(group()).unwrap();
    let parameters = shuffle_argument::Parameters::new(2, 2, fixture.ck, fixture.pk);
    let statement = shuffle_argument::Statement::new(fixture.c, fixture.c_prime).unwrap();
    let witness = shuffle_argument::Witness::new(fixture.permutation, fixture.rho_prime).unwrap();

    let mut rng = thread_rng();
    let proof = ShuffleArgument::prove(&mut rng, &parameters, &statement, &witness, &oracle).unwrap();
    assert!(ShuffleArgument::verify(&parameters, &statement, &proof, &oracle).is_ok());
}

// --- Rejection tests: structural/shape/group/bounds violations raised synchronously. ---

#[test]
fn shuffle_statement_rejects_mismatched_lengths() {
    let fixture = s4_fixture();
    let mut short = fixture.c_prime.as_slice().to_vec();
    short.pop();
    let short = GroupVector::new(short).unwrap();
    let err = shuffle_argument::Statement::new(fixture.c, short).unwrap_err();
    assert!(matches!(err, CryptoError::ShapeMismatchError(4, 3)));
}

#[test]
fn shuffle_statement_rejects_cross_group_ciphertexts() {
    let fixture = s4_fixture();
    let other_group = Arc::new(GqGroup::new(biguint(47), biguint(23), biguint(2)));
    let foreign = Ciphertext::identity(&other_group, 3);
    let mut mixed = fixture.c_prime.as_slice().to_vec();
    mixed[0] = foreign;
    let mixed = GroupVector::new(mixed);
    // `GroupVector::new` itself already rejects the cross-group vector.
    assert!(matches!(mixed.unwrap_err(), CryptoError::GroupMismatch));
}

#[test]
fn shuffle_witness_rejects_permutation_size_mismatch() {
    let fixture = s4_fixture();
    let mut rho = fixture.rho_prime.as_slice().to_vec();
    rho.pop();
    let rho = GroupVector::new(rho).unwrap();
    let err = shuffle_argument::Witness::new(fixture.permutation, rho).unwrap_err();
    assert!(matches!(err, CryptoError::ShapeMismatchError(4, 3)));
}

#[test]
fn shuffle_argument_rejects_n_below_two() {
    let fixture = s4_fixture();
    let parameters = shuffle_argument::Parameters::new(4, 1, fixture.ck, fixture.pk);
    let err = shuffle_argument::validate_shape(&parameters, 4).unwrap_err();
    assert!(matches!(err, CryptoError::BoundsViolation(_, _)));
}

#[test]
fn shuffle_argument_rejects_n_exceeding_q_minus_three() {
    // q = 11 here, so N <= 8; requesting m=3,n=3 (N=9) must be rejected.
    let fixture = s4_fixture();
    let parameters = shuffle_argument::Parameters::new(3, 3, fixture.ck, fixture.pk);
    let err = shuffle_argument::validate_shape(&parameters, 9).unwrap_err();
    assert!(matches!(err, CryptoError::BoundsViolation(_, _)));
}

#[test]
fn gen_shuffle_prover_rejects_inconsistent_witness() {
    use bg_shuffle::zkp::arguments::shuffle_argument::Prover;

    let fixture = s4_fixture();
    // Scramble the permutation so the witness no longer reproduces c_prime.
    let wrong_permutation = Permutation::from_image(vec![0, 1, 2, 3]);
    let oracle = ShakeHashOracle::new(group()).unwrap();
    let parameters = shuffle_argument::Parameters::new(2, 2, fixture.ck, fixture.pk);
    let statement = shuffle_argument::Statement::new(fixture.c, fixture.c_prime).unwrap();
    let witness = shuffle_argument::Witness::new(wrong_permutation, fixture.rho_prime).unwrap();

    let mut rng = thread_rng();
    let err = Prover::new(&parameters, &statement, &witness).prove(&mut rng, &oracle).unwrap_err();
    assert!(matches!(err, CryptoError::WitnessInconsistent(_)));
}

// --- Soundness tests: mutating a single proof field must fail verification. ---

#[test]
fn mutating_c_a_breaks_verification() {
    let fixture = s4_fixture();
    let oracle = ShakeHashOracle::new(group()).unwrap();
    let parameters = shuffle_argument::Parameters::new(2, 2, fixture.ck, fixture.pk);
    let statement = shuffle_argument::Statement::new(fixture.c, fixture.c_prime).unwrap();
    let witness = shuffle_argument::Witness::new(fixture.permutation, fixture.rho_prime).unwrap();

    let mut rng = thread_rng();
    let mut proof = ShuffleArgument::prove(&mut rng, &parameters, &statement, &witness, &oracle).unwrap();
    let mut c_a = proof.c_a.as_slice().to_vec();
    c_a[0] = c_a[0].mul(&statement.c.get(0).unwrap().gamma().clone()).unwrap();
    proof.c_a = GroupVector::new(c_a).unwrap();

    assert!(ShuffleArgument::verify(&parameters, &statement, &proof, &oracle).is_err());
}

#[test]
fn mutating_c_b_breaks_verification() {
    let fixture = s4_fixture();
    let oracle = ShakeHashOracle::new(group()).unwrap();
    let parameters = shuffle_argument::Parameters::new(2, 2, fixture.ck, fixture.pk);
    let statement = shuffle_argument::Statement::new(fixture.c, fixture.c_prime).unwrap();
    let witness = shuffle_argument::Witness::new(fixture.permutation, fixture.rho_prime).unwrap();

    let mut rng = thread_rng();
    let mut proof = ShuffleArgument::prove(&mut rng, &parameters, &statement, &witness, &oracle).unwrap();
    let mut c_b = proof.c_b.as_slice().to_vec();
    c_b[0] = c_b[0].mul(&statement.c.get(0).unwrap().gamma().clone()).unwrap();
    proof.c_b = GroupVector::new(c_b).unwrap();

    assert!(ShuffleArgument::verify(&parameters, &statement, &proof, &oracle).is_err());
}

/// Same mutation, driven through the `Mixnet` boundary: the aggregated
/// `VerificationResult` must flag the failure without panicking.
#[test]
fn mixnet_reports_tampered_proof_through_verification_result() {
    use bg_shuffle::homomorphic_encryption::el_gamal::ElGamal;
    use bg_shuffle::homomorphic_encryption::HomomorphicEncryptionScheme;

    let g = group();
    let mut rng = thread_rng();
    let (pk, _sk) = ElGamal::keygen(&g, &mut rng, 2).unwrap();
    let (m, n) = (2usize, 2usize);
    let ck = CommitKey::setup(&g, &mut rng, n);
    let oracle = ShakeHashOracle::new(g.clone()).unwrap();

    let ciphers: Vec<_> = (0..m * n)
        .map(|_| Ciphertext::re_encrypt(&[g.random_element(&mut rng), g.random_element(&mut rng)], &g.random_scalar(&mut rng), &pk).unwrap())
        .collect();
    let c = GroupVector::new(ciphers).unwrap();

    let verifiable = Mixnet::gen_verifiable_shuffle(&c, &pk, &ck, m, n, &mut rng, &oracle).unwrap();
    let mut proof = verifiable.shuffle_argument;
    let mut c_a = proof.c_a.as_slice().to_vec();
    c_a[0] = c_a[0].mul(&g.generator()).unwrap();
    proof.c_a = GroupVector::new(c_a).unwrap();

    let report = Mixnet::verify_shuffle(&c, &verifiable.shuffled_ciphertexts, &proof, &pk, &ck, m, n, &oracle);
    assert!(!report.is_verified());
    assert!(!report.messages.is_empty());
}
