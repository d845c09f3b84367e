//! Shuffle Argument: the top of the tower. Proves that `C'` is a permutation
//! plus re-encryption of `C` under the same public key, by reducing the claim
//! to a [`super::product_argument`] over the permuted challenge powers and a
//! [`super::multi_exponentiation_argument`] tying those powers back to the
//! actual re-encrypted ciphertexts.

pub mod proof;
pub mod prover;

use crate::containers::GroupVector;
use crate::error::CryptoError;
use crate::field::{Tagged, ZqElement};
use crate::homomorphic_encryption::el_gamal::{Ciphertext, PublicKey};
use crate::utils::permutation::Permutation;
use crate::vector_commitment::pedersen::CommitKey;

use num_bigint::BigUint;

pub use proof::Proof;
pub use prover::Prover;

#[derive(Clone)]
pub struct Parameters {
    pub m: usize,
    pub n: usize,
    pub commit_key: CommitKey,
    pub public_key: PublicKey,
}

impl Parameters {
    pub fn new(m: usize, n: usize, commit_key: CommitKey, public_key: PublicKey) -> Self {
        Self { m, n, commit_key, public_key }
    }
}

/// Checks the shape constraints that don't depend on the witness: `m >= 1`,
/// `n >= 2`, `N = m*n` matches the ciphertext vectors, `N >= 2`, `m` and `n`
/// both fit the commitment key's capacity, and `N <= q - 3` (the bound the
/// product sub-argument's challenge-power construction needs to stay
/// injective over `Z_q`).
pub fn validate_shape(parameters: &Parameters, num_ciphertexts: usize) -> Result<(), CryptoError> {
    let m = parameters.m;
    let n = parameters.n;
    if m == 0 {
        return Err(CryptoError::BoundsViolation("shuffle_argument".into(), "m must be >= 1".into()));
    }
    if n < 2 {
        return Err(CryptoError::BoundsViolation("shuffle_argument".into(), "n must be >= 2".into()));
    }
    if m * n != num_ciphertexts {
        return Err(CryptoError::VectorCastingError(num_ciphertexts, m, n));
    }
    if num_ciphertexts < 2 {
        return Err(CryptoError::BoundsViolation("shuffle_argument".into(), "N must be >= 2".into()));
    }
    let capacity = parameters.commit_key.capacity();
    if n > capacity || m > capacity {
        return Err(CryptoError::CommitmentLengthError("Pedersen".into(), n.max(m), capacity));
    }
    let q = parameters.public_key.group().order();
    if BigUint::from(num_ciphertexts) + BigUint::from(3u8) > *q {
        return Err(CryptoError::BoundsViolation("shuffle_argument".into(), "N exceeds q - 3".into()));
    }
    Ok(())
}

#[derive(Clone)]
pub struct Statement {
    pub c: GroupVector<Ciphertext>,
    pub c_prime: GroupVector<Ciphertext>,
}

impl Statement {
    pub fn new(c: GroupVector<Ciphertext>, c_prime: GroupVector<Ciphertext>) -> Result<Self, CryptoError> {
        if c.len() != c_prime.len() {
            return Err(CryptoError::ShapeMismatchError(c.len(), c_prime.len()));
        }
        if let (Some(first), Some(first_prime)) = (c.get(0), c_prime.get(0)) {
            if !first.same_group(first_prime) {
                return Err(CryptoError::GroupMismatch);
            }
            if first.message_length() != first_prime.message_length() {
                return Err(CryptoError::ShapeMismatchError(first.message_length(), first_prime.message_length()));
            }
        }
        Ok(Self { c, c_prime })
    }
}

#[derive(Clone)]
pub struct Witness {
    pub permutation: Permutation,
    pub rho: GroupVector<ZqElement>,
}

impl Witness {
    pub fn new(permutation: Permutation, rho: GroupVector<ZqElement>) -> Result<Self, CryptoError> {
        if permutation.size() != rho.len() {
            return Err(CryptoError::ShapeMismatchError(permutation.size(), rho.len()));
        }
        Ok(Self { permutation, rho })
    }
}

pub struct ShuffleArgument;

impl crate::zkp::ArgumentOfKnowledge for ShuffleArgument {
    type Parameters = Parameters;
    type Statement = Statement;
    type Witness = Witness;
    type Proof = Proof;

    fn prove<R: rand::RngCore, H: crate::utils::hash::HashOracle>(
        rng: &mut R,
        parameters: &Parameters,
        statement: &Statement,
        witness: &Witness,
        oracle: &H,
    ) -> Result<Proof, CryptoError> {
        Prover::new(parameters, statement, witness).prove(rng, oracle)
    }

    fn verify<H: crate::utils::hash::HashOracle>(
        parameters: &Parameters,
        statement: &Statement,
        proof: &Proof,
        oracle: &H,
    ) -> Result<(), CryptoError> {
        Proof::verify(parameters, statement, proof, oracle)
    }
}
