//! `Mixnet`: the thin public wrapper exposed to callers, not part of the
//! argument-of-knowledge core itself. Ties [`crate::shuffle::gen_shuffle`]
//! (perform the mix) to [`crate::zkp::arguments::shuffle_argument`] (prove it
//! was done correctly), and reports verification outcomes as a
//! [`crate::zkp::VerificationResult`] rather than a bare `Result<(), _>` so a
//! caller can see exactly which of the three top-level checks failed.

use crate::containers::GroupVector;
use crate::error::CryptoError;
use crate::homomorphic_encryption::el_gamal::{Ciphertext, PublicKey};
use crate::shuffle::gen_shuffle;
use crate::utils::hash::HashOracle;
use crate::vector_commitment::pedersen::CommitKey;
use crate::zkp::arguments::shuffle_argument::{self, Proof as ShuffleProof, ShuffleArgument};
use crate::zkp::{ArgumentOfKnowledge, VerificationResult};

use rand::RngCore;

/// `VerifiableShuffle { shuffledCiphertexts, shuffleArgument }`.
pub struct VerifiableShuffle {
    pub shuffled_ciphertexts: GroupVector<Ciphertext>,
    pub shuffle_argument: ShuffleProof,
}

pub struct Mixnet;

impl Mixnet {
    /// `genVerifiableShuffle(C, pk) -> VerifiableShuffle`. The caller fixes
    /// the `m × n` factorization of `|C|` the arguments run at -- this crate
    /// follows the teacher's benchmark harness in treating that choice as
    /// the caller's concern, not something the core infers (see `DESIGN.md`).
    pub fn gen_verifiable_shuffle<R: RngCore, H: HashOracle>(
        ciphertexts: &GroupVector<Ciphertext>,
        public_key: &PublicKey,
        commit_key: &CommitKey,
        m: usize,
        n: usize,
        rng: &mut R,
        oracle: &H,
    ) -> Result<VerifiableShuffle, CryptoError> {
        let (shuffled, permutation, rho) = gen_shuffle(ciphertexts, public_key, rng)?;

        let parameters = shuffle_argument::Parameters::new(m, n, commit_key.clone(), public_key.clone());
        let statement = shuffle_argument::Statement::new(ciphertexts.clone(), shuffled.clone())?;
        let witness = shuffle_argument::Witness::new(permutation, rho)?;

        let proof = ShuffleArgument::prove(rng, &parameters, &statement, &witness, oracle)?;

        Ok(VerifiableShuffle { shuffled_ciphertexts: shuffled, shuffle_argument: proof })
    }

    /// `verifyShuffle(C, C', shuffleArgument, pk) -> VerificationResult`.
    /// Never panics or throws on an unconvincing-but-valid-shaped proof;
    /// every failure mode reported through `VerificationResult`.
    pub fn verify_shuffle<H: HashOracle>(
        ciphertexts: &GroupVector<Ciphertext>,
        shuffled_ciphertexts: &GroupVector<Ciphertext>,
        shuffle_argument: &ShuffleProof,
        public_key: &PublicKey,
        commit_key: &CommitKey,
        m: usize,
        n: usize,
        oracle: &H,
    ) -> VerificationResult {
        let parameters = shuffle_argument::Parameters::new(m, n, commit_key.clone(), public_key.clone());
        let statement = match shuffle_argument::Statement::new(ciphertexts.clone(), shuffled_ciphertexts.clone()) {
            Ok(s) => s,
            Err(e) => return VerificationResult::structural_failure(e.to_string()),
        };
        ShuffleProof::verify_detailed(&parameters, &statement, shuffle_argument, oracle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::GqGroup;
    use crate::homomorphic_encryption::el_gamal::ElGamal;
    use crate::homomorphic_encryption::HomomorphicEncryptionScheme;
    use crate::utils::hash::ShakeHashOracle;
    use num_bigint::BigUint;
    use rand::thread_rng;
    use std::sync::Arc;

    fn group() -> Arc<GqGroup> {
        Arc::new(GqGroup::new(BigUint::from(23u32), BigUint::from(11u32), BigUint::from(2u32)))
    }

    #[test]
    fn honest_shuffle_round_trips_through_the_mixnet_boundary() {
        let g = group();
        let mut rng = thread_rng();
        let (pk, _sk) = ElGamal::keygen(&g, &mut rng, 1).unwrap();
        let m = 2;
        let n = 3;
        let commit_key = CommitKey::setup(&g, &mut rng, n);
        let oracle = ShakeHashOracle::new(g.clone()).unwrap();

        let ciphers: Vec<_> = (0..m * n)
            .map(|_| Ciphertext::re_encrypt(&[g.random_element(&mut rng)], &g.random_scalar(&mut rng), &pk).unwrap())
            .collect();
        let c = GroupVector::new(ciphers).unwrap();

        let verifiable = Mixnet::gen_verifiable_shuffle(&c, &pk, &commit_key, m, n, &mut rng, &oracle).unwrap();
        let report = Mixnet::verify_shuffle(&c, &verifiable.shuffled_ciphertexts, &verifiable.shuffle_argument, &pk, &commit_key, m, n, &oracle);
        assert!(report.is_verified(), "{:?}", report.messages);
    }

    #[test]
    fn tampered_shuffled_ciphertext_fails_verification() {
        let g = group();
        let mut rng = thread_rng();
        let (pk, _sk) = ElGamal::keygen(&g, &mut rng, 1).unwrap();
        let m = 2;
        let n = 3;
        let commit_key = CommitKey::setup(&g, &mut rng, n);
        let oracle = ShakeHashOracle::new(g.clone()).unwrap();

        let ciphers: Vec<_> = (0..m * n)
            .map(|_| Ciphertext::re_encrypt(&[g.random_element(&mut rng)], &g.random_scalar(&mut rng), &pk).unwrap())
            .collect();
        let c = GroupVector::new(ciphers).unwrap();

        let verifiable = Mixnet::gen_verifiable_shuffle(&c, &pk, &commit_key, m, n, &mut rng, &oracle).unwrap();

        let mut tampered = verifiable.shuffled_ciphertexts.as_slice().to_vec();
        let bumped = tampered[0].exp(&g.scalar_one());
        tampered[0] = bumped.mul(&tampered[0]).unwrap();
        let tampered = GroupVector::new(tampered).unwrap();

        let report = Mixnet::verify_shuffle(&c, &tampered, &verifiable.shuffle_argument, &pk, &commit_key, m, n, &oracle);
        assert!(!report.is_verified());
    }
}
