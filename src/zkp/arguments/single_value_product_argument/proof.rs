use super::{Parameters, Statement};
use crate::error::CryptoError;
use crate::field::{GqElement, ZqElement};
use crate::utils::hash::{Hashable, HashOracle};
use crate::vector_commitment::pedersen::PedersenCommitment;
use crate::vector_commitment::HomomorphicCommitmentScheme;
use crate::zkp::transcript::Transcript;

#[derive(Clone)]
pub struct Proof {
    pub d_commit: GqElement,
    pub delta_commit: GqElement,
    pub diff_commit: GqElement,
    pub a_blinded: Vec<ZqElement>,
    pub b_blinded: Vec<ZqElement>,
    pub r_blinded: ZqElement,
    pub s_blinded: ZqElement,
}

impl Proof {
    pub fn verify<H: HashOracle>(parameters: &Parameters, statement: &Statement, proof: &Proof, oracle: &H) -> Result<(), CryptoError> {
        let n = parameters.n;
        if n < 2 {
            return Err(CryptoError::BoundsViolation("single_value_product_argument::Proof::verify".into(), "n must be >= 2".into()));
        }
        if proof.a_blinded.len() != n || proof.b_blinded.len() != n {
            return Err(CryptoError::ProofVerificationError("SingleValueProductArgument".into()));
        }
        if proof.b_blinded[0] != proof.a_blinded[0] {
            return Err(CryptoError::ProofVerificationError("SingleValueProductArgument".into()));
        }

        let ck = &parameters.commit_key;
        let mut transcript = Transcript::new(oracle);
        transcript.absorb_bytes(b"single_value_product_argument");
        transcript.absorb(Hashable::group_vector(ck.bases()));
        transcript.absorb(Hashable::Group(ck.h().clone()));
        transcript.absorb(Hashable::Group(statement.c_a.clone()));
        transcript.absorb(Hashable::Scalar(statement.b.clone()));
        transcript.absorb(Hashable::Group(proof.d_commit.clone()));
        transcript.absorb(Hashable::Group(proof.delta_commit.clone()));
        transcript.absorb(Hashable::Group(proof.diff_commit.clone()));
        let x = transcript.challenge_scalar()?;

        if proof.b_blinded[n - 1] != x.mul(&statement.b) {
            return Err(CryptoError::ProofVerificationError("SingleValueProductArgument".into()));
        }

        let expected_a = statement.c_a.exp(&x).mul(&proof.d_commit)?;
        let actual_a = PedersenCommitment::commit(ck, &proof.a_blinded, &proof.r_blinded)?;
        if expected_a != actual_a {
            return Err(CryptoError::ProofVerificationError("SingleValueProductArgument".into()));
        }

        let blinded_diffs: Vec<ZqElement> = (1..n)
            .map(|i| x.mul(&proof.b_blinded[i]).sub(&proof.b_blinded[i - 1].mul(&proof.a_blinded[i])))
            .collect();
        let expected_diff = proof.diff_commit.exp(&x).mul(&proof.delta_commit)?;
        let actual_diff = PedersenCommitment::commit(ck, &blinded_diffs, &proof.s_blinded)?;
        if expected_diff != actual_diff {
            return Err(CryptoError::ProofVerificationError("SingleValueProductArgument".into()));
        }

        Ok(())
    }
}
