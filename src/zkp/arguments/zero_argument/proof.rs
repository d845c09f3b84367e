use super::{Parameters, Statement};
use crate::error::CryptoError;
use crate::field::{scalar_powers, scalar_powers_from_zero, GqElement, ZqElement};
use crate::utils::hash::{Hashable, HashOracle};
use crate::utils::vector_arithmetic::{dot_product_group, star_map};
use crate::vector_commitment::pedersen::PedersenCommitment;
use crate::vector_commitment::HomomorphicCommitmentScheme;
use crate::zkp::transcript::Transcript;

#[derive(Clone)]
pub struct Proof {
    pub a_0_commit: GqElement,
    pub b_m_commit: GqElement,
    pub committed_diagonals: Vec<GqElement>,
    pub a_blinded: Vec<ZqElement>,
    pub b_blinded: Vec<ZqElement>,
    pub r_blinded: ZqElement,
    pub s_blinded: ZqElement,
    pub t_blinded: ZqElement,
}

impl Proof {
    pub fn verify<H: HashOracle>(parameters: &Parameters, statement: &Statement, proof: &Proof, oracle: &H) -> Result<(), CryptoError> {
        let m = parameters.m;
        if m == 0 {
            return Err(CryptoError::BoundsViolation("zero_argument::Proof::verify".into(), "m must be >= 1".into()));
        }
        if proof.committed_diagonals.len() != 2 * m + 1 {
            return Err(CryptoError::ProofVerificationError("ZeroArgument".into()));
        }
        let ck = &parameters.commit_key;
        let vanishing_index = m - 1;
        let zero = statement.y.group().scalar_zero();
        let zero_commit = PedersenCommitment::commit(ck, &[zero.clone()], &zero)?;
        if proof.committed_diagonals[vanishing_index] != zero_commit {
            return Err(CryptoError::ProofVerificationError("ZeroArgument".into()));
        }

        let mut transcript = Transcript::new(oracle);
        transcript.absorb_bytes(b"zero_argument");
        transcript.absorb(Hashable::group_vector(ck.bases()));
        transcript.absorb(Hashable::Group(ck.h().clone()));
        transcript.absorb(Hashable::Scalar(statement.y.clone()));
        transcript.absorb(Hashable::group_vector(statement.c_a.as_slice()));
        transcript.absorb(Hashable::group_vector(statement.c_b.as_slice()));
        transcript.absorb(Hashable::Group(proof.a_0_commit.clone()));
        transcript.absorb(Hashable::Group(proof.b_m_commit.clone()));
        transcript.absorb(Hashable::group_vector(&proof.committed_diagonals));
        let x = transcript.challenge_scalar()?;

        let x_powers = scalar_powers(&x, m);
        let rev_powers: Vec<ZqElement> = x_powers.iter().rev().cloned().collect();

        let expected_a = proof.a_0_commit.mul(&dot_product_group(&x_powers, statement.c_a.as_slice())?)?;
        let actual_a = PedersenCommitment::commit(ck, &proof.a_blinded, &proof.r_blinded)?;
        if expected_a != actual_a {
            return Err(CryptoError::ProofVerificationError("ZeroArgument".into()));
        }

        let expected_b = proof.b_m_commit.mul(&dot_product_group(&rev_powers, statement.c_b.as_slice())?)?;
        let actual_b = PedersenCommitment::commit(ck, &proof.b_blinded, &proof.s_blinded)?;
        if expected_b != actual_b {
            return Err(CryptoError::ProofVerificationError("ZeroArgument".into()));
        }

        let x_powers_full = scalar_powers_from_zero(&x, 2 * m);
        let expected_d = dot_product_group(&x_powers_full, &proof.committed_diagonals)?;
        let star = star_map(&proof.a_blinded, &proof.b_blinded, &statement.y)?;
        let actual_d = PedersenCommitment::commit(ck, &[star], &proof.t_blinded)?;
        if expected_d != actual_d {
            return Err(CryptoError::ProofVerificationError("ZeroArgument".into()));
        }

        Ok(())
    }
}
