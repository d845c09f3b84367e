use super::{Parameters, Statement};
use crate::error::CryptoError;
use crate::field::{scalar_powers, scalar_powers_from_zero, GqElement, ZqElement};
use crate::homomorphic_encryption::el_gamal::Ciphertext;
use crate::utils::hash::{Hashable, HashOracle};
use crate::utils::vector_arithmetic::{dot_product_ciphertexts, dot_product_group};
use crate::vector_commitment::pedersen::PedersenCommitment;
use crate::vector_commitment::HomomorphicCommitmentScheme;
use crate::zkp::transcript::Transcript;

#[derive(Clone)]
pub struct Proof {
    pub a_0_commit: GqElement,
    pub b_commits: Vec<GqElement>,
    pub e_vector: Vec<Ciphertext>,
    pub a_blinded: Vec<ZqElement>,
    pub r_blinded: ZqElement,
    pub b_blinded: ZqElement,
    pub s_blinded: ZqElement,
    pub tau_blinded: ZqElement,
}

impl Proof {
    pub fn verify<H: HashOracle>(parameters: &Parameters, statement: &Statement, proof: &Proof, oracle: &H) -> Result<(), CryptoError> {
        let m = parameters.m;
        if m == 0 {
            return Err(CryptoError::BoundsViolation("multi_exponentiation_argument::Proof::verify".into(), "m must be >= 1".into()));
        }
        if proof.b_commits.len() != 2 * m || proof.e_vector.len() != 2 * m || proof.a_blinded.len() != parameters.n {
            return Err(CryptoError::ProofVerificationError("MultiExponentiationArgument".into()));
        }
        let ck = &parameters.commit_key;
        let pk = &parameters.public_key;
        let message_length = statement.c_bar.message_length();

        let zero = proof.r_blinded.group().scalar_zero();
        let zero_commit = PedersenCommitment::commit(ck, &[zero.clone()], &zero)?;
        if proof.b_commits[m] != zero_commit {
            return Err(CryptoError::ProofVerificationError("MultiExponentiationArgument".into()));
        }
        if proof.e_vector[m] != statement.c_bar {
            return Err(CryptoError::ProofVerificationError("MultiExponentiationArgument".into()));
        }

        let mut transcript = Transcript::new(oracle);
        transcript.absorb_bytes(b"multi_exponentiation_argument");
        transcript.absorb(Hashable::group_vector(pk.components()));
        transcript.absorb(Hashable::group_vector(ck.bases()));
        transcript.absorb(Hashable::Group(ck.h().clone()));
        for column in statement.c.columns() {
            transcript.absorb(Hashable::ciphertext_vector(column.as_slice()));
        }
        transcript.absorb(Hashable::ciphertext(&statement.c_bar));
        transcript.absorb(Hashable::group_vector(statement.c_a.as_slice()));
        transcript.absorb(Hashable::Group(proof.a_0_commit.clone()));
        transcript.absorb(Hashable::group_vector(&proof.b_commits));
        transcript.absorb(Hashable::ciphertext_vector(&proof.e_vector));
        let x = transcript.challenge_scalar()?;

        let x_powers = scalar_powers(&x, m);
        let expected_a = proof.a_0_commit.mul(&dot_product_group(&x_powers, statement.c_a.as_slice())?)?;
        let actual_a = PedersenCommitment::commit(ck, &proof.a_blinded, &proof.r_blinded)?;
        if expected_a != actual_a {
            return Err(CryptoError::ProofVerificationError("MultiExponentiationArgument".into()));
        }

        let x_powers_full = scalar_powers_from_zero(&x, 2 * m - 1);
        let expected_b = dot_product_group(&x_powers_full, &proof.b_commits)?;
        let actual_b = PedersenCommitment::commit(ck, &[proof.b_blinded.clone()], &proof.s_blinded)?;
        if expected_b != actual_b {
            return Err(CryptoError::ProofVerificationError("MultiExponentiationArgument".into()));
        }

        let lhs = dot_product_ciphertexts(&x_powers_full, &proof.e_vector)?;
        let masking = Ciphertext::mask_generator(&proof.b_blinded, &proof.tau_blinded, pk, message_length)?;
        let mut rhs_product = Ciphertext::identity(pk.group(), message_length);
        for i in 0..m {
            let weight = x.pow((m - 1 - i) as u64);
            let scaled: Vec<ZqElement> = proof.a_blinded.iter().map(|a_i| a_i.mul(&weight)).collect();
            let term = dot_product_ciphertexts(&scaled, statement.c.column(i).as_slice())?;
            rhs_product = rhs_product.mul(&term)?;
        }
        let rhs = masking.mul(&rhs_product)?;
        if lhs != rhs {
            return Err(CryptoError::ProofVerificationError("MultiExponentiationArgument".into()));
        }

        Ok(())
    }
}
