use super::{Parameters, Statement};
use crate::error::CryptoError;
use crate::field::{scalar_powers, GqElement};
use crate::utils::hash::{Hashable, HashOracle};
use crate::utils::vector_arithmetic::{dot_product_ciphertexts, reshape_into_matrix};
use crate::vector_commitment::HomomorphicCommitmentScheme;
use crate::zkp::arguments::multi_exponentiation_argument::{self, MultiExponentiationArgument};
use crate::zkp::arguments::product_argument::{self, ProductArgument};
use crate::zkp::transcript::Transcript;
use crate::zkp::{ArgumentOfKnowledge, VerificationResult};

#[derive(Clone)]
pub struct Proof {
    pub c_a: crate::containers::GroupVector<GqElement>,
    pub c_b: crate::containers::GroupVector<GqElement>,
    pub product_proof: product_argument::Proof,
    pub multi_exp_proof: multi_exponentiation_argument::Proof,
}

impl Proof {
    pub fn verify<H: HashOracle>(parameters: &Parameters, statement: &Statement, proof: &Proof, oracle: &H) -> Result<(), CryptoError> {
        let report = Self::verify_detailed(parameters, statement, proof, oracle);
        if report.is_verified() {
            Ok(())
        } else {
            Err(CryptoError::ProofVerificationError(report.messages.join("; ")))
        }
    }

    /// `verifyShuffleArgument`: re-derives `x, y, z`, rebuilds both
    /// sub-statements from public inputs alone, and aggregates the result of
    /// each sub-verification rather than short-circuiting on the first
    /// failure, so callers can report exactly which relation broke.
    pub fn verify_detailed<H: HashOracle>(parameters: &Parameters, statement: &Statement, proof: &Proof, oracle: &H) -> VerificationResult {
        let m = parameters.m;
        let n = parameters.n;
        let num_ciphertexts = statement.c.len();

        if let Err(e) = super::validate_shape(parameters, num_ciphertexts) {
            return VerificationResult::structural_failure(e.to_string());
        }
        if proof.c_a.len() != m || proof.c_b.len() != m {
            return VerificationResult::structural_failure("commitment vector length does not match m".to_string());
        }

        let ck = &parameters.commit_key;
        let pk = &parameters.public_key;

        let mut transcript = Transcript::new(oracle);
        transcript.absorb_bytes(b"shuffle_argument");
        transcript.absorb(Hashable::group_vector(pk.components()));
        transcript.absorb(Hashable::group_vector(ck.bases()));
        transcript.absorb(Hashable::Group(ck.h().clone()));
        transcript.absorb(Hashable::ciphertext_vector(statement.c.as_slice()));
        transcript.absorb(Hashable::ciphertext_vector(statement.c_prime.as_slice()));
        transcript.absorb(Hashable::group_vector(proof.c_a.as_slice()));
        let x = match transcript.challenge_scalar() {
            Ok(x) => x,
            Err(e) => return VerificationResult::structural_failure(e.to_string()),
        };

        transcript.absorb(Hashable::group_vector(proof.c_b.as_slice()));
        let y = match transcript.challenge_scalar() {
            Ok(y) => y,
            Err(e) => return VerificationResult::structural_failure(e.to_string()),
        };
        let z = match transcript.challenge_scalar() {
            Ok(z) => z,
            Err(e) => return VerificationResult::structural_failure(e.to_string()),
        };

        let x_pow = scalar_powers(&x, num_ciphertexts);
        let target_product = (1..=num_ciphertexts as u64).zip(x_pow.iter()).fold(y.group().scalar_one(), |acc, (k, x_k)| {
            let k_scalar = y.group().scalar(num_bigint::BigUint::from(k));
            acc.mul(&y.mul(&k_scalar).add(x_k).sub(&z))
        });

        let neg_z_commit = match crate::vector_commitment::pedersen::PedersenCommitment::commit(ck, &vec![z.neg(); n], &y.group().scalar_zero()) {
            Ok(c) => c,
            Err(e) => return VerificationResult::structural_failure(e.to_string()),
        };
        let c_d: Vec<GqElement> = match proof
            .c_a
            .iter()
            .zip(proof.c_b.iter())
            .map(|(a_commit, b_commit)| a_commit.exp(&y).mul(b_commit).and_then(|v| v.mul(&neg_z_commit)))
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(c_d) => c_d,
            Err(e) => return VerificationResult::structural_failure(e.to_string()),
        };
        let c_d = match crate::containers::GroupVector::new(c_d) {
            Ok(v) => v,
            Err(e) => return VerificationResult::structural_failure(e.to_string()),
        };

        let product_parameters = product_argument::Parameters::new(m, n, ck.clone());
        let product_statement = match product_argument::Statement::new(c_d, target_product) {
            Ok(s) => s,
            Err(e) => return VerificationResult::structural_failure(e.to_string()),
        };
        let product_ok = ProductArgument::verify(&product_parameters, &product_statement, &proof.product_proof, oracle);

        let c_prime_matrix = match reshape_into_matrix(statement.c_prime.as_slice(), m, n) {
            Ok(mat) => mat,
            Err(e) => return VerificationResult::structural_failure(e.to_string()),
        };
        let target_cipher = match dot_product_ciphertexts(&x_pow, statement.c.as_slice()) {
            Ok(c) => c,
            Err(e) => return VerificationResult::structural_failure(e.to_string()),
        };
        let multi_exp_parameters = multi_exponentiation_argument::Parameters::new(m, n, ck.clone(), pk.clone());
        let multi_exp_statement = match multi_exponentiation_argument::Statement::new(c_prime_matrix, target_cipher, proof.c_b.clone()) {
            Ok(s) => s,
            Err(e) => return VerificationResult::structural_failure(e.to_string()),
        };
        let multi_exp_ok = MultiExponentiationArgument::verify(&multi_exp_parameters, &multi_exp_statement, &proof.multi_exp_proof, oracle);

        let mut result = VerificationResult { structural_ok: true, product_ok: product_ok.is_ok(), multi_exp_ok: multi_exp_ok.is_ok(), messages: Vec::new() };
        if let Err(e) = product_ok {
            result.messages.push(format!("product argument failed: {e}"));
        }
        if let Err(e) = multi_exp_ok {
            result.messages.push(format!("multi-exponentiation argument failed: {e}"));
        }
        result
    }
}
