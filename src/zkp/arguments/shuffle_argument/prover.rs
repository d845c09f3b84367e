use super::{Parameters, Proof, Statement, Witness};
use crate::containers::GroupVector;
use crate::error::CryptoError;
use crate::field::{scalar_powers, ZqElement};
use crate::homomorphic_encryption::el_gamal::Ciphertext;
use crate::utils::hash::{Hashable, HashOracle};
use crate::utils::vector_arithmetic::{dot_product_ciphertexts, dot_product_scalars, reshape_into_matrix};
use crate::vector_commitment::pedersen::PedersenCommitment;
use crate::vector_commitment::HomomorphicCommitmentScheme;
use crate::zkp::arguments::multi_exponentiation_argument::{self, MultiExponentiationArgument};
use crate::zkp::arguments::product_argument::{self, ProductArgument};
use crate::zkp::transcript::Transcript;
use crate::zkp::ArgumentOfKnowledge;

use rand::RngCore;

pub struct Prover<'a> {
    parameters: &'a Parameters,
    statement: &'a Statement,
    witness: &'a Witness,
}

impl<'a> Prover<'a> {
    pub fn new(parameters: &'a Parameters, statement: &'a Statement, witness: &'a Witness) -> Self {
        Self { parameters, statement, witness }
    }

    fn absorb_public<H: HashOracle>(&self, transcript: &mut Transcript<'_, H>) {
        transcript.absorb_bytes(b"shuffle_argument");
        transcript.absorb(Hashable::group_vector(self.parameters.public_key.components()));
        transcript.absorb(Hashable::group_vector(self.parameters.commit_key.bases()));
        transcript.absorb(Hashable::Group(self.parameters.commit_key.h().clone()));
        transcript.absorb(Hashable::ciphertext_vector(self.statement.c.as_slice()));
        transcript.absorb(Hashable::ciphertext_vector(self.statement.c_prime.as_slice()));
    }

    /// `getShuffleArgument`: commits the permutation matrix `A` (column `i`
    /// holds `π(i)+1` spread over its `n` rows), derives `x`, commits the
    /// permuted challenge-power matrix `B`, derives `y, z`, then reduces to a
    /// product sub-claim over `D = y·A + B - z·1` and a multi-exponentiation
    /// sub-claim tying `B` back to the actual re-encrypted ciphertexts.
    pub fn prove<R: RngCore, H: HashOracle>(&self, rng: &mut R, oracle: &H) -> Result<Proof, CryptoError> {
        let parameters = self.parameters;
        let m = parameters.m;
        let n = parameters.n;
        let num_ciphertexts = self.statement.c.len();
        super::validate_shape(parameters, num_ciphertexts)?;

        let group = parameters.public_key.group().clone();
        let ck = &parameters.commit_key;
        let pk = &parameters.public_key;
        let permutation = &self.witness.permutation;
        let message_length = self.statement.c.get(0).map(Ciphertext::message_length).unwrap_or(0);

        for i in 0..num_ciphertexts {
            let expected = Ciphertext::masked_by_zero(&self.witness.rho[i], pk, message_length)?.mul(&self.statement.c[permutation.apply(i)])?;
            if expected != self.statement.c_prime[i] {
                return Err(CryptoError::WitnessInconsistent("shuffled ciphertext does not match claimed permutation and re-encryption".into()));
            }
        }

        let index: Vec<ZqElement> = (1..=num_ciphertexts as u64).map(|i| group.scalar(num_bigint::BigUint::from(i))).collect();
        let a_flat = permutation.permute_array(&index);
        let a = reshape_into_matrix(&a_flat, m, n)?;
        let r = GroupVector::new((0..m).map(|_| group.random_scalar(rng)).collect())?;
        let c_a = PedersenCommitment::commit_matrix(ck, &a, &r)?;

        let mut transcript = Transcript::new(oracle);
        self.absorb_public(&mut transcript);
        transcript.absorb(Hashable::group_vector(c_a.as_slice()));
        let x = transcript.challenge_scalar()?;

        let x_pow = scalar_powers(&x, num_ciphertexts);
        let b_flat = permutation.permute_array(&x_pow);
        let b = reshape_into_matrix(&b_flat, m, n)?;
        let s = GroupVector::new((0..m).map(|_| group.random_scalar(rng)).collect())?;
        let c_b = PedersenCommitment::commit_matrix(ck, &b, &s)?;

        transcript.absorb(Hashable::group_vector(c_b.as_slice()));
        let y = transcript.challenge_scalar()?;
        let z = transcript.challenge_scalar()?;

        let d_columns: Vec<GroupVector<ZqElement>> = (0..m)
            .map(|j| {
                let a_col = a.column(j).as_slice();
                let b_col = b.column(j).as_slice();
                let column: Vec<ZqElement> = a_col
                    .iter()
                    .zip(b_col.iter())
                    .map(|(a_ij, b_ij)| y.mul(a_ij).add(b_ij).sub(&z))
                    .collect();
                GroupVector::new(column)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let d = crate::containers::GroupMatrix::from_columns(d_columns)?;
        let t: Vec<ZqElement> = r.iter().zip(s.iter()).map(|(r_j, s_j)| y.mul(r_j).add(s_j)).collect();

        let target_product = (1..=num_ciphertexts as u64).zip(x_pow.iter()).fold(group.scalar_one(), |acc, (k, x_k)| {
            let k_scalar = group.scalar(num_bigint::BigUint::from(k));
            acc.mul(&y.mul(&k_scalar).add(x_k).sub(&z))
        });

        // `c_D = c_A^y . c_B . commit(-z.1, 0)`, the homomorphic commitment to
        // `D = y.A + B - z.1` under randomness `t = y.r + s` -- the same value
        // `Proof::verify_detailed` rebuilds from `c_a, c_b, y, z` alone, since
        // the product sub-argument's statement must commit to `D`, not `A`.
        let neg_z_commit = PedersenCommitment::commit(ck, &vec![z.neg(); n], &group.scalar_zero())?;
        let c_d: Vec<_> = c_a
            .iter()
            .zip(c_b.iter())
            .map(|(a_commit, b_commit)| a_commit.exp(&y).mul(b_commit).and_then(|v| v.mul(&neg_z_commit)))
            .collect::<Result<Vec<_>, _>>()?;
        let c_d = GroupVector::new(c_d)?;

        let product_parameters = product_argument::Parameters::new(m, n, ck.clone());
        let product_statement = product_argument::Statement::new(c_d, target_product)?;
        let product_witness = product_argument::Witness::new(d, GroupVector::new(t)?)?;
        let product_proof = ProductArgument::prove(rng, &product_parameters, &product_statement, &product_witness, oracle)?;

        let c_prime_matrix = reshape_into_matrix(self.statement.c_prime.as_slice(), m, n)?;
        let target_cipher = dot_product_ciphertexts(&x_pow, self.statement.c.as_slice())?;
        let neg_rho: Vec<ZqElement> = self.witness.rho.iter().map(ZqElement::neg).collect();
        let rho_bar = dot_product_scalars(&neg_rho, &b_flat)?;

        let multi_exp_parameters = multi_exponentiation_argument::Parameters::new(m, n, ck.clone(), pk.clone());
        let multi_exp_statement = multi_exponentiation_argument::Statement::new(c_prime_matrix, target_cipher, c_b.clone())?;
        let multi_exp_witness = multi_exponentiation_argument::Witness::new(b, s, rho_bar)?;
        let multi_exp_proof = MultiExponentiationArgument::prove(rng, &multi_exp_parameters, &multi_exp_statement, &multi_exp_witness, oracle)?;

        Ok(Proof { c_a, c_b, product_proof, multi_exp_proof })
    }
}
