use super::{Parameters, Proof, Statement, Witness};
use crate::containers::{GroupMatrix, GroupVector};
use crate::error::CryptoError;
use crate::field::ZqElement;
use crate::utils::hash::{Hashable, HashOracle};
use crate::utils::vector_arithmetic::hadamard_product_prefix;
use crate::vector_commitment::pedersen::PedersenCommitment;
use crate::vector_commitment::HomomorphicCommitmentScheme;
use crate::zkp::arguments::zero_argument::{self, ZeroArgument};
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

    /// Reduces `b = ⊙_i A_·i` to a single Zero Argument instance. For each of
    /// the `m - 1` adjacent-column checks `b_k = b_{k-1} ⊙ A_k`, a random
    /// `y` turns the coordinatewise equality into a scalar one via the Zero
    /// Argument's own star-map, and a second random `x` batches the `m - 1`
    /// scalar checks into one. The resulting 2(m-1)-column Zero Argument
    /// instance has both of its committed sides derivable by the verifier
    /// straight from `c_A`, the intermediate-product commitments, and the
    /// two challenges: `x^i·b_{i-1}` paired against `A_i`, and `-x^i·1_n`
    /// paired against `b_i`. Their sum is identically zero exactly when
    /// every adjacent-column relation holds.
    pub fn prove<R: RngCore, H: HashOracle>(&self, rng: &mut R, oracle: &H) -> Result<Proof, CryptoError> {
        let m = self.parameters.m;
        let n = self.parameters.n;
        if m < 2 {
            return Err(CryptoError::BoundsViolation("hadamard_argument::Prover::prove".into(), "m must be >= 2".into()));
        }
        let group = self.statement.c_b.group().clone();
        let ck = &self.parameters.commit_key;

        let mut partial_products = Vec::with_capacity(m);
        for k in 0..m {
            partial_products.push(hadamard_product_prefix(&self.witness.a, k)?);
        }
        if partial_products[m - 1].as_slice() != self.witness.b.as_slice() {
            return Err(CryptoError::WitnessInconsistent("hadamard chain does not fold to the claimed product".into()));
        }

        let mut s = Vec::with_capacity(m);
        s.push(self.witness.r.get(0).unwrap().clone());
        for _ in 1..m - 1 {
            s.push(group.random_scalar(rng));
        }
        s.push(self.witness.s_b.clone());

        let b_commits: Vec<_> = partial_products
            .iter()
            .zip(s.iter())
            .map(|(b_k, s_k)| PedersenCommitment::commit(ck, b_k, s_k))
            .collect::<Result<Vec<_>, _>>()?;

        let mut transcript = Transcript::new(oracle);
        transcript.absorb_bytes(b"hadamard_argument");
        transcript.absorb(Hashable::group_vector(ck.bases()));
        transcript.absorb(Hashable::Group(ck.h().clone()));
        transcript.absorb(Hashable::group_vector(self.statement.c_a.as_slice()));
        transcript.absorb(Hashable::Group(self.statement.c_b.clone()));
        transcript.absorb(Hashable::group_vector(&b_commits));
        let x = transcript.challenge_scalar()?;
        let y = transcript.challenge_scalar()?;

        let checks = m - 1;
        let mut a_columns = Vec::with_capacity(2 * checks);
        let mut b_columns = Vec::with_capacity(2 * checks);
        let mut r_zero = Vec::with_capacity(2 * checks);
        let mut s_zero = Vec::with_capacity(2 * checks);

        let mut x_power = x.clone();
        for k in 1..m {
            let a_k = self.witness.a.column(k).as_slice().to_vec();
            let scaled_prev: Vec<ZqElement> = partial_products[k - 1].iter().map(|v| v.mul(&x_power)).collect();
            a_columns.push(a_k);
            r_zero.push(self.witness.r.get(k).unwrap().clone());
            b_columns.push(scaled_prev);
            s_zero.push(s[k - 1].mul(&x_power));
            x_power = x_power.mul(&x);
        }
        let mut x_power = x.clone();
        for k in 1..m {
            let neg_ones: Vec<ZqElement> = (0..n).map(|_| x_power.neg()).collect();
            a_columns.push(neg_ones);
            r_zero.push(group.scalar_zero());
            b_columns.push(partial_products[k].clone());
            s_zero.push(s[k].clone());
            x_power = x_power.mul(&x);
        }

        let a_matrix = to_matrix(a_columns)?;
        let b_matrix = to_matrix(b_columns)?;
        let r_vector = GroupVector::new(r_zero)?;
        let s_vector = GroupVector::new(s_zero)?;

        let c_a_zero = PedersenCommitment::commit_matrix(ck, &a_matrix, &r_vector)?;
        let c_b_zero = PedersenCommitment::commit_matrix(ck, &b_matrix, &s_vector)?;

        let zero_parameters = zero_argument::Parameters::new(2 * checks, n, ck.clone());
        let zero_statement = zero_argument::Statement::new(c_a_zero, c_b_zero, y)?;
        let zero_witness = zero_argument::Witness::new(a_matrix, b_matrix, r_vector, s_vector)?;
        let zero_proof = ZeroArgument::prove(rng, &zero_parameters, &zero_statement, &zero_witness, oracle)?;

        Ok(Proof { b_commits, zero_proof })
    }
}

fn to_matrix(columns: Vec<Vec<ZqElement>>) -> Result<GroupMatrix<ZqElement>, CryptoError> {
    let columns = columns.into_iter().map(GroupVector::new).collect::<Result<Vec<_>, _>>()?;
    GroupMatrix::from_columns(columns)
}
