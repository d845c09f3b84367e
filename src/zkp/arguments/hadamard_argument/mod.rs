//! Hadamard Argument: proves a committed matrix `A`'s column-wise Hadamard
//! product equals a committed vector `b`, i.e. `b = ⊙_i A_·i`, by reducing
//! every adjacent-column check `b_k = b_{k-1} ⊙ A_k` to one batched
//! [`crate::zkp::arguments::zero_argument`] call (see `prover.rs` for the
//! reduction).

pub mod proof;
pub mod prover;

use crate::containers::{GroupMatrix, GroupVector};
use crate::error::CryptoError;
use crate::field::{GqElement, Tagged, ZqElement};
use crate::vector_commitment::pedersen::CommitKey;

pub use proof::Proof;
pub use prover::Prover;

#[derive(Clone)]
pub struct Parameters {
    pub m: usize,
    pub n: usize,
    pub commit_key: CommitKey,
}

impl Parameters {
    pub fn new(m: usize, n: usize, commit_key: CommitKey) -> Self {
        Self { m, n, commit_key }
    }
}

#[derive(Clone)]
pub struct Statement {
    pub c_a: GroupVector<GqElement>,
    pub c_b: GqElement,
}

impl Statement {
    pub fn new(c_a: GroupVector<GqElement>, c_b: GqElement) -> Result<Self, CryptoError> {
        if let Some(a0) = c_a.get(0) {
            if !a0.same_group(&c_b) {
                return Err(CryptoError::GroupMismatch);
            }
        }
        Ok(Self { c_a, c_b })
    }
}

#[derive(Clone)]
pub struct Witness {
    pub a: GroupMatrix<ZqElement>,
    pub r: GroupVector<ZqElement>,
    pub b: GroupVector<ZqElement>,
    pub s_b: ZqElement,
}

impl Witness {
    pub fn new(a: GroupMatrix<ZqElement>, r: GroupVector<ZqElement>, b: GroupVector<ZqElement>, s_b: ZqElement) -> Result<Self, CryptoError> {
        if a.num_columns() != r.len() {
            return Err(CryptoError::ShapeMismatchError(a.num_columns(), r.len()));
        }
        if a.num_rows() != b.len() {
            return Err(CryptoError::ShapeMismatchError(a.num_rows(), b.len()));
        }
        Ok(Self { a, r, b, s_b })
    }
}

pub struct HadamardArgument;

impl crate::zkp::ArgumentOfKnowledge for HadamardArgument {
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
