//! Product Argument: proves a committed `n × m` matrix's entries all
//! multiply (in column-major Hadamard-then-product order) to a claimed
//! public value `b = ∏_i ∏_j A_ji`.
//!
//! `m = 1` collapses straight to a [`single_value_product_argument`] --
//! there is nothing for a Hadamard Argument to reduce, so running one would
//! only add an unnecessary proof component.

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
    pub b: ZqElement,
}

impl Statement {
    pub fn new(c_a: GroupVector<GqElement>, b: ZqElement) -> Result<Self, CryptoError> {
        if let Some(a0) = c_a.get(0) {
            if a0.group() != b.group() {
                return Err(CryptoError::GroupMismatch);
            }
        }
        Ok(Self { c_a, b })
    }
}

#[derive(Clone)]
pub struct Witness {
    pub a: GroupMatrix<ZqElement>,
    pub r: GroupVector<ZqElement>,
}

impl Witness {
    pub fn new(a: GroupMatrix<ZqElement>, r: GroupVector<ZqElement>) -> Result<Self, CryptoError> {
        if a.num_columns() != r.len() {
            return Err(CryptoError::ShapeMismatchError(a.num_columns(), r.len()));
        }
        Ok(Self { a, r })
    }
}

pub struct ProductArgument;

impl crate::zkp::ArgumentOfKnowledge for ProductArgument {
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
