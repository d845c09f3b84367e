//! Zero Argument: proves `∑_i ⟨A_·i, B_·i⟩_y = 0` for two Pedersen-committed
//! matrices, without revealing either. The teacher's
//! `zero_value_bilinear_map` generalized from an arbitrary `BilinearMap`
//! trait to the one bilinear form this crate ever needs, the `y`-weighted
//! star-map.

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
    pub c_b: GroupVector<GqElement>,
    pub y: ZqElement,
}

impl Statement {
    pub fn new(c_a: GroupVector<GqElement>, c_b: GroupVector<GqElement>, y: ZqElement) -> Result<Self, CryptoError> {
        if c_a.len() != c_b.len() {
            return Err(CryptoError::ShapeMismatchError(c_a.len(), c_b.len()));
        }
        if let (Some(a0), Some(b0)) = (c_a.get(0), c_b.get(0)) {
            if !a0.same_group(b0) || a0.group() != y.group() {
                return Err(CryptoError::GroupMismatch);
            }
        }
        Ok(Self { c_a, c_b, y })
    }

    pub fn m(&self) -> usize {
        self.c_a.len()
    }
}

#[derive(Clone)]
pub struct Witness {
    pub a: GroupMatrix<ZqElement>,
    pub b: GroupMatrix<ZqElement>,
    pub r: GroupVector<ZqElement>,
    pub s: GroupVector<ZqElement>,
}

impl Witness {
    pub fn new(a: GroupMatrix<ZqElement>, b: GroupMatrix<ZqElement>, r: GroupVector<ZqElement>, s: GroupVector<ZqElement>) -> Result<Self, CryptoError> {
        if a.num_columns() != b.num_columns() || a.num_rows() != b.num_rows() {
            return Err(CryptoError::ShapeMismatchError(a.num_columns(), b.num_columns()));
        }
        if r.len() != a.num_columns() || s.len() != a.num_columns() {
            return Err(CryptoError::ShapeMismatchError(r.len(), a.num_columns()));
        }
        Ok(Self { a, b, r, s })
    }
}

/// Entry point used by the higher layers of the tower (Hadamard Argument
/// reduces down to this).
pub struct ZeroArgument;

impl crate::zkp::ArgumentOfKnowledge for ZeroArgument {
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
