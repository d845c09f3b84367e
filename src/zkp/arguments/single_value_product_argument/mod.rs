//! Single Value Product Argument: proves a committed length-`n` vector's
//! entries multiply to a claimed public value, `b = ∏_i a_i`.

pub mod proof;
pub mod prover;

use crate::containers::GroupVector;
use crate::error::CryptoError;
use crate::field::{GqElement, Tagged, ZqElement};
use crate::vector_commitment::pedersen::CommitKey;

pub use proof::Proof;
pub use prover::Prover;

#[derive(Clone)]
pub struct Parameters {
    pub n: usize,
    pub commit_key: CommitKey,
}

impl Parameters {
    pub fn new(n: usize, commit_key: CommitKey) -> Self {
        Self { n, commit_key }
    }
}

#[derive(Clone)]
pub struct Statement {
    pub c_a: GqElement,
    pub b: ZqElement,
}

impl Statement {
    pub fn new(c_a: GqElement, b: ZqElement) -> Result<Self, CryptoError> {
        if c_a.group() != b.group() {
            return Err(CryptoError::GroupMismatch);
        }
        Ok(Self { c_a, b })
    }
}

#[derive(Clone)]
pub struct Witness {
    pub a: GroupVector<ZqElement>,
    pub r: ZqElement,
}

impl Witness {
    pub fn new(a: GroupVector<ZqElement>, r: ZqElement) -> Result<Self, CryptoError> {
        if !a.is_empty() && a.get(0).unwrap().group() != r.group() {
            return Err(CryptoError::GroupMismatch);
        }
        Ok(Self { a, r })
    }
}

pub struct SingleValueProductArgument;

impl crate::zkp::ArgumentOfKnowledge for SingleValueProductArgument {
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
