//! The argument-of-knowledge tower: `ArgumentOfKnowledge` (generalized from
//! the teacher's trait of the same name) plus one module per sub-argument
//! under [`arguments`].

pub mod arguments;
pub mod transcript;

use crate::error::CryptoError;
use crate::utils::hash::HashOracle;
use rand::RngCore;

/// Mirrors the teacher's `zkp::ArgumentOfKnowledge`, generalized from
/// `FiatShamirRng<D>` to this crate's own [`transcript::Transcript`].
pub trait ArgumentOfKnowledge {
    type Parameters;
    type Statement;
    type Witness;
    type Proof;

    fn prove<R: RngCore, H: HashOracle>(
        rng: &mut R,
        parameters: &Self::Parameters,
        statement: &Self::Statement,
        witness: &Self::Witness,
        oracle: &H,
    ) -> Result<Self::Proof, CryptoError>;

    fn verify<H: HashOracle>(
        parameters: &Self::Parameters,
        statement: &Self::Statement,
        proof: &Self::Proof,
        oracle: &H,
    ) -> Result<(), CryptoError>;
}

/// The shuffle argument's verifier never throws on a valid-shaped but
/// unconvincing proof (§4's "relation (iii)" failure mode); instead it
/// aggregates the outcome of each of its three checks plus any messages,
/// mirroring the teacher's boolean `Result<(), CryptoError>` composed one
/// level up into a richer report for the `Mixnet` boundary.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VerificationResult {
    pub structural_ok: bool,
    pub product_ok: bool,
    pub multi_exp_ok: bool,
    pub messages: Vec<String>,
}

impl VerificationResult {
    pub fn is_verified(&self) -> bool {
        self.structural_ok && self.product_ok && self.multi_exp_ok
    }

    fn failure(stage: &'static str, message: &str) -> Self {
        let mut result = Self::default();
        match stage {
            "structural" => {}
            "product" => result.structural_ok = true,
            "multi_exp" => {
                result.structural_ok = true;
                result.product_ok = true;
            }
            _ => unreachable!(),
        }
        result.messages.push(message.to_string());
        result
    }

    pub fn structural_failure(message: impl Into<String>) -> Self {
        Self::failure("structural", &message.into())
    }

    pub fn product_failure(message: impl Into<String>) -> Self {
        Self::failure("product", &message.into())
    }

    pub fn multi_exp_failure(message: impl Into<String>) -> Self {
        Self::failure("multi_exp", &message.into())
    }

    pub fn success() -> Self {
        Self {
            structural_ok: true,
            product_ok: true,
            multi_exp_ok: true,
            messages: Vec::new(),
        }
    }
}
