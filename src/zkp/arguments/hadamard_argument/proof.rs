use super::{Parameters, Statement};
use crate::containers::GroupVector;
use crate::error::CryptoError;
use crate::field::GqElement;
use crate::utils::hash::{Hashable, HashOracle};
use crate::vector_commitment::pedersen::PedersenCommitment;
use crate::vector_commitment::HomomorphicCommitmentScheme;
use crate::zkp::arguments::zero_argument::{self, ZeroArgument};
use crate::zkp::transcript::Transcript;
use crate::zkp::ArgumentOfKnowledge;

#[derive(Clone)]
pub struct Proof {
    pub b_commits: Vec<GqElement>,
    pub zero_proof: zero_argument::Proof,
}

impl Proof {
    pub fn verify<H: HashOracle>(parameters: &Parameters, statement: &Statement, proof: &Proof, oracle: &H) -> Result<(), CryptoError> {
        let m = parameters.m;
        let n = parameters.n;
        if m < 2 {
            return Err(CryptoError::BoundsViolation("hadamard_argument::Proof::verify".into(), "m must be >= 2".into()));
        }
        if proof.b_commits.len() != m {
            return Err(CryptoError::ProofVerificationError("HadamardArgument".into()));
        }
        if proof.b_commits[0] != statement.c_a[0] || proof.b_commits[m - 1] != statement.c_b {
            return Err(CryptoError::ProofVerificationError("HadamardArgument".into()));
        }

        let ck = &parameters.commit_key;
        let mut transcript = Transcript::new(oracle);
        transcript.absorb_bytes(b"hadamard_argument");
        transcript.absorb(Hashable::group_vector(ck.bases()));
        transcript.absorb(Hashable::Group(ck.h().clone()));
        transcript.absorb(Hashable::group_vector(statement.c_a.as_slice()));
        transcript.absorb(Hashable::Group(statement.c_b.clone()));
        transcript.absorb(Hashable::group_vector(&proof.b_commits));
        let x = transcript.challenge_scalar()?;
        let y = transcript.challenge_scalar()?;

        let checks = m - 1;
        let zero = y.group().scalar_zero();
        let mut c_a_zero = Vec::with_capacity(2 * checks);
        let mut c_b_zero = Vec::with_capacity(2 * checks);

        let mut x_power = x.clone();
        for k in 1..m {
            c_a_zero.push(statement.c_a[k].clone());
            c_b_zero.push(proof.b_commits[k - 1].exp(&x_power));
            x_power = x_power.mul(&x);
        }
        let mut x_power = x.clone();
        for k in 1..m {
            let neg_ones = vec![x_power.neg(); n];
            c_a_zero.push(PedersenCommitment::commit(ck, &neg_ones, &zero)?);
            c_b_zero.push(proof.b_commits[k].clone());
            x_power = x_power.mul(&x);
        }

        let zero_parameters = zero_argument::Parameters::new(2 * checks, n, ck.clone());
        let zero_statement = zero_argument::Statement::new(GroupVector::new(c_a_zero)?, GroupVector::new(c_b_zero)?, y)?;
        ZeroArgument::verify(&zero_parameters, &zero_statement, &proof.zero_proof, oracle)
    }
}
