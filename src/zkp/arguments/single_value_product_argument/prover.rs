use super::{Parameters, Proof, Statement, Witness};
use crate::error::CryptoError;
use crate::field::ZqElement;
use crate::utils::hash::{Hashable, HashOracle};
use crate::vector_commitment::pedersen::PedersenCommitment;
use crate::vector_commitment::HomomorphicCommitmentScheme;
use crate::zkp::transcript::Transcript;

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

    pub fn prove<R: RngCore, H: HashOracle>(&self, rng: &mut R, oracle: &H) -> Result<Proof, CryptoError> {
        let n = self.parameters.n;
        if n < 2 {
            return Err(CryptoError::BoundsViolation("single_value_product_argument::Prover::prove".into(), "n must be >= 2".into()));
        }
        let a = self.witness.a.as_slice();
        if a.len() != n {
            return Err(CryptoError::ShapeMismatchError(a.len(), n));
        }
        let group = self.statement.b.group().clone();
        let ck = &self.parameters.commit_key;

        let mut b = Vec::with_capacity(n);
        b.push(a[0].clone());
        for i in 1..n {
            b.push(b[i - 1].mul(&a[i]));
        }
        if &b[n - 1] != &self.statement.b {
            return Err(CryptoError::WitnessInconsistent("vector product does not match the claimed value".into()));
        }

        let d: Vec<ZqElement> = (0..n).map(|_| group.random_scalar(rng)).collect();
        let mut delta = Vec::with_capacity(n);
        delta.push(d[0].clone());
        for _ in 1..n - 1 {
            delta.push(group.random_scalar(rng));
        }
        delta.push(group.scalar_zero());

        let r_d = group.random_scalar(rng);
        let s_1 = group.random_scalar(rng);
        let s_x = group.random_scalar(rng);

        let first_family: Vec<ZqElement> = (0..n - 1).map(|i| delta[i].mul(&d[i + 1]).neg()).collect();
        let second_family: Vec<ZqElement> = (1..n)
            .map(|i| delta[i].sub(&a[i].mul(&delta[i - 1])).sub(&b[i - 1].mul(&d[i])))
            .collect();

        let d_commit = PedersenCommitment::commit(ck, &d, &r_d)?;
        let delta_commit = PedersenCommitment::commit(ck, &first_family, &s_1)?;
        let diff_commit = PedersenCommitment::commit(ck, &second_family, &s_x)?;

        let mut transcript = Transcript::new(oracle);
        transcript.absorb_bytes(b"single_value_product_argument");
        transcript.absorb(Hashable::group_vector(ck.bases()));
        transcript.absorb(Hashable::Group(ck.h().clone()));
        transcript.absorb(Hashable::Group(self.statement.c_a.clone()));
        transcript.absorb(Hashable::Scalar(self.statement.b.clone()));
        transcript.absorb(Hashable::Group(d_commit.clone()));
        transcript.absorb(Hashable::Group(delta_commit.clone()));
        transcript.absorb(Hashable::Group(diff_commit.clone()));
        let x = transcript.challenge_scalar()?;

        let a_blinded: Vec<ZqElement> = a.iter().zip(d.iter()).map(|(a_i, d_i)| x.mul(a_i).add(d_i)).collect();
        let r_blinded = x.mul(&self.witness.r).add(&r_d);
        let b_blinded: Vec<ZqElement> = b.iter().zip(delta.iter()).map(|(b_i, delta_i)| x.mul(b_i).add(delta_i)).collect();
        let s_blinded = x.mul(&s_x).add(&s_1);

        Ok(Proof {
            d_commit,
            delta_commit,
            diff_commit,
            a_blinded,
            b_blinded,
            r_blinded,
            s_blinded,
        })
    }
}
