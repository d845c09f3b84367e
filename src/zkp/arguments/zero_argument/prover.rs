use super::{Parameters, Proof, Statement, Witness};
use crate::containers::GroupMatrix;
use crate::error::CryptoError;
use crate::field::{scalar_powers, ZqElement};
use crate::utils::hash::{Hashable, HashOracle};
use crate::utils::vector_arithmetic::{compute_d, dot_product_scalars, star_map};
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

    fn absorb_public<H: HashOracle>(&self, transcript: &mut Transcript<'_, H>) {
        transcript.absorb_bytes(b"zero_argument");
        transcript.absorb(Hashable::group_vector(self.parameters.commit_key.bases()));
        transcript.absorb(Hashable::Group(self.parameters.commit_key.h().clone()));
        transcript.absorb(Hashable::Scalar(self.statement.y.clone()));
        transcript.absorb(Hashable::group_vector(self.statement.c_a.as_slice()));
        transcript.absorb(Hashable::group_vector(self.statement.c_b.as_slice()));
    }

    /// `getZeroArgument`: extends `A`, `B` by one random column each (`a_0`
    /// in front of `A`, `b_m` behind `B`), commits the diagonal vector of the
    /// extended bilinear form, and folds everything down to a single
    /// evaluation at a verifier-chosen challenge.
    pub fn prove<R: RngCore, H: HashOracle>(&self, rng: &mut R, oracle: &H) -> Result<Proof, CryptoError> {
        let m = self.parameters.m;
        let n = self.parameters.n;
        if m == 0 {
            return Err(CryptoError::BoundsViolation("zero_argument::Prover::prove".into(), "m must be >= 1".into()));
        }
        let group = self.statement.y.group().clone();
        let ck = &self.parameters.commit_key;

        let r_0 = group.random_scalar(rng);
        let s_m = group.random_scalar(rng);
        let a_0: Vec<ZqElement> = (0..n).map(|_| group.random_scalar(rng)).collect();
        let b_m: Vec<ZqElement> = (0..n).map(|_| group.random_scalar(rng)).collect();

        let mut a_prime_columns = vec![a_0.clone()];
        for i in 0..m {
            a_prime_columns.push(self.witness.a.column(i).as_slice().to_vec());
        }
        let mut b_prime_columns: Vec<Vec<ZqElement>> = (0..m).map(|j| self.witness.b.column(j).as_slice().to_vec()).collect();
        b_prime_columns.push(b_m.clone());

        let a_extended = to_matrix(a_prime_columns)?;
        let b_extended = to_matrix(b_prime_columns)?;
        let d = compute_d(&a_extended, &b_extended, &self.statement.y)?;

        let vanishing_index = m - 1;
        let t: Vec<ZqElement> = (0..=2 * m)
            .map(|k| if k == vanishing_index { group.scalar_zero() } else { group.random_scalar(rng) })
            .collect();

        let a_0_commit = PedersenCommitment::commit(ck, &a_0, &r_0)?;
        let b_m_commit = PedersenCommitment::commit(ck, &b_m, &s_m)?;
        let committed_diagonals = d
            .iter()
            .zip(t.iter())
            .map(|(d_k, t_k)| PedersenCommitment::commit(ck, std::slice::from_ref(d_k), t_k))
            .collect::<Result<Vec<_>, _>>()?;

        let mut transcript = Transcript::new(oracle);
        self.absorb_public(&mut transcript);
        transcript.absorb(Hashable::Group(a_0_commit.clone()));
        transcript.absorb(Hashable::Group(b_m_commit.clone()));
        transcript.absorb(Hashable::group_vector(&committed_diagonals));
        let x = transcript.challenge_scalar()?;

        let x_powers = scalar_powers(&x, m);
        let a_blinded = fold_columns(&a_0, &(0..m).map(|i| self.witness.a.column(i).as_slice().to_vec()).collect::<Vec<_>>(), &x_powers);
        let r_blinded = r_0.add(&dot_product_scalars(&x_powers, self.witness.r.as_slice())?);

        let rev_powers: Vec<ZqElement> = x_powers.iter().rev().cloned().collect();
        let b_blinded = fold_columns(&b_m, &(0..m).map(|j| self.witness.b.column(j).as_slice().to_vec()).collect::<Vec<_>>(), &rev_powers);
        let s_blinded = s_m.add(&dot_product_scalars(&rev_powers, self.witness.s.as_slice())?);

        let mut t_blinded = group.scalar_zero();
        let mut x_power = group.scalar_one();
        for t_k in &t {
            t_blinded = t_blinded.add(&t_k.mul(&x_power));
            x_power = x_power.mul(&x);
        }

        Ok(Proof {
            a_0_commit,
            b_m_commit,
            committed_diagonals,
            a_blinded,
            b_blinded,
            r_blinded,
            s_blinded,
            t_blinded,
        })
    }
}

fn to_matrix(columns: Vec<Vec<ZqElement>>) -> Result<GroupMatrix<ZqElement>, CryptoError> {
    use crate::containers::GroupVector;
    let columns = columns.into_iter().map(GroupVector::new).collect::<Result<Vec<_>, _>>()?;
    GroupMatrix::from_columns(columns)
}

/// `base + ∑ weights_i · columns_i`, elementwise over `n`-dimensional
/// vectors.
fn fold_columns(base: &[ZqElement], columns: &[Vec<ZqElement>], weights: &[ZqElement]) -> Vec<ZqElement> {
    let mut acc = base.to_vec();
    for (column, weight) in columns.iter().zip(weights.iter()) {
        for (acc_i, col_i) in acc.iter_mut().zip(column.iter()) {
            *acc_i = acc_i.add(&weight.mul(col_i));
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::GroupVector;
    use crate::field::GqGroup;
    use crate::utils::hash::ShakeHashOracle;
    use crate::vector_commitment::pedersen::CommitKey;
    use num_bigint::BigUint;
    use rand::thread_rng;
    use std::sync::Arc;

    fn group() -> Arc<GqGroup> {
        Arc::new(GqGroup::new(BigUint::from(23u32), BigUint::from(11u32), BigUint::from(2u32)))
    }

    #[test]
    fn honest_zero_relation_roundtrips() {
        let g = group();
        let mut rng = thread_rng();
        let ck = CommitKey::setup(&g, &mut rng, 2);
        let m = 2;
        let n = 2;
        let y = g.scalar(BigUint::from(3u32));

        let a0 = vec![g.scalar(BigUint::from(1u32)), g.scalar(BigUint::from(2u32))];
        let a1 = vec![g.scalar(BigUint::from(4u32)), g.scalar(BigUint::from(1u32))];
        // Choose b columns so that ⟨a0,b0⟩_y + ⟨a1,b1⟩_y = 0 in Z_11.
        let b0 = vec![g.scalar(BigUint::from(5u32)), g.scalar(BigUint::from(1u32))];
        let star_a0_b0 = star_map(&a0, &b0, &y).unwrap();
        // solve ⟨a1,b1⟩_y = -star_a0_b0 by picking b1 = (k, 0) for some k.
        let y_pow1 = y.clone();
        let k = star_a0_b0.neg().mul(&a1[0].mul(&y_pow1).inverse());
        let b1 = vec![k, g.scalar_zero()];

        let a = GroupMatrix::from_columns(vec![GroupVector::new(a0).unwrap(), GroupVector::new(a1).unwrap()]).unwrap();
        let b = GroupMatrix::from_columns(vec![GroupVector::new(b0).unwrap(), GroupVector::new(b1).unwrap()]).unwrap();
        let r = GroupVector::new((0..m).map(|_| g.random_scalar(&mut rng)).collect()).unwrap();
        let s = GroupVector::new((0..m).map(|_| g.random_scalar(&mut rng)).collect()).unwrap();

        let c_a = PedersenCommitment::commit_matrix(&ck, &a, &r).unwrap();
        let c_b = PedersenCommitment::commit_matrix(&ck, &b, &s).unwrap();

        let parameters = Parameters::new(m, n, ck);
        let statement = Statement::new(c_a, c_b, y).unwrap();
        let witness = Witness::new(a, b, r, s).unwrap();
        let oracle = ShakeHashOracle::new(g).unwrap();

        let prover = Prover::new(&parameters, &statement, &witness);
        let proof = prover.prove(&mut rng, &oracle).unwrap();
        assert!(Proof::verify(&parameters, &statement, &proof, &oracle).is_ok());
    }
}
