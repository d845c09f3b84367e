use super::{diagonal_products, Parameters, Proof, Statement, Witness};
use crate::containers::{GroupMatrix, GroupVector};
use crate::error::CryptoError;
use crate::field::{scalar_powers, scalar_powers_from_zero, ZqElement};
use crate::homomorphic_encryption::el_gamal::Ciphertext;
use crate::utils::hash::{Hashable, HashOracle};
use crate::utils::vector_arithmetic::dot_product_scalars;
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
        transcript.absorb_bytes(b"multi_exponentiation_argument");
        transcript.absorb(Hashable::group_vector(self.parameters.public_key.components()));
        transcript.absorb(Hashable::group_vector(self.parameters.commit_key.bases()));
        transcript.absorb(Hashable::Group(self.parameters.commit_key.h().clone()));
        for column in self.statement.c.columns() {
            transcript.absorb(Hashable::ciphertext_vector(column.as_slice()));
        }
        transcript.absorb(Hashable::ciphertext(&self.statement.c_bar));
        transcript.absorb(Hashable::group_vector(self.statement.c_a.as_slice()));
    }

    /// `getMultiExponentiationArgument`: extends `A` with a random blinding
    /// column `a_0`, folds `C` against the extended matrix into `2m`
    /// diagonal ciphertexts, masks each with a fresh `ReEnc(g^{b_k}, τ_k)`,
    /// and then -- after a single challenge `x` -- collapses both the
    /// exponent matrix and the diagonal blinding vectors to one evaluation
    /// each.
    pub fn prove<R: RngCore, H: HashOracle>(&self, rng: &mut R, oracle: &H) -> Result<Proof, CryptoError> {
        let m = self.parameters.m;
        let n = self.parameters.n;
        if m == 0 {
            return Err(CryptoError::BoundsViolation("multi_exponentiation_argument::Prover::prove".into(), "m must be >= 1".into()));
        }
        let group = self.parameters.public_key.group().clone();
        let ck = &self.parameters.commit_key;
        let pk = &self.parameters.public_key;
        let message_length = self.statement.c_bar.message_length();

        let a_0: Vec<ZqElement> = (0..n).map(|_| group.random_scalar(rng)).collect();
        let r_0 = group.random_scalar(rng);

        let mut a_ext_columns = vec![a_0.clone()];
        for i in 0..m {
            a_ext_columns.push(self.witness.a.column(i).as_slice().to_vec());
        }
        let a_extended = to_matrix(a_ext_columns)?;

        let diagonals = diagonal_products(&self.statement.c, &a_extended)?;
        let masked_real_diagonal = Ciphertext::masked_by_zero(&self.witness.rho_bar, pk, message_length)?.mul(&diagonals[m])?;
        if masked_real_diagonal != self.statement.c_bar {
            return Err(CryptoError::WitnessInconsistent("multi-exponentiation does not fold to the claimed target ciphertext".into()));
        }

        let tau: Vec<ZqElement> = (0..2 * m)
            .map(|k| if k == m { self.witness.rho_bar.clone() } else { group.random_scalar(rng) })
            .collect();
        let b: Vec<ZqElement> = (0..2 * m).map(|k| if k == m { group.scalar_zero() } else { group.random_scalar(rng) }).collect();
        let s: Vec<ZqElement> = (0..2 * m).map(|k| if k == m { group.scalar_zero() } else { group.random_scalar(rng) }).collect();

        let a_0_commit = PedersenCommitment::commit(ck, &a_0, &r_0)?;
        let b_commits: Vec<_> = b
            .iter()
            .zip(s.iter())
            .map(|(b_k, s_k)| PedersenCommitment::commit(ck, std::slice::from_ref(b_k), s_k))
            .collect::<Result<Vec<_>, _>>()?;
        let e_vector: Vec<Ciphertext> = b
            .iter()
            .zip(tau.iter())
            .zip(diagonals.iter())
            .map(|((b_k, tau_k), d_k)| {
                let masking = Ciphertext::mask_generator(b_k, tau_k, pk, message_length)?;
                masking.mul(d_k)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut transcript = Transcript::new(oracle);
        self.absorb_public(&mut transcript);
        transcript.absorb(Hashable::Group(a_0_commit.clone()));
        transcript.absorb(Hashable::group_vector(&b_commits));
        transcript.absorb(Hashable::ciphertext_vector(&e_vector));
        let x = transcript.challenge_scalar()?;

        let x_powers = scalar_powers(&x, m);
        let mut a_blinded = a_0.clone();
        for (i, x_power) in x_powers.iter().enumerate() {
            let column = self.witness.a.column(i).as_slice();
            for (acc, a_i) in a_blinded.iter_mut().zip(column.iter()) {
                *acc = acc.add(&x_power.mul(a_i));
            }
        }
        let r_blinded = r_0.add(&dot_product_scalars(&x_powers, self.witness.r.as_slice())?);

        let x_powers_full = scalar_powers_from_zero(&x, 2 * m - 1);
        let b_blinded = dot_product_scalars(&x_powers_full, &b)?;
        let s_blinded = dot_product_scalars(&x_powers_full, &s)?;
        let tau_blinded = dot_product_scalars(&x_powers_full, &tau)?;

        Ok(Proof {
            a_0_commit,
            b_commits,
            e_vector,
            a_blinded,
            r_blinded,
            b_blinded,
            s_blinded,
            tau_blinded,
        })
    }
}

fn to_matrix(columns: Vec<Vec<ZqElement>>) -> Result<GroupMatrix<ZqElement>, CryptoError> {
    let columns = columns.into_iter().map(GroupVector::new).collect::<Result<Vec<_>, _>>()?;
    GroupMatrix::from_columns(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::GqGroup;
    use crate::homomorphic_encryption::el_gamal::PublicKey;
    use crate::utils::hash::ShakeHashOracle;
    use crate::vector_commitment::pedersen::CommitKey;
    use crate::zkp::arguments::multi_exponentiation_argument::{Parameters, Statement, Witness};
    use num_bigint::BigUint;
    use rand::thread_rng;
    use std::sync::Arc;

    fn group() -> Arc<GqGroup> {
        Arc::new(GqGroup::new(BigUint::from(23u32), BigUint::from(11u32), BigUint::from(2u32)))
    }

    #[test]
    fn honest_multi_exponentiation_roundtrips() {
        let g = group();
        let mut rng = thread_rng();
        let ck = CommitKey::setup(&g, &mut rng, 2);
        let sk = g.random_scalar(&mut rng);
        let pk = PublicKey::new(vec![g.generator().exp(&sk)]).unwrap();
        let m = 2;
        let n = 2;
        let message_length = 1;

        let ciphers: Vec<Ciphertext> = (0..m * n)
            .map(|_| Ciphertext::re_encrypt(&[g.random_element(&mut rng)], &g.random_scalar(&mut rng), &pk).unwrap())
            .collect();
        let c = GroupMatrix::from_columns(
            (0..m)
                .map(|j| GroupVector::new(ciphers[j * n..(j + 1) * n].to_vec()).unwrap())
                .collect(),
        )
        .unwrap();

        let a_cols: Vec<Vec<ZqElement>> = (0..m).map(|_| (0..n).map(|_| g.random_scalar(&mut rng)).collect()).collect();
        let a = to_matrix(a_cols.clone()).unwrap();
        let r = GroupVector::new((0..m).map(|_| g.random_scalar(&mut rng)).collect()).unwrap();
        let rho_bar = g.random_scalar(&mut rng);

        let zero_col: Vec<ZqElement> = (0..n).map(|_| g.scalar_zero()).collect();
        let mut a_ext_cols = vec![zero_col];
        a_ext_cols.extend(a_cols);
        let a_extended = to_matrix(a_ext_cols).unwrap();
        let diagonals = diagonal_products(&c, &a_extended).unwrap();
        let c_bar = Ciphertext::masked_by_zero(&rho_bar, &pk, message_length).unwrap().mul(&diagonals[m]).unwrap();

        let c_a = PedersenCommitment::commit_matrix(&ck, &a, &r).unwrap();

        let parameters = Parameters::new(m, n, ck, pk);
        let statement = Statement::new(c, c_bar, c_a).unwrap();
        let witness = Witness::new(a, r, rho_bar).unwrap();
        let oracle = ShakeHashOracle::new(g).unwrap();

        let prover = Prover::new(&parameters, &statement, &witness);
        let proof = prover.prove(&mut rng, &oracle).unwrap();
        assert!(Proof::verify(&parameters, &statement, &proof, &oracle).is_ok());
    }
}
