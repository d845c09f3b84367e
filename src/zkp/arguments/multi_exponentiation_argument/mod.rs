//! Multi-Exponentiation Argument: proves that a committed exponent matrix
//! `A`, applied to a public ciphertext matrix `C` and re-randomised by a
//! committed `ρ̄`, yields a claimed target ciphertext `C̄`. This is the step
//! that ties the permutation-commitment half of the shuffle argument (proved
//! via the [`super::product_argument`]) to the actual re-encrypted output.

pub mod proof;
pub mod prover;

use crate::containers::{GroupMatrix, GroupVector};
use crate::error::CryptoError;
use crate::field::{GqElement, Tagged, ZqElement};
use crate::homomorphic_encryption::el_gamal::{Ciphertext, PublicKey};
use crate::utils::vector_arithmetic::dot_product_ciphertexts;
use crate::vector_commitment::pedersen::CommitKey;

pub use proof::Proof;
pub use prover::Prover;

#[derive(Clone)]
pub struct Parameters {
    pub m: usize,
    pub n: usize,
    pub commit_key: CommitKey,
    pub public_key: PublicKey,
}

impl Parameters {
    pub fn new(m: usize, n: usize, commit_key: CommitKey, public_key: PublicKey) -> Self {
        Self { m, n, commit_key, public_key }
    }
}

#[derive(Clone)]
pub struct Statement {
    pub c: GroupMatrix<Ciphertext>,
    pub c_bar: Ciphertext,
    pub c_a: GroupVector<GqElement>,
}

impl Statement {
    pub fn new(c: GroupMatrix<Ciphertext>, c_bar: Ciphertext, c_a: GroupVector<GqElement>) -> Result<Self, CryptoError> {
        if c.num_columns() != c_a.len() {
            return Err(CryptoError::ShapeMismatchError(c.num_columns(), c_a.len()));
        }
        if let Some(first) = c.columns().first().and_then(|col| col.get(0)) {
            if first.message_length() != c_bar.message_length() {
                return Err(CryptoError::ShapeMismatchError(first.message_length(), c_bar.message_length()));
            }
            if !first.same_group(&c_bar) {
                return Err(CryptoError::GroupMismatch);
            }
            if let Some(a0) = c_a.get(0) {
                if a0.group() != first.group() {
                    return Err(CryptoError::GroupMismatch);
                }
            }
        }
        Ok(Self { c, c_bar, c_a })
    }
}

#[derive(Clone)]
pub struct Witness {
    pub a: GroupMatrix<ZqElement>,
    pub r: GroupVector<ZqElement>,
    pub rho_bar: ZqElement,
}

impl Witness {
    pub fn new(a: GroupMatrix<ZqElement>, r: GroupVector<ZqElement>, rho_bar: ZqElement) -> Result<Self, CryptoError> {
        if a.num_columns() != r.len() {
            return Err(CryptoError::ShapeMismatchError(a.num_columns(), r.len()));
        }
        Ok(Self { a, r, rho_bar })
    }
}

/// `getDiagonalProducts`: given `C ∈ GM<Ct>^{m×n}` (`m` columns of `n`
/// ciphertexts each) and the *extended* exponent matrix `A' = [a_0 | A] ∈
/// GM<Z_q>^{n×(m+1)}`, returns the `2m` diagonal ciphertexts `D_k = ∏
/// dot_product_ciphertexts(A'_·j, C_·i)` summed over `i ∈ [0,m)`, `j ∈
/// [0,m]` with `j - i = k - m + 1`. `D_m` is the "real" diagonal: since `a_0`
/// sits at extended column `0` and the witness columns of `A` sit at `1..=m`,
/// the only diagonal that pairs every `A_i` with `C_i` (`j = i + 1` for every
/// `i`, none of it touching `a_0`) is the one at `j - i = 1`, i.e. `k = m`.
/// An honest witness therefore has `C̄ = ReEnc(1, ρ̄) · D_m`.
pub fn diagonal_products(c: &GroupMatrix<Ciphertext>, a_extended: &GroupMatrix<ZqElement>) -> Result<Vec<Ciphertext>, CryptoError> {
    let m = c.num_columns();
    if a_extended.num_columns() != m + 1 {
        return Err(CryptoError::DiagonalLengthError(a_extended.num_columns(), m + 1));
    }
    if m == 0 {
        return Err(CryptoError::BoundsViolation("diagonal_products".into(), "C must have at least one column".into()));
    }
    let n = a_extended.num_rows();
    if c.num_rows() != n {
        return Err(CryptoError::ShapeMismatchError(c.num_rows(), n));
    }
    let first_cipher = c.column(0).get(0).ok_or_else(|| CryptoError::BoundsViolation("diagonal_products".into(), "C columns must be non-empty".into()))?;
    let group = first_cipher.group().clone();
    let message_length = first_cipher.message_length();

    let mut diagonals = Vec::with_capacity(2 * m);
    for k in 0..2 * m {
        let mut acc = Ciphertext::identity(&group, message_length);
        for i in 0..m {
            let j = i as isize + k as isize - m as isize + 1;
            if j >= 0 && (j as usize) <= m {
                let term = dot_product_ciphertexts(a_extended.column(j as usize).as_slice(), c.column(i).as_slice())?;
                acc = acc.mul(&term)?;
            }
        }
        diagonals.push(acc);
    }
    Ok(diagonals)
}

pub struct MultiExponentiationArgument;

impl crate::zkp::ArgumentOfKnowledge for MultiExponentiationArgument {
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
