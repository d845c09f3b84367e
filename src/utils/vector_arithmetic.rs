//! Small, free-standing helpers shared by the argument tower: dot products
//! against `Z_q` scalars, row-major reshaping, the bilinear `star-map`, and
//! the Hadamard-product helper. Kept separate from `field`/`containers`
//! because, unlike those, nothing here needs to reason about group
//! membership beyond what the element types already enforce.

use crate::containers::{GroupMatrix, GroupVector};
use crate::error::CryptoError;
use crate::field::{multi_exponentiate, GqElement, Tagged, ZqElement};
use crate::homomorphic_encryption::el_gamal::Ciphertext;

/// `∑ scalars_i · bases_i`, i.e. a multi-exponentiation read as a dot
/// product (the teacher's `dot_product` specialised to commitments).
pub fn dot_product_group(scalars: &[ZqElement], bases: &[GqElement]) -> Result<GqElement, CryptoError> {
    multi_exponentiate(bases, scalars)
}

/// `∑ scalars_i · a_i` in `Z_q`.
pub fn dot_product_scalars(scalars: &[ZqElement], a: &[ZqElement]) -> Result<ZqElement, CryptoError> {
    if scalars.len() != a.len() {
        return Err(CryptoError::DotProductLengthError(scalars.len(), a.len()));
    }
    let first = scalars
        .first()
        .ok_or_else(|| CryptoError::BoundsViolation("dot_product_scalars".into(), "inputs must be non-empty".into()))?;
    let mut acc = first.group().scalar_zero();
    for (s, v) in scalars.iter().zip(a.iter()) {
        acc = acc.add(&s.mul(v));
    }
    Ok(acc)
}

/// `∏ ciphertexts_i ^ scalars_i`, the ciphertext analogue of
/// [`dot_product_group`] (used to fold diagonal ciphertexts weighted by
/// challenge powers).
pub fn dot_product_ciphertexts(scalars: &[ZqElement], ciphertexts: &[Ciphertext]) -> Result<Ciphertext, CryptoError> {
    if scalars.len() != ciphertexts.len() {
        return Err(CryptoError::DotProductLengthError(scalars.len(), ciphertexts.len()));
    }
    let first = ciphertexts
        .first()
        .ok_or_else(|| CryptoError::BoundsViolation("dot_product_ciphertexts".into(), "inputs must be non-empty".into()))?;
    let message_length = first.message_length();
    let group = first.group().clone();
    let mut acc = Ciphertext::identity(&group, message_length);
    for (s, c) in scalars.iter().zip(ciphertexts.iter()) {
        acc = acc.mul(&c.exp(s))?;
    }
    Ok(acc)
}

/// Splits a flat vector into `num_chunks` contiguous chunks of length
/// `chunk_len` each (`reshape`, teacher's `utils::vector_arithmetic`,
/// referenced from `shuffle::prover`).
pub fn reshape<T: Clone>(values: &[T], num_chunks: usize, chunk_len: usize) -> Result<Vec<Vec<T>>, CryptoError> {
    if values.len() != num_chunks * chunk_len {
        return Err(CryptoError::VectorCastingError(values.len(), num_chunks, chunk_len));
    }
    Ok(values.chunks(chunk_len).map(|c| c.to_vec()).collect())
}

/// [`reshape`] followed by wrapping each chunk as a column of a
/// [`GroupMatrix`].
pub fn reshape_into_matrix<T: Tagged + Clone>(values: &[T], num_chunks: usize, chunk_len: usize) -> Result<GroupMatrix<T>, CryptoError> {
    let chunks = reshape(values, num_chunks, chunk_len)?;
    let columns = chunks.into_iter().map(GroupVector::new).collect::<Result<Vec<_>, _>>()?;
    GroupMatrix::from_columns(columns)
}

/// The bilinear `star-map` `⟨u, v⟩_y = ∑ u_i · v_i · y^{i+1}`. Empty
/// vectors return `0`.
pub fn star_map(u: &[ZqElement], v: &[ZqElement], y: &ZqElement) -> Result<ZqElement, CryptoError> {
    if u.len() != v.len() {
        return Err(CryptoError::DotProductLengthError(u.len(), v.len()));
    }
    let group = y.group().clone();
    let mut acc = group.scalar_zero();
    let mut y_power = y.clone();
    for (u_i, v_i) in u.iter().zip(v.iter()) {
        acc = acc.add(&u_i.mul(v_i).mul(&y_power));
        y_power = y_power.mul(y);
    }
    Ok(acc)
}

/// `computeD(A, B, y)`: `A, B ∈ GM<Z_q>^{n×(m+1)}`, returns `d ∈
/// GV<Z_q>^{2m+1}` with `d_k = ∑_{j-i=k-m} ⟨A_·i, B_·j⟩_y`. Empty inputs
/// (zero columns) return an empty vector.
pub fn compute_d(a: &GroupMatrix<ZqElement>, b: &GroupMatrix<ZqElement>, y: &ZqElement) -> Result<Vec<ZqElement>, CryptoError> {
    if a.num_columns() != b.num_columns() || a.num_rows() != b.num_rows() {
        return Err(CryptoError::DiagonalLengthError(a.num_columns(), b.num_columns()));
    }
    if a.num_columns() == 0 {
        return Ok(vec![]);
    }
    let m = a.num_columns() - 1;
    let zero = y.group().scalar_zero();
    let mut d = Vec::with_capacity(2 * m + 1);
    for k in 0..=2 * m {
        let mut acc = zero.clone();
        for i in 0..=m {
            let j = i as isize + k as isize - m as isize;
            if j >= 0 && (j as usize) <= m {
                acc = acc.add(&star_map(a.column(i).as_slice(), b.column(j as usize).as_slice(), y)?);
            }
        }
        d.push(acc);
    }
    Ok(d)
}

/// `hadamardProduct(M, j) = ⊙_{i ≤ j} M_·i`, the componentwise product of
/// the first `j + 1` columns of `M`.
pub fn hadamard_product_prefix(m: &GroupMatrix<ZqElement>, j: usize) -> Result<Vec<ZqElement>, CryptoError> {
    if j >= m.num_columns() {
        return Err(CryptoError::BoundsViolation("hadamard_product_prefix".into(), format!("j={j} >= num_columns={}", m.num_columns())));
    }
    let mut acc = m.column(0).as_slice().to_vec();
    for i in 1..=j {
        let column = m.column(i).as_slice();
        acc = acc.iter().zip(column.iter()).map(|(a, b)| a.mul(b)).collect();
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::GqGroup;
    use num_bigint::BigUint;
    use std::sync::Arc;

    fn group() -> Arc<GqGroup> {
        Arc::new(GqGroup::new(BigUint::from(23u32), BigUint::from(11u32), BigUint::from(2u32)))
    }

    fn scalar(group: &Arc<GqGroup>, v: u32) -> ZqElement {
        group.scalar(BigUint::from(v))
    }

    /// S5: `y=2`, `A = [[1,2,0,4],[3,2,4,4]]`, `B = [[3,2,1,2],[0,0,0,1]]`
    /// (rows are the two entries of each column) ⇒
    /// `computeD(A,B,y) = (1,3,4,1,0,1,4)` mod 11.
    #[test]
    fn s5_compute_d() {
        let g = group();
        let y = scalar(&g, 2);
        let a_cols = [[1u32, 3u32], [2, 2], [0, 4], [4, 4]];
        let b_cols = [[3u32, 0u32], [2, 0], [1, 0], [2, 1]];
        let a = GroupMatrix::from_columns(
            a_cols
                .iter()
                .map(|col| GroupVector::new(col.iter().map(|&v| scalar(&g, v)).collect()).unwrap())
                .collect(),
        )
        .unwrap();
        let b = GroupMatrix::from_columns(
            b_cols
                .iter()
                .map(|col| GroupVector::new(col.iter().map(|&v| scalar(&g, v)).collect()).unwrap())
                .collect(),
        )
        .unwrap();
        let d = compute_d(&a, &b, &y).unwrap();
        let expected = [1u32, 3, 4, 1, 0, 1, 4];
        assert_eq!(d.len(), expected.len());
        for (d_k, &e) in d.iter().zip(expected.iter()) {
            assert_eq!(d_k.value(), &BigUint::from(e));
        }
    }

    /// S6: Hadamard product on `Z_11` of columns `(1,2),(3,4),(5,6)` at
    /// `j=2` yields `(4,4)`.
    #[test]
    fn s6_hadamard_product_prefix() {
        let g = group();
        let columns = [[1u32, 2u32], [3, 4], [5, 6]];
        let m = GroupMatrix::from_columns(
            columns
                .iter()
                .map(|col| GroupVector::new(col.iter().map(|&v| scalar(&g, v)).collect()).unwrap())
                .collect(),
        )
        .unwrap();
        let product = hadamard_product_prefix(&m, 2).unwrap();
        assert_eq!(product[0].value(), &BigUint::from(4u32));
        assert_eq!(product[1].value(), &BigUint::from(4u32));
    }

    #[test]
    fn star_map_of_empty_is_zero() {
        let g = group();
        let y = scalar(&g, 2);
        let result = star_map(&[], &[], &y).unwrap();
        assert!(result.is_zero());
    }
}
