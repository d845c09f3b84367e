//! `GroupVector<T>`/`GroupMatrix<T>`: homogeneous, size-typed containers
//! enforcing "all elements in same group".
//!
//! The teacher represents these as bare `Vec`/`Vec<Vec<_>>` throughout
//! (`matrix_elements_product`, `shuffle::prover` reshape chunks by hand).
//! Here the container gets a real type: every constructor validates group
//! equality and row-length uniformity once, up front, instead of letting it
//! scatter across call sites.

use crate::error::CryptoError;
use crate::field::Tagged;

/// A finite, ordered sequence of `T`, all sharing one group.
#[derive(Clone, Debug)]
pub struct GroupVector<T> {
    items: Vec<T>,
}

impl<T: Tagged + Clone> GroupVector<T> {
    /// Builds a vector, validating that every element shares the first
    /// element's group. An empty vector is valid and carries no group tag.
    pub fn new(items: Vec<T>) -> Result<Self, CryptoError> {
        if let Some(first) = items.first() {
            for item in items.iter().skip(1) {
                if !item.same_group(first) {
                    return Err(CryptoError::GroupMismatch);
                }
            }
        }
        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> std::ops::Index<usize> for GroupVector<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

/// An `m × n` matrix with all entries in one group; rows and columns are
/// each a [`GroupVector<T>`].
///
/// Stored column-major (`Vec<GroupVector<T>>` of columns), matching how the
/// teacher's product/shuffle arguments always iterate "by column"
/// (`A_·0, A_·1, ...`) when committing.
#[derive(Clone, Debug)]
pub struct GroupMatrix<T> {
    columns: Vec<GroupVector<T>>,
}

impl<T: Tagged + Clone> GroupMatrix<T> {
    /// Builds a matrix from its columns, validating (a) every column has the
    /// same length and (b) every element across every column shares one
    /// group. An empty matrix (zero columns) is permitted.
    pub fn from_columns(columns: Vec<GroupVector<T>>) -> Result<Self, CryptoError> {
        let row_len = columns.first().map(GroupVector::len).unwrap_or(0);
        for column in &columns {
            if column.len() != row_len {
                return Err(CryptoError::VectorCastingError(column.len(), row_len, columns.len()));
            }
        }
        let mut tag = None;
        for column in &columns {
            if let Some(first) = column.get(0) {
                match &tag {
                    None => tag = Some(first.clone()),
                    Some(t) => {
                        if !first.same_group(t) {
                            return Err(CryptoError::GroupMismatch);
                        }
                    }
                }
            }
        }
        Ok(Self { columns })
    }

    /// Reshapes a flat, row-major vector of length `rows * cols` into a
    /// `rows × cols` matrix.
    pub fn from_row_major(values: Vec<T>, rows: usize, cols: usize) -> Result<Self, CryptoError> {
        if values.len() != rows * cols {
            return Err(CryptoError::VectorCastingError(values.len(), rows, cols));
        }
        let mut columns = vec![Vec::with_capacity(rows); cols];
        for (i, value) in values.into_iter().enumerate() {
            columns[i % cols].push(value);
        }
        let columns = columns
            .into_iter()
            .map(GroupVector::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_columns(columns)
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.columns.first().map(GroupVector::len).unwrap_or(0)
    }

    pub fn column(&self, j: usize) -> &GroupVector<T> {
        &self.columns[j]
    }

    pub fn columns(&self) -> &[GroupVector<T>] {
        &self.columns
    }
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

    #[test]
    fn empty_vector_has_no_group_and_is_valid() {
        let v: GroupVector<crate::field::GqElement> = GroupVector::new(vec![]).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn mismatched_groups_are_rejected() {
        let g1 = group();
        let g2 = Arc::new(GqGroup::new(BigUint::from(47u32), BigUint::from(23u32), BigUint::from(2u32)));
        let a = g1.element(BigUint::from(4u32));
        let b = g2.element(BigUint::from(4u32));
        assert_eq!(GroupVector::new(vec![a, b]).unwrap_err(), CryptoError::GroupMismatch);
    }

    #[test]
    fn reshape_is_row_major() {
        let g = group();
        let values: Vec<_> = (1u32..=6).map(|v| g.scalar(BigUint::from(v))).collect();
        let m = GroupMatrix::from_row_major(values, 2, 3).unwrap();
        assert_eq!(m.num_rows(), 2);
        assert_eq!(m.num_columns(), 3);
        assert_eq!(m.column(0).get(0).unwrap().value(), &BigUint::from(1u32));
        assert_eq!(m.column(0).get(1).unwrap().value(), &BigUint::from(4u32));
    }
}
