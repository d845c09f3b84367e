//! Knuth (Fisher–Yates) permutation generation, the teacher's
//! `utils::permutation::Permutation` (referenced from `benches/shuffle.rs`
//! as `Permutation::new`/`permute_array`).

use rand::RngCore;

/// A bijection `π : [0, size) -> [0, size)`, stored as the image array
/// `[π(0), π(1), ..., π(size-1)]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permutation {
    size: usize,
    image: Vec<usize>,
}

impl Permutation {
    /// `genPermutation(N)`: a uniformly random bijection drawn via
    /// Fisher–Yates over a CSPRNG-derived stream.
    pub fn new<R: RngCore>(rng: &mut R, size: usize) -> Self {
        let mut image: Vec<usize> = (0..size).collect();
        for i in (1..size).rev() {
            let j = (rng.next_u64() as usize) % (i + 1);
            image.swap(i, j);
        }
        Self { size, image }
    }

    /// Wraps an explicit bijection, e.g. one read from a test vector.
    /// `image` must be a permutation of `0..image.len()`.
    pub fn from_image(image: Vec<usize>) -> Self {
        let size = image.len();
        Self { size, image }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn image(&self) -> &[usize] {
        &self.image
    }

    /// `π(i)`.
    pub fn apply(&self, i: usize) -> usize {
        self.image[i]
    }

    /// `(v_{π(0)}, v_{π(1)}, ..., v_{π(n-1)})`.
    pub fn permute_array<T: Clone>(&self, values: &[T]) -> Vec<T> {
        self.image.iter().map(|&i| values[i].clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permute_array_follows_image() {
        let permutation = Permutation::from_image(vec![1, 3, 2, 0]);
        let values = vec!["a", "b", "c", "d"];
        assert_eq!(permutation.permute_array(&values), vec!["b", "d", "c", "a"]);
    }

    #[test]
    fn random_permutation_is_a_bijection() {
        let mut rng = rand::thread_rng();
        let permutation = Permutation::new(&mut rng, 50);
        let mut seen = vec![false; 50];
        for &i in permutation.image() {
            assert!(!seen[i]);
            seen[i] = true;
        }
    }
}
