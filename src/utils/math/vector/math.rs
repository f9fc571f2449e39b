use std::cmp::Ordering;

use num::{Float, Num};

use super::ZeroSpVec;

impl<N> ZeroSpVec<N>
where
    N: Num + Copy,
{
    /// Dot product of two sparse vectors
    /// d(a, b) = Σ(a_i * b_i)
    ///
    /// Walks both index lists in a single merge pass.
    #[inline]
    pub fn dot(&self, other: &Self) -> N {
        debug_assert_eq!(
            self.len(),
            other.len(),
            "Vectors must be of the same length to compute dot product."
        );

        let mut result = N::zero();
        let (self_inds, self_vals) = self.parts();
        let (other_inds, other_vals) = other.parts();

        let mut i = 0;
        let mut j = 0;
        while i < self_inds.len() && j < other_inds.len() {
            match self_inds[i].cmp(&other_inds[j]) {
                Ordering::Equal => {
                    result = result + self_vals[i] * other_vals[j];
                    i += 1;
                    j += 1;
                }
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        result
    }

    #[inline]
    pub fn norm_sq(&self) -> N {
        self.raw_iter()
            .fold(N::zero(), |acc, (_, &v)| acc + v * v)
    }

    /// Element-wise product with a dense vector of the same logical length.
    /// Products that come out zero are dropped.
    #[inline]
    pub fn hadamard_dense(&self, dense: &[N]) -> Self {
        debug_assert_eq!(
            self.len(),
            dense.len(),
            "Vectors must be of the same length to compute hadamard product."
        );

        let mut result = ZeroSpVec::with_capacity(self.nnz());
        for (idx, &val) in self.raw_iter() {
            let prod = val * dense[idx];
            if prod != N::zero() {
                result.raw_push(idx, prod);
            }
        }
        result.len = self.len();
        result
    }
}

impl<N> ZeroSpVec<N>
where
    N: Float,
{
    /// Euclidean norm
    /// ||a|| = sqrt(Σ(a_i^2))
    #[inline]
    pub fn norm(&self) -> N {
        self.norm_sq().sqrt()
    }

    /// Scale to unit length in place.
    /// A zero vector stays zero.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let norm = self.norm();
        if norm > N::zero() {
            for (_, val) in self.raw_iter_mut() {
                *val = *val / norm;
            }
        }
        self
    }

    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// 0 when either side is a zero vector.
    #[inline]
    pub fn cosine_similarity(&self, other: &Self) -> N {
        let denom = self.norm() * other.norm();
        if denom == N::zero() {
            N::zero()
        } else {
            self.dot(other) / denom
        }
    }
}
