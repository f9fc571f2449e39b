pub mod math;

use std::fmt::{self, Debug};

use num::Num;

/// ZeroSpVec is a sparse vector that stores only its non-zero elements.
/// It holds `indices` and `values`:
/// `indices` keeps the logical position of each element,
/// `values` keeps the element itself.
///
/// Elements are guaranteed to be sorted by ascending index.
#[derive(Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Num,
{
    inds: Vec<usize>,
    vals: Vec<N>,
    len: usize,
    zero: N,
}

impl<N> ZeroSpVec<N>
where
    N: Num,
{
    #[inline]
    pub fn new() -> Self {
        ZeroSpVec {
            inds: Vec::new(),
            vals: Vec::new(),
            len: 0,
            zero: N::zero(),
        }
    }

    /// Reserve room for `cap` non-zero elements
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        ZeroSpVec {
            inds: Vec::with_capacity(cap),
            vals: Vec::with_capacity(cap),
            len: 0,
            zero: N::zero(),
        }
    }

    /// All-zero vector of logical length `len`
    #[inline]
    pub fn with_len(len: usize) -> Self {
        let mut vec = Self::new();
        vec.len = len;
        vec
    }

    /// raw_push appends a non-zero element at `index`.
    /// The logical length grows to cover `index` if needed.
    ///
    /// # Arguments
    /// - `index` - logical index, must be greater than the last pushed index
    /// - `value` - element value
    #[inline]
    pub fn raw_push(&mut self, index: usize, value: N) {
        debug_assert!(
            self.inds.last().map_or(true, |&last| last < index),
            "indices must be pushed in ascending order"
        );
        self.inds.push(index);
        self.vals.push(value);
        if index >= self.len {
            self.len = index + 1;
        }
    }

    /// Append an element at the end. Zeros only grow the logical length.
    #[inline]
    pub fn push(&mut self, elem: N) {
        if elem != N::zero() {
            self.inds.push(self.len);
            self.vals.push(elem);
        }
        self.len += 1;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of stored (non-zero) elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.inds.len()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&N> {
        if index >= self.len {
            return None;
        }
        match self.inds.binary_search(&index) {
            Ok(pos) => Some(&self.vals[pos]),
            Err(_) => Some(&self.zero),
        }
    }

    /// Iterate over every logical element, zeros included
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &N> + '_ {
        (0..self.len).map(move |i| self.get(i).unwrap_or(&self.zero))
    }

    /// Iterate over stored elements as `(index, &value)`
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, &N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter())
    }

    #[inline]
    pub fn raw_iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut N)> + '_ {
        self.inds.iter().copied().zip(self.vals.iter_mut())
    }

    #[inline]
    pub(crate) fn parts(&self) -> (&[usize], &[N]) {
        (&self.inds, &self.vals)
    }
}

impl<N> Default for ZeroSpVec<N>
where
    N: Num,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> From<Vec<N>> for ZeroSpVec<N>
where
    N: Num,
{
    fn from(vec: Vec<N>) -> Self {
        let mut sp = ZeroSpVec::with_capacity(vec.len());
        for elem in vec {
            sp.push(elem);
        }
        sp
    }
}

impl<N> Debug for ZeroSpVec<N>
where
    N: Num + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.debug_struct("ZeroSpVec")
                .field("len", &self.len)
                .field("nnz", &self.nnz())
                .field("inds", &self.inds)
                .field("vals", &self.vals)
                .finish()
        } else {
            f.debug_map().entries(self.raw_iter()).finish()
        }
    }
}
