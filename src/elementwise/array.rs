use alloc::vec::Vec;
use core::ops::Index;

use super::Elementwise;

/// Data length does not match the product of the requested shape.
///
/// # Example
///
/// ```
/// use numseries::elementwise::{DynArray, ShapeMismatch};
///
/// let r = DynArray::from_vec(&[2, 3], vec![0.0_f64; 5]);
/// assert_eq!(r, Err(ShapeMismatch { expected: 6, got: 5 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeMismatch {
    /// Element count implied by the shape.
    pub expected: usize,
    /// Element count supplied.
    pub got: usize,
}

impl core::fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "shape mismatch: shape holds {} elements, got {}",
            self.expected, self.got
        )
    }
}

impl core::error::Error for ShapeMismatch {}

/// Heap-allocated n-dimensional array with a runtime shape.
///
/// Row-major (last index fastest) `Vec<T>` storage. A shape of `[]` is a
/// zero-dimensional array holding one element.
///
/// # Examples
///
/// ```
/// use numseries::elementwise::DynArray;
///
/// let a = DynArray::from_vec(&[2, 2], vec![1.0_f64, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(a.shape(), &[2, 2]);
/// assert_eq!(a[&[1, 0][..]], 3.0);
///
/// let b = a.map(|x| x * 10.0);
/// assert_eq!(b.as_slice(), &[10.0, 20.0, 30.0, 40.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynArray<T> {
    data: Vec<T>,
    shape: Vec<usize>,
}

fn shape_len(shape: &[usize]) -> usize {
    shape.iter().product()
}

// ── Constructors ────────────────────────────────────────────────────

impl<T> DynArray<T> {
    /// Create an array from an owned `Vec` in row-major order.
    ///
    /// Returns [`ShapeMismatch`] if `data.len()` differs from the product of
    /// `shape`.
    pub fn from_vec(shape: &[usize], data: Vec<T>) -> Result<Self, ShapeMismatch> {
        let expected = shape_len(shape);
        if data.len() != expected {
            return Err(ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            shape: shape.to_vec(),
        })
    }

    /// Create a one-dimensional array from an owned `Vec`.
    ///
    /// ```
    /// use numseries::elementwise::DynArray;
    /// let v = DynArray::from_vec1(vec![1, 2, 3]);
    /// assert_eq!(v.shape(), &[3]);
    /// ```
    pub fn from_vec1(data: Vec<T>) -> Self {
        let n = data.len();
        Self {
            data,
            shape: alloc::vec![n],
        }
    }

    /// Create an array by evaluating `f` at every multi-index, in row-major order.
    ///
    /// ```
    /// use numseries::elementwise::DynArray;
    /// let a = DynArray::from_fn(&[2, 3], |idx| (10 * idx[0] + idx[1]) as f64);
    /// assert_eq!(a[&[1, 2][..]], 12.0);
    /// ```
    pub fn from_fn(shape: &[usize], mut f: impl FnMut(&[usize]) -> T) -> Self {
        let n = shape_len(shape);
        let mut data = Vec::with_capacity(n);
        let mut idx = alloc::vec![0usize; shape.len()];
        for _ in 0..n {
            data.push(f(&idx));
            // Odometer increment, last axis fastest.
            for axis in (0..shape.len()).rev() {
                idx[axis] += 1;
                if idx[axis] < shape[axis] {
                    break;
                }
                idx[axis] = 0;
            }
        }
        Self {
            data,
            shape: shape.to_vec(),
        }
    }
}

impl<T: Clone> DynArray<T> {
    /// Create an array from a flat slice in row-major order.
    pub fn from_slice(shape: &[usize], slice: &[T]) -> Result<Self, ShapeMismatch> {
        Self::from_vec(shape, slice.to_vec())
    }

    /// Create an array filled with `value`.
    pub fn fill(shape: &[usize], value: T) -> Self {
        Self {
            data: alloc::vec![value; shape_len(shape)],
            shape: shape.to_vec(),
        }
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl<T> DynArray<T> {
    /// Extent of each axis.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of axes.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Row-major view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over elements in row-major order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consume the array, returning its row-major storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Flat storage offset of a multi-index, or `None` if out of bounds.
    fn offset(&self, index: &[usize]) -> Option<usize> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut off = 0;
        for (&i, &n) in index.iter().zip(self.shape.iter()) {
            if i >= n {
                return None;
            }
            off = off * n + i;
        }
        Some(off)
    }

    /// Element at a multi-index, or `None` if the index is out of bounds.
    ///
    /// ```
    /// use numseries::elementwise::DynArray;
    /// let a = DynArray::fill(&[2, 2], 1.5_f64);
    /// assert_eq!(a.get(&[1, 1]), Some(&1.5));
    /// assert_eq!(a.get(&[2, 0]), None);
    /// ```
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        self.offset(index).map(|off| &self.data[off])
    }

    /// Apply a function to every element, producing a new array of the same shape.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> DynArray<U> {
        DynArray {
            data: self.data.iter().map(f).collect(),
            shape: self.shape.clone(),
        }
    }
}

impl<T> Index<&[usize]> for DynArray<T> {
    type Output = T;

    /// Panics if the index is out of bounds or has the wrong number of axes.
    fn index(&self, index: &[usize]) -> &T {
        match self.offset(index) {
            Some(off) => &self.data[off],
            None => panic!(
                "index {:?} out of bounds for shape {:?}",
                index, self.shape
            ),
        }
    }
}

impl<A: Elementwise> Elementwise for DynArray<A> {
    type Elem = A::Elem;

    fn try_map_elements<E, F>(&self, f: &mut F) -> Result<Self, E>
    where
        F: FnMut(A::Elem) -> Result<A::Elem, E>,
    {
        let data = self
            .data
            .iter()
            .map(|a| a.try_map_elements(&mut *f))
            .collect::<Result<Vec<_>, E>>()?;
        Ok(DynArray {
            data,
            shape: self.shape.clone(),
        })
    }

    fn num_elements(&self) -> usize {
        self.data.iter().map(Elementwise::num_elements).sum()
    }
}
