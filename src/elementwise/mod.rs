//! Shape-preserving element-wise application of scalar kernels.
//!
//! Every public function in this crate accepts any [`Elementwise`] value:
//! a bare scalar, a fixed-size array (nested arrays give arbitrary stack
//! shapes), a `Vec`, or a heap-allocated n-dimensional [`DynArray`]. The
//! scalar kernel is applied to each element and the result has the same
//! type and shape as the input.
//!
//! # Example
//!
//! ```
//! use numseries::elementwise::Elementwise;
//!
//! let doubled = [[1.0_f64, 2.0], [3.0, 4.0]].map_elements(|x| 2.0 * x);
//! assert_eq!(doubled, [[2.0, 4.0], [6.0, 8.0]]);
//!
//! // Scalars are zero-dimensional containers.
//! assert_eq!(3.0_f64.map_elements(|x| x + 1.0), 4.0);
//! ```

#[cfg(feature = "alloc")]
mod array;


#[cfg(feature = "alloc")]
pub use array::{DynArray, ShapeMismatch};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
use core::convert::Infallible;

/// A homogeneous container whose elements can be mapped one-for-one.
///
/// Implementations must visit elements in storage order and must not change
/// the shape: the output of [`try_map_elements`](Elementwise::try_map_elements)
/// holds exactly one result per input element, at the same position.
pub trait Elementwise: Sized {
    /// Scalar element type.
    type Elem: Copy;

    /// Apply a fallible scalar kernel to every element.
    ///
    /// Stops at the first failing element and returns its error; no
    /// partially-mapped container is produced.
    fn try_map_elements<E, F>(&self, f: &mut F) -> Result<Self, E>
    where
        F: FnMut(Self::Elem) -> Result<Self::Elem, E>;

    /// Apply an infallible scalar kernel to every element.
    fn map_elements<F>(&self, mut f: F) -> Self
    where
        F: FnMut(Self::Elem) -> Self::Elem,
    {
        match self.try_map_elements(&mut |x| Ok::<_, Infallible>(f(x))) {
            Ok(out) => out,
            Err(never) => match never {},
        }
    }

    /// Number of scalar elements.
    fn num_elements(&self) -> usize;
}

macro_rules! impl_elementwise_scalar {
    ($($t:ty),*) => {
        $(
            impl Elementwise for $t {
                type Elem = $t;

                #[inline]
                fn try_map_elements<E, F>(&self, f: &mut F) -> Result<Self, E>
                where
                    F: FnMut($t) -> Result<$t, E>,
                {
                    f(*self)
                }

                #[inline]
                fn num_elements(&self) -> usize {
                    1
                }
            }
        )*
    };
}

impl_elementwise_scalar!(f32, f64);
impl_elementwise_scalar!(i8, i16, i32, i64, i128, isize);
impl_elementwise_scalar!(u8, u16, u32, u64, u128, usize);

impl<A: Elementwise + Clone, const N: usize> Elementwise for [A; N] {
    type Elem = A::Elem;

    fn try_map_elements<E, F>(&self, f: &mut F) -> Result<Self, E>
    where
        F: FnMut(A::Elem) -> Result<A::Elem, E>,
    {
        let mut err = None;
        let out = core::array::from_fn(|i| {
            if err.is_some() {
                // Placeholder only; the array is discarded below.
                return self[i].clone();
            }
            match self[i].try_map_elements(&mut *f) {
                Ok(v) => v,
                Err(e) => {
                    err = Some(e);
                    self[i].clone()
                }
            }
        });
        match err {
            Some(e) => Err(e),
            None => Ok(out),
        }
    }

    fn num_elements(&self) -> usize {
        self.iter().map(Elementwise::num_elements).sum()
    }
}

#[cfg(feature = "alloc")]
impl<A: Elementwise> Elementwise for Vec<A> {
    type Elem = A::Elem;

    fn try_map_elements<E, F>(&self, f: &mut F) -> Result<Self, E>
    where
        F: FnMut(A::Elem) -> Result<A::Elem, E>,
    {
        self.iter().map(|a| a.try_map_elements(&mut *f)).collect()
    }

    fn num_elements(&self) -> usize {
        self.iter().map(Elementwise::num_elements).sum()
    }
}
