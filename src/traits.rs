use core::fmt::Debug;
use num_traits::{Float, Num, One, PrimInt, Zero};

/// Trait for types that can be used as function arguments and results.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for real floating-point arguments.
///
/// Required by the series, integration, and Bessel kernels
/// (`abs`, `powf`, `exp`, finiteness checks).
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Trait for primitive integer arguments, used by [`factorial`](crate::special::factorial).
pub trait IntScalar: Scalar + PrimInt {}

impl<T: Scalar + PrimInt> IntScalar for T {}
