//! Exact factorial over primitive integers.

use crate::elementwise::Elementwise;
use crate::traits::IntScalar;

use super::SpecialError;

/// Factorial n! = 1·2·…·n for a single non-negative integer.
fn factorial_scalar<T: IntScalar>(n: T) -> Result<T, SpecialError> {
    if n < T::zero() {
        return Err(SpecialError::DomainError);
    }
    let mut acc = T::one();
    let mut i = T::one();
    while i <= n {
        acc = acc.checked_mul(&i).ok_or(SpecialError::Overflow)?;
        i = i + T::one();
    }
    Ok(acc)
}

/// Factorial n!, element-wise over integers.
///
/// Returns [`SpecialError::DomainError`] if any element is negative and
/// [`SpecialError::Overflow`] if a result does not fit the integer type;
/// use a wider type (`u128` holds up to 34!) for larger arguments.
///
/// # Example
///
/// ```
/// use numseries::special::{factorial, SpecialError};
///
/// assert_eq!(factorial(0_u32), Ok(1));
/// assert_eq!(factorial([0_i64, 1, 2, 5]), Ok([1, 1, 2, 120]));
/// assert_eq!(factorial(21_u64), Err(SpecialError::Overflow));
/// assert_eq!(factorial(21_u128), Ok(51_090_942_171_709_440_000));
/// ```
pub fn factorial<X>(n: X) -> Result<X, SpecialError>
where
    X: Elementwise,
    X::Elem: IntScalar,
{
    n.try_map_elements(&mut factorial_scalar::<X::Elem>)
}
