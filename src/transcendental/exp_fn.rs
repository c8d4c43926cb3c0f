//! Exponential function via its Maclaurin series.

use crate::elementwise::Elementwise;
use crate::series::{series_sum_from, SeriesSettings, SeriesSum};
use crate::traits::FloatScalar;

use super::at_infinity;

/// Sum the series e^x = Σ xⁿ/n! for a single value.
///
/// Returns the full [`SeriesSum`] so the caller can see how many terms were
/// used and why summation stopped.
///
/// # Example
///
/// ```
/// use numseries::series::{SeriesSettings, SeriesStop};
/// use numseries::transcendental::exp_series;
///
/// let s = exp_series(1.0_f64, &SeriesSettings::default());
/// assert_eq!(s.stop, SeriesStop::Converged);
/// assert!(s.terms < 50);
/// ```
pub fn exp_series<T: FloatScalar>(x: T, settings: &SeriesSettings<T>) -> SeriesSum<T> {
    if x.is_infinite() {
        return at_infinity(if x > T::zero() { x } else { T::zero() });
    }
    series_sum_from(T::one(), |n| x / T::from(n).unwrap(), settings)
}

/// Exponential e^x with default settings, element-wise.
///
/// # Example
///
/// ```
/// use numseries::transcendental::exp;
///
/// assert_eq!(exp(0.0_f64), 1.0);
/// let y = exp([-1.0_f64, 0.0, 1.0]);
/// assert!((y[0] - (-1.0_f64).exp()).abs() < 1e-14);
/// assert!((y[2] - 1.0_f64.exp()).abs() < 1e-14);
/// ```
pub fn exp<X>(x: X) -> X
where
    X: Elementwise,
    X::Elem: FloatScalar,
    SeriesSettings<X::Elem>: Default,
{
    exp_with(x, &SeriesSettings::default())
}

/// Exponential e^x with explicit series settings, element-wise.
///
/// # Example
///
/// ```
/// use numseries::series::SeriesSettings;
/// use numseries::transcendental::exp_with;
///
/// // Three terms: 1 + x + x²/2
/// let y = exp_with(0.1_f64, &SeriesSettings::with_terms(3));
/// assert!((y - 1.105).abs() < 1e-14);
/// ```
pub fn exp_with<X>(x: X, settings: &SeriesSettings<X::Elem>) -> X
where
    X: Elementwise,
    X::Elem: FloatScalar,
{
    x.map_elements(|v| exp_series(v, settings).value)
}
