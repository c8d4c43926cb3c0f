//! Hyperbolic sine, cosine, and tangent via Maclaurin series.

use crate::elementwise::Elementwise;
use crate::series::{series_sum_from, SeriesSettings, SeriesSum};
use crate::traits::FloatScalar;
use num_traits::Float;

use super::at_infinity;

/// Sum sinh(x) = Σ x²ⁿ⁺¹/(2n+1)! for a single value.
pub fn sinh_series<T: FloatScalar>(x: T, settings: &SeriesSettings<T>) -> SeriesSum<T> {
    if x.is_infinite() {
        return at_infinity(x);
    }
    let x2 = x * x;
    series_sum_from(
        x,
        |n| {
            let two_n = T::from(2 * n).unwrap();
            x2 / ((two_n + T::one()) * two_n)
        },
        settings,
    )
}

/// Sum cosh(x) = Σ x²ⁿ/(2n)! for a single value.
pub fn cosh_series<T: FloatScalar>(x: T, settings: &SeriesSettings<T>) -> SeriesSum<T> {
    if x.is_infinite() {
        return at_infinity(x.abs());
    }
    let x2 = x * x;
    series_sum_from(
        T::one(),
        |n| {
            let two_n = T::from(2 * n).unwrap();
            x2 / (two_n * (two_n - T::one()))
        },
        settings,
    )
}

/// Hyperbolic sine with default settings, element-wise.
///
/// # Example
///
/// ```
/// use numseries::transcendental::sinh;
///
/// assert_eq!(sinh(0.0_f64), 0.0);
/// assert!((sinh(1.0_f64) - 1.1752011936438014).abs() < 1e-14);
/// ```
pub fn sinh<X>(x: X) -> X
where
    X: Elementwise,
    X::Elem: FloatScalar,
    SeriesSettings<X::Elem>: Default,
{
    sinh_with(x, &SeriesSettings::default())
}

/// Hyperbolic sine with explicit series settings, element-wise.
pub fn sinh_with<X>(x: X, settings: &SeriesSettings<X::Elem>) -> X
where
    X: Elementwise,
    X::Elem: FloatScalar,
{
    x.map_elements(|v| sinh_series(v, settings).value)
}

/// Hyperbolic cosine with default settings, element-wise.
///
/// # Example
///
/// ```
/// use numseries::transcendental::cosh;
///
/// assert_eq!(cosh(0.0_f64), 1.0);
/// assert!((cosh(1.0_f64) - 1.5430806348152437).abs() < 1e-14);
/// ```
pub fn cosh<X>(x: X) -> X
where
    X: Elementwise,
    X::Elem: FloatScalar,
    SeriesSettings<X::Elem>: Default,
{
    cosh_with(x, &SeriesSettings::default())
}

/// Hyperbolic cosine with explicit series settings, element-wise.
pub fn cosh_with<X>(x: X, settings: &SeriesSettings<X::Elem>) -> X
where
    X: Elementwise,
    X::Elem: FloatScalar,
{
    x.map_elements(|v| cosh_series(v, settings).value)
}

/// Hyperbolic tangent as sinh(x)/cosh(x), element-wise.
///
/// # Example
///
/// ```
/// use numseries::transcendental::tanh;
///
/// assert_eq!(tanh(0.0_f64), 0.0);
/// assert!((tanh(1.0_f64) - 0.7615941559557649).abs() < 1e-14);
/// ```
pub fn tanh<X>(x: X) -> X
where
    X: Elementwise,
    X::Elem: FloatScalar,
    SeriesSettings<X::Elem>: Default,
{
    tanh_with(x, &SeriesSettings::default())
}

/// Hyperbolic tangent with explicit series settings, element-wise.
///
/// The same settings are used for both the sine and cosine series. A cosh
/// that evaluates to zero is not guarded against and yields inf or NaN.
/// For x = ±∞ the ratio ∞/∞ is replaced by its limit ±1.
pub fn tanh_with<X>(x: X, settings: &SeriesSettings<X::Elem>) -> X
where
    X: Elementwise,
    X::Elem: FloatScalar,
{
    x.map_elements(|v| {
        if v.is_infinite() {
            return v.signum();
        }
        sinh_series(v, settings).value / cosh_series(v, settings).value
    })
}
