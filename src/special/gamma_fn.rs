//! Gamma function by trapezoidal integration of Euler's integral.

use crate::elementwise::Elementwise;
use crate::traits::FloatScalar;

use super::SpecialError;

/// Integration settings for [`gamma_with`].
///
/// Euler's integral Γ(z) = ∫₀^∞ t^{z−1} e^{−t} dt is truncated at
/// `upper_limit` and discretized into `intervals` equal trapezoids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaSettings<T> {
    /// Upper integration limit T (default: 100).
    pub upper_limit: T,
    /// Number of trapezoids M; the integrand is sampled at M+1 points
    /// (default: 1000).
    pub intervals: usize,
}

impl Default for GammaSettings<f64> {
    fn default() -> Self {
        Self {
            upper_limit: 100.0,
            intervals: 1000,
        }
    }
}

impl Default for GammaSettings<f32> {
    fn default() -> Self {
        Self {
            upper_limit: 100.0,
            intervals: 1000,
        }
    }
}

/// Composite trapezoid rule for t^{z−1} e^{−t} on [0, T], valid for z > 1.
fn trapezoid<T: FloatScalar>(z: T, settings: &GammaSettings<T>) -> T {
    let zero = T::zero();
    let half = T::from(0.5).unwrap();
    let m = settings.intervals;
    let dt = settings.upper_limit / T::from(m).unwrap();
    let zm1 = z - T::one();
    let integrand = |t: T| t.powf(zm1) * (-t).exp();

    let mut interior = zero;
    for i in 1..m {
        interior = interior + integrand(T::from(i).unwrap() * dt);
    }
    let ends = half * integrand(zero) + half * integrand(settings.upper_limit);
    dt * (ends + interior)
}

/// Gamma function for a single value, z > 0.
pub(crate) fn gamma_scalar<T: FloatScalar>(
    z: T,
    settings: &GammaSettings<T>,
) -> Result<T, SpecialError> {
    let zero = T::zero();
    let one = T::one();

    let limit = settings.upper_limit;
    if settings.intervals == 0 || !(limit > zero) || !limit.is_finite() {
        return Err(SpecialError::InvalidParameter);
    }
    // Negated comparison also rejects NaN.
    if !(z > zero) {
        return Err(SpecialError::DomainError);
    }
    if z == one {
        return Ok(one);
    }
    if z < one {
        // Γ(z) = Γ(z+1)/z; z+1 > 1 lands in the integration branch.
        return Ok(gamma_scalar(z + one, settings)? / z);
    }
    Ok(trapezoid(z, settings))
}

/// Gamma function Γ(z) with default integration settings, element-wise.
///
/// Uses the composite trapezoid rule on [0, 100] with 1000 intervals. For
/// 0 < z < 1 the functional equation Γ(z) = Γ(z+1)/z is applied once.
/// Γ(1) is returned exactly. Returns [`SpecialError::DomainError`] if any
/// element is ≤ 0 or NaN.
///
/// Accuracy is limited by the discretization: roughly 1e-3 relative for
/// z near 2, better for larger z, and about 1e-2 for z near 0.5 where the
/// integrand has a square-root cusp at t = 0.
///
/// # Example
///
/// ```
/// use numseries::special::{gamma, SpecialError};
///
/// assert_eq!(gamma(1.0_f64), Ok(1.0));
///
/// let sqrt_pi = core::f64::consts::PI.sqrt();
/// assert!((gamma(0.5_f64).unwrap() - sqrt_pi).abs() < 2e-2);
///
/// let g = gamma([2.0_f64, 3.0, 4.0]).unwrap();
/// assert!((g[2] - 6.0).abs() < 1e-2);
///
/// assert_eq!(gamma(0.0_f64), Err(SpecialError::DomainError));
/// ```
pub fn gamma<X>(z: X) -> Result<X, SpecialError>
where
    X: Elementwise,
    X::Elem: FloatScalar,
    GammaSettings<X::Elem>: Default,
{
    gamma_with(z, &GammaSettings::default())
}

/// Gamma function Γ(z) with explicit integration settings, element-wise.
///
/// Returns [`SpecialError::InvalidParameter`] if `intervals` is zero or
/// `upper_limit` is not a positive finite number.
///
/// # Example
///
/// ```
/// use numseries::special::{gamma_with, GammaSettings};
///
/// let fine = GammaSettings { upper_limit: 60.0_f64, intervals: 20_000 };
/// assert!((gamma_with(3.0_f64, &fine).unwrap() - 2.0).abs() < 1e-6);
/// ```
pub fn gamma_with<X>(z: X, settings: &GammaSettings<X::Elem>) -> Result<X, SpecialError>
where
    X: Elementwise,
    X::Elem: FloatScalar,
{
    z.try_map_elements(&mut |v| gamma_scalar(v, settings))
}
