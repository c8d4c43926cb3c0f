//! Bessel function of the first kind by power series.

use num_traits::One;

use crate::elementwise::Elementwise;
use crate::traits::FloatScalar;

use super::gamma_fn::{gamma_scalar, GammaSettings};
use super::SpecialError;

/// Settings for [`bessel_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BesselSettings<T> {
    /// Maximum number of series terms, including the first (default: 20).
    pub n_terms: usize,
    /// Stop once |term| < rel_tol · |partial sum| (default: 1e-10).
    pub rel_tol: T,
    /// Integration settings for the Γ(α+1) normalization.
    pub gamma: GammaSettings<T>,
}

impl Default for BesselSettings<f64> {
    fn default() -> Self {
        Self {
            n_terms: 20,
            rel_tol: 1e-10,
            gamma: GammaSettings::default(),
        }
    }
}

impl Default for BesselSettings<f32> {
    fn default() -> Self {
        Self {
            n_terms: 20,
            rel_tol: 1e-6,
            gamma: GammaSettings::default(),
        }
    }
}

/// J_α(x) = Σ_m (−1)^m (x/2)^{2m+α} / (m! Γ(m+α+1)) for a single x.
///
/// `gamma_a1` is Γ(α+1), shared by every element of a call.
fn bessel_scalar<T: FloatScalar>(
    alpha: T,
    x: T,
    gamma_a1: T,
    settings: &BesselSettings<T>,
) -> T {
    let half_x = x / T::from(2.0).unwrap();
    let q = -(half_x * half_x);

    let mut term = half_x.powf(alpha) / gamma_a1;
    let mut total = term;
    for m in 1..settings.n_terms {
        let mf = T::from(m).unwrap();
        term = term * q / (mf * (mf + alpha));
        total = total + term;
        if term.abs() < settings.rel_tol * total.abs() {
            break;
        }
    }
    total
}

/// Bessel function of the first kind J_α(x) with default settings,
/// element-wise over `x`.
///
/// Uses the power series with up to 20 terms and a relative early-stop
/// threshold of 1e-10. The normalization Γ(α+1) comes from
/// [`gamma`](super::gamma), so its integration error carries into the
/// result for α ≠ 0.
///
/// Accuracy is validated for small non-negative integer and half-integer
/// orders and moderate |x|. Returns [`SpecialError::DomainError`] when
/// α ≤ −1, where Γ(α+1) is undefined by integration. For x = 0 and
/// α < 0 the leading power diverges and the result is inf or NaN.
///
/// # Example
///
/// ```
/// use numseries::special::bessel;
///
/// assert_eq!(bessel(0.0, 0.0_f64), Ok(1.0));
/// assert!((bessel(0.0, 1.0_f64).unwrap() - 0.7651976865579666).abs() < 1e-9);
///
/// let j = bessel(0.0, [0.0_f64, 1.0]).unwrap();
/// assert_eq!(j[0], 1.0);
/// ```
pub fn bessel<X>(alpha: X::Elem, x: X) -> Result<X, SpecialError>
where
    X: Elementwise,
    X::Elem: FloatScalar,
    BesselSettings<X::Elem>: Default,
{
    bessel_with(alpha, x, &BesselSettings::default())
}

/// Bessel function of the first kind J_α(x) with explicit settings,
/// element-wise over `x`.
///
/// # Example
///
/// ```
/// use numseries::special::{bessel_with, BesselSettings, GammaSettings};
///
/// // Finer Γ(2) integration for J₁
/// let settings = BesselSettings {
///     gamma: GammaSettings { upper_limit: 60.0, intervals: 20_000 },
///     ..BesselSettings::default()
/// };
/// let j1 = bessel_with(1.0, 1.0_f64, &settings).unwrap();
/// assert!((j1 - 0.44005058574493355).abs() < 1e-6);
/// ```
pub fn bessel_with<X>(
    alpha: X::Elem,
    x: X,
    settings: &BesselSettings<X::Elem>,
) -> Result<X, SpecialError>
where
    X: Elementwise,
    X::Elem: FloatScalar,
{
    let one: X::Elem = One::one();
    let gamma_a1 = gamma_scalar(alpha + one, &settings.gamma)?;
    Ok(x.map_elements(|v| bessel_scalar(alpha, v, gamma_a1, settings)))
}
