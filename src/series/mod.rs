//! Truncated power-series summation with early stopping.
//!
//! A series is described by its first term and a ratio rule
//! `term_n = term_{n-1} · r(n)`. Summation stops at whichever comes first:
//!
//! | Stop reason | Trigger |
//! |---|---|
//! | [`SeriesStop::Converged`] | `abs(term_n) < abs_tol` (term is still accumulated) |
//! | [`SeriesStop::Overflow`] | `abs(term_n) > overflow_limit`, including ±inf (term is dropped) |
//! | [`SeriesStop::NotFinite`] | `term_n` is NaN (term is added, so the sum is NaN) |
//! | [`SeriesStop::Exhausted`] | `n_terms` terms accumulated |
//!
//! Convergence is a heuristic: no error bound is computed. Callers needing
//! more accuracy raise `n_terms`.
//!
//! # Example
//!
//! ```
//! use numseries::series::{series_sum_from, SeriesSettings, SeriesStop};
//!
//! // Geometric series 1 + 1/2 + 1/4 + ... = 2
//! let s = series_sum_from(1.0_f64, |_n| 0.5, &SeriesSettings::with_terms(200));
//! assert!((s.value - 2.0).abs() < 1e-14);
//! assert_eq!(s.stop, SeriesStop::Converged);
//! ```

use crate::traits::FloatScalar;


/// Settings for series summation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSettings<T> {
    /// Maximum number of terms, including the first (default: 50).
    pub n_terms: usize,
    /// Absolute early-stop threshold on the latest term (default: 1e-15).
    pub abs_tol: T,
    /// Terms larger than this end summation before being added
    /// (default: 1e308 for `f64`, 1e38 for `f32`).
    pub overflow_limit: T,
}

/// Default maximum term count shared by the transcendental functions.
pub const DEFAULT_N_TERMS: usize = 50;

impl Default for SeriesSettings<f64> {
    fn default() -> Self {
        Self {
            n_terms: DEFAULT_N_TERMS,
            abs_tol: 1e-15,
            overflow_limit: 1e308,
        }
    }
}

impl Default for SeriesSettings<f32> {
    fn default() -> Self {
        Self {
            n_terms: DEFAULT_N_TERMS,
            abs_tol: 1e-15,
            overflow_limit: 1e38,
        }
    }
}

impl<T> SeriesSettings<T>
where
    SeriesSettings<T>: Default,
{
    /// Default settings with a different term count.
    ///
    /// ```
    /// use numseries::series::SeriesSettings;
    /// let s = SeriesSettings::<f64>::with_terms(20);
    /// assert_eq!(s.n_terms, 20);
    /// assert_eq!(s.abs_tol, 1e-15);
    /// ```
    pub fn with_terms(n_terms: usize) -> Self {
        Self {
            n_terms,
            ..Self::default()
        }
    }
}

/// Why summation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStop {
    /// The latest term fell below `abs_tol`.
    Converged,
    /// The next term exceeded `overflow_limit` (or was infinite); it was not added.
    Overflow,
    /// A term or the argument was not finite and was carried into the value.
    NotFinite,
    /// `n_terms` terms were accumulated.
    Exhausted,
}

/// Result of a series summation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSum<T> {
    /// Partial sum.
    pub value: T,
    /// Number of terms accumulated, including the first.
    pub terms: usize,
    /// Reason summation stopped.
    pub stop: SeriesStop,
}

/// Sum a series given its first term and the ratio `r(n) = term_n / term_{n-1}`.
///
/// `ratio` is called with `n = 1, 2, …, n_terms - 1`. With `n_terms ≤ 1` the
/// result is `term0` alone.
///
/// # Example
///
/// ```
/// use numseries::series::{series_sum_from, SeriesSettings};
///
/// // e = Σ 1/n!
/// let s = series_sum_from(1.0_f64, |n| 1.0 / n as f64, &SeriesSettings::default());
/// assert!((s.value - core::f64::consts::E).abs() < 1e-14);
/// ```
pub fn series_sum_from<T, R>(term0: T, mut ratio: R, settings: &SeriesSettings<T>) -> SeriesSum<T>
where
    T: FloatScalar,
    R: FnMut(usize) -> T,
{
    let mut total = term0;
    let mut term = term0;
    let mut terms = 1;

    for n in 1..settings.n_terms {
        let next = term * ratio(n);
        if next.is_nan() {
            return SeriesSum {
                value: total + next,
                terms: terms + 1,
                stop: SeriesStop::NotFinite,
            };
        }
        if next.abs() > settings.overflow_limit {
            return SeriesSum {
                value: total,
                terms,
                stop: SeriesStop::Overflow,
            };
        }
        term = next;
        total = total + term;
        terms += 1;
        if term.abs() < settings.abs_tol {
            return SeriesSum {
                value: total,
                terms,
                stop: SeriesStop::Converged,
            };
        }
    }

    SeriesSum {
        value: total,
        terms,
        stop: SeriesStop::Exhausted,
    }
}

/// Sum a series starting at 1 whose ratio is split into a numerator
/// `power(n)` and a denominator `fact(n)`.
///
/// Equivalent to `series_sum_from(1, |n| power(n) / fact(n), settings)`.
///
/// # Example
///
/// ```
/// use numseries::series::{series_sum, SeriesSettings};
///
/// // e^2 = Σ 2^n / n!
/// let x = 2.0_f64;
/// let s = series_sum(|_n| x, |n| n as f64, &SeriesSettings::default());
/// assert!((s.value - x.exp()).abs() < 1e-13);
/// ```
pub fn series_sum<T, P, Q>(mut power: P, mut fact: Q, settings: &SeriesSettings<T>) -> SeriesSum<T>
where
    T: FloatScalar,
    P: FnMut(usize) -> T,
    Q: FnMut(usize) -> T,
{
    series_sum_from(T::one(), |n| power(n) / fact(n), settings)
}
